//! Output containers consumed by the downstream event pipeline.

use crate::subarray::TelescopeId;
use serde::{Deserialize, Serialize};

/// Reconstructed shower parameters for one observed event.
///
/// Produced fresh per event by a [`ResultCombiner`](crate::core::ResultCombiner)
/// and immutable once returned. Quantities a given combiner does not
/// estimate stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconstructedResult {
    /// Reconstructed altitude of the shower direction, radians.
    pub alt: Option<f64>,
    /// Reconstructed azimuth of the shower direction, radians.
    pub az: Option<f64>,
    /// Impact point x coordinate in the ground frame, meters.
    pub core_x: Option<f64>,
    /// Impact point y coordinate in the ground frame, meters.
    pub core_y: Option<f64>,
    /// Height of shower maximum above the observatory, meters.
    pub h_max: Option<f64>,
    /// Estimated primary energy, TeV.
    pub energy: Option<f64>,
    /// Whether the combiner considers the reconstruction usable.
    pub is_valid: bool,
    /// Telescopes that contributed evidence to this result.
    pub tel_ids: Vec<TelescopeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_result_carries_no_evidence() {
        let result = ReconstructedResult::default();
        assert!(!result.is_valid);
        assert!(result.energy.is_none());
        assert!(result.tel_ids.is_empty());
    }

    #[test]
    fn result_serializes_round_trip() {
        let result = ReconstructedResult {
            energy: Some(15.0),
            is_valid: true,
            tel_ids: vec![1, 2],
            ..Default::default()
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: ReconstructedResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
