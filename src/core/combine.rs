//! Result combination contract.

use crate::containers::ReconstructedResult;
use crate::core::dispatch::PredictionBatch;
use crate::error::Result;
use crate::subarray::CameraType;

/// Capability set of one concrete reconstructor variant.
///
/// A variant declares which camera types it knows how to combine and folds
/// one event's [`PredictionBatch`] into a single [`ReconstructedResult`].
/// The combination policy itself is variant-specific; this crate only fixes
/// the contract:
///
/// - `combine` returns exactly one result, deterministic for a given batch;
/// - the batch is not mutated (enforced by the shared reference);
/// - a supported camera type that is entirely absent from the batch, or
///   present with zero observations, is "no evidence", never an error.
pub trait ResultCombiner {
    /// Camera types this variant can combine, in a fixed declaration order.
    ///
    /// Dispatch iterates cameras in exactly this order.
    fn supported_cameras(&self) -> &[CameraType];

    /// Fold one event's per-camera model outputs into a reconstructed
    /// result.
    fn combine(&self, batch: &PredictionBatch) -> Result<ReconstructedResult>;
}
