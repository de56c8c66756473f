//! Array layout collaborators.
//!
//! The reconstructor never owns the array description; it only needs to
//! resolve a telescope id to the camera type mounted on that telescope.
//! [`ArrayLayout`] is that seam, and [`SubarrayLayout`] is the plain
//! map-backed implementation used when the caller has no richer description
//! object of its own.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of one physical telescope instance in an array.
pub type TelescopeId = u32;

/// A camera design identifier ("LSTCam", "FlashCam", "NectarCam", ...).
///
/// Camera types are an open set, so this is a newtype over the camera name
/// rather than a closed enum. It is the join key between telescopes,
/// configured models and reconstructor capability declarations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CameraType(String);

impl CameraType {
    /// Create a camera type from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The camera name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CameraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CameraType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CameraType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Read-only view of which camera type each telescope carries.
///
/// Supplied by the caller's array-description object. Implementations must
/// be stable for the lifetime of an event loop: the dispatcher resolves
/// every telescope of every event through this trait.
pub trait ArrayLayout {
    /// Camera type of the given telescope, or `None` if the telescope is
    /// not part of this array.
    fn camera_type(&self, tel_id: TelescopeId) -> Option<&CameraType>;
}

/// Map-backed [`ArrayLayout`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubarrayLayout {
    cameras: HashMap<TelescopeId, CameraType>,
}

impl SubarrayLayout {
    /// Build a layout from `(telescope id, camera type)` pairs.
    pub fn from_pairs<I, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (TelescopeId, C)>,
        C: Into<CameraType>,
    {
        Self {
            cameras: pairs
                .into_iter()
                .map(|(tel, cam)| (tel, cam.into()))
                .collect(),
        }
    }

    /// Number of telescopes in the layout.
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether the layout is empty.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

impl ArrayLayout for SubarrayLayout {
    fn camera_type(&self, tel_id: TelescopeId) -> Option<&CameraType> {
        self.cameras.get(&tel_id)
    }
}
