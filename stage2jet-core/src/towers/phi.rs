//! Trigger-tower phi index to physical azimuthal angle
//!
//! Both granularities divide the circle into 72 equal bins. Standard towers
//! report the bin centre; forward (HF) towers report the lower bin edge, half a
//! tower lower.

use crate::constants::geometry::{CENTRAL_ETA_LIMIT, TOWER_DPHI};

/// Phi binning convention of a trigger tower
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhiGranularity {
    /// Barrel and endcap towers, phi at the bin centre
    Standard,
    /// Forward towers, phi at the lower bin edge
    Wide,
}

impl PhiGranularity {
    /// Granularity for a tower at the given physical eta.
    ///
    /// Wide only strictly beyond the central limit, so |eta| = 3.0 stays
    /// standard even though such a jet is classified forward.
    pub fn for_eta(eta: f64) -> Self {
        if libm::fabs(eta) > CENTRAL_ETA_LIMIT {
            Self::Wide
        } else {
            Self::Standard
        }
    }

    /// Whether this is the forward (wide) convention
    pub const fn is_wide(&self) -> bool {
        matches!(self, Self::Wide)
    }
}

/// Convert hardware phi (iPhi) to physical phi in radians.
///
/// `hw_phi` is not validated. Indices outside 1..=72 extrapolate linearly and
/// produce an angle outside [0, 2pi); callers that need a wrapped angle must
/// check the index themselves.
pub fn tower_to_phi(hw_phi: i32, granularity: PhiGranularity) -> f64 {
    match granularity {
        PhiGranularity::Wide => (hw_phi as f64 - 1.0) * TOWER_DPHI,
        PhiGranularity::Standard => (hw_phi as f64 - 0.5) * TOWER_DPHI,
    }
}
