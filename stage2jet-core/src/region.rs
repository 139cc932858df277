//! Central / forward classification
//!
//! A jet is central when `|eta| < 3.0` and forward otherwise. The comparison
//! is strict, so a jet sitting exactly on the boundary is forward. The phi
//! granularity choice in [`crate::towers::PhiGranularity::for_eta`] uses the
//! complementary strict test (`|eta| > 3.0`); the two are deliberately not
//! mirror images and must stay that way.

use crate::{
    constants::{
        geometry::CENTRAL_ETA_LIMIT,
        scales::{CENTRAL_LABEL, FORWARD_LABEL},
    },
    jet::{PhysicalJet, PtEtaPhiM},
};

/// Detector region of a converted jet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JetRegion {
    /// |eta| < 3.0
    Central,
    /// |eta| >= 3.0
    Forward,
}

impl JetRegion {
    /// Region for a physical eta
    pub fn of_eta(eta: f64) -> Self {
        if libm::fabs(eta) < CENTRAL_ETA_LIMIT {
            Self::Central
        } else {
            Self::Forward
        }
    }

    /// Instance label of the output product holding this region
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Central => CENTRAL_LABEL,
            Self::Forward => FORWARD_LABEL,
        }
    }
}

/// Classify a converted jet
pub fn classify(jet: &PhysicalJet) -> JetRegion {
    JetRegion::of_eta(jet.eta())
}

/// Region-tagged jet as emitted in the central and forward products
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JetParticle {
    /// Four-vector of the jet
    pub p4: PtEtaPhiM,
    /// Region the jet was routed to
    pub region: JetRegion,
    /// Bunch crossing the jet was read out in
    pub bx: i32,
}

impl JetParticle {
    /// Tag a converted jet with its region and bunch crossing
    pub fn from_jet(jet: &PhysicalJet, bx: i32) -> Self {
        Self {
            p4: *jet.p4(),
            region: classify(jet),
            bx,
        }
    }
}
