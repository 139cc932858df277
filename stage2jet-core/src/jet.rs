//! Jet Records: Hardware Input and Physical Output
//!
//! ## Overview
//!
//! The trigger delivers jets as integer words. [`HardwareJet`] holds those
//! words unchanged. [`PhysicalJet`] is what the converter builds from them: a
//! massless four-vector in (pt, eta, phi, m) coordinates plus the original
//! hardware words, so downstream consumers can always go back to the raw
//! values.
//!
//! ## Four-Vector Convention
//!
//! [`PtEtaPhiM`] stores the four coordinates the trigger provides and derives
//! the cartesian components on demand:
//!
//! ```text
//! px = pt cos(phi)          py = pt sin(phi)
//! pz = pt sinh(eta)         p  = pt cosh(eta)
//! E  = sqrt(p^2 + m^2)      Et = E pt / p
//! ```
//!
//! All trigonometric and hyperbolic functions go through `libm` so the same
//! code runs without `std`.

use crate::constants::scales::JET_MASS_GEV;

/// Jet as read out by the Stage 2 trigger
///
/// Immutable input to the converter. Indices follow the trigger-tower
/// conventions in [`crate::towers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardwareJet {
    /// Transverse energy in LSB counts
    pub hw_pt: i32,
    /// Signed trigger-tower eta index, |hw_eta| <= 32
    pub hw_eta: i32,
    /// Trigger-tower phi index, 1..=72 by convention
    pub hw_phi: i32,
    /// Quality word, carried through without interpretation
    pub hw_qual: i32,
}

impl HardwareJet {
    /// Create a hardware jet from its four words
    pub const fn new(hw_pt: i32, hw_eta: i32, hw_phi: i32, hw_qual: i32) -> Self {
        Self { hw_pt, hw_eta, hw_phi, hw_qual }
    }
}

/// Lorentz vector in (pt, eta, phi, m) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PtEtaPhiM {
    pt: f64,
    eta: f64,
    phi: f64,
    mass: f64,
}

impl PtEtaPhiM {
    /// Build a vector from its coordinates
    pub const fn new(pt: f64, eta: f64, phi: f64, mass: f64) -> Self {
        Self { pt, eta, phi, mass }
    }

    /// Transverse momentum (GeV)
    pub const fn pt(&self) -> f64 {
        self.pt
    }

    /// Pseudorapidity
    pub const fn eta(&self) -> f64 {
        self.eta
    }

    /// Azimuthal angle (radians)
    pub const fn phi(&self) -> f64 {
        self.phi
    }

    /// Invariant mass (GeV)
    pub const fn mass(&self) -> f64 {
        self.mass
    }

    /// Momentum along x
    pub fn px(&self) -> f64 {
        self.pt * libm::cos(self.phi)
    }

    /// Momentum along y
    pub fn py(&self) -> f64 {
        self.pt * libm::sin(self.phi)
    }

    /// Momentum along the beam axis
    pub fn pz(&self) -> f64 {
        self.pt * libm::sinh(self.eta)
    }

    /// Momentum magnitude
    pub fn p(&self) -> f64 {
        self.pt * libm::cosh(self.eta)
    }

    /// Energy (GeV)
    pub fn energy(&self) -> f64 {
        let p = self.p();
        libm::sqrt(p * p + self.mass * self.mass)
    }

    /// Transverse energy, equal to pt for a massless vector
    pub fn et(&self) -> f64 {
        let p = self.p();
        if p == 0.0 {
            return 0.0;
        }
        self.energy() * self.pt / p
    }
}

/// Jet in physical units
///
/// Only the converter creates these; fields are read through accessors so a
/// converted jet cannot drift away from its hardware words.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalJet {
    p4: PtEtaPhiM,
    hw: HardwareJet,
}

impl PhysicalJet {
    /// Massless jet from its physical coordinates and hardware words
    pub(crate) const fn new(pt: f64, eta: f64, phi: f64, hw: HardwareJet) -> Self {
        Self {
            p4: PtEtaPhiM::new(pt, eta, phi, JET_MASS_GEV),
            hw,
        }
    }

    /// Four-vector of the jet
    pub const fn p4(&self) -> &PtEtaPhiM {
        &self.p4
    }

    /// Transverse momentum (GeV)
    pub const fn pt(&self) -> f64 {
        self.p4.pt
    }

    /// Pseudorapidity
    pub const fn eta(&self) -> f64 {
        self.p4.eta
    }

    /// Azimuthal angle (radians)
    pub const fn phi(&self) -> f64 {
        self.p4.phi
    }

    /// Invariant mass, always 0
    pub const fn mass(&self) -> f64 {
        self.p4.mass
    }

    /// The hardware words this jet was built from
    pub const fn hardware(&self) -> &HardwareJet {
        &self.hw
    }

    /// Raw transverse energy count
    pub const fn hw_pt(&self) -> i32 {
        self.hw.hw_pt
    }

    /// Raw tower eta index
    pub const fn hw_eta(&self) -> i32 {
        self.hw.hw_eta
    }

    /// Raw tower phi index
    pub const fn hw_phi(&self) -> i32 {
        self.hw.hw_phi
    }

    /// Raw quality word
    pub const fn hw_qual(&self) -> i32 {
        self.hw.hw_qual
    }
}
