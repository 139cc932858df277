//! Hardware jet to physical four-vector
//!
//! Builds a [`PhysicalJet`] from a [`HardwareJet`] in a fixed order:
//!
//! 1. `pt = hwPt * jetLsb` (linear scale starting at 0)
//! 2. `eta` from the tower eta map, failing beyond the last tower
//! 3. phi granularity from |eta| (wide strictly beyond 3.0)
//! 4. `phi` from the tower phi map
//! 5. massless jet, hardware words carried through
//!
//! The converter holds nothing but the LSB, so one instance can be shared
//! freely across threads.

use crate::{
    errors::{ConversionError, ConversionResult},
    jet::{HardwareJet, PhysicalJet, PtEtaPhiM},
    traits::JetConversion,
    towers::{tower_to_eta, tower_to_phi, PhiGranularity},
    constants::scales::{DEFAULT_JET_LSB_GEV, JET_MASS_GEV},
};

/// Converts hardware jets with a fixed energy LSB
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JetConverter {
    /// GeV per hardware pt count
    jet_lsb: f64,
}

impl Default for JetConverter {
    fn default() -> Self {
        Self { jet_lsb: DEFAULT_JET_LSB_GEV }
    }
}

impl JetConverter {
    /// Create a converter, rejecting a NaN, infinite or negative LSB
    pub fn new(jet_lsb: f64) -> ConversionResult<Self> {
        if !jet_lsb.is_finite() || jet_lsb < 0.0 {
            return Err(ConversionError::InvalidScale { value: jet_lsb });
        }
        Ok(Self { jet_lsb })
    }

    /// Energy LSB in GeV
    pub const fn jet_lsb(&self) -> f64 {
        self.jet_lsb
    }

    /// Convert one hardware jet
    pub fn convert(&self, jet: &HardwareJet) -> ConversionResult<PhysicalJet> {
        let p4 = hw_to_lorentz_vector(jet.hw_pt, jet.hw_eta, jet.hw_phi, self.jet_lsb)?;
        Ok(PhysicalJet::new(p4.pt(), p4.eta(), p4.phi(), *jet))
    }
}

impl JetConversion for JetConverter {
    fn convert(&self, jet: &HardwareJet) -> ConversionResult<PhysicalJet> {
        JetConverter::convert(self, jet)
    }
}

/// Convert hardware pt, eta, phi to a massless (pt, eta, phi, m) vector.
///
/// Assumes 72 equal towers in phi and a linear energy scale with zero
/// intercept.
pub fn hw_to_lorentz_vector(
    hw_pt: i32,
    hw_eta: i32,
    hw_phi: i32,
    jet_lsb: f64,
) -> ConversionResult<PtEtaPhiM> {
    let pt = hw_pt as f64 * jet_lsb;
    let eta = tower_to_eta(hw_eta)?;
    let phi = tower_to_phi(hw_phi, PhiGranularity::for_eta(eta));
    Ok(PtEtaPhiM::new(pt, eta, phi, JET_MASS_GEV))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    fn close(a: f64, b: f64) -> bool {
        libm::fabs(a - b) < 1e-9
    }

    #[test]
    fn central_jet() {
        let converter = JetConverter::new(0.5).unwrap();
        let jet = converter.convert(&HardwareJet::new(10, 5, 10, 0)).unwrap();

        assert_eq!(jet.pt(), 5.0);
        assert!(close(jet.eta(), 0.3915));
        assert!(close(jet.phi(), 9.5 * 2.0 * PI / 72.0));
        assert_eq!(jet.mass(), 0.0);
    }

    #[test]
    fn forward_jet_uses_wide_phi() {
        let converter = JetConverter::new(1.0).unwrap();
        let jet = converter.convert(&HardwareJet::new(4, 32, 1, 0)).unwrap();

        assert_eq!(jet.pt(), 4.0);
        assert_eq!(jet.eta(), 4.75);
        assert_eq!(jet.phi(), 0.0);
    }

    #[test]
    fn last_split_he_tower_uses_standard_phi() {
        let converter = JetConverter::default();
        let jet = converter.convert(&HardwareJet::new(1, -28, 1, 0)).unwrap();
        assert!(close(jet.phi(), PI / 72.0));
    }

    #[test]
    fn zero_scale_gives_zero_pt() {
        let converter = JetConverter::new(0.0).unwrap();
        for hw_pt in [0, 1, 100, 2047] {
            let jet = converter.convert(&HardwareJet::new(hw_pt, 1, 1, 0)).unwrap();
            assert_eq!(jet.pt(), 0.0);
        }
    }

    #[test]
    fn out_of_range_eta_propagates() {
        let converter = JetConverter::default();
        assert_eq!(
            converter.convert(&HardwareJet::new(10, 40, 1, 0)),
            Err(ConversionError::EtaOutOfRange { hw_eta: 40, max: 32 })
        );
    }

    #[test]
    fn invalid_scales_rejected() {
        assert!(JetConverter::new(-0.5).is_err());
        assert!(JetConverter::new(f64::NAN).is_err());
        assert!(JetConverter::new(f64::INFINITY).is_err());
        assert_eq!(JetConverter::default().jet_lsb(), 0.5);
    }

    #[test]
    fn hardware_words_carried_through() {
        let hw = HardwareJet::new(77, -13, 42, 5);
        let jet = JetConverter::default().convert(&hw).unwrap();
        assert_eq!(jet.hardware(), &hw);
    }
}
