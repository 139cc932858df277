//! Core traits for the conversion pipeline
//!
//! Two seams separate the core from the framework around it: where hardware
//! jets come from, and how one jet is converted. Keep them small - both are
//! implemented by plain data types in this crate.

use crate::{
    bx::BxCollection,
    errors::ConversionResult,
    jet::{HardwareJet, PhysicalJet},
};

/// Source of hardware jets grouped by bunch crossing
pub trait JetSource {
    /// Declared crossing window as `(first, last)`
    fn bx_range(&self) -> (i32, i32);

    /// Jets of one crossing in readout order; empty outside the window
    fn jets(&self, bx: i32) -> &[HardwareJet];
}

impl JetSource for BxCollection<HardwareJet> {
    fn bx_range(&self) -> (i32, i32) {
        BxCollection::bx_range(self)
    }

    fn jets(&self, bx: i32) -> &[HardwareJet] {
        self.get(bx)
    }
}

/// Conversion of one hardware jet to physical units
///
/// Implementations must be pure: the same input always yields the same jet or
/// the same error.
pub trait JetConversion {
    /// Convert a single jet
    fn convert(&self, jet: &HardwareJet) -> ConversionResult<PhysicalJet>;
}
