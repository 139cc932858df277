//! Error Types for Jet Conversion Failures
//!
//! ## Design Philosophy
//!
//! The conversion core runs once per event on every bunch crossing read out by
//! the trigger, so its errors follow the same rules as the rest of the crate:
//!
//! 1. **No Heap Allocation**: All error data is inline - integers and
//!    `&'static str` only.
//!
//! 2. **Copy Semantics**: Errors implement Copy so they can be returned from
//!    the innermost tower lookup all the way out of a batch without cloning.
//!
//! 3. **Actionable Information**: A geometry mismatch must be diagnosable from
//!    the error alone, so batch-level failures name the bunch crossing, the
//!    position of the offending jet inside that crossing and its raw `hwEta`.
//!
//! ## Error Categories
//!
//! ### Geometry Violations
//! - `EtaOutOfRange`: Tower index outside the calorimeter (|hwEta| > 32)
//! - `CrossingFailed`: The same violation, raised while converting a batch
//!
//! ### Collection Issues
//! - `InvalidBxRange`: Bunch-crossing range inverted, or a push outside it
//! - `InvalidSource`: Input collection absent or unreadable
//!
//! ### Configuration Issues
//! - `InvalidScale`: Jet LSB not a finite, non-negative number
//! - `InvalidConfig`: Any other malformed parameter
//!
//! None of these are recoverable inside the core. A batch either converts
//! completely or fails with the first error encountered.
//!
//! ```rust
//! use stage2jet_core::{ConversionError, towers::eta::tower_to_eta};
//!
//! match tower_to_eta(40) {
//!     Err(ConversionError::EtaOutOfRange { hw_eta, max }) => {
//!         assert_eq!(hw_eta, 40);
//!         assert_eq!(max, 32);
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// Hardware eta index outside the trigger-tower map
    #[error("hwEta {hw_eta} out of bounds, abs(hwEta) > {max}")]
    EtaOutOfRange {
        /// The raw tower index that failed
        hw_eta: i32,
        /// Largest valid tower magnitude
        max: i32,
    },

    /// A jet inside a batch could not be converted; the whole batch is void
    #[error("bx {bx}, jet {index}: hwEta {hw_eta} out of bounds, abs(hwEta) > {max}")]
    CrossingFailed {
        /// Bunch crossing holding the offending jet
        bx: i32,
        /// Position of the jet within its crossing
        index: usize,
        /// The raw tower index that failed
        hw_eta: i32,
        /// Largest valid tower magnitude
        max: i32,
    },

    /// Bunch-crossing range inverted, or an index outside the declared range
    #[error("bx range [{first}, {last}] not valid")]
    InvalidBxRange {
        /// First bunch crossing of the offending range
        first: i32,
        /// Last bunch crossing of the offending range
        last: i32,
    },

    /// Input jet collection absent or unreadable
    #[error("{reason}")]
    InvalidSource {
        /// What was wrong with the source
        reason: &'static str,
    },

    /// Jet energy LSB is NaN, infinite or negative
    #[error("jetLsb {value} not valid, must be finite and >= 0")]
    InvalidScale {
        /// The rejected LSB
        value: f64,
    },

    /// Malformed configuration parameter
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which parameter and why
        reason: &'static str,
    },
}

impl ConversionError {
    /// Attach the batch position to a per-jet error.
    ///
    /// Errors that are not tied to a single tower pass through unchanged.
    pub fn in_crossing(self, bx: i32, index: usize) -> Self {
        match self {
            Self::EtaOutOfRange { hw_eta, max } => Self::CrossingFailed { bx, index, hw_eta, max },
            other => other,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EtaOutOfRange { hw_eta, max } =>
                defmt::write!(fmt, "hwEta {} outside +-{}", hw_eta, max),
            Self::CrossingFailed { bx, index, hw_eta, max } =>
                defmt::write!(fmt, "bx {} jet {}: hwEta {} outside +-{}", bx, index, hw_eta, max),
            Self::InvalidBxRange { first, last } =>
                defmt::write!(fmt, "bx range [{}, {}] invalid", first, last),
            Self::InvalidSource { reason } =>
                defmt::write!(fmt, "Source: {}", reason),
            Self::InvalidScale { value } =>
                defmt::write!(fmt, "jetLsb {} invalid", value),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Config: {}", reason),
        }
    }
}
