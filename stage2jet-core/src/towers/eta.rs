//! Trigger-tower eta index to physical pseudorapidity
//!
//! Returns the eta at the centre of each tower, so tower 1 maps to
//! 0.087 / 2 = 0.0435. Three segmentation regimes apply, selected by |hwEta|:
//!
//! ```text
//! Uniform  (1 - 20):  eta = (|hwEta| - 0.5) * 0.087
//! Split HE (21 - 28): eta = midpoint of SPLIT_HE_ETA_EDGES[|hwEta|-21 ..= |hwEta|-20]
//! HF       (29 - 32): eta = (|hwEta| - 29) * 0.5 + 3.25
//! ```
//!
//! The sign of `hwEta` is applied last. `hwEta = 0` has no tower and maps to
//! eta = 0.

use crate::{
    constants::geometry::{
        FIRST_HF_HW_ETA, HF_FIRST_TOWER_CENTRE_ETA, HF_TOWER_DETA, LAST_SPLIT_HE_HW_ETA,
        LAST_UNIFORM_HW_ETA, MAX_HW_ETA, SPLIT_HE_ETA_EDGES, UNIFORM_TOWER_DETA,
    },
    errors::{ConversionError, ConversionResult},
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Calorimeter region a tower index belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerRegion {
    /// `hwEta = 0`, no physical tower
    None,
    /// Barrel and inner endcap, towers 1 - 20
    Uniform,
    /// Split endcap, towers 21 - 28
    SplitHe,
    /// Forward calorimeter, towers 29 - 32
    Hf,
}

impl TowerRegion {
    /// Region of a hardware eta index
    pub fn of(hw_eta: i32) -> ConversionResult<Self> {
        let abs_hw_eta = checked_magnitude(hw_eta)?;
        Ok(match abs_hw_eta {
            0 => Self::None,
            a if a <= LAST_UNIFORM_HW_ETA => Self::Uniform,
            a if a <= LAST_SPLIT_HE_HW_ETA => Self::SplitHe,
            _ => Self::Hf,
        })
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Uniform => "barrel/HE",
            Self::SplitHe => "split HE",
            Self::Hf => "HF",
        }
    }
}

/// Convert hardware eta (iEta) to physical eta at the tower centre.
///
/// Fails with [`ConversionError::EtaOutOfRange`] when |hwEta| > 32. The value
/// is never clamped.
pub fn tower_to_eta(hw_eta: i32) -> ConversionResult<f64> {
    let abs_hw_eta = checked_magnitude(hw_eta)?;

    let eta = match abs_hw_eta {
        0 => 0.0,
        a if a <= LAST_UNIFORM_HW_ETA => (a as f64 - 0.5) * UNIFORM_TOWER_DETA,
        a if a <= LAST_SPLIT_HE_HW_ETA => {
            let upper = (a - LAST_UNIFORM_HW_ETA) as usize;
            0.5 * (SPLIT_HE_ETA_EDGES[upper] + SPLIT_HE_ETA_EDGES[upper - 1])
        }
        a => (a - FIRST_HF_HW_ETA) as f64 * HF_TOWER_DETA + HF_FIRST_TOWER_CENTRE_ETA,
    };

    Ok(eta * hw_eta.signum() as f64)
}

/// |hwEta| as a signed value, or an error beyond the last tower
fn checked_magnitude(hw_eta: i32) -> ConversionResult<i32> {
    // unsigned_abs keeps i32::MIN from overflowing
    let magnitude = hw_eta.unsigned_abs();
    if magnitude > MAX_HW_ETA as u32 {
        log_warn!("hwEta {} outside the tower map (max {})", hw_eta, MAX_HW_ETA);
        return Err(ConversionError::EtaOutOfRange { hw_eta, max: MAX_HW_ETA });
    }
    Ok(magnitude as i32)
}
