//! Calorimeter Trigger-Tower Geometry
//!
//! This module defines the segmentation of the calorimeter as seen by the
//! Stage 2 trigger. Trigger towers are addressed by a signed eta index
//! (`hwEta`, or iEta) and a phi index (`hwPhi`, or iPhi). Towers are numbered
//! from 1 outward on each side; there is no tower 0.
//!
//! ```text
//!  |hwEta|   1 ........ 20 | 21 ........ 28 | 29 .... 32
//!  region    barrel + HE   | split HE       | HF
//!  eta       0.000 - 1.740 | 1.740 - 3.000  | 3.000 - 5.000
//!  dEta      0.087 uniform | non-uniform    | 0.5 uniform
//! ```

use core::f64::consts::PI;

// ===== ETA SEGMENTATION =====

/// Largest valid tower magnitude (|hwEta|).
///
/// Tower 32 is the outermost HF tower. Anything beyond indicates corrupted
/// input or a geometry-table mismatch.
pub const MAX_HW_ETA: i32 = 32;

/// Last tower of the uniform barrel / inner endcap region.
///
/// Towers 1 - 20 each span dEta = 0.087, reaching eta = 1.74.
pub const LAST_UNIFORM_HW_ETA: i32 = 20;

/// Last tower of the split endcap (HE) region.
///
/// Towers 21 - 28 have non-uniform widths, covering eta 1.74 - 3.0.
pub const LAST_SPLIT_HE_HW_ETA: i32 = 28;

/// First tower of the forward calorimeter (HF).
pub const FIRST_HF_HW_ETA: i32 = 29;

/// Eta width of a barrel / inner-endcap trigger tower.
pub const UNIFORM_TOWER_DETA: f64 = 0.087;

/// Lower eta edge of each split-HE tower, plus the upper edge of the last.
///
/// Tower `t` (21 <= t <= 28) spans `[EDGES[t - 21], EDGES[t - 20]]`.
pub const SPLIT_HE_ETA_EDGES: [f64; 9] = [
    1.74, 1.83, 1.93, 2.043, 2.172, 2.322, 2.5, 2.65, 3.0,
];

/// Eta width of an HF trigger tower.
pub const HF_TOWER_DETA: f64 = 0.5;

/// Eta at the centre of the first HF tower (29).
pub const HF_FIRST_TOWER_CENTRE_ETA: f64 = 3.25;

// ===== PHI SEGMENTATION =====

/// Number of trigger towers around the full circle in phi.
pub const N_PHI_TOWERS: i32 = 72;

/// Phi width of one trigger tower (radians).
pub const TOWER_DPHI: f64 = 2.0 * PI / N_PHI_TOWERS as f64;

/// First valid phi index. Indices run 1..=72 by convention.
pub const FIRST_HW_PHI: i32 = 1;

/// Last valid phi index.
pub const LAST_HW_PHI: i32 = N_PHI_TOWERS;

// ===== REGIONS =====

/// Boundary between the central and forward regions in |eta|.
///
/// Shared by the phi-granularity choice (`|eta| > 3.0` is forward phi) and
/// the region classification (`|eta| < 3.0` is central). A jet at exactly
/// 3.0 is labelled forward but keeps the standard phi granularity.
pub const CENTRAL_ETA_LIMIT: f64 = 3.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_he_edges_are_contiguous() {
        // First edge meets the uniform region, last edge meets HF
        let uniform_top = LAST_UNIFORM_HW_ETA as f64 * UNIFORM_TOWER_DETA;
        assert!(libm::fabs(SPLIT_HE_ETA_EDGES[0] - uniform_top) < 1e-12);
        assert_eq!(SPLIT_HE_ETA_EDGES[8], CENTRAL_ETA_LIMIT);
        assert_eq!(
            SPLIT_HE_ETA_EDGES.len() as i32,
            LAST_SPLIT_HE_HW_ETA - LAST_UNIFORM_HW_ETA + 1
        );
    }

    #[test]
    fn split_he_edges_increase() {
        for pair in SPLIT_HE_ETA_EDGES.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn hf_starts_at_region_boundary() {
        let hf_lower_edge = HF_FIRST_TOWER_CENTRE_ETA - HF_TOWER_DETA / 2.0;
        assert_eq!(hf_lower_edge, CENTRAL_ETA_LIMIT);
        assert_eq!(FIRST_HF_HW_ETA, LAST_SPLIT_HE_HW_ETA + 1);
    }
}
