//! Trigger-Tower Coordinate Maps
//!
//! ## Overview
//!
//! Stage 2 trigger objects carry positions at trigger-tower granularity: an
//! integer eta index and an integer phi index. This module turns those indices
//! into physical coordinates at the centre of the tower (or the lower phi
//! edge, for forward towers).
//!
//! Unlike the legacy and Stage 1 triggers, which only know the coarser region
//! granularity, every index here is a single tower, so the maps follow the
//! real calorimeter segmentation.
//!
//! ## Eta
//!
//! The calorimeter is not uniformly segmented in eta:
//!
//! ```text
//!  eta  0 ───────── 1.74 ──┬──┬──┬──┬──┬──┬──┬── 3.0 ──── 3.5 ──── 4.0 ──── 4.5 ──── 5.0
//!       │  20 × 0.087     │  8 split-HE towers  │  4 × 0.5 HF towers                 │
//! ```
//!
//! The split-HE edges are a fixed table, see
//! [`SPLIT_HE_ETA_EDGES`](crate::constants::geometry::SPLIT_HE_ETA_EDGES).
//! An off-by-one at either regime transition (20/21, 28/29) would move every
//! jet beyond tower 20, so both transitions are tested explicitly.
//!
//! ## Phi
//!
//! 72 towers of 2pi/72 cover the full circle. Barrel and endcap towers report
//! the bin centre, HF towers the lower edge:
//!
//! ```text
//! Standard: phi = (iPhi - 0.5) * 2pi / 72
//! Wide:     phi = (iPhi - 1.0) * 2pi / 72
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use stage2jet_core::towers::{tower_to_eta, tower_to_phi, PhiGranularity};
//!
//! let eta = tower_to_eta(32)?;
//! assert_eq!(eta, 4.75);
//!
//! let phi = tower_to_phi(1, PhiGranularity::for_eta(eta));
//! assert_eq!(phi, 0.0);
//! # Ok::<(), stage2jet_core::ConversionError>(())
//! ```

pub mod eta;
pub mod phi;

pub use eta::{tower_to_eta, TowerRegion};
pub use phi::{tower_to_phi, PhiGranularity};
