//! Constants for Stage2Jet Core
//!
//! Every numeric value used by the conversion lives here, with a note on what
//! it describes. Nothing in the rest of the crate should carry a magic number.
//!
//! ## Organization
//!
//! - **Geometry**: Trigger-tower segmentation in eta and phi, region boundary
//! - **Scales**: Energy scale, producer defaults and parameter names

/// Trigger-tower segmentation and the central/forward boundary.
pub mod geometry;

/// Energy scales, product labels and parameter defaults.
pub mod scales;

pub use geometry::{
    CENTRAL_ETA_LIMIT, MAX_HW_ETA, N_PHI_TOWERS, SPLIT_HE_ETA_EDGES, TOWER_DPHI,
};

pub use scales::{
    CENTRAL_LABEL, DEFAULT_JET_LSB_GEV, DEFAULT_JET_SOURCE, FORWARD_LABEL, JET_MASS_GEV,
};
