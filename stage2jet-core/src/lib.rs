//! Core conversion engine for Stage2Jet
//!
//! Converts Stage 2 calorimeter-trigger jets from hardware words (integer pt,
//! tower eta index, tower phi index) into physical (pt, eta, phi, m)
//! four-vectors and splits them into central and forward collections.
//!
//! Key constraints:
//! - Pure functions over immutable inputs, no shared state
//! - Runs without `std` (needs `alloc` for the per-crossing collections)
//! - A corrupted tower index aborts the event, it is never clamped
//!
//! ```no_run
//! use stage2jet_core::{BxCollection, HardwareJet, JetProducer, ProducerConfig};
//!
//! let mut input = BxCollection::with_range(-2, 2)?;
//! input.push(0, HardwareJet::new(10, 5, 10, 0))?;
//!
//! let producer = JetProducer::from_config(&ProducerConfig::default())?;
//! let products = producer.produce(&input)?;
//!
//! for (bx, jet) in products.central.iter() {
//!     // hand off to analysis
//! }
//! # Ok::<(), stage2jet_core::ConversionError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bx;
pub mod config;
pub mod constants;
pub mod convert;
pub mod errors;
pub mod jet;
pub mod producer;
pub mod region;
pub mod towers;
pub mod traits;

// Public API
pub use bx::BxCollection;
pub use config::{InputTag, ProducerConfig};
pub use convert::{hw_to_lorentz_vector, JetConverter};
pub use errors::{ConversionError, ConversionResult};
pub use jet::{HardwareJet, PhysicalJet, PtEtaPhiM};
pub use producer::{JetProducer, JetProducts};
pub use region::{classify, JetParticle, JetRegion};
pub use traits::{JetConversion, JetSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
