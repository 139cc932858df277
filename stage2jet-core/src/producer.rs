//! Per-Crossing Jet Producer
//!
//! ## Overview
//!
//! The producer runs once per event. It walks the declared bunch-crossing
//! window of the input, converts every hardware jet in readout order, and
//! builds three products that all declare the input window:
//!
//! ```text
//!                      ┌──────────────┐     ┌─────────────┐
//! BxCollection<Hw> ──▶ │ JetConverter │ ──▶ │  classify   │
//!   bx first..=last    └──────────────┘     └─────────────┘
//!                             │                │        │
//!                             ▼                ▼        ▼
//!                           jets            central  forward
//! ```
//!
//! ## Failure Semantics
//!
//! A tower index outside the calorimeter means the input is corrupted or the
//! geometry table does not match the hardware. The first such jet aborts the
//! whole event: the error names its crossing, its position and its `hwEta`,
//! and no product is returned. All products are built in locals and only
//! handed out once every jet has converted.
//!
//! ## Ordering
//!
//! Crossings are visited in increasing order and jets in their input order,
//! so each product preserves the relative order of its source jets.

use crate::{
    bx::BxCollection,
    config::ProducerConfig,
    constants::scales::{CENTRAL_LABEL, FORWARD_LABEL},
    convert::JetConverter,
    errors::{ConversionError, ConversionResult},
    jet::PhysicalJet,
    region::{JetParticle, JetRegion},
    traits::{JetConversion, JetSource},
};

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// The three products of one event
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JetProducts {
    /// Every converted jet, unlabelled product
    pub jets: BxCollection<PhysicalJet>,
    /// Jets with |eta| < 3.0, product label "Central"
    pub central: BxCollection<JetParticle>,
    /// Jets with |eta| >= 3.0, product label "Forward"
    pub forward: BxCollection<JetParticle>,
}

impl JetProducts {
    /// Empty products declaring `[first_bx, last_bx]`
    pub fn with_range(first_bx: i32, last_bx: i32) -> ConversionResult<Self> {
        Ok(Self {
            jets: BxCollection::with_range(first_bx, last_bx)?,
            central: BxCollection::with_range(first_bx, last_bx)?,
            forward: BxCollection::with_range(first_bx, last_bx)?,
        })
    }

    /// Product holding one region
    pub fn region(&self, region: JetRegion) -> &BxCollection<JetParticle> {
        match region {
            JetRegion::Central => &self.central,
            JetRegion::Forward => &self.forward,
        }
    }

    /// Region product by instance label
    pub fn by_label(&self, label: &str) -> Option<&BxCollection<JetParticle>> {
        match label {
            CENTRAL_LABEL => Some(&self.central),
            FORWARD_LABEL => Some(&self.forward),
            _ => None,
        }
    }

    /// Append one converted jet to the products of crossing `bx`
    fn record(&mut self, bx: i32, jet: PhysicalJet) -> ConversionResult<()> {
        let particle = JetParticle::from_jet(&jet, bx);
        self.jets.push(bx, jet)?;
        match particle.region {
            JetRegion::Central => self.central.push(bx, particle),
            JetRegion::Forward => self.forward.push(bx, particle),
        }
    }
}

/// Converts every jet of an event and splits them by region
#[derive(Debug, Clone)]
pub struct JetProducer<C = JetConverter> {
    converter: C,
}

impl JetProducer<JetConverter> {
    /// Producer for a validated configuration
    pub fn from_config(config: &ProducerConfig) -> ConversionResult<Self> {
        config.validate()?;
        Ok(Self::new(config.converter()?))
    }
}

impl<C: JetConversion> JetProducer<C> {
    /// Producer around any jet conversion
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Converter applied to every jet
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Convert a whole event.
    ///
    /// Returns nothing but the error if any jet fails to convert.
    pub fn produce<S: JetSource + ?Sized>(&self, source: &S) -> ConversionResult<JetProducts> {
        let (first_bx, last_bx) = source.bx_range();
        let products = (first_bx..=last_bx).try_fold(
            JetProducts::with_range(first_bx, last_bx)?,
            |mut products, bx| {
                let jets = source.jets(bx);
                log_trace!("bx {}: {} hardware jets", bx, jets.len());

                for (index, hw) in jets.iter().enumerate() {
                    let jet = self
                        .converter
                        .convert(hw)
                        .map_err(|e| e.in_crossing(bx, index))?;
                    products.record(bx, jet)?;
                }
                Ok::<_, ConversionError>(products)
            },
        )?;

        log_debug!(
            "converted {} jets over bx [{}, {}]: {} central, {} forward",
            products.jets.len(),
            first_bx,
            last_bx,
            products.central.len(),
            products.forward.len()
        );

        Ok(products)
    }

    /// Convert an event whose input may be missing.
    ///
    /// A missing input is reported as an invalid source rather than an empty
    /// event.
    pub fn produce_from<S: JetSource + ?Sized>(&self, source: Option<&S>) -> ConversionResult<JetProducts> {
        let source = source.ok_or(ConversionError::InvalidSource {
            reason: "stage2JetSource not valid",
        })?;
        self.produce(source)
    }
}
