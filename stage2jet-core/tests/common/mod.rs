//! Common test utilities for integration tests
//!
//! This module provides:
//! - Scenario builders for hardware jet windows
//! - A small harness that collects named results
//! - Deterministic random hardware words

#![allow(dead_code)]

pub mod harness;
pub mod scenarios;

use stage2jet_core::{
    BxCollection, ConversionError, ConversionResult, HardwareJet, JetConverter, JetProducer,
    JetProducts,
};

/// Run a scenario input through a producer with the given LSB
pub fn produce(input: &BxCollection<HardwareJet>, jet_lsb: f64) -> ConversionResult<JetProducts> {
    JetProducer::new(JetConverter::new(jet_lsb)?).produce(input)
}

/// Render an error for harness messages
pub fn describe(err: ConversionError) -> String {
    format!("{}", err)
}
