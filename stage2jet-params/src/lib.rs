//! Parameter Sets for the Stage 2 Jet Producer
//!
//! ## Overview
//!
//! The jet producer is configured by a small parameter set: the input
//! collection (`stage2JetSource`) and the energy scale (`jetLsb`). This crate
//! describes those parameters, keeps the descriptions in a registry and loads
//! parameter sets from JSON into a checked [`ProducerConfig`].
//!
//! Loading runs in three steps:
//!
//! 1. **Presence and type** against the registered [`ModuleDescription`]:
//!    unknown names, wrong types and missing required values are errors.
//! 2. **Defaults** from the description fill whatever was left out.
//! 3. **Values** are checked by [`ProducerConfig::validate`]: an empty source
//!    label or a negative or non-finite LSB is rejected.
//!
//! ## Parameter Set Forms
//!
//! A single module:
//!
//! ```json
//! { "stage2JetSource": "caloStage2Digis:MP", "jetLsb": 0.5 }
//! ```
//!
//! Several modules keyed by label, read with [`load_labelled_config`]:
//!
//! ```json
//! {
//!   "stage2JetToL1Jet": { "stage2JetSource": "caloStage2Digis:MP", "jetLsb": 0.5 },
//!   "simStage2JetToL1Jet": { "stage2JetSource": "simCaloStage2Digis", "jetLsb": 0.5 }
//! }
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use stage2jet_params::load_producer_config;
//!
//! let config = load_producer_config(r#"{ "stage2JetSource": "caloStage2Digis:MP", "jetLsb": 0.5 }"#)?;
//! assert_eq!(config.jet_lsb, 0.5);
//! assert_eq!(config.jet_source.label.as_str(), "caloStage2Digis");
//! # Ok::<(), stage2jet_params::ParamError>(())
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;

use stage2jet_core::{ConversionError, ProducerConfig};

pub mod description;
pub mod registry;
pub mod validation;

pub use description::{
    ModuleDescription, ParameterDescription, ParameterType, JET_PRODUCER_LABEL, JET_PRODUCER_TYPE,
};
pub use registry::{ParameterRegistry, GLOBAL_REGISTRY};
pub use validation::{IssueType, ParameterValidator, Severity, ValidationIssue, ValidationReport};

/// Parameter-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum ParamError {
    #[error("Failed to parse parameter set: {0}")]
    Parse(String),

    #[error("Failed to read parameter file: {0}")]
    Io(String),

    #[error("No description registered for {0}")]
    NotFound(String),

    #[error("Parameter set invalid: {0}")]
    Validation(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Producer configuration rejected: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ParamError {
    fn from(err: serde_json::Error) -> Self {
        ParamError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ParamError {
    fn from(err: std::io::Error) -> Self {
        ParamError::Io(err.to_string())
    }
}

impl From<ConversionError> for ParamError {
    fn from(err: ConversionError) -> Self {
        ParamError::Config(err.to_string())
    }
}

/// Build a producer configuration from an already-parsed parameter set
pub fn producer_config_from_value(parameters: &Value) -> Result<ProducerConfig, ParamError> {
    let description = GLOBAL_REGISTRY.get(JET_PRODUCER_LABEL)?;
    config_for_description(&description, parameters)
}

/// Parse and check a JSON parameter set for the jet producer
pub fn load_producer_config(json: &str) -> Result<ProducerConfig, ParamError> {
    let parameters: Value = serde_json::from_str(json)?;
    producer_config_from_value(&parameters)
}

/// Read a JSON parameter set for the jet producer from a file
pub fn load_producer_config_file<P: AsRef<Path>>(path: P) -> Result<ProducerConfig, ParamError> {
    let path = path.as_ref();
    log::info!("loading jet producer parameters from {}", path.display());
    let contents = fs::read_to_string(path)?;
    load_producer_config(&contents)
}

/// Pick the parameter set of one module label out of a multi-module JSON
/// document and check it against the description registered for that label
pub fn load_labelled_config(json: &str, label: &str) -> Result<ProducerConfig, ParamError> {
    let document: Value = serde_json::from_str(json)?;
    let parameters = document
        .get(label)
        .ok_or_else(|| ParamError::NotFound(format!("parameter set {}", label)))?;

    let description = GLOBAL_REGISTRY.get(label)?;
    if description.module_type != JET_PRODUCER_TYPE {
        return Err(ParamError::Validation(format!(
            "{} is a {}, not a {}",
            label, description.module_type, JET_PRODUCER_TYPE
        )));
    }
    config_for_description(&description, parameters)
}

fn config_for_description(
    description: &ModuleDescription,
    parameters: &Value,
) -> Result<ProducerConfig, ParamError> {
    let report = ParameterValidator::new(description).validate(parameters);
    for issue in &report.info {
        log::debug!("{}", issue);
    }
    for issue in &report.warnings {
        log::warn!("{}", issue);
    }
    report.into_result()?;

    // Validation guarantees an object here
    let fields = parameters
        .as_object()
        .ok_or_else(|| ParamError::Validation("parameter set is not an object".to_string()))?;
    let filled = description.with_defaults(fields);

    let config: ProducerConfig = serde_json::from_value(Value::Object(filled))?;
    config.validate()?;
    Ok(config)
}
