//! Parameter-Set Descriptions
//!
//! A module description lists every parameter a module accepts: its name,
//! type, optional default and a one-line comment. Parameter sets are checked
//! against the description before any producer is built from them, so a typo
//! in a parameter name or a string where a number belongs is caught at load
//! time rather than on the first event.
//!
//! ## Jet producer
//!
//! | Parameter         | Type      | Description default | Comment                              |
//! |-------------------|-----------|---------------------|--------------------------------------|
//! | `stage2JetSource` | input tag | `""`                | Jet collection from Stage 2 emulator |
//! | `jetLsb`          | double    | none (required)     | LSB for jet et scale.                |
//!
//! The description default of `stage2JetSource` is the empty tag, which the
//! producer later rejects. The standard configuration fragment
//! ([`ModuleDescription::standard_parameters`]) supplies
//! `caloStage2Digis:MP` and `0.5`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use stage2jet_core::{
    constants::scales::{DEFAULT_JET_LSB_GEV, DEFAULT_JET_SOURCE, PARAM_JET_LSB, PARAM_JET_SOURCE},
    InputTag,
};

/// Module type of the jet producer
pub const JET_PRODUCER_TYPE: &str = "Stage2JetToL1Jet";

/// Label the jet producer is configured under by default
pub const JET_PRODUCER_LABEL: &str = "stage2JetToL1Jet";

/// Type of a single parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterType {
    /// `label[:instance[:process]]` string
    InputTag,
    /// Floating point number; integers are accepted
    Double,
}

impl ParameterType {
    /// Name used in validation messages
    pub fn name(self) -> &'static str {
        match self {
            ParameterType::InputTag => "InputTag",
            ParameterType::Double => "double",
        }
    }

    /// Whether a JSON value can be read as this type
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ParameterType::InputTag => value
                .as_str()
                .map_or(false, |tag| InputTag::parse(tag).is_ok()),
            ParameterType::Double => value.is_number(),
        }
    }
}

/// One described parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescription {
    /// Parameter name as it appears in a parameter set
    pub name: String,

    /// Expected type
    #[serde(rename = "type")]
    pub kind: ParameterType,

    /// Value used when the parameter set omits it; `None` makes it required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Human-readable comment
    #[serde(default)]
    pub comment: String,
}

impl ParameterDescription {
    /// Parameter with a default value
    pub fn optional(name: &str, kind: ParameterType, default: Value) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: Some(default),
            comment: String::new(),
        }
    }

    /// Parameter that every parameter set must provide
    pub fn required(name: &str, kind: ParameterType) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: None,
            comment: String::new(),
        }
    }

    /// Attach a comment
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    /// Whether a parameter set must provide a value
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Description of every parameter a module accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescription {
    /// Module type, e.g. `Stage2JetToL1Jet`
    pub module_type: String,

    /// Described parameters in declaration order
    pub parameters: Vec<ParameterDescription>,
}

impl ModuleDescription {
    /// Empty description for a module type
    pub fn new(module_type: &str) -> Self {
        Self {
            module_type: module_type.to_string(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn add(mut self, parameter: ParameterDescription) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescription> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Description of the Stage 2 jet producer
    pub fn stage2_jet_to_l1_jet() -> Self {
        Self::new(JET_PRODUCER_TYPE)
            .add(
                ParameterDescription::optional(
                    PARAM_JET_SOURCE,
                    ParameterType::InputTag,
                    Value::from(""),
                )
                .with_comment("Jet collection from Stage 2 emulator"),
            )
            .add(
                ParameterDescription::required(PARAM_JET_LSB, ParameterType::Double)
                    .with_comment("LSB for jet et scale."),
            )
    }

    /// Standard configuration fragment for the jet producer
    pub fn standard_parameters() -> Map<String, Value> {
        let mut parameters = Map::new();
        parameters.insert(PARAM_JET_SOURCE.to_string(), Value::from(DEFAULT_JET_SOURCE));
        parameters.insert(PARAM_JET_LSB.to_string(), Value::from(DEFAULT_JET_LSB_GEV));
        parameters
    }

    /// Copy of `parameters` with every missing default filled in
    pub fn with_defaults(&self, parameters: &Map<String, Value>) -> Map<String, Value> {
        let mut filled = parameters.clone();
        for description in &self.parameters {
            if let Some(default) = &description.default {
                filled
                    .entry(description.name.clone())
                    .or_insert_with(|| default.clone());
            }
        }
        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn jet_producer_description() {
        let description = ModuleDescription::stage2_jet_to_l1_jet();
        assert_eq!(description.module_type, "Stage2JetToL1Jet");
        assert_eq!(description.parameters.len(), 2);

        let source = description.parameter("stage2JetSource").unwrap();
        assert_eq!(source.kind, ParameterType::InputTag);
        assert_eq!(source.default, Some(json!("")));
        assert_eq!(source.comment, "Jet collection from Stage 2 emulator");

        let lsb = description.parameter("jetLsb").unwrap();
        assert!(lsb.is_required());
        assert_eq!(lsb.comment, "LSB for jet et scale.");

        assert!(description.parameter("jetLSB").is_none());
    }

    #[test]
    fn type_acceptance() {
        assert!(ParameterType::Double.accepts(&json!(0.5)));
        assert!(ParameterType::Double.accepts(&json!(1)));
        assert!(!ParameterType::Double.accepts(&json!("0.5")));

        assert!(ParameterType::InputTag.accepts(&json!("caloStage2Digis:MP")));
        assert!(ParameterType::InputTag.accepts(&json!("")));
        assert!(!ParameterType::InputTag.accepts(&json!("a:b:c:d")));
        assert!(!ParameterType::InputTag.accepts(&json!(3)));
    }

    #[test]
    fn defaults_fill_only_missing_values() {
        let description = ModuleDescription::stage2_jet_to_l1_jet();

        let filled = description.with_defaults(&Map::new());
        assert_eq!(filled.get("stage2JetSource"), Some(&json!("")));
        assert!(filled.get("jetLsb").is_none());

        let mut given = Map::new();
        given.insert("stage2JetSource".into(), json!("simCaloStage2Digis"));
        let filled = description.with_defaults(&given);
        assert_eq!(filled.get("stage2JetSource"), Some(&json!("simCaloStage2Digis")));
    }

    #[test]
    fn standard_fragment() {
        let parameters = ModuleDescription::standard_parameters();
        assert_eq!(parameters.get("stage2JetSource"), Some(&json!("caloStage2Digis:MP")));
        assert_eq!(parameters.get("jetLsb"), Some(&json!(0.5)));
    }

    #[test]
    fn description_serializes_with_type_field() {
        let encoded = serde_json::to_value(ModuleDescription::stage2_jet_to_l1_jet()).unwrap();
        assert_eq!(encoded["moduleType"], json!("Stage2JetToL1Jet"));
        assert_eq!(encoded["parameters"][1]["type"], json!("double"));
        assert!(encoded["parameters"][1].get("default").is_none());
    }
}
