//! Parameter Registry
//!
//! Thread-safe map from module label to the description its parameter sets
//! are checked against. The global registry comes pre-loaded with the jet
//! producer under `stage2JetToL1Jet`.

use std::collections::HashMap;
use std::sync::RwLock;

use lazy_static::lazy_static;

use crate::{
    description::{ModuleDescription, JET_PRODUCER_LABEL},
    ParamError,
};

lazy_static! {
    /// Process-wide registry with the default descriptions loaded
    pub static ref GLOBAL_REGISTRY: ParameterRegistry = ParameterRegistry::with_defaults();
}

/// Thread-safe registry of module descriptions
pub struct ParameterRegistry {
    /// Descriptions indexed by module label
    descriptions: RwLock<HashMap<String, ModuleDescription>>,
}

impl ParameterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptions: RwLock::new(HashMap::new()),
        }
    }

    /// Registry holding the jet producer description
    pub fn with_defaults() -> Self {
        let mut descriptions = HashMap::new();
        descriptions.insert(
            JET_PRODUCER_LABEL.to_string(),
            ModuleDescription::stage2_jet_to_l1_jet(),
        );
        Self {
            descriptions: RwLock::new(descriptions),
        }
    }

    /// Register a description under a module label
    ///
    /// A label may only be registered once.
    pub fn register(&self, label: &str, description: ModuleDescription) -> Result<(), ParamError> {
        let mut descriptions = self
            .descriptions
            .write()
            .map_err(|_| ParamError::Registry("Lock poisoned".to_string()))?;

        if descriptions.contains_key(label) {
            return Err(ParamError::Registry(format!("{} already registered", label)));
        }

        log::debug!(
            "registering {} ({} parameters) as {}",
            description.module_type,
            description.parameters.len(),
            label
        );
        descriptions.insert(label.to_string(), description);
        Ok(())
    }

    /// Description registered under a label
    pub fn get(&self, label: &str) -> Result<ModuleDescription, ParamError> {
        let descriptions = self
            .descriptions
            .read()
            .map_err(|_| ParamError::Registry("Lock poisoned".to_string()))?;

        descriptions
            .get(label)
            .cloned()
            .ok_or_else(|| ParamError::NotFound(label.to_string()))
    }

    /// Registered labels, sorted
    pub fn labels(&self) -> Result<Vec<String>, ParamError> {
        let descriptions = self
            .descriptions
            .read()
            .map_err(|_| ParamError::Registry("Lock poisoned".to_string()))?;

        let mut labels: Vec<String> = descriptions.keys().cloned().collect();
        labels.sort();
        Ok(labels)
    }

    /// Whether a label is registered
    pub fn contains(&self, label: &str) -> bool {
        self.descriptions
            .read()
            .map(|descriptions| descriptions.contains_key(label))
            .unwrap_or(false)
    }
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{ParameterDescription, ParameterType};

    #[test]
    fn global_registry_has_jet_producer() {
        let description = GLOBAL_REGISTRY.get("stage2JetToL1Jet").unwrap();
        assert_eq!(description.module_type, "Stage2JetToL1Jet");
        assert!(GLOBAL_REGISTRY.contains("stage2JetToL1Jet"));
    }

    #[test]
    fn register_and_list() {
        let registry = ParameterRegistry::new();
        assert!(registry.labels().unwrap().is_empty());

        registry
            .register("simJets", ModuleDescription::stage2_jet_to_l1_jet())
            .unwrap();
        registry
            .register(
                "jetFilter",
                ModuleDescription::new("JetFilter")
                    .add(ParameterDescription::required("minPt", ParameterType::Double)),
            )
            .unwrap();

        assert_eq!(registry.labels().unwrap(), vec!["jetFilter", "simJets"]);
        assert_eq!(registry.get("jetFilter").unwrap().parameters.len(), 1);
    }

    #[test]
    fn duplicate_label_rejected() {
        let registry = ParameterRegistry::with_defaults();
        let err = registry
            .register("stage2JetToL1Jet", ModuleDescription::new("Other"))
            .unwrap_err();
        assert!(matches!(err, ParamError::Registry(_)));
        assert_eq!(
            registry.get("stage2JetToL1Jet").unwrap().module_type,
            "Stage2JetToL1Jet"
        );
    }

    #[test]
    fn missing_label() {
        let registry = ParameterRegistry::new();
        assert!(matches!(registry.get("nothing"), Err(ParamError::NotFound(_))));
    }

    #[test]
    fn concurrent_readers() {
        let registry = ParameterRegistry::with_defaults();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert!(registry.get("stage2JetToL1Jet").is_ok());
                });
            }
        });
    }
}
