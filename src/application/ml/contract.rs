use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::FEATURE_NAMES;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

fn default_input_name() -> String {
    "float_input".to_string()
}

fn default_label_output() -> String {
    "output_label".to_string()
}

fn default_probability_output() -> String {
    "output_probability".to_string()
}

fn default_positive_class_index() -> usize {
    1
}

fn default_feature_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Typed description of the ONNX artifact's tensor layout.
///
/// Exported sklearn pipelines carry no machine-readable schema for any of
/// this, so the trainer ships a small `.contract.json` sidecar next to the
/// artifact. Every field has a default matching the standard skl2onnx
/// export, so a missing or partial sidecar still yields a usable contract;
/// validation then rejects anything that contradicts the feature registry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelContract {
    #[serde(default = "default_input_name")]
    pub input_name: String,
    #[serde(default = "default_label_output")]
    pub label_output: String,
    #[serde(default = "default_probability_output")]
    pub probability_output: String,
    /// Column of the probability tensor holding the fraud class.
    #[serde(default = "default_positive_class_index")]
    pub positive_class_index: usize,
    /// Training column order; must equal the feature registry exactly.
    #[serde(default = "default_feature_names")]
    pub feature_names: Vec<String>,
}

impl Default for ModelContract {
    fn default() -> Self {
        Self {
            input_name: default_input_name(),
            label_output: default_label_output(),
            probability_output: default_probability_output(),
            positive_class_index: default_positive_class_index(),
            feature_names: default_feature_names(),
        }
    }
}

impl ModelContract {
    /// Load the sidecar if it exists, otherwise fall back to defaults.
    pub fn load(sidecar: Option<&Path>) -> Result<Self, ModelError> {
        let contract = match sidecar {
            Some(path) if path.exists() => {
                let text =
                    std::fs::read_to_string(path).map_err(|e| ModelError::LoadFailed {
                        reason: format!("reading contract {:?}: {}", path, e),
                    })?;
                let contract: ModelContract =
                    serde_json::from_str(&text).map_err(|e| ModelError::ContractViolation {
                        reason: format!("contract {:?} is not valid JSON: {}", path, e),
                    })?;
                info!("Loaded model contract from {:?}", path);
                contract
            }
            _ => ModelContract::default(),
        };

        contract.validate()?;
        Ok(contract)
    }

    /// Rejects contracts that disagree with the feature registry. The legacy
    /// app silently patched missing estimator attributes at load time; here
    /// a mismatched artifact fails the load with a descriptive error instead.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.len() != FEATURE_NAMES.len() {
            return Err(ModelError::ContractViolation {
                reason: format!(
                    "expected {} features, contract declares {}",
                    FEATURE_NAMES.len(),
                    self.feature_names.len()
                ),
            });
        }

        for (i, (ours, theirs)) in FEATURE_NAMES.iter().zip(&self.feature_names).enumerate() {
            if ours != theirs {
                return Err(ModelError::ContractViolation {
                    reason: format!(
                        "feature {} mismatch: expected '{}', contract declares '{}'",
                        i, ours, theirs
                    ),
                });
            }
        }

        if self.positive_class_index > 1 {
            return Err(ModelError::ContractViolation {
                reason: format!(
                    "positive_class_index {} out of range for a binary classifier",
                    self.positive_class_index
                ),
            });
        }

        Ok(())
    }
}
