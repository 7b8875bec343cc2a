use super::contract::ModelContract;
use super::predictor::FraudClassifier;
use crate::domain::errors::ModelError;
use crate::domain::fraud::{Prediction, TransactionRecord};
use crate::domain::ml::feature_registry::record_to_vector;
use ort::session::Session;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

/// Fraud classifier backed by an exported ONNX pipeline.
///
/// The artifact is the trained sklearn scaler + logistic-regression pipeline
/// exported to ONNX: a single `[1, 7]` float input, an int64 label output
/// and a `[1, 2]` probability output (tensor form, not the zipmap variant).
pub struct OnnxFraudClassifier {
    // ort sessions take &mut self to run
    session: Mutex<Session>,
    contract: ModelContract,
}

impl OnnxFraudClassifier {
    /// Load the artifact once. Fails fast: a missing or undeserializable
    /// artifact is fatal to the caller, there is no degraded mode.
    pub fn load(model_path: PathBuf, contract: ModelContract) -> Result<Self, ModelError> {
        contract.validate()?;

        if !model_path.exists() {
            return Err(ModelError::ArtifactMissing { path: model_path });
        }

        let session = Session::builder()
            .map_err(|e| ModelError::LoadFailed {
                reason: format!("session builder: {}", e),
            })?
            .commit_from_file(&model_path)
            .map_err(|e| ModelError::LoadFailed {
                reason: format!("{:?}: {}", model_path, e),
            })?;

        let input_names: Vec<&str> = session.inputs().iter().map(|i| i.name()).collect();
        let output_names: Vec<&str> = session.outputs().iter().map(|o| o.name()).collect();
        validate_declared_io(&input_names, &output_names, &contract)?;

        info!("Loaded fraud model from {:?}", model_path);

        Ok(Self {
            session: Mutex::new(session),
            contract,
        })
    }
}

/// A probability must lie in [0, 1]; anything else (including NaN) means the
/// artifact is not the binary classifier the contract describes, and is
/// rejected rather than clamped.
fn check_probability(p: f64) -> Result<f64, ModelError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(ModelError::MalformedOutput {
            reason: format!("probability {} outside [0, 1]", p),
        })
    }
}

/// Checks the artifact's declared tensor names against the contract, so a
/// mismatched export fails at load with a usable message instead of at the
/// first prediction.
fn validate_declared_io(
    input_names: &[&str],
    output_names: &[&str],
    contract: &ModelContract,
) -> Result<(), ModelError> {
    if !input_names.contains(&contract.input_name.as_str()) {
        return Err(ModelError::ContractViolation {
            reason: format!(
                "artifact declares no input named '{}' (has: {})",
                contract.input_name,
                input_names.join(", ")
            ),
        });
    }

    for expected in [&contract.label_output, &contract.probability_output] {
        if !output_names.contains(&expected.as_str()) {
            return Err(ModelError::ContractViolation {
                reason: format!(
                    "artifact declares no output named '{}' (has: {})",
                    expected,
                    output_names.join(", ")
                ),
            });
        }
    }

    Ok(())
}

impl FraudClassifier for OnnxFraudClassifier {
    fn predict(&self, record: &TransactionRecord) -> Result<Prediction, ModelError> {
        let row = record_to_vector(record);
        let shape = vec![1, row.len()];

        let input_value = ort::value::Value::from_array((shape.as_slice(), row))
            .map_err(|e| ModelError::Inference {
                reason: format!("input tensor creation failed: {}", e),
            })?;

        let inputs = ort::inputs![self.contract.input_name.as_str() => input_value];

        let mut session = self.session.lock().map_err(|e| ModelError::Inference {
            reason: format!("session lock failed: {}", e),
        })?;

        let outputs = session.run(inputs).map_err(|e| ModelError::Inference {
            reason: e.to_string(),
        })?;

        let label_value = outputs
            .iter()
            .find(|(name, _)| *name == self.contract.label_output)
            .map(|(_, v)| v)
            .ok_or_else(|| ModelError::MalformedOutput {
                reason: format!("no output named '{}'", self.contract.label_output),
            })?;

        let label_data =
            label_value
                .try_extract_tensor::<i64>()
                .map_err(|e| ModelError::MalformedOutput {
                    reason: format!("label output: {}", e),
                })?;

        let label = *label_data
            .1
            .iter()
            .next()
            .ok_or_else(|| ModelError::MalformedOutput {
                reason: "empty label output".to_string(),
            })?;

        let proba_value = outputs
            .iter()
            .find(|(name, _)| *name == self.contract.probability_output)
            .map(|(_, v)| v)
            .ok_or_else(|| ModelError::MalformedOutput {
                reason: format!("no output named '{}'", self.contract.probability_output),
            })?;

        let proba_data =
            proba_value
                .try_extract_tensor::<f32>()
                .map_err(|e| ModelError::MalformedOutput {
                    reason: format!("probability output: {}", e),
                })?;

        let probabilities = proba_data.1;
        let fraud_probability = check_probability(*probabilities
            .get(self.contract.positive_class_index)
            .ok_or_else(|| ModelError::MalformedOutput {
                reason: format!(
                    "probability output has {} entries, positive class index is {}",
                    probabilities.len(),
                    self.contract.positive_class_index
                ),
            })? as f64)?;

        Ok(Prediction {
            fraud_probability,
            class: if label != 0 { 1 } else { 0 },
        })
    }

    fn name(&self) -> &str {
        "ONNX Fraud Pipeline"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_fails_load() {
        let result = OnnxFraudClassifier::load(
            PathBuf::from("non_existent.onnx"),
            ModelContract::default(),
        );

        match result {
            Err(ModelError::ArtifactMissing { path }) => {
                assert_eq!(path, PathBuf::from("non_existent.onnx"));
            }
            other => panic!("expected ArtifactMissing, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_out_of_range_probability_is_rejected() {
        assert!(matches!(
            check_probability(1.2),
            Err(ModelError::MalformedOutput { .. })
        ));
        assert!(matches!(
            check_probability(-0.1),
            Err(ModelError::MalformedOutput { .. })
        ));
        assert!(matches!(
            check_probability(f64::NAN),
            Err(ModelError::MalformedOutput { .. })
        ));
    }

    #[test]
    fn test_boundary_probabilities_pass() {
        assert_eq!(check_probability(0.0).unwrap(), 0.0);
        assert_eq!(check_probability(1.0).unwrap(), 1.0);
        assert_eq!(check_probability(0.85).unwrap(), 0.85);
    }

    #[test]
    fn test_artifact_io_must_match_contract() {
        let contract = ModelContract::default();

        // Standard skl2onnx export layout passes
        assert!(validate_declared_io(
            &["float_input"],
            &["output_label", "output_probability"],
            &contract
        )
        .is_ok());

        // Wrong input name fails with the declared names in the message
        let err = validate_declared_io(
            &["features"],
            &["output_label", "output_probability"],
            &contract,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no input named 'float_input'"));
        assert!(err.to_string().contains("features"));

        // Missing probability output fails
        let err =
            validate_declared_io(&["float_input"], &["output_label"], &contract).unwrap_err();
        assert!(err
            .to_string()
            .contains("no output named 'output_probability'"));
    }

    #[test]
    fn test_invalid_contract_fails_before_artifact_access() {
        let contract = ModelContract {
            feature_names: vec!["only_one".to_string()],
            ..Default::default()
        };

        let result = OnnxFraudClassifier::load(PathBuf::from("non_existent.onnx"), contract);
        assert!(matches!(result, Err(ModelError::ContractViolation { .. })));
    }
}
