use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Serialized classifier artifact.
    pub model_path: PathBuf,
    /// Optional tensor-layout sidecar; defaults apply when the file is absent.
    pub contract_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_path = match env::var("FRAUD_MODEL_PATH") {
            Ok(value) if value.trim().is_empty() => {
                anyhow::bail!("FRAUD_MODEL_PATH is set but empty")
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => default_model_path(),
        };

        let contract_path = match env::var("FRAUD_MODEL_CONTRACT") {
            Ok(value) if value.trim().is_empty() => {
                anyhow::bail!("FRAUD_MODEL_CONTRACT is set but empty")
            }
            Ok(value) => Some(PathBuf::from(value)),
            Err(_) => Some(default_contract_path(&model_path)),
        };

        Ok(Self {
            model_path,
            contract_path,
        })
    }
}

/// `fraud_model.onnx` next to the executable, falling back to the working
/// directory when the executable path is unavailable.
fn default_model_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("fraud_model.onnx")))
        .unwrap_or_else(|| PathBuf::from("fraud_model.onnx"))
}

/// `<model_path>.contract.json`
fn default_contract_path(model_path: &Path) -> PathBuf {
    let mut os = model_path.as_os_str().to_os_string();
    os.push(".contract.json");
    PathBuf::from(os)
}
