use crate::domain::errors::ModelError;
use crate::domain::fraud::{Prediction, TransactionRecord};
use std::sync::Arc;

/// Interface for the fraud classifier backing the console.
pub trait FraudClassifier: Send + Sync {
    /// Run one transaction through the model. The returned probability is
    /// the positive-class ("fraud") probability and lies in [0, 1]; the
    /// class label is the model's own hard decision.
    fn predict(&self, record: &TransactionRecord) -> Result<Prediction, ModelError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// Read-only handle shared between the startup path and the UI.
pub type SharedClassifier = Arc<dyn FraudClassifier>;
