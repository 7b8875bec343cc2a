pub mod cache;
pub mod contract;
pub mod onnx_classifier;
pub mod predictor;

pub use cache::ModelCache;
pub use contract::ModelContract;
pub use onnx_classifier::OnnxFraudClassifier;
pub use predictor::{FraudClassifier, SharedClassifier};
