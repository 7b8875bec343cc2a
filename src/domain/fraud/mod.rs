pub mod record;
pub mod risk;

pub use record::{BinaryAnswer, TransactionRecord};
pub use risk::{Prediction, PredictionReport, RiskTier, Verdict};
