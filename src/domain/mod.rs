// Transaction records, risk tiers, verdicts
pub mod fraud;

// Feature layout shared with the model artifact
pub mod ml;

// Domain-specific error types
pub mod errors;
