// Model loading and inference
pub mod ml;

// UI state and prediction flow
pub mod console;
