use super::predictor::SharedClassifier;
use crate::domain::errors::ModelError;
use std::sync::Mutex;
use tracing::debug;

/// One-time-init holder for the loaded classifier.
///
/// The model is read from disk at most once per process; every later
/// interaction reuses the same read-only handle. A failed load is not
/// cached, so the loader runs again on the next call.
#[derive(Default)]
pub struct ModelCache {
    slot: Mutex<Option<SharedClassifier>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load<F>(&self, loader: F) -> Result<SharedClassifier, ModelError>
    where
        F: FnOnce() -> Result<SharedClassifier, ModelError>,
    {
        let mut slot = self.slot.lock().map_err(|e| ModelError::LoadFailed {
            reason: format!("model cache lock poisoned: {}", e),
        })?;

        if let Some(classifier) = slot.as_ref() {
            debug!("Model cache hit");
            return Ok(classifier.clone());
        }

        let classifier = loader()?;
        *slot = Some(classifier.clone());
        Ok(classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::FraudClassifier;
    use crate::domain::fraud::{Prediction, TransactionRecord};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubClassifier;

    impl FraudClassifier for StubClassifier {
        fn predict(&self, _record: &TransactionRecord) -> Result<Prediction, ModelError> {
            Ok(Prediction {
                fraud_probability: 0.5,
                class: 0,
            })
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn version(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_loader_runs_exactly_once() {
        let cache = ModelCache::new();
        let loads = AtomicUsize::new(0);

        for _ in 0..5 {
            let classifier = cache
                .get_or_load(|| {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(Arc::new(StubClassifier) as SharedClassifier)
                })
                .unwrap();
            assert_eq!(classifier.name(), "stub");
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let cache = ModelCache::new();
        let loads = AtomicUsize::new(0);

        let first = cache.get_or_load(|| {
            loads.fetch_add(1, Ordering::SeqCst);
            Err(ModelError::LoadFailed {
                reason: "flaky disk".to_string(),
            })
        });
        assert!(first.is_err());

        let second = cache.get_or_load(|| {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StubClassifier) as SharedClassifier)
        });
        assert!(second.is_ok());
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }
}
