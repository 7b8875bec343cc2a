use frauddesk::application::console::FraudConsole;
use frauddesk::application::ml::{FraudClassifier, ModelCache, SharedClassifier};
use frauddesk::domain::errors::ModelError;
use frauddesk::domain::fraud::{
    BinaryAnswer, Prediction, RiskTier, TransactionRecord, Verdict,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct MockClassifier {
    probability: f64,
    class: u8,
    calls: AtomicUsize,
}

impl MockClassifier {
    fn new(probability: f64, class: u8) -> Self {
        Self {
            probability,
            class,
            calls: AtomicUsize::new(0),
        }
    }
}

impl FraudClassifier for MockClassifier {
    fn predict(&self, _record: &TransactionRecord) -> Result<Prediction, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Prediction {
            fraud_probability: self.probability,
            class: self.class,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn version(&self) -> &str {
        "test"
    }
}

fn console_with(classifier: Arc<MockClassifier>) -> FraudConsole {
    let (_tx, rx) = crossbeam_channel::unbounded();
    FraudConsole::new(classifier, rx)
}

#[test]
fn high_risk_fraudulent_rendering() {
    let mut console = console_with(Arc::new(MockClassifier::new(0.85, 1)));

    console.on_predict();

    let report = console.last_report.as_ref().expect("report expected");
    assert_eq!(report.probability_text, "0.850000");
    assert_eq!(report.percent_text, "85.00%");
    assert_eq!(report.risk_tier, RiskTier::High);
    assert_eq!(report.verdict, Verdict::Fraudulent);
}

#[test]
fn low_risk_legit_rendering() {
    let mut console = console_with(Arc::new(MockClassifier::new(0.10, 0)));

    console.on_predict();

    let report = console.last_report.as_ref().expect("report expected");
    assert_eq!(report.risk_tier, RiskTier::Low);
    assert_eq!(report.verdict, Verdict::Legit);
}

#[test]
fn verdict_follows_model_class_not_tier() {
    // A classifier may answer class 1 at p=0.4; the console must display the
    // model's label even though the tier alone would suggest otherwise.
    let mut console = console_with(Arc::new(MockClassifier::new(0.4, 1)));

    console.on_predict();

    let report = console.last_report.as_ref().expect("report expected");
    assert_eq!(report.risk_tier, RiskTier::Medium);
    assert_eq!(report.verdict, Verdict::Fraudulent);
}

#[test]
fn form_selectors_map_through_to_the_record() {
    let classifier = Arc::new(MockClassifier::new(0.5, 0));
    let mut console = console_with(classifier);

    console.used_chip = BinaryAnswer::from_label("Yes");
    console.online_order = BinaryAnswer::from_label("yes"); // not an exact match

    let record = console.current_record();
    assert_eq!(record.used_chip.flag(), 1);
    assert_eq!(record.online_order.flag(), 0);
}

#[test]
fn repeated_interactions_load_the_model_once() {
    let cache = ModelCache::new();
    let loads = AtomicUsize::new(0);

    // Simulate a user re-triggering predictions; each interaction resolves
    // the classifier through the cache, the loader must run only once.
    let mut last_report = None;
    for _ in 0..10 {
        let classifier = cache
            .get_or_load(|| {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(MockClassifier::new(0.22, 0)) as SharedClassifier)
            })
            .unwrap();

        let (_tx, rx) = crossbeam_channel::unbounded();
        let mut console = FraudConsole::new(classifier, rx);
        console.on_predict();
        last_report = console.last_report.clone();
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(last_report.unwrap().risk_tier, RiskTier::Low);
}

#[test]
fn probability_stays_in_unit_interval_for_a_sweep_of_inputs() {
    let classifier = Arc::new(MockClassifier::new(0.37, 0));
    let mut console = console_with(classifier.clone());

    for distance in [0.0, 0.5, 10.0, 5000.0] {
        for answer in [BinaryAnswer::No, BinaryAnswer::Yes] {
            console.distance_from_home = distance;
            console.repeat_retailer = answer;
            console.on_predict();

            let report = console.last_report.as_ref().expect("report expected");
            assert!((0.0..=1.0).contains(&report.fraud_probability));
        }
    }

    assert_eq!(classifier.calls.load(Ordering::SeqCst), 8);
}
