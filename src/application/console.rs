use crate::application::ml::SharedClassifier;
use crate::domain::fraud::{BinaryAnswer, PredictionReport, TransactionRecord};
use crossbeam_channel::Receiver;
use tracing::{error, info};

/// UI state for the fraud console.
///
/// Form fields are plain members the render loop binds widgets to; the
/// classifier handle is read-only and shared with the startup path.
pub struct FraudConsole {
    pub classifier: SharedClassifier,
    pub log_rx: Receiver<String>,

    // Form state
    pub distance_from_home: f64,
    pub distance_from_last_transaction: f64,
    pub ratio_to_median_purchase_price: f64,
    pub repeat_retailer: BinaryAnswer,
    pub used_chip: BinaryAnswer,
    pub used_pin_number: BinaryAnswer,
    pub online_order: BinaryAnswer,

    // Result state
    pub last_report: Option<PredictionReport>,
    pub last_error: Option<String>,

    // Activity log
    pub log_lines: Vec<String>,
}

impl FraudConsole {
    pub fn new(classifier: SharedClassifier, log_rx: Receiver<String>) -> Self {
        let defaults = TransactionRecord::default();
        Self {
            classifier,
            log_rx,
            distance_from_home: defaults.distance_from_home,
            distance_from_last_transaction: defaults.distance_from_last_transaction,
            ratio_to_median_purchase_price: defaults.ratio_to_median_purchase_price,
            repeat_retailer: defaults.repeat_retailer,
            used_chip: defaults.used_chip,
            used_pin_number: defaults.used_pin_number,
            online_order: defaults.online_order,
            last_report: None,
            last_error: None,
            log_lines: Vec::new(),
        }
    }

    /// Snapshot of the form at the moment Predict is pressed. The record is
    /// built fresh per prediction and not retained.
    pub fn current_record(&self) -> TransactionRecord {
        TransactionRecord {
            // DragValue already clamps to >= 0, the max here guards state
            // set programmatically
            distance_from_home: self.distance_from_home.max(0.0),
            distance_from_last_transaction: self.distance_from_last_transaction.max(0.0),
            ratio_to_median_purchase_price: self.ratio_to_median_purchase_price.max(0.0),
            repeat_retailer: self.repeat_retailer,
            used_chip: self.used_chip,
            used_pin_number: self.used_pin_number,
            online_order: self.online_order,
        }
    }

    /// Run one prediction against the loaded model and store the report.
    /// An inference failure clears the previous report so a stale result is
    /// never shown next to a fresh error.
    pub fn on_predict(&mut self) {
        let record = self.current_record();

        match self.classifier.predict(&record) {
            Ok(prediction) => {
                info!(
                    probability = prediction.fraud_probability,
                    class = prediction.class,
                    "Prediction complete"
                );
                self.last_report = Some(PredictionReport::from_prediction(&prediction));
                self.last_error = None;
            }
            Err(e) => {
                error!("Prediction failed: {}", e);
                self.last_report = None;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Drain pending log lines into the activity panel.
    pub fn drain_logs(&mut self) {
        while let Ok(msg) = self.log_rx.try_recv() {
            let trimmed = msg.trim_end();
            if !trimmed.is_empty() {
                self.log_lines.push(trimmed.to_string());
            }
        }

        // Keep history manageable
        if self.log_lines.len() > 1000 {
            self.log_lines.drain(0..100);
        }
    }
}
