/// Three-bucket discretization of the fraud probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Fixed thresholds: p < 0.30 is Low, 0.30 <= p < 0.70 is Medium,
    /// p >= 0.70 is High. Boundaries belong to the upper tier.
    pub fn from_probability(p: f64) -> Self {
        if p < 0.30 {
            RiskTier::Low
        } else if p < 0.70 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

/// The model's hard binary classification.
///
/// Always taken from the model's own class output, never re-derived from the
/// probability, so a classifier with a non-0.5 decision threshold is
/// displayed faithfully even when verdict and tier look inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Legit,
    Fraudulent,
}

impl Verdict {
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Verdict::Fraudulent
        } else {
            Verdict::Legit
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Legit => "Legit",
            Verdict::Fraudulent => "Fraudulent",
        }
    }
}

/// Raw classifier output for one transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Positive-class probability, guaranteed in [0, 1] by the classifier.
    pub fraud_probability: f64,
    /// Hard class label: 1 = fraud, 0 = legit.
    pub class: u8,
}

/// Display-ready view of a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub fraud_probability: f64,
    pub probability_text: String,
    pub percent_text: String,
    pub risk_tier: RiskTier,
    pub verdict: Verdict,
}

impl PredictionReport {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        let p = prediction.fraud_probability;
        Self {
            fraud_probability: p,
            probability_text: format!("{:.6}", p),
            percent_text: format!("{:.2}%", p * 100.0),
            risk_tier: RiskTier::from_probability(p),
            verdict: Verdict::from_class(prediction.class),
        }
    }
}
