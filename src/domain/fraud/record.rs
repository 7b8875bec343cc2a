/// A Yes/No answer from a binary form selector.
///
/// The model was trained on 0/1 flags, so the mapping to integers is part of
/// the feature contract: exactly the label "Yes" maps to 1, anything else
/// (including "yes" or an empty string) maps to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryAnswer {
    Yes,
    #[default]
    No,
}

impl BinaryAnswer {
    pub const LABELS: [&'static str; 2] = ["No", "Yes"];

    /// Case-sensitive exact match on "Yes"; everything else is No.
    pub fn from_label(label: &str) -> Self {
        if label == "Yes" {
            BinaryAnswer::Yes
        } else {
            BinaryAnswer::No
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BinaryAnswer::Yes => "Yes",
            BinaryAnswer::No => "No",
        }
    }

    /// 0/1 flag as the model expects it.
    pub fn flag(&self) -> u8 {
        match self {
            BinaryAnswer::Yes => 1,
            BinaryAnswer::No => 0,
        }
    }
}

/// A single transaction as the classifier sees it.
///
/// Built fresh from the form on every prediction and consumed immediately;
/// nothing is retained between interactions.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Distance from the cardholder's home, km.
    pub distance_from_home: f64,
    /// Distance from the previous transaction location, km.
    pub distance_from_last_transaction: f64,
    /// Purchase amount relative to the user's median purchase (1.0 = typical).
    pub ratio_to_median_purchase_price: f64,
    pub repeat_retailer: BinaryAnswer,
    pub used_chip: BinaryAnswer,
    pub used_pin_number: BinaryAnswer,
    pub online_order: BinaryAnswer,
}

impl Default for TransactionRecord {
    /// Form defaults: 5 km from home, 2 km from the last transaction,
    /// a typical purchase amount, all binary answers "No".
    fn default() -> Self {
        Self {
            distance_from_home: 5.0,
            distance_from_last_transaction: 2.0,
            ratio_to_median_purchase_price: 1.0,
            repeat_retailer: BinaryAnswer::No,
            used_chip: BinaryAnswer::No,
            used_pin_number: BinaryAnswer::No,
            online_order: BinaryAnswer::No,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_maps_to_one() {
        assert_eq!(BinaryAnswer::from_label("Yes").flag(), 1);
        assert_eq!(BinaryAnswer::from_label("No").flag(), 0);
    }

    #[test]
    fn test_mapping_is_case_sensitive() {
        assert_eq!(BinaryAnswer::from_label("yes").flag(), 0);
        assert_eq!(BinaryAnswer::from_label("YES").flag(), 0);
        assert_eq!(BinaryAnswer::from_label("").flag(), 0);
    }

    #[test]
    fn test_record_defaults() {
        let record = TransactionRecord::default();
        assert_eq!(record.distance_from_home, 5.0);
        assert_eq!(record.distance_from_last_transaction, 2.0);
        assert_eq!(record.ratio_to_median_purchase_price, 1.0);
        assert_eq!(record.online_order, BinaryAnswer::No);
    }
}
