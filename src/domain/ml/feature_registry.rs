use crate::domain::fraud::TransactionRecord;

/// Ordered list of feature names.
/// This order MUST match exactly with the column order used when the model
/// was trained. Any change here is a breaking change for existing artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "distance_from_home",
    "distance_from_last_transaction",
    "ratio_to_median_purchase_price",
    "repeat_retailer",
    "used_chip",
    "used_pin_number",
    "online_order",
];

/// Converts a transaction record into the flat f32 row the ONNX session
/// consumes. Binary answers become 0/1 flags.
pub fn record_to_vector(record: &TransactionRecord) -> Vec<f32> {
    vec![
        record.distance_from_home as f32,
        record.distance_from_last_transaction as f32,
        record.ratio_to_median_purchase_price as f32,
        record.repeat_retailer.flag() as f32,
        record.used_chip.flag() as f32,
        record.used_pin_number.flag() as f32,
        record.online_order.flag() as f32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fraud::BinaryAnswer;

    #[test]
    fn test_feature_vector_length() {
        let record = TransactionRecord::default();
        let vec = record_to_vector(&record);
        assert_eq!(vec.len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_order() {
        let record = TransactionRecord {
            distance_from_home: 12.5,
            online_order: BinaryAnswer::Yes,
            ..Default::default()
        };

        let vec = record_to_vector(&record);
        // distance_from_home is index 0
        assert_eq!(vec[0], 12.5);
        // online_order is last index (6)
        assert_eq!(vec[6], 1.0);
        assert_eq!(vec[3], 0.0);
    }
}
