//! The stock customer-support intents.

use crate::corpus::intent::IntentRecord;

/// `(intent, example query, response)` for every built-in intent, in
/// corpus order.
const BUILTIN_INTENTS: &[(&str, &str, &str)] = &[
    (
        "Order Status",
        "Where is my order #12345?",
        "Your order {order_no} is out for delivery.",
    ),
    (
        "Return Policy",
        "How can I return a product?",
        "You can return products within 15 days via our online portal.",
    ),
    (
        "Product Info",
        "Does this phone support fast charging?",
        "Yes, this phone supports fast charging.",
    ),
    (
        "Delivery Time",
        "When will my package arrive?",
        "Most orders are delivered within 3-5 business days.",
    ),
    (
        "Cancel Order",
        "Can I cancel my order?",
        "You can cancel your order within 24 hours from the order page.",
    ),
    (
        "Payment Issue",
        "My payment failed but money was deducted.",
        "If payment failed but money was deducted, it will be refunded in 3-5 days.",
    ),
    (
        "Exchange Policy",
        "Can I exchange this item?",
        "You can exchange products within 7 days if they are unused and in original packaging.",
    ),
    (
        "Warranty Info",
        "What is the warranty period for this laptop?",
        "This laptop comes with a 1-year manufacturer warranty.",
    ),
    (
        "Shipping Charges",
        "How much are the shipping charges?",
        "Shipping charges are ₹50 for orders below ₹500. Orders above ₹500 are free.",
    ),
    (
        "Contact Support",
        "How do I contact customer support?",
        "You can reach customer support at support@shoponline.com or call 1800-555-123.",
    ),
];

/// Build the built-in intent records.
pub fn builtin_records() -> Vec<IntentRecord> {
    BUILTIN_INTENTS
        .iter()
        .map(|&(label, query, response)| IntentRecord::new(label, query, response))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_records() {
        let records = builtin_records();

        assert_eq!(records.len(), 10);
        assert_eq!(records[0].label, "Order Status");
        assert_eq!(records[9].label, "Contact Support");
        assert!(records.iter().all(|r| r.validate().is_ok()));
    }

    #[test]
    fn test_only_order_status_has_placeholder() {
        let with_placeholder: Vec<String> = builtin_records()
            .into_iter()
            .filter(|r| r.validate().unwrap().has_placeholders())
            .map(|r| r.label)
            .collect();

        assert_eq!(with_placeholder, vec!["Order Status"]);
    }
}
