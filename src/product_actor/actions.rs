/// Custom actions for Product records.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Adds one to the durable buy count.
    IncrementBuyCount,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The buy count after the increment.
    BuyCount(u64),
}
