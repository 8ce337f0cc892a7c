use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment lifecycle of an order.
///
/// Orders are created `Queued`. Downstream fulfilment moves them along
/// `Queued -> Processing -> {Completed, Error}`; the two last states are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayStatus {
    #[default]
    Queued,
    Processing,
    Error,
    Completed,
}

impl PayStatus {
    /// Stored string value of the status.
    pub fn value(self) -> &'static str {
        match self {
            PayStatus::Queued => "Queued",
            PayStatus::Processing => "Processing",
            PayStatus::Error => "Error",
            PayStatus::Completed => "Completed",
        }
    }

    /// Stored ordinal of the status, starting at 1.
    pub fn number(self) -> u8 {
        match self {
            PayStatus::Queued => 1,
            PayStatus::Processing => 2,
            PayStatus::Error => 3,
            PayStatus::Completed => 4,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PayStatus::Error | PayStatus::Completed)
    }

    pub fn can_transition_to(self, next: PayStatus) -> bool {
        matches!(
            (self, next),
            (PayStatus::Queued, PayStatus::Processing)
                | (PayStatus::Processing, PayStatus::Completed)
                | (PayStatus::Processing, PayStatus::Error)
        )
    }
}

impl fmt::Display for PayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_start_queued() {
        assert_eq!(PayStatus::default(), PayStatus::Queued);
        assert_eq!(PayStatus::Queued.number(), 1);
        assert_eq!(PayStatus::Completed.value(), "Completed");
    }

    #[test]
    fn test_transitions() {
        assert!(PayStatus::Queued.can_transition_to(PayStatus::Processing));
        assert!(PayStatus::Processing.can_transition_to(PayStatus::Completed));
        assert!(PayStatus::Processing.can_transition_to(PayStatus::Error));

        assert!(!PayStatus::Queued.can_transition_to(PayStatus::Completed));
        assert!(!PayStatus::Processing.can_transition_to(PayStatus::Queued));
        assert!(!PayStatus::Completed.can_transition_to(PayStatus::Processing));
        assert!(!PayStatus::Error.can_transition_to(PayStatus::Error));

        assert!(PayStatus::Error.is_terminal());
        assert!(!PayStatus::Processing.is_terminal());
    }
}
