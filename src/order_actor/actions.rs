use crate::domain::PayStatus;

/// Custom actions for Order records.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Moves the order to the given payment status, if the transition is allowed.
    TransitionPayStatus(PayStatus),
}
