use thiserror::Error;

/// Errors raised by the planning models.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    #[error("Pop from an empty priority queue")]
    EmptyQueue,

    #[error("No transition recorded for the queued state-action pair")]
    UnknownTransition,

    #[error("Priority cannot be NaN")]
    NanPriority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_display() {
        assert_eq!(
            PlanningError::EmptyQueue.to_string(),
            "Pop from an empty priority queue"
        );
    }

    #[test]
    fn nan_priority_display() {
        assert_eq!(
            PlanningError::NanPriority.to_string(),
            "Priority cannot be NaN"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(PlanningError::EmptyQueue, PlanningError::EmptyQueue);
        assert_ne!(PlanningError::EmptyQueue, PlanningError::UnknownTransition);
    }
}
