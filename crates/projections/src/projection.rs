//! Core projection trait and position tracking.

use async_trait::async_trait;

use crate::Result;

/// Tracks how many events a projection has applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProjectionPosition {
    /// Number of events applied by this projection.
    pub events_processed: u64,
}

impl ProjectionPosition {
    /// Creates a new position at zero.
    pub fn zero() -> Self {
        Self {
            events_processed: 0,
        }
    }

    /// Creates a position after `events_processed` events.
    pub fn at(events_processed: u64) -> Self {
        Self { events_processed }
    }

    /// Advances the position by one event.
    pub fn advance(&self) -> Self {
        Self {
            events_processed: self.events_processed + 1,
        }
    }
}

impl std::fmt::Display for ProjectionPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position({})", self.events_processed)
    }
}

/// Anything that applies events of type `E` to a read model.
///
/// Implementations must be safe to share between tasks; the processor holds
/// them behind trait objects and drives them from async code.
#[async_trait]
pub trait Projection<E>: Send + Sync {
    /// Returns the name of this projection.
    fn name(&self) -> &'static str;

    /// Applies a single event to the read model.
    async fn handle(&self, event: &E) -> Result<()>;

    /// Returns the current position of this projection.
    async fn position(&self) -> ProjectionPosition;

    /// Resets the projection to its initial state.
    async fn reset(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_starts_at_zero() {
        assert_eq!(ProjectionPosition::zero().events_processed, 0);
        assert_eq!(ProjectionPosition::zero(), ProjectionPosition::default());
    }

    #[test]
    fn position_advances() {
        let pos = ProjectionPosition::zero().advance().advance();
        assert_eq!(pos, ProjectionPosition::at(2));
        assert!(pos > ProjectionPosition::at(1));
    }

    #[test]
    fn position_display() {
        assert_eq!(ProjectionPosition::at(42).to_string(), "position(42)");
    }
}
