//! A view whose state is kept in memory as events arrive.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use view::View;

use crate::Result;
use crate::projection::{Projection, ProjectionPosition};

/// Internal state for a materialized view.
struct MaterializedState<S> {
    /// `None` until the first event, or after a reset.
    state: Option<S>,
    position: ProjectionPosition,
}

/// Materializes a [`View`] by folding each handled event into shared state.
///
/// The view itself stays pure; this type owns the only mutable piece, the
/// current state, behind a `RwLock`. Clones share the same state.
pub struct MaterializedView<S, E> {
    name: &'static str,
    view: Arc<View<S, E>>,
    state: Arc<RwLock<MaterializedState<S>>>,
}

impl<S, E> MaterializedView<S, E>
where
    S: Clone + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Creates a materialized view with no state yet.
    pub fn new(name: &'static str, view: View<S, E>) -> Self {
        Self {
            name,
            view: Arc::new(view),
            state: Arc::new(RwLock::new(MaterializedState {
                state: None,
                position: ProjectionPosition::zero(),
            })),
        }
    }

    /// Returns the current state, or the view's initial state if no event
    /// has been applied.
    pub async fn state(&self) -> S {
        match &self.state.read().await.state {
            Some(state) => state.clone(),
            None => self.view.initial_state().clone(),
        }
    }

    /// Seeds the view with a state the caller persisted elsewhere.
    ///
    /// Subsequent catch-ups skip the first `position` events.
    pub async fn restore(&self, state: S, position: ProjectionPosition) {
        let mut guard = self.state.write().await;
        guard.state = Some(state);
        guard.position = position;
        tracing::debug!(view = self.name, %position, "state restored");
    }
}

impl<S, E> Clone for MaterializedView<S, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            view: Arc::clone(&self.view),
            state: Arc::clone(&self.state),
        }
    }
}

#[async_trait]
impl<S, E> Projection<E> for MaterializedView<S, E>
where
    S: Clone + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        self.name
    }

    async fn handle(&self, event: &E) -> Result<()> {
        let mut guard = self.state.write().await;

        // The stored state is replaced only after evolve returns.
        let current = match &guard.state {
            Some(state) => state.clone(),
            None => self.view.initial_state().clone(),
        };
        let next = self.view.evolve(current, event);
        guard.state = Some(next);
        guard.position = guard.position.advance();

        metrics::counter!("view_events_applied", "view" => self.name).increment(1);
        tracing::trace!(view = self.name, position = %guard.position, "event applied");

        Ok(())
    }

    async fn position(&self) -> ProjectionPosition {
        self.state.read().await.position
    }

    async fn reset(&self) -> Result<()> {
        let mut guard = self.state.write().await;
        guard.state = None;
        guard.position = ProjectionPosition::zero();
        tracing::debug!(view = self.name, "view reset");
        Ok(())
    }
}
