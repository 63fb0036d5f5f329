//! Projection processor for feeding events to projections.

use futures_core::Stream;
use futures_util::StreamExt;

use crate::Result;
use crate::error::{BoxError, ProjectionError};
use crate::projection::Projection;

/// Delivers events from an external source to registered projections.
///
/// The processor supports:
/// - Catch-up: replays a stream of events, skipping what each projection has
///   already applied
/// - Single event delivery: hands one new event to every projection
/// - Rebuild: resets all projections and replays from scratch
pub struct ProjectionProcessor<E> {
    projections: Vec<Box<dyn Projection<E>>>,
}

impl<E> ProjectionProcessor<E>
where
    E: Send + Sync,
{
    /// Creates a processor with no projections.
    pub fn new() -> Self {
        Self {
            projections: Vec::new(),
        }
    }

    /// Registers a projection with this processor.
    pub fn register(&mut self, projection: Box<dyn Projection<E>>) {
        self.projections.push(projection);
    }

    /// Returns the number of registered projections.
    pub fn projection_count(&self) -> usize {
        self.projections.len()
    }

    /// Replays `events` from the start of the sequence.
    ///
    /// The n-th event is only delivered to projections whose position is
    /// below n, so running catch-up twice over the same sequence applies
    /// every event once. Returns the number of events read from the source.
    #[tracing::instrument(skip(self, events))]
    pub async fn run_catch_up<St, Err>(&self, events: St) -> Result<u64>
    where
        St: Stream<Item = std::result::Result<E, Err>>,
        Err: Into<BoxError>,
    {
        let mut events = std::pin::pin!(events);
        let mut event_index: u64 = 0;

        while let Some(result) = events.next().await {
            let event = result.map_err(ProjectionError::from_source)?;
            event_index += 1;

            for projection in &self.projections {
                let pos = projection.position().await;
                if pos.events_processed < event_index {
                    projection.handle(&event).await?;
                    metrics::counter!("projections_events_processed").increment(1);
                }
            }
        }

        tracing::info!(events_processed = event_index, "catch-up complete");

        Ok(event_index)
    }

    /// Delivers a single event to all registered projections.
    #[tracing::instrument(skip(self, event))]
    pub async fn process_event(&self, event: &E) -> Result<()> {
        for projection in &self.projections {
            projection.handle(event).await?;
            tracing::trace!(projection = projection.name(), "event delivered");
        }
        Ok(())
    }

    /// Resets all projections and replays `events` into them.
    #[tracing::instrument(skip(self, events))]
    pub async fn rebuild_all<St, Err>(&self, events: St) -> Result<u64>
    where
        St: Stream<Item = std::result::Result<E, Err>>,
        Err: Into<BoxError>,
    {
        for projection in &self.projections {
            projection.reset().await?;
        }
        self.run_catch_up(events).await
    }
}

impl<E> Default for ProjectionProcessor<E>
where
    E: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
