//! Materialized read models driven by composable views.
//!
//! This crate is the consumption side of [`view::View`]:
//! - [`Projection`] trait for anything that applies events to a read model
//! - [`MaterializedView`] keeps the current state of one view
//! - [`ProjectionProcessor`] feeds an event stream to registered projections

pub mod error;
pub mod materialized;
pub mod processor;
pub mod projection;

pub use error::{ProjectionError, Result};
pub use materialized::MaterializedView;
pub use processor::ProjectionProcessor;
pub use projection::{Projection, ProjectionPosition};
