//! Composable read-model views for event-sourced systems.
//!
//! A [`View`] is the query-side counterpart of an aggregate: an initial state
//! plus a pure `evolve` function that folds events into that state. It knows
//! nothing about event stores, delivery or persistence.
//!
//! Views compose without mutation. Every combinator consumes a view and
//! returns a new one:
//! - [`View::lmap_on_e`] adapts the event type
//! - [`View::dimap_on_s`] and [`View::rmap_on_s`] adapt the state type
//! - [`View::rproduct_on_s`] runs two views over the same events in lockstep
//! - [`View::combine_views`] routes an [`Either`] of two disjoint event types
//!   to the view that owns it

mod combine;
pub mod either;
pub mod view;

pub use either::Either;
pub use view::View;
