//! Even/odd number example domain.
//!
//! Two single-concern views, one summing even numbers and one summing odd
//! numbers, combined into a single read model over [`NumberEvent`].

pub mod api;
pub mod config;
pub mod even;
pub mod odd;

pub use api::{
    Description, EvenNumberEvent, EvenNumberState, NumberEvent, NumberValue, OddNumberEvent,
    OddNumberState,
};
pub use config::Config;
pub use even::even_number_view;
pub use odd::odd_number_view;

use view::{Either, View};

/// Combined state of the even and odd views.
pub type NumberState = (EvenNumberState, OddNumberState);

/// Builds one view over all number events.
///
/// Even events are routed to [`even_number_view`] and odd events to
/// [`odd_number_view`]; each leaves the other's state untouched.
pub fn number_view() -> View<NumberState, NumberEvent> {
    even_number_view()
        .combine_views(odd_number_view())
        .lmap_on_e(|event: &NumberEvent| match event {
            NumberEvent::Even(event) => Either::Left(event.clone()),
            NumberEvent::Odd(event) => Either::Right(event.clone()),
        })
}
