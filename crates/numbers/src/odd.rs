//! Read model of the odd numbers seen so far.

use view::View;

use crate::api::{Description, NumberValue, OddNumberEvent, OddNumberState};

/// Sums odd numbers, keeping a description of every step.
///
/// Arithmetic wraps on overflow.
pub fn odd_number_view() -> View<OddNumberState, OddNumberEvent> {
    View::new(
        OddNumberState::new("Initial state", 0),
        |state: OddNumberState, event: &OddNumberEvent| match event {
            OddNumberEvent::OddNumberAdded { description, value } => OddNumberState {
                description: Description::new(format!("{}, {}", state.description, description)),
                value: NumberValue::new(state.value.get().wrapping_add(value.get())),
            },
            OddNumberEvent::OddNumberSubtracted { description, value } => OddNumberState {
                description: Description::new(format!("{} - {}", state.description, description)),
                value: NumberValue::new(state.value.get().wrapping_sub(value.get())),
            },
        },
    )
}
