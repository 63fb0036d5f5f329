//! Read model of the even numbers seen so far.

use view::View;

use crate::api::{Description, EvenNumberEvent, EvenNumberState, NumberValue};

/// Sums even numbers, keeping a description of every step.
///
/// Arithmetic wraps on overflow.
pub fn even_number_view() -> View<EvenNumberState, EvenNumberEvent> {
    View::new(
        EvenNumberState::new("Initial state", 0),
        |state: EvenNumberState, event: &EvenNumberEvent| match event {
            EvenNumberEvent::EvenNumberAdded { description, value } => EvenNumberState {
                description: Description::new(format!("{}, {}", state.description, description)),
                value: NumberValue::new(state.value.get().wrapping_add(value.get())),
            },
            EvenNumberEvent::EvenNumberSubtracted { description, value } => EvenNumberState {
                description: Description::new(format!("{} - {}", state.description, description)),
                value: NumberValue::new(state.value.get().wrapping_sub(value.get())),
            },
        },
    )
}
