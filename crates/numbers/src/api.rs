//! Value objects, states and events of the number domain.

use serde::{Deserialize, Serialize};

/// Human-readable trail of how a number was reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Creates a description from a string.
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A number carried by events and states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberValue(i64);

impl NumberValue {
    /// Wraps a number.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying number.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of the even number view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvenNumberState {
    pub description: Description,
    pub value: NumberValue,
}

impl EvenNumberState {
    pub fn new(description: impl Into<String>, value: i64) -> Self {
        Self {
            description: Description::new(description),
            value: NumberValue::new(value),
        }
    }
}

/// Rebuilds a state from a bare number, described by the number itself.
impl From<NumberValue> for EvenNumberState {
    fn from(value: NumberValue) -> Self {
        Self {
            description: Description::new(value.to_string()),
            value,
        }
    }
}

/// State of the odd number view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddNumberState {
    pub description: Description,
    pub value: NumberValue,
}

impl OddNumberState {
    pub fn new(description: impl Into<String>, value: i64) -> Self {
        Self {
            description: Description::new(description),
            value: NumberValue::new(value),
        }
    }
}

/// Events on even numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EvenNumberEvent {
    /// An even number was added.
    EvenNumberAdded {
        description: Description,
        value: NumberValue,
    },

    /// An even number was subtracted.
    EvenNumberSubtracted {
        description: Description,
        value: NumberValue,
    },
}

impl EvenNumberEvent {
    /// Creates an `EvenNumberAdded` event.
    pub fn added(description: impl Into<String>, value: i64) -> Self {
        Self::EvenNumberAdded {
            description: Description::new(description),
            value: NumberValue::new(value),
        }
    }

    /// Creates an `EvenNumberSubtracted` event.
    pub fn subtracted(description: impl Into<String>, value: i64) -> Self {
        Self::EvenNumberSubtracted {
            description: Description::new(description),
            value: NumberValue::new(value),
        }
    }
}

/// Events on odd numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OddNumberEvent {
    /// An odd number was added.
    OddNumberAdded {
        description: Description,
        value: NumberValue,
    },

    /// An odd number was subtracted.
    OddNumberSubtracted {
        description: Description,
        value: NumberValue,
    },
}

impl OddNumberEvent {
    /// Creates an `OddNumberAdded` event.
    pub fn added(description: impl Into<String>, value: i64) -> Self {
        Self::OddNumberAdded {
            description: Description::new(description),
            value: NumberValue::new(value),
        }
    }

    /// Creates an `OddNumberSubtracted` event.
    pub fn subtracted(description: impl Into<String>, value: i64) -> Self {
        Self::OddNumberSubtracted {
            description: Description::new(description),
            value: NumberValue::new(value),
        }
    }
}

/// Any number event, as it would arrive on a shared stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "parity", content = "event")]
pub enum NumberEvent {
    Even(EvenNumberEvent),
    Odd(OddNumberEvent),
}

impl NumberEvent {
    /// An even number added, described by its own value.
    pub fn even_added(value: i64) -> Self {
        Self::Even(EvenNumberEvent::added(value.to_string(), value))
    }

    /// An odd number added, described by its own value.
    pub fn odd_added(value: i64) -> Self {
        Self::Odd(OddNumberEvent::added(value.to_string(), value))
    }

    /// Routes `value` to the even or odd side by its parity.
    pub fn added(value: i64) -> Self {
        if value % 2 == 0 {
            Self::even_added(value)
        } else {
            Self::odd_added(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_routes_by_parity() {
        assert!(matches!(NumberEvent::added(4), NumberEvent::Even(_)));
        assert!(matches!(NumberEvent::added(-3), NumberEvent::Odd(_)));
        assert!(matches!(NumberEvent::added(0), NumberEvent::Even(_)));
    }

    #[test]
    fn test_state_from_number_value() {
        let state = EvenNumberState::from(NumberValue::new(8));
        assert_eq!(state, EvenNumberState::new("8", 8));
    }

    #[test]
    fn test_event_serialization_shape() {
        let event = NumberEvent::odd_added(5);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "parity": "Odd",
                "event": {"type": "OddNumberAdded", "description": "5", "value": 5}
            })
        );
    }
}
