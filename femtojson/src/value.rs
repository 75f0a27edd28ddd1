// SPDX-License-Identifier: Apache-2.0

/// A parsed JSON value.
///
/// Only the scalar subset is represented at this stage: the three literals
/// and numbers. Numbers carry their `f64` payload directly, so a `Value`
/// is `Copy` and never owns heap storage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// A number value (e.g., `42` or `3.14`).
    Number(f64),
}

/// The type tag of a [`Value`], without any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    True,
    False,
    Number,
}

impl Value {
    /// Get the type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::True => ValueKind::True,
            Value::False => ValueKind::False,
            Value::Number(_) => ValueKind::Number,
        }
    }

    /// Get the number payload, or `None` when this value is not a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this value is the `null` literal.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is the `true` literal.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::True)
    }

    /// Check if this value is the `false` literal.
    pub fn is_false(&self) -> bool {
        matches!(self, Value::False)
    }

    /// Check if this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::True.kind(), ValueKind::True);
        assert_eq!(Value::False.kind(), ValueKind::False);
        assert_eq!(Value::Number(1.5).kind(), ValueKind::Number);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Value::Number(3.25).as_f64(), Some(3.25));
        assert_eq!(Value::Number(-0.0).as_f64(), Some(0.0));
        assert_eq!(Value::Null.as_f64(), None);
        assert_eq!(Value::True.as_f64(), None);
        assert_eq!(Value::False.as_f64(), None);
    }

    #[test]
    fn test_predicates() {
        assert!(Value::Null.is_null());
        assert!(Value::True.is_true());
        assert!(Value::False.is_false());
        assert!(Value::Number(0.0).is_number());
        assert!(!Value::Number(0.0).is_null());
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }
}
