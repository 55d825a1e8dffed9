//! Value comparison rules used by conditions, joins and ordering.
//!
//! Plain `Value` equality never coerces. Queries do, the way the CRM query
//! processor does:
//! - `Reference` and `Guid` compare by id
//! - `OptionSet`, `Int`, `Float` and `Money` compare numerically
//! - strings compare case-insensitively
//! - aliased values are unwrapped first

use std::cmp::Ordering;

use crmsim_core::Value;

use crate::expression::{ConditionExpression, ConditionOperator, JoinKeyMatch};

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::OptionSet(o) => Some(i64::from(o.value)),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::Money(m) => Some(m.0),
        Value::OptionSet(o) => Some(o.value as f64),
        _ => None,
    }
}

/// Order two values under query rules. `None` when they are not comparable.
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    let (left, right) = (left.unaliased(), right.unaliased());

    if let (Some(a), Some(b)) = (left.referenced_id(), right.referenced_id()) {
        return Some(a.cmp(&b));
    }
    // Widen to f64 only when one side is fractional.
    if let (Some(a), Some(b)) = (as_integer(left), as_integer(right)) {
        return Some(a.cmp(&b));
    }
    if let (Some(a), Some(b)) = (as_number(left), as_number(right)) {
        return a.partial_cmp(&b);
    }
    match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.to_lowercase().cmp(&b.to_lowercase())),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn equals(left: &Value, right: &Value) -> bool {
    compare(left, right) == Some(Ordering::Equal)
}

/// Whether two join keys match under `mode`.
pub fn keys_match(mode: JoinKeyMatch, from: &Value, to: &Value) -> bool {
    match mode {
        JoinKeyMatch::ReferenceId => equals(from, to),
        JoinKeyMatch::Exact => from.unaliased() == to.unaliased(),
    }
}

/// SQL `LIKE` with `%` (any run) and `_` (one character), case-insensitive.
pub fn like(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();

    // matched[j]: pattern[..j] matches text[..i] for the current i
    let mut matched = vec![false; pattern.len() + 1];
    matched[0] = true;
    for j in 1..=pattern.len() {
        matched[j] = matched[j - 1] && pattern[j - 1] == '%';
    }

    for &c in &text {
        let mut next = vec![false; pattern.len() + 1];
        for j in 1..=pattern.len() {
            next[j] = match pattern[j - 1] {
                '%' => next[j - 1] || matched[j],
                '_' => matched[j - 1],
                p => matched[j - 1] && p == c,
            };
        }
        matched = next;
    }
    matched[pattern.len()]
}

fn string_test(value: &Value, operand: &Value, test: impl Fn(&str, &str) -> bool) -> bool {
    match (value.unaliased(), operand.unaliased()) {
        (Value::String(v), Value::String(p)) => test(v, p),
        _ => false,
    }
}

/// Evaluate a condition against an attribute value (`None` = not set).
///
/// Operand counts are validated before evaluation; see
/// [`crate::engine::validate`].
pub fn evaluate(value: Option<&Value>, condition: &ConditionExpression) -> bool {
    use ConditionOperator::*;

    let operand = condition.values.first();
    match (condition.operator, value) {
        (Null, v) => v.is_none(),
        (NotNull, v) => v.is_some(),
        // Unset attributes fail every other operator, including `ne`.
        (_, None) => false,
        (In, Some(v)) => condition.values.iter().any(|o| equals(v, o)),
        (NotIn, Some(v)) => !condition.values.iter().any(|o| equals(v, o)),
        (op, Some(v)) => {
            let Some(operand) = operand else {
                return false;
            };
            match op {
                Equal => equals(v, operand),
                NotEqual => compare(v, operand).is_some_and(|o| o != Ordering::Equal),
                GreaterThan => compare(v, operand) == Some(Ordering::Greater),
                GreaterEqual => matches!(compare(v, operand), Some(Ordering::Greater | Ordering::Equal)),
                LessThan => compare(v, operand) == Some(Ordering::Less),
                LessEqual => matches!(compare(v, operand), Some(Ordering::Less | Ordering::Equal)),
                Like => string_test(v, operand, like),
                NotLike => string_test(v, operand, |t, p| !like(t, p)),
                BeginsWith => string_test(v, operand, |t, p| t.to_lowercase().starts_with(&p.to_lowercase())),
                EndsWith => string_test(v, operand, |t, p| t.to_lowercase().ends_with(&p.to_lowercase())),
                Null | NotNull | In | NotIn => unreachable!("handled above"),
            }
        }
    }
}
