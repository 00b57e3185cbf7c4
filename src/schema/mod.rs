//! Declarative field-rule sets interpreted by one generic validation engine.
//!
//! Each resource declares a [`Schema`] of per-field rules (presence, type,
//! string length, numeric range, enum membership, array elements, nested
//! object shape). Validation runs on the write path only and collects every
//! violation instead of stopping at the first, so a client can correct a
//! payload in one pass.

use serde::Serialize;
use serde_json::Value;

/// One field-level rule violation, with a dotted/indexed path into the
/// payload (e.g. `objectives.2.description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Type/constraint rule for a single field.
#[derive(Debug, Clone)]
pub enum FieldRule {
    Text { max_len: Option<usize> },
    Integer { min: Option<i64>, max: Option<i64> },
    Boolean,
    OneOf { allowed: &'static [&'static str] },
    Array { element: Option<Box<FieldRule>> },
    Object { fields: Vec<Field> },
}

impl FieldRule {
    pub fn text() -> Self {
        FieldRule::Text { max_len: None }
    }

    pub fn text_max(max_len: usize) -> Self {
        FieldRule::Text { max_len: Some(max_len) }
    }

    pub fn integer_min(min: i64) -> Self {
        FieldRule::Integer { min: Some(min), max: None }
    }

    pub fn integer_range(min: i64, max: i64) -> Self {
        FieldRule::Integer { min: Some(min), max: Some(max) }
    }

    pub fn one_of(allowed: &'static [&'static str]) -> Self {
        FieldRule::OneOf { allowed }
    }

    pub fn array() -> Self {
        FieldRule::Array { element: None }
    }

    pub fn array_of(element: FieldRule) -> Self {
        FieldRule::Array { element: Some(Box::new(element)) }
    }

    pub fn object(fields: Vec<Field>) -> Self {
        FieldRule::Object { fields }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub required: bool,
    pub rule: FieldRule,
}

impl Field {
    pub fn required(name: &'static str, rule: FieldRule) -> Self {
        Self { name, required: true, rule }
    }

    pub fn optional(name: &'static str, rule: FieldRule) -> Self {
        Self { name, required: false, rule }
    }
}

/// Per-resource rule set. Unknown fields in the payload are ignored; the
/// store accepts them as-is.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn validate(&self, payload: &Value) -> Result<(), Vec<Violation>> {
        let Some(obj) = payload.as_object() else {
            return Err(vec![Violation::new("body", "payload must be a JSON object")]);
        };

        let mut violations = Vec::new();
        for field in &self.fields {
            match obj.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        violations.push(Violation::new(
                            field.name,
                            format!("{} is required", field.name),
                        ));
                    }
                }
                Some(value) => check_rule(&field.rule, value, field.name, &mut violations),
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn check_rule(rule: &FieldRule, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match rule {
        FieldRule::Text { max_len } => match value.as_str() {
            None => out.push(Violation::new(path, format!("{path} must be a string"))),
            Some(s) => {
                if let Some(max) = max_len {
                    if s.chars().count() > *max {
                        out.push(Violation::new(
                            path,
                            format!("{path} cannot exceed {max} characters"),
                        ));
                    }
                }
            }
        },
        FieldRule::Integer { min, max } => match value.as_i64() {
            None => out.push(Violation::new(path, format!("{path} must be an integer"))),
            Some(n) => {
                if let Some(min) = min {
                    if n < *min {
                        out.push(Violation::new(path, format!("{path} must be at least {min}")));
                    }
                }
                if let Some(max) = max {
                    if n > *max {
                        out.push(Violation::new(path, format!("{path} cannot exceed {max}")));
                    }
                }
            }
        },
        FieldRule::Boolean => {
            if !value.is_boolean() {
                out.push(Violation::new(path, format!("{path} must be a boolean")));
            }
        }
        FieldRule::OneOf { allowed } => match value.as_str() {
            Some(s) if allowed.contains(&s) => {}
            _ => out.push(Violation::new(
                path,
                format!("{path} must be one of: {}", allowed.join(", ")),
            )),
        },
        FieldRule::Array { element } => match value.as_array() {
            None => out.push(Violation::new(path, format!("{path} must be an array"))),
            Some(items) => {
                if let Some(element) = element {
                    for (index, item) in items.iter().enumerate() {
                        check_rule(element, item, &format!("{path}.{index}"), out);
                    }
                }
            }
        },
        FieldRule::Object { fields } => match value.as_object() {
            None => out.push(Violation::new(path, format!("{path} must be an object"))),
            Some(obj) => {
                for field in fields {
                    let nested = format!("{path}.{}", field.name);
                    match obj.get(field.name) {
                        None | Some(Value::Null) => {
                            if field.required {
                                out.push(Violation::new(
                                    nested.clone(),
                                    format!("{nested} is required"),
                                ));
                            }
                        }
                        Some(value) => check_rule(&field.rule, value, &nested, out),
                    }
                }
            }
        },
    }
}
