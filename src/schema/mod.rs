//! Declarative shapes and the structural validator.
//!
//! Each entity's canonical shape is a table of [`Field`] rules (see
//! [`catalog`]). The walker in this module checks a raw
//! [`serde_json::Value`] against a table, accumulating every divergence
//! with its dotted field path. Fields the tables do not mention are
//! ignored, so server-side additions never break decoding.

use serde_json::Value;

use crate::error::DecodeError;
use crate::registry::Entity;

pub(crate) mod catalog;

/// JSON type a field is declared to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    String,
    /// A non-negative integer.
    UInt,
    /// A signed integer.
    Int,
    /// Any JSON number.
    Float,
    /// A JSON boolean.
    Bool,
    /// An array of strings.
    StringArray,
    /// A string restricted to a closed set of values.
    Literal(&'static [&'static str]),
    /// A nested entity, validated against its own shape.
    Entity(Entity),
    /// An array of nested entities.
    EntityArray(Entity),
    /// An offset-based page of nested entities.
    Page(Entity),
    /// A cursor-based page of nested entities.
    CursorPage(Entity),
}

impl FieldKind {
    /// Name of the expected JSON type, for error reporting.
    fn expected(&self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Literal(_) => "string",
            FieldKind::UInt => "unsigned integer",
            FieldKind::Int => "integer",
            FieldKind::Float => "number",
            FieldKind::Bool => "boolean",
            FieldKind::StringArray | FieldKind::EntityArray(_) => "array",
            FieldKind::Entity(_) | FieldKind::Page(_) | FieldKind::CursorPage(_) => "object",
        }
    }
}

/// One field rule inside an entity shape.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Wire name of the field.
    pub name: &'static str,
    /// Declared type.
    pub kind: FieldKind,
    /// Whether the field must be present.
    pub required: bool,
    /// Whether a present field may be null.
    pub nullable: bool,
}

impl Field {
    /// Required, non-null field.
    pub(crate) const fn req(name: &'static str, kind: FieldKind) -> Self {
        Field {
            name,
            kind,
            required: true,
            nullable: false,
        }
    }

    /// Required field whose value may be null (boundary URLs and the like).
    pub(crate) const fn req_null(name: &'static str, kind: FieldKind) -> Self {
        Field {
            name,
            kind,
            required: true,
            nullable: true,
        }
    }

    /// Optional field; absence and null are both tolerated.
    pub(crate) const fn opt(name: &'static str, kind: FieldKind) -> Self {
        Field {
            name,
            kind,
            required: false,
            nullable: true,
        }
    }
}

/// JSON type name of a value, for error reporting.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn root(path: &str) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.to_string()
    }
}

/// Validate an object against a field table, appending every divergence.
pub(crate) fn check_shape(
    fields: &[Field],
    value: &Value,
    path: &str,
    errors: &mut Vec<DecodeError>,
) {
    let object = match value.as_object() {
        Some(object) => object,
        None => {
            errors.push(DecodeError::TypeMismatch {
                path: root(path),
                expected: "object",
                actual: json_type(value),
            });
            return;
        }
    };

    for field in fields {
        let field_path = join(path, field.name);
        match object.get(field.name) {
            None => {
                if field.required {
                    errors.push(DecodeError::MissingRequiredField { path: field_path });
                }
            }
            Some(Value::Null) => {
                if !field.nullable {
                    errors.push(DecodeError::TypeMismatch {
                        path: field_path,
                        expected: field.kind.expected(),
                        actual: "null",
                    });
                }
            }
            Some(present) => check_value(field.kind, present, &field_path, errors),
        }
    }
}

/// Validate a single non-null value against its declared kind.
fn check_value(kind: FieldKind, value: &Value, path: &str, errors: &mut Vec<DecodeError>) {
    match kind {
        FieldKind::String => {
            if !value.is_string() {
                errors.push(mismatch(kind, value, path));
            }
        }
        FieldKind::UInt => {
            if value.as_u64().is_none() {
                errors.push(mismatch(kind, value, path));
            }
        }
        FieldKind::Int => {
            if value.as_i64().is_none() && value.as_u64().is_none() {
                errors.push(mismatch(kind, value, path));
            }
        }
        FieldKind::Float => {
            if !value.is_number() {
                errors.push(mismatch(kind, value, path));
            }
        }
        FieldKind::Bool => {
            if !value.is_boolean() {
                errors.push(mismatch(kind, value, path));
            }
        }
        FieldKind::StringArray => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        errors.push(DecodeError::TypeMismatch {
                            path: format!("{}[{}]", path, index),
                            expected: "string",
                            actual: json_type(item),
                        });
                    }
                }
            }
            None => errors.push(mismatch(kind, value, path)),
        },
        FieldKind::Literal(allowed) => match value.as_str() {
            Some(actual) => {
                if !allowed.contains(&actual) {
                    errors.push(DecodeError::InvalidDiscriminant {
                        path: path.to_string(),
                        value: actual.to_string(),
                        allowed,
                    });
                }
            }
            None => errors.push(mismatch(kind, value, path)),
        },
        FieldKind::Entity(entity) => check_shape(catalog::shape(entity), value, path, errors),
        FieldKind::EntityArray(entity) => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, index);
                    check_shape(catalog::shape(entity), item, &item_path, errors);
                }
            }
            None => errors.push(mismatch(kind, value, path)),
        },
        FieldKind::Page(entity) => check_page(entity, value, path, errors),
        FieldKind::CursorPage(entity) => check_cursor_page(entity, value, path, errors),
    }
}

fn mismatch(kind: FieldKind, value: &Value, path: &str) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.to_string(),
        expected: kind.expected(),
        actual: json_type(value),
    }
}

/// Validate an offset-based paging wrapper around `item` entities.
pub(crate) fn check_page(item: Entity, value: &Value, path: &str, errors: &mut Vec<DecodeError>) {
    let fields = [
        Field::req("href", FieldKind::String),
        Field::req("items", FieldKind::EntityArray(item)),
        Field::req("limit", FieldKind::UInt),
        Field::req_null("next", FieldKind::String),
        Field::req("offset", FieldKind::UInt),
        Field::req_null("previous", FieldKind::String),
        Field::req("total", FieldKind::UInt),
    ];
    check_shape(&fields, value, path, errors);
}

/// Validate a cursor-based paging wrapper around `item` entities.
pub(crate) fn check_cursor_page(
    item: Entity,
    value: &Value,
    path: &str,
    errors: &mut Vec<DecodeError>,
) {
    let fields = [
        Field::req("href", FieldKind::String),
        Field::req("items", FieldKind::EntityArray(item)),
        Field::req("limit", FieldKind::UInt),
        Field::req_null("next", FieldKind::String),
        Field::req("cursors", FieldKind::Entity(Entity::Cursor)),
        Field::opt("total", FieldKind::UInt),
    ];
    check_shape(&fields, value, path, errors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_reported_at_root() {
        let mut errors = Vec::new();
        check_shape(
            catalog::shape(Entity::Image),
            &json!("not an object"),
            "",
            &mut errors,
        );
        assert_eq!(
            errors,
            vec![DecodeError::TypeMismatch {
                path: "$".to_string(),
                expected: "object",
                actual: "string",
            }]
        );
    }

    #[test]
    fn test_nested_paths_are_indexed() {
        let mut errors = Vec::new();
        check_shape(
            catalog::shape(Entity::Category),
            &json!({
                "href": "https://api.spotify.com/v1/browse/categories/party",
                "icons": [{ "url": 42 }],
                "id": "party",
                "name": "Party"
            }),
            "",
            &mut errors,
        );
        assert_eq!(
            errors,
            vec![DecodeError::TypeMismatch {
                path: "icons[0].url".to_string(),
                expected: "string",
                actual: "number",
            }]
        );
    }

    #[test]
    fn test_null_in_non_nullable_field() {
        let mut errors = Vec::new();
        check_shape(
            catalog::shape(Entity::ExternalUrls),
            &json!({ "spotify": null }),
            "",
            &mut errors,
        );
        assert_eq!(
            errors,
            vec![DecodeError::TypeMismatch {
                path: "spotify".to_string(),
                expected: "string",
                actual: "null",
            }]
        );
    }

    #[test]
    fn test_all_errors_accumulated() {
        let mut errors = Vec::new();
        check_shape(
            catalog::shape(Entity::Followers),
            &json!({ "total": "many" }),
            "",
            &mut errors,
        );
        // Missing href and mistyped total are both reported.
        assert_eq!(errors.len(), 2);
    }
}
