//! Output schemas: the closed set of fields, types and options a flow's
//! result must satisfy before it is handed back to the caller.

use serde_json::Value;
use thiserror::Error;

/// Primitive shape of a single output field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free text. Required text fields must not be blank.
    Text,
    /// Array of strings.
    TextList,
    /// Number within an inclusive range.
    Score { min: f64, max: f64 },
    /// String restricted to a closed option set.
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaViolation {
    #[error("output is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unexpected field '{0}'")]
    UnexpectedField(String),

    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("required field '{0}' is blank")]
    Blank(&'static str),

    #[error("field '{field}' value {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("field '{field}' value '{value}' is not one of the allowed options")]
    NotAnOption { field: &'static str, value: String },
}

/// Declared output shape of one flow.
#[derive(Debug)]
pub struct OutputSchema {
    pub fields: &'static [FieldSpec],
}

impl OutputSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Checks `value` against every declared field. Fails on the first violation.
    /// Optional fields may be absent or `null`.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        let object = value.as_object().ok_or(SchemaViolation::NotAnObject)?;

        if let Some(unknown) = object
            .keys()
            .find(|key| !self.fields.iter().any(|f| f.name == key.as_str()))
        {
            return Err(SchemaViolation::UnexpectedField(unknown.clone()));
        }

        for spec in self.fields {
            match object.get(spec.name) {
                None | Some(Value::Null) if spec.required => {
                    return Err(SchemaViolation::MissingField(spec.name))
                }
                None | Some(Value::Null) => continue,
                Some(field) => check_field(spec, field)?,
            }
        }

        Ok(())
    }

    /// Renders the schema as a JSON skeleton for inclusion in a prompt.
    pub fn describe(&self) -> String {
        let lines: Vec<String> = self
            .fields
            .iter()
            .map(|spec| {
                let shape = match spec.kind {
                    FieldKind::Text => "string".to_string(),
                    FieldKind::TextList => "array of strings".to_string(),
                    FieldKind::Score { min, max } => format!("number from {min} to {max}"),
                    FieldKind::OneOf(options) => format!(
                        "exactly one of: {}",
                        options
                            .iter()
                            .map(|o| format!("\"{o}\""))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                };
                let presence = if spec.required { "required" } else { "optional" };
                format!("  \"{}\": {} ({})", spec.name, shape, presence)
            })
            .collect();

        format!("{{\n{}\n}}", lines.join(",\n"))
    }
}

fn check_field(spec: &FieldSpec, field: &Value) -> Result<(), SchemaViolation> {
    match spec.kind {
        FieldKind::Text => {
            let text = field.as_str().ok_or(SchemaViolation::WrongType {
                field: spec.name,
                expected: "a string",
            })?;
            if spec.required && text.trim().is_empty() {
                return Err(SchemaViolation::Blank(spec.name));
            }
        }
        FieldKind::TextList => {
            let items = field.as_array().ok_or(SchemaViolation::WrongType {
                field: spec.name,
                expected: "an array of strings",
            })?;
            if !items.iter().all(Value::is_string) {
                return Err(SchemaViolation::WrongType {
                    field: spec.name,
                    expected: "an array of strings",
                });
            }
        }
        FieldKind::Score { min, max } => {
            let value = field.as_f64().ok_or(SchemaViolation::WrongType {
                field: spec.name,
                expected: "a number",
            })?;
            if !(min..=max).contains(&value) {
                return Err(SchemaViolation::OutOfRange {
                    field: spec.name,
                    value,
                    min,
                    max,
                });
            }
        }
        FieldKind::OneOf(options) => {
            let text = field.as_str().ok_or(SchemaViolation::WrongType {
                field: spec.name,
                expected: "a string",
            })?;
            if !options.contains(&text) {
                return Err(SchemaViolation::NotAnOption {
                    field: spec.name,
                    value: text.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLORS: &[&str] = &["red", "green"];
    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("summary", FieldKind::Text),
        FieldSpec::required("tags", FieldKind::TextList),
        FieldSpec::required("score", FieldKind::Score { min: 0.0, max: 1.0 }),
        FieldSpec::required("color", FieldKind::OneOf(COLORS)),
        FieldSpec::optional("city", FieldKind::Text),
    ];
    const SCHEMA: OutputSchema = OutputSchema::new(FIELDS);

    fn valid() -> Value {
        json!({"summary": "ok", "tags": ["a"], "score": 0.5, "color": "red"})
    }

    #[test]
    fn test_valid_object_passes() {
        assert_eq!(SCHEMA.validate(&valid()), Ok(()));
    }

    #[test]
    fn test_optional_field_may_be_null_or_absent() {
        let mut value = valid();
        value["city"] = Value::Null;
        assert_eq!(SCHEMA.validate(&value), Ok(()));
        value["city"] = json!("Austin");
        assert_eq!(SCHEMA.validate(&value), Ok(()));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("tags");
        assert_eq!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::MissingField("tags"))
        );
    }

    #[test]
    fn test_value_outside_options_fails() {
        let mut value = valid();
        value["color"] = json!("blue");
        assert!(matches!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::NotAnOption { field: "color", .. })
        ));
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        let mut value = valid();
        value["score"] = json!(1);
        assert_eq!(SCHEMA.validate(&value), Ok(()));
        value["score"] = json!(0.0);
        assert_eq!(SCHEMA.validate(&value), Ok(()));
        value["score"] = json!(1.01);
        assert!(matches!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_wrong_primitive_type_fails() {
        let mut value = valid();
        value["score"] = json!("0.7");
        assert!(matches!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::WrongType { field: "score", .. })
        ));

        let mut value = valid();
        value["tags"] = json!(["a", 3]);
        assert!(matches!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::WrongType { field: "tags", .. })
        ));
    }

    #[test]
    fn test_blank_required_text_fails() {
        let mut value = valid();
        value["summary"] = json!("   ");
        assert_eq!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::Blank("summary"))
        );
    }

    #[test]
    fn test_unexpected_field_fails() {
        let mut value = valid();
        value["extra"] = json!(true);
        assert_eq!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::UnexpectedField("extra".to_string()))
        );
    }

    #[test]
    fn test_non_object_fails() {
        assert_eq!(
            SCHEMA.validate(&json!(["summary"])),
            Err(SchemaViolation::NotAnObject)
        );
    }

    #[test]
    fn test_describe_lists_options_and_presence() {
        let described = SCHEMA.describe();
        assert!(described.contains("\"color\": exactly one of: \"red\", \"green\" (required)"));
        assert!(described.contains("\"city\": string (optional)"));
    }
}
