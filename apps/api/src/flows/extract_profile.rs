//! Profile extraction. Turns a résumé into a structured executive profile.
//!
//! Availability, compensation and location preference must land on the
//! fixed option lists in `flows::options`. The prompt asks the model to pick
//! the closest option; replies that still carry free text are mapped onto the
//! nearest option before validation, and rejected if no option is close.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::flows::options::{
    infer_availability, infer_compensation, infer_location, AVAILABILITY_OPTIONS,
    COMPENSATION_OPTIONS, LOCATION_OPTIONS,
};
use crate::flows::prompts::{EXTRACT_PROFILE_PERSONA, EXTRACT_PROFILE_TEMPLATE};
use crate::flows::schema::{FieldKind, FieldSpec, OutputSchema};
use crate::flows::{require_text, template, with_schema, Flow, Validate};
use crate::llm_client::prompts::system_prompt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractProfileInput {
    pub resume_text: String,
}

impl Validate for ExtractProfileInput {
    fn validate(&self) -> Result<(), AppError> {
        require_text("resumeText", &self.resume_text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProfile {
    pub name: String,
    pub expertise: String,
    pub industries: Vec<String>,
    pub availability: String,
    pub compensation: String,
    pub location_preference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub key_accomplishments: Vec<String>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("expertise", FieldKind::Text),
    FieldSpec::required("industries", FieldKind::TextList),
    FieldSpec::required("availability", FieldKind::OneOf(AVAILABILITY_OPTIONS)),
    FieldSpec::required("compensation", FieldKind::OneOf(COMPENSATION_OPTIONS)),
    FieldSpec::required("locationPreference", FieldKind::OneOf(LOCATION_OPTIONS)),
    FieldSpec::optional("city", FieldKind::Text),
    FieldSpec::optional("state", FieldKind::Text),
    FieldSpec::optional("country", FieldKind::Text),
    FieldSpec::required("keyAccomplishments", FieldKind::TextList),
];

static SCHEMA: OutputSchema = OutputSchema::new(FIELDS);

pub struct ExtractProfile;

impl Flow for ExtractProfile {
    const NAME: &'static str = "extract_profile";

    type Input = ExtractProfileInput;
    type Output = ExtractedProfile;

    fn system() -> String {
        system_prompt(EXTRACT_PROFILE_PERSONA)
    }

    fn render(input: &ExtractProfileInput) -> String {
        let availability = bullet_list(AVAILABILITY_OPTIONS);
        let compensation = bullet_list(COMPENSATION_OPTIONS);
        let location = bullet_list(LOCATION_OPTIONS);
        let prompt = template::render(
            EXTRACT_PROFILE_TEMPLATE,
            &[
                ("availability_options", availability.as_str()),
                ("compensation_options", compensation.as_str()),
                ("location_options", location.as_str()),
                ("resume_text", input.resume_text.trim()),
            ],
        );
        with_schema(prompt, &SCHEMA)
    }

    fn output_schema() -> &'static OutputSchema {
        &SCHEMA
    }

    fn normalize(raw: &mut Value) {
        snap_to_option(raw, "availability", infer_availability);
        snap_to_option(raw, "compensation", infer_compensation);
        snap_to_option(raw, "locationPreference", infer_location);
        for field in ["city", "state", "country"] {
            blank_to_null(raw, field);
        }
    }
}

fn bullet_list(options: &[&str]) -> String {
    options
        .iter()
        .map(|option| format!("   - {option}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replaces a free-text string field with its inferred option, if any.
fn snap_to_option(raw: &mut Value, field: &str, infer: fn(&str) -> Option<&'static str>) {
    if let Some(slot) = raw.get_mut(field) {
        if let Some(option) = slot.as_str().and_then(infer) {
            *slot = Value::String(option.to_string());
        }
    }
}

/// Optional location parts come back as "" or "N/A" when absent.
fn blank_to_null(raw: &mut Value, field: &str) {
    if let Some(slot) = raw.get_mut(field) {
        let absent = slot
            .as_str()
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "" | "n/a" | "unknown"))
            .unwrap_or(false);
        if absent {
            *slot = Value::Null;
        }
    }
}
