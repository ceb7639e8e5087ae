//! Rewrite flows: a single profile/posting field, or a chat message.
//!
//! Field rewrites dispatch on `fieldName`. Each target (executive profile,
//! job description, startup profile) owns a closed catalogue of fields, and
//! each field's target structure is copied verbatim into the prompt.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{
    FieldGuide, EXECUTIVE_PROFILE_FIELDS, JOB_DESCRIPTION_FIELDS, REWRITE_CHAT_PERSONA,
    REWRITE_CHAT_TEMPLATE, REWRITE_FIELD_PERSONA, REWRITE_FIELD_TEMPLATE, STARTUP_PROFILE_FIELDS,
};
use crate::flows::schema::{FieldKind, FieldSpec, OutputSchema};
use crate::flows::{require_text, template, with_schema, Flow, Validate};
use crate::llm_client::prompts::system_prompt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteFieldInput {
    pub field_name: String,
    pub current_value: String,
}

impl Validate for RewriteFieldInput {
    fn validate(&self) -> Result<(), AppError> {
        require_text("fieldName", &self.field_name)?;
        require_text("currentValue", &self.current_value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteChatInput {
    pub current_value: String,
}

impl Validate for RewriteChatInput {
    fn validate(&self) -> Result<(), AppError> {
        require_text("currentValue", &self.current_value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteOutput {
    pub rewritten_text: String,
}

const FIELDS: &[FieldSpec] = &[FieldSpec::required("rewrittenText", FieldKind::Text)];

static SCHEMA: OutputSchema = OutputSchema::new(FIELDS);

// ────────────────────────────────────────────────────────────────────────────
// Field rewrite targets
// ────────────────────────────────────────────────────────────────────────────

/// A document whose fields can be rewritten.
pub trait RewriteTarget {
    const FLOW_NAME: &'static str;
    /// Noun phrase used in prompts, e.g. "an executive's profile".
    const SUBJECT: &'static str;
    const FIELDS: &'static [FieldGuide];

    fn guide(field_name: &str) -> Option<&'static FieldGuide> {
        let wanted = field_name.trim();
        Self::FIELDS
            .iter()
            .find(|g| g.field_name.eq_ignore_ascii_case(wanted))
    }
}

pub struct ExecutiveProfile;
pub struct JobDescription;
pub struct StartupProfile;

impl RewriteTarget for ExecutiveProfile {
    const FLOW_NAME: &'static str = "rewrite_executive_profile_field";
    const SUBJECT: &'static str = "an executive's profile";
    const FIELDS: &'static [FieldGuide] = EXECUTIVE_PROFILE_FIELDS;
}

impl RewriteTarget for JobDescription {
    const FLOW_NAME: &'static str = "rewrite_job_description_field";
    const SUBJECT: &'static str = "a startup's job description";
    const FIELDS: &'static [FieldGuide] = JOB_DESCRIPTION_FIELDS;
}

impl RewriteTarget for StartupProfile {
    const FLOW_NAME: &'static str = "rewrite_startup_profile_field";
    const SUBJECT: &'static str = "a startup's company profile";
    const FIELDS: &'static [FieldGuide] = STARTUP_PROFILE_FIELDS;
}

pub struct RewriteField<T>(PhantomData<T>);

impl<T: RewriteTarget> Flow for RewriteField<T> {
    const NAME: &'static str = T::FLOW_NAME;

    type Input = RewriteFieldInput;
    type Output = RewriteOutput;

    fn system() -> String {
        system_prompt(&template::render(
            REWRITE_FIELD_PERSONA,
            &[("subject", T::SUBJECT)],
        ))
    }

    fn check(input: &RewriteFieldInput) -> Result<(), AppError> {
        input.validate()?;
        if T::guide(&input.field_name).is_none() {
            let known: Vec<&str> = T::FIELDS.iter().map(|g| g.field_name).collect();
            return Err(AppError::Validation(format!(
                "unknown fieldName '{}' for {}; expected one of: {}",
                input.field_name.trim(),
                T::SUBJECT,
                known.join(", ")
            )));
        }
        Ok(())
    }

    fn render(input: &RewriteFieldInput) -> String {
        // `check` has already rejected unknown field names.
        let (field_name, structure) = match T::guide(&input.field_name) {
            Some(guide) => (guide.field_name, guide.structure),
            None => (input.field_name.trim(), ""),
        };
        let prompt = template::render(
            REWRITE_FIELD_TEMPLATE,
            &[
                ("field_name", field_name),
                ("subject", T::SUBJECT),
                ("field_structure", structure),
                ("current_value", input.current_value.trim()),
            ],
        );
        with_schema(prompt, &SCHEMA)
    }

    fn output_schema() -> &'static OutputSchema {
        &SCHEMA
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Chat message rewrite
// ────────────────────────────────────────────────────────────────────────────

pub struct RewriteChatMessage;

impl Flow for RewriteChatMessage {
    const NAME: &'static str = "rewrite_chat_message";

    type Input = RewriteChatInput;
    type Output = RewriteOutput;

    fn system() -> String {
        system_prompt(REWRITE_CHAT_PERSONA)
    }

    fn render(input: &RewriteChatInput) -> String {
        let prompt = template::render(
            REWRITE_CHAT_TEMPLATE,
            &[("current_value", input.current_value.trim())],
        );
        with_schema(prompt, &SCHEMA)
    }

    fn output_schema() -> &'static OutputSchema {
        &SCHEMA
    }
}
