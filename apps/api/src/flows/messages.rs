//! Message drafting flows: introduction and follow-up.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{
    FOLLOW_UP_PERSONA, FOLLOW_UP_TEMPLATE, INTRODUCTION_PERSONA, INTRODUCTION_TEMPLATE,
};
use crate::flows::schema::{FieldKind, FieldSpec, OutputSchema};
use crate::flows::{require_text, template, with_schema, Flow, Validate};
use crate::llm_client::prompts::{system_prompt, PLAIN_MESSAGE_INSTRUCTION};

/// Output shared by every message-drafting flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftedMessage {
    pub message: String,
}

const FIELDS: &[FieldSpec] = &[FieldSpec::required("message", FieldKind::Text)];

pub static MESSAGE_SCHEMA: OutputSchema = OutputSchema::new(FIELDS);

// ────────────────────────────────────────────────────────────────────────────
// Introduction
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroductionInput {
    pub startup_name: String,
    pub startup_mission: String,
    pub startup_challenge: String,
    pub executive_name: String,
    pub executive_expertise: String,
    pub executive_accomplishment: String,
}

impl Validate for IntroductionInput {
    fn validate(&self) -> Result<(), AppError> {
        require_text("startupName", &self.startup_name)?;
        require_text("startupMission", &self.startup_mission)?;
        require_text("startupChallenge", &self.startup_challenge)?;
        require_text("executiveName", &self.executive_name)?;
        require_text("executiveExpertise", &self.executive_expertise)?;
        require_text("executiveAccomplishment", &self.executive_accomplishment)
    }
}

pub struct Introduction;

impl Flow for Introduction {
    const NAME: &'static str = "introduction_message";

    type Input = IntroductionInput;
    type Output = DraftedMessage;

    fn system() -> String {
        system_prompt(INTRODUCTION_PERSONA)
    }

    fn render(input: &IntroductionInput) -> String {
        let prompt = template::render(
            INTRODUCTION_TEMPLATE,
            &[
                ("startup_name", input.startup_name.trim()),
                ("startup_mission", input.startup_mission.trim()),
                ("startup_challenge", input.startup_challenge.trim()),
                ("executive_name", input.executive_name.trim()),
                ("executive_expertise", input.executive_expertise.trim()),
                ("executive_accomplishment", input.executive_accomplishment.trim()),
                ("format_instruction", PLAIN_MESSAGE_INSTRUCTION),
            ],
        );
        with_schema(prompt, &MESSAGE_SCHEMA)
    }

    fn output_schema() -> &'static OutputSchema {
        &MESSAGE_SCHEMA
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Follow-up
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpInput {
    pub executive_name: String,
    pub startup_name: String,
    pub role_title: String,
    pub executive_expertise: String,
}

impl Validate for FollowUpInput {
    fn validate(&self) -> Result<(), AppError> {
        require_text("executiveName", &self.executive_name)?;
        require_text("startupName", &self.startup_name)?;
        require_text("roleTitle", &self.role_title)?;
        require_text("executiveExpertise", &self.executive_expertise)
    }
}

pub struct FollowUp;

impl Flow for FollowUp {
    const NAME: &'static str = "follow_up_message";

    type Input = FollowUpInput;
    type Output = DraftedMessage;

    fn system() -> String {
        system_prompt(FOLLOW_UP_PERSONA)
    }

    fn render(input: &FollowUpInput) -> String {
        let prompt = template::render(
            FOLLOW_UP_TEMPLATE,
            &[
                ("executive_name", input.executive_name.trim()),
                ("startup_name", input.startup_name.trim()),
                ("role_title", input.role_title.trim()),
                ("executive_expertise", input.executive_expertise.trim()),
                ("format_instruction", PLAIN_MESSAGE_INSTRUCTION),
            ],
        );
        with_schema(prompt, &MESSAGE_SCHEMA)
    }

    fn output_schema() -> &'static OutputSchema {
        &MESSAGE_SCHEMA
    }
}
