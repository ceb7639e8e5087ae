//! Status-change messages. The tone branch is chosen here from the status
//! value, so each rendered prompt carries exactly one instruction block.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::messages::{DraftedMessage, MESSAGE_SCHEMA};
use crate::flows::prompts::{
    HIRED_INSTRUCTIONS, IN_REVIEW_INSTRUCTIONS, REJECTED_INSTRUCTIONS, STATUS_CHANGE_PERSONA,
    STATUS_CHANGE_TEMPLATE,
};
use crate::flows::schema::OutputSchema;
use crate::flows::{require_text, template, with_schema, Flow, Validate};
use crate::llm_client::prompts::{system_prompt, PLAIN_MESSAGE_INSTRUCTION};

/// Application statuses that trigger a message to the executive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusChange {
    InReview,
    Hired,
    Rejected,
}

impl StatusChange {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusChange::InReview => "in-review",
            StatusChange::Hired => "hired",
            StatusChange::Rejected => "rejected",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            StatusChange::InReview => IN_REVIEW_INSTRUCTIONS,
            StatusChange::Hired => HIRED_INSTRUCTIONS,
            StatusChange::Rejected => REJECTED_INSTRUCTIONS,
        }
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeInput {
    pub startup_name: String,
    pub executive_name: String,
    pub role_title: String,
    pub new_status: StatusChange,
}

impl Validate for StatusChangeInput {
    fn validate(&self) -> Result<(), AppError> {
        require_text("startupName", &self.startup_name)?;
        require_text("executiveName", &self.executive_name)?;
        require_text("roleTitle", &self.role_title)
    }
}

pub struct StatusChangeMessage;

impl Flow for StatusChangeMessage {
    const NAME: &'static str = "status_change_message";

    type Input = StatusChangeInput;
    type Output = DraftedMessage;

    fn system() -> String {
        system_prompt(STATUS_CHANGE_PERSONA)
    }

    fn render(input: &StatusChangeInput) -> String {
        let prompt = template::render(
            STATUS_CHANGE_TEMPLATE,
            &[
                ("startup_name", input.startup_name.trim()),
                ("executive_name", input.executive_name.trim()),
                ("role_title", input.role_title.trim()),
                ("new_status", input.new_status.as_str()),
                ("status_instructions", input.new_status.instructions()),
                ("format_instruction", PLAIN_MESSAGE_INSTRUCTION),
            ],
        );
        with_schema(prompt, &MESSAGE_SCHEMA)
    }

    fn output_schema() -> &'static OutputSchema {
        &MESSAGE_SCHEMA
    }
}
