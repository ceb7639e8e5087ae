// AI flows: one module per business capability.
// Each flow binds an input record into its prompt template, invokes the
// model once through llm_client, and validates the reply against its
// output schema. No flow persists anything.

pub mod extract_profile;
pub mod handlers;
pub mod invoke;
pub mod match_executive;
pub mod messages;
pub mod options;
pub mod prompts;
pub mod resume_source;
pub mod rewrite;
pub mod schema;
pub mod status_change;
pub mod template;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::flows::invoke::{invoke, Invocation};
use crate::flows::schema::OutputSchema;
use crate::llm_client::ModelProvider;

/// Input-side contract: checked before any provider call.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// A single schema-constrained call to the model.
pub trait Flow {
    const NAME: &'static str;

    type Input: Validate + Sync;
    type Output: DeserializeOwned;

    /// System prompt: persona plus output-format rules.
    fn system() -> String;

    /// Renders the user prompt from a validated input.
    fn render(input: &Self::Input) -> String;

    fn output_schema() -> &'static OutputSchema;

    /// Flow-specific input checks on top of `Validate`.
    fn check(input: &Self::Input) -> Result<(), AppError> {
        input.validate()
    }

    /// Rewrites the raw reply before validation. Identity by default.
    fn normalize(_raw: &mut Value) {}
}

/// Runs `F` end to end: validate → render → invoke → validate → unwrap.
pub async fn run_flow<F: Flow>(
    model: &dyn ModelProvider,
    input: &F::Input,
) -> Result<F::Output, AppError> {
    F::check(input)?;

    let system = F::system();
    let prompt = F::render(input);
    info!("Running flow {}", F::NAME);

    let output = invoke(
        model,
        Invocation {
            flow: F::NAME,
            system: &system,
            prompt: &prompt,
            schema: F::output_schema(),
            normalize: F::normalize,
        },
    )
    .await?;

    Ok(output)
}

/// Rejects blank required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Appends the output schema skeleton to a rendered prompt.
pub(crate) fn with_schema(prompt: String, schema: &OutputSchema) -> String {
    format!(
        "{prompt}\n\nReturn a JSON object with this EXACT schema (no extra fields):\n{}",
        schema.describe()
    )
}
