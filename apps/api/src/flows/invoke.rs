//! Model invocation adapter: one provider call, then parse, normalise and
//! validate the reply against the flow's output schema.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::flows::schema::{OutputSchema, SchemaViolation};
use crate::llm_client::{strip_json_fences, LlmError, ModelProvider};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model provider failed: {0}")]
    Provider(#[from] LlmError),

    #[error("{flow} returned an unparseable payload: {source}")]
    Unparseable {
        flow: &'static str,
        source: serde_json::Error,
    },

    #[error("{flow} output violates its schema: {violation}")]
    Schema {
        flow: &'static str,
        violation: SchemaViolation,
    },
}

/// Everything the adapter needs to know about one flow's output.
pub struct Invocation<'a> {
    pub flow: &'static str,
    pub system: &'a str,
    pub prompt: &'a str,
    pub schema: &'a OutputSchema,
    pub normalize: fn(&mut Value),
}

/// Sends the rendered prompt once and returns the validated output record.
/// Any failure discards the reply entirely.
pub async fn invoke<T: DeserializeOwned>(
    model: &dyn ModelProvider,
    call: Invocation<'_>,
) -> Result<T, GenerationError> {
    let text = model.complete(call.system, call.prompt).await?;

    let mut value: Value = serde_json::from_str(strip_json_fences(&text)).map_err(|source| {
        warn!("{} reply is not JSON: {source}", call.flow);
        GenerationError::Unparseable {
            flow: call.flow,
            source,
        }
    })?;

    (call.normalize)(&mut value);

    call.schema.validate(&value).map_err(|violation| {
        warn!("{} reply rejected: {violation}", call.flow);
        GenerationError::Schema {
            flow: call.flow,
            violation,
        }
    })?;

    let output = serde_json::from_value(value).map_err(|source| GenerationError::Unparseable {
        flow: call.flow,
        source,
    })?;

    debug!("{} produced a valid output", call.flow);
    Ok(output)
}
