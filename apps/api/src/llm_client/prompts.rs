// Shared prompt constants and prompt-building utilities.
// Each flow defines its own template in flows/prompts.rs.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Builds a flow's system prompt from its persona line plus the JSON-only rule.
pub fn system_prompt(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_SYSTEM}")
}

/// Instruction appended to every message-drafting prompt.
pub const PLAIN_MESSAGE_INSTRUCTION: &str = "\
    Write the message body only. Do NOT include a subject line. \
    Do NOT use markdown formatting. Separate paragraphs with a blank line.";
