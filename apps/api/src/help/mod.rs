//! Role-specific help content.
//!
//! The source document is split into sections by explicit role headers
//! (`=== executive ===`, `=== startup ===`, `=== admin ===`) rather than by
//! position, so reordering or adding sections cannot shift content to the
//! wrong role.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpRole {
    Executive,
    Startup,
    Admin,
}

impl HelpRole {
    pub fn as_str(self) -> &'static str {
        match self {
            HelpRole::Executive => "executive",
            HelpRole::Startup => "startup",
            HelpRole::Admin => "admin",
        }
    }
}

impl fmt::Display for HelpRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HelpRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "executive" => Ok(HelpRole::Executive),
            "startup" => Ok(HelpRole::Startup),
            "admin" => Ok(HelpRole::Admin),
            other => Err(AppError::Validation(format!(
                "unknown help role '{other}', expected executive, startup or admin"
            ))),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum HelpParseError {
    #[error("help section '{0}' appears more than once")]
    DuplicateSection(&'static str),
}

/// Parsed help document.
#[derive(Debug, Default, Clone)]
pub struct HelpContent {
    sections: HashMap<HelpRole, String>,
}

impl HelpContent {
    pub fn parse(document: &str) -> Result<Self, HelpParseError> {
        let mut sections: HashMap<HelpRole, String> = HashMap::new();
        // None while outside any known section (preamble or unknown header).
        let mut current: Option<(HelpRole, Vec<&str>)> = None;

        for line in document.lines() {
            if let Some(name) = section_header(line) {
                if let Some((role, body)) = current.take() {
                    insert_section(&mut sections, role, &body)?;
                }
                match name.parse::<HelpRole>() {
                    Ok(role) => {
                        if sections.contains_key(&role) {
                            return Err(HelpParseError::DuplicateSection(role.as_str()));
                        }
                        current = Some((role, Vec::new()));
                    }
                    Err(_) => debug!("Skipping unknown help section '{name}'"),
                }
                continue;
            }
            if let Some((_, body)) = current.as_mut() {
                body.push(line);
            }
        }
        if let Some((role, body)) = current.take() {
            insert_section(&mut sections, role, &body)?;
        }

        Ok(Self { sections })
    }

    /// Reads and parses the help document at `path`. A missing file yields
    /// empty content; a malformed one is an error.
    pub async fn load(path: &str) -> anyhow::Result<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(document) => {
                let content = Self::parse(&document)?;
                info!(
                    "Loaded help content from {path} ({} sections)",
                    content.sections.len()
                );
                Ok(content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Help content file {path} not found; help endpoints will return 404");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn section(&self, role: HelpRole) -> Option<&str> {
        self.sections.get(&role).map(String::as_str)
    }
}

/// `=== name ===` → `name`.
fn section_header(line: &str) -> Option<&str> {
    let inner = line.trim().strip_prefix("===")?.strip_suffix("===")?.trim();
    (!inner.is_empty()).then_some(inner)
}

fn insert_section(
    sections: &mut HashMap<HelpRole, String>,
    role: HelpRole,
    body: &[&str],
) -> Result<(), HelpParseError> {
    if sections.contains_key(&role) {
        return Err(HelpParseError::DuplicateSection(role.as_str()));
    }
    sections.insert(role, body.join("\n").trim().to_string());
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub role: HelpRole,
    pub content: String,
}

/// GET /api/v1/help/:role
pub async fn handle_get_help(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<HelpResponse>, AppError> {
    let role: HelpRole = role.parse()?;
    let content = state
        .help
        .section(role)
        .ok_or_else(|| AppError::NotFound(format!("No help content for role {role}")))?;
    Ok(Json(HelpResponse {
        role,
        content: content.to_string(),
    }))
}
