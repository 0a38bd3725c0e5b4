use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

// =============================================================================
// Showcase configuration (TOML)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Singleton,
    Factory,
    Adapter,
    Decorator,
    Observer,
    Command,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Singleton,
        PatternKind::Factory,
        PatternKind::Adapter,
        PatternKind::Decorator,
        PatternKind::Observer,
        PatternKind::Command,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PatternKind::Singleton => "Singleton Pattern",
            PatternKind::Factory => "Factory Pattern",
            PatternKind::Adapter => "Adapter Pattern",
            PatternKind::Decorator => "Decorator Pattern",
            PatternKind::Observer => "Observer Pattern",
            PatternKind::Command => "Command Pattern",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub color: bool,
    pub log_filter: Option<String>,
    pub patterns: Vec<PatternKind>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: None,
            patterns: PatternKind::ALL.to_vec(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Applies the presentation settings to the process.
    pub fn apply(&self) {
        colored::control::set_override(self.color);
        crate::telemetry::init_tracing(self.log_filter.as_deref());
    }
}
