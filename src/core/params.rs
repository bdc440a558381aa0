//! Params module - Input configuration for the component generator
//!
//! The only recognized option is `component_name`. Its default is resolved
//! here, at the boundary, so the renderer only ever sees a plain `&str`.

use anyhow::{Context, Result};
use tracing::debug;

use super::config::{defaults, keys};

/// Which `component_name` values count as "not given"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Absent key or empty string falls back to the default
    #[default]
    MissingOrEmpty,
    /// Only an absent key falls back; `""` is substituted as-is
    MissingOnly,
}

/// Input configuration for [`generate_component`](super::template::generate_component)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentParams {
    pub component_name: Option<String>,
    pub fallback: FallbackPolicy,
}

impl ComponentParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Name to substitute into the template, after applying the fallback policy
    pub fn resolved_name(&self) -> &str {
        match (self.component_name.as_deref(), self.fallback) {
            (None, _) => defaults::COMPONENT_NAME,
            (Some(""), FallbackPolicy::MissingOrEmpty) => defaults::COMPONENT_NAME,
            (Some(name), _) => name,
        }
    }

    /// Load params from a TOML table
    ///
    /// Keys other than `component_name` are ignored. A `component_name` that
    /// is not a string is rejected rather than coerced.
    pub fn from_table(table: &toml::Table) -> Result<Self> {
        let component_name = match table.get(keys::COMPONENT_NAME) {
            None => None,
            Some(toml::Value::String(name)) => Some(name.clone()),
            Some(other) => anyhow::bail!(
                "`{}` must be a string, found {}",
                keys::COMPONENT_NAME,
                other.type_str()
            ),
        };

        debug!(
            component_name = component_name.as_deref(),
            ignored_keys = table.len() - usize::from(component_name.is_some()),
            "loaded component params"
        );

        Ok(Self {
            component_name,
            fallback: FallbackPolicy::default(),
        })
    }

    /// Parse TOML text and load params from it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(content).context("Failed to parse component params as TOML")?;
        Self::from_table(&table)
    }
}
