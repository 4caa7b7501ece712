//! Context configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::PlatError;

/// Top-level context configuration
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContextConfig {
    /// Name of the currently active context
    #[serde(rename = "current-context", skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    /// Map of context name to context configuration
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
}

impl ContextConfig {
    /// Look up a context by name, filling in its `name` field
    pub fn get_named(&self, name: &str) -> Result<Context, PlatError> {
        self.require(name).map(|ctx| Context {
            name: name.to_string(),
            ..ctx.clone()
        })
    }

    /// Look up a context by name, failing with the list of known names
    pub fn require(&self, name: &str) -> Result<&Context, PlatError> {
        self.contexts
            .get(name)
            .ok_or_else(|| PlatError::ContextNotFound {
                name: name.to_string(),
                available: self.contexts.keys().cloned().collect(),
            })
    }
}

/// A named context: where and how the tool talks to the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Context name (the key in the config file, not stored in the record)
    #[serde(skip)]
    pub name: String,
    /// Platform endpoint URL
    pub url: String,
    /// Tenant identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// API token (stored in config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
