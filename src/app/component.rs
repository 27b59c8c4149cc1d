//! Registered components
//!
//! A component is a named static asset the UI resolves by its export name.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Registry of components keyed by export name
pub type Components = BTreeMap<String, Component>;

/// A static asset registered on the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    content_type: &'static str,
    body: Cow<'static, str>,
}

impl Component {
    /// An SVG icon
    pub fn svg(markup: impl Into<Cow<'static, str>>) -> Self {
        Self {
            content_type: "image/svg+xml",
            body: markup.into(),
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
