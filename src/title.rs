//! Post-navigation title projection. Runs after a navigation commits and
//! never blocks or redirects one.

use std::collections::HashMap;

/// Derives a human-readable page title from a route's title template.
#[derive(Debug, Clone)]
pub struct TitleProjector {
    suffix: String,
}

impl TitleProjector {
    pub fn new(suffix: impl Into<String>) -> Self {
        TitleProjector {
            suffix: suffix.into(),
        }
    }

    /// Substitute `{name}` placeholders from the extracted captures, leave
    /// unknown ones verbatim for the view to resolve at render time, and
    /// append the configured suffix.
    pub fn project(&self, template: &str, params: &HashMap<String, String>) -> String {
        let mut title = template.to_string();
        for (key, value) in params {
            title = title.replace(&format!("{{{}}}", key), value);
        }
        if self.suffix.is_empty() {
            title
        } else {
            format!("{} // {}", title, self.suffix)
        }
    }
}
