//! Application Context
//!
//! Shared, read-only settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::Labels;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// UI strings from the loaded configuration
    labels: StoredValue<Labels>,
}

impl AppContext {
    pub fn new(labels: Labels) -> Self {
        Self {
            labels: StoredValue::new(labels),
        }
    }

    /// Copy of the configured UI strings
    pub fn labels(&self) -> Labels {
        self.labels.get_value()
    }
}
