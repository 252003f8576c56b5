//! Navigation shell state: one active top-level section plus independent
//! expand/collapse flags for the grouped menu entries.
//!
//! The shell owns a single [`MenuState`] for the session and mutates it only
//! through [`MenuState::select_menu`] and [`MenuState::toggle_section`], so
//! the whole thing is testable without a rendering environment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Menu entries that expand into sub-items.
const COLLAPSIBLE: [&str; 4] = ["clientes", "plantillas", "pld", "usuarios"];

/// Which section is open in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    active: String,
    expanded: BTreeMap<String, bool>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuState {
    /// Fresh session state: dashboard selected, every group collapsed.
    pub fn new() -> Self {
        let expanded = COLLAPSIBLE
            .iter()
            .map(|name| (name.to_string(), false))
            .collect();
        Self {
            active: "dashboard".to_string(),
            expanded,
        }
    }

    /// Make `name` the active top-level section. Exactly one section is
    /// active at a time, last write wins; expand flags are untouched.
    pub fn select_menu(&mut self, name: &str) {
        self.active = name.to_string();
    }

    /// Flip the expand flag of `name`. Sections not seen before start
    /// collapsed and are tracked from then on; the active selection is
    /// untouched.
    pub fn toggle_section(&mut self, name: &str) {
        let flag = self.expanded.entry(name.to_string()).or_insert(false);
        *flag = !*flag;
    }

    pub fn active_menu(&self) -> &str {
        &self.active
    }

    /// Whether `name` is currently expanded; unknown sections read as
    /// collapsed.
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.get(name).copied().unwrap_or(false)
    }

    /// All tracked sections with their expand flags, in stable name order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, bool)> {
        self.expanded.iter().map(|(name, &flag)| (name.as_str(), flag))
    }
}
