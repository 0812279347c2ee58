//! Host-rendered options panel.
//!
//! The engine only describes the controls; the host builds the widgets from
//! [`OptionsPanel::to_json`] and reports picks back as
//! `InputEvent::OptionSelected`.

use serde::Serialize;

/// Index of a control within its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ControlId(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Control {
    /// Read-only row showing a label.
    Info { label: String },
    /// One-of-N selector.
    Choice {
        label: String,
        choices: Vec<String>,
        selected: u32,
    },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OptionsPanel {
    title: String,
    controls: Vec<Control>,
}

impl OptionsPanel {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            controls: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_info(&mut self, label: &str) -> ControlId {
        self.push(Control::Info { label: label.to_string() })
    }

    /// Add a selector whose initial pick is `selected`, clamped into range.
    pub fn add_choice(&mut self, label: &str, choices: &[&str], selected: u32) -> ControlId {
        let last = choices.len().saturating_sub(1) as u32;
        self.push(Control::Choice {
            label: label.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            selected: selected.min(last),
        })
    }

    fn push(&mut self, control: Control) -> ControlId {
        let id = ControlId(self.controls.len() as u32);
        self.controls.push(control);
        id
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Current pick of a choice control.
    pub fn selected(&self, id: ControlId) -> Option<u32> {
        match self.get(id)? {
            Control::Choice { selected, .. } => Some(*selected),
            Control::Info { .. } => None,
        }
    }

    /// Record a pick. Returns the picked label, or None (logged) if `id` is
    /// not a choice control or `choice` is out of range.
    pub fn select(&mut self, id: ControlId, choice: u32) -> Option<&str> {
        match self.controls.get_mut(id.0 as usize) {
            Some(Control::Choice { choices, selected, .. }) if (choice as usize) < choices.len() => {
                *selected = choice;
                Some(choices[choice as usize].as_str())
            }
            _ => {
                log::warn!("ignoring selection {} on control {}", choice, id.0);
                None
            }
        }
    }

    /// JSON description for the host widget toolkit.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
