//! Interactive editing of a parsed URL, expressed as a reducer.
//!
//! Every user interaction becomes an [`Action`] applied with
//! [`Editor::dispatch`]. The editor owns the base path, the record list and
//! the last generated [`Composition`].

use crate::codec::{Composition, ParsedUrl, compose, parse};
use crate::compat::{String, Vec};
use crate::error::{EditorError, Result};
use crate::record::{ParameterRecord, ParameterSequence};
use crate::suggestions::available_suggestions;

/// Which field of a record an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Value,
}

/// A discrete change to the editor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the base path and records with those parsed from a URL.
    Parse(String),
    /// Overwrite the key or value of one record.
    EditField {
        index: usize,
        field: Field,
        text: String,
    },
    /// Flip whether a record is included in the output.
    ToggleSelected(usize),
    /// Append a user-supplied parameter. Ignored if key or value is empty.
    AddCustom { key: String, value: String },
    /// Append a suggested key with an empty value.
    AddSuggestion(String),
    /// Delete one record.
    Remove(usize),
    /// Rebuild the URL from the selected records.
    Compose,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    base_path: String,
    records: ParameterSequence,
    composition: Option<Composition>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor state right after a [`Action::Parse`] of `url`.
    pub fn from_url(url: &str) -> Self {
        let ParsedUrl { base_path, records } = parse(url);
        Self {
            base_path,
            records,
            composition: None,
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn records(&self) -> &ParameterSequence {
        &self.records
    }

    /// Output of the most recent [`Action::Compose`], cleared by a new parse.
    pub fn composition(&self) -> Option<&Composition> {
        self.composition.as_ref()
    }

    /// Default suggestions not yet used as a key.
    pub fn suggestions(&self) -> Vec<&'static str> {
        available_suggestions(self.records.keys())
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::IndexOutOfRange`] when an index-addressed action
    /// names a record that does not exist. The state is left unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Parse(url) => {
                *self = Self::from_url(&url);
            }
            Action::EditField { index, field, text } => {
                let record = self.record_mut(index)?;
                match field {
                    Field::Key => record.key = text,
                    Field::Value => record.value = text,
                }
            }
            Action::ToggleSelected(index) => {
                let record = self.record_mut(index)?;
                record.selected = !record.selected;
            }
            Action::AddCustom { key, value } => {
                if key.is_empty() || value.is_empty() {
                    log::debug!("ignoring custom parameter with empty key or value");
                    return Ok(());
                }
                self.records.push(ParameterRecord::added(key, value));
            }
            Action::AddSuggestion(key) => {
                self.records.push(ParameterRecord::added(key, String::new()));
            }
            Action::Remove(index) => {
                let len = self.records.len();
                if self.records.remove(index).is_none() {
                    log::debug!("remove: index {index} out of range ({len} records)");
                    return Err(EditorError::IndexOutOfRange { index, len });
                }
            }
            Action::Compose => {
                self.composition = Some(compose(&self.base_path, &self.records));
            }
        }
        Ok(())
    }

    /// Apply actions in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Editor::dispatch`].
    pub fn dispatch_all<I>(&mut self, actions: I) -> Result<()>
    where
        I: IntoIterator<Item = Action>,
    {
        actions.into_iter().try_for_each(|action| self.dispatch(action))
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut ParameterRecord> {
        let len = self.records.len();
        self.records.get_mut(index).ok_or_else(|| {
            log::debug!("index {index} out of range ({len} records)");
            EditorError::IndexOutOfRange { index, len }
        })
    }
}
