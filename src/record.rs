use crate::compat::{String, ToString, Vec};

/// A single query parameter being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterRecord {
    /// Parameter name. May be edited to an empty or duplicate key.
    pub key: String,
    /// Raw, unescaped value.
    pub value: String,
    /// Whether the record is emitted by [`compose`](crate::compose).
    pub selected: bool,
    /// True when the record came from parsing the input URL.
    pub original: bool,
}

impl ParameterRecord {
    /// Record produced by parsing a query string.
    pub fn parsed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            selected: true,
            original: true,
        }
    }

    /// Record added after parsing.
    pub fn added(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            selected: true,
            original: false,
        }
    }

    /// Original record that has been deselected
    pub fn is_excluded_original(&self) -> bool {
        self.original && !self.selected
    }
}

/// Ordered list of [`ParameterRecord`]s.
///
/// Order is output order. Keys are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParameterSequence {
    records: Vec<ParameterRecord>,
}

impl ParameterSequence {
    /// Empty sequence.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record; it will be written last.
    pub fn push(&mut self, record: ParameterRecord) {
        self.records.push(record);
    }

    /// Remove and return the record at `index`, shifting later records down.
    pub fn remove(&mut self, index: usize) -> Option<ParameterRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&ParameterRecord> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ParameterRecord> {
        self.records.get_mut(index)
    }

    /// Number of records, selected or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ParameterRecord> {
        self.records.iter_mut()
    }

    /// Keys of all records in order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    /// Records that will be emitted, in order.
    pub fn selected(&self) -> impl Iterator<Item = &ParameterRecord> {
        self.records.iter().filter(|r| r.selected)
    }

    /// Keys of original records that are currently deselected, in order.
    pub fn excluded_original_keys(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.is_excluded_original())
            .map(|r| r.key.to_string())
            .collect()
    }
}

impl From<Vec<ParameterRecord>> for ParameterSequence {
    fn from(records: Vec<ParameterRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ParameterRecord> for ParameterSequence {
    fn from_iter<I: IntoIterator<Item = ParameterRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ParameterSequence {
    type Item = ParameterRecord;
    type IntoIter = crate::compat::vec::IntoIter<ParameterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterSequence {
    type Item = &'a ParameterRecord;
    type IntoIter = core::slice::Iter<'a, ParameterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a mut ParameterSequence {
    type Item = &'a mut ParameterRecord;
    type IntoIter = core::slice::IterMut<'a, ParameterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter_mut()
    }
}
