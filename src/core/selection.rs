//! Enumerated hour/minute/meridiem lists and their highlight state.
//!
//! Highlight state lives here and is read declaratively by the presentation
//! layer. Each list holds at most one highlighted entry, stored as an index
//! into its immutable entries.

use super::field::{Field, FormatMode, Meridiem};
use super::time_value::TimeValue;
use crate::tlog_debug;

/// One selectable entry. Entries never change once a list is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub text: String,
    /// Index of the first entry of the visual group this entry belongs to.
    /// The `00`/`01` pair at the top of a list shares one group.
    pub group: Option<usize>,
}

impl ListEntry {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            group: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionList {
    field: Field,
    entries: Vec<ListEntry>,
    highlighted: Option<usize>,
    scroll_top: usize,
}

impl SelectionList {
    /// `01..12` in 12h mode, `00..23` with a leading `00`/`01` pair in 24h mode.
    pub fn hours(mode: FormatMode) -> Self {
        let entries = match mode {
            FormatMode::Hour12 => (1..=12).map(|h| ListEntry::plain(format!("{:02}", h))).collect(),
            FormatMode::Hour24 => paired_range(23),
        };
        Self::from_entries(Field::Hour, entries)
    }

    /// `00..59` with a leading `00`/`01` pair.
    pub fn minutes() -> Self {
        Self::from_entries(Field::Minute, paired_range(59))
    }

    pub fn meridiems() -> Self {
        Self::from_entries(
            Field::Meridiem,
            vec![
                ListEntry::plain(Meridiem::Am.as_str()),
                ListEntry::plain(Meridiem::Pm.as_str()),
            ],
        )
    }

    /// List for a field, `None` for the meridiem in 24h mode.
    pub fn for_field(field: Field, mode: FormatMode) -> Option<Self> {
        match field {
            Field::Hour => Some(Self::hours(mode)),
            Field::Minute => Some(Self::minutes()),
            Field::Meridiem if mode.has_meridiem() => Some(Self::meridiems()),
            Field::Meridiem => None,
        }
    }

    fn from_entries(field: Field, entries: Vec<ListEntry>) -> Self {
        Self {
            field,
            entries,
            highlighted: None,
            scroll_top: 0,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_text(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.entries.get(i))
            .map(|e| e.text.as_str())
    }

    /// Entry that should sit at the visible top of the list.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn position(&self, text: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.text == text)
    }

    /// Highlight `index`, clearing any other highlight in the list, and
    /// scroll its group to the top. Returns the entry text.
    pub fn highlight(&mut self, index: usize) -> Option<&str> {
        let entry = self.entries.get(index)?;
        self.scroll_top = entry.group.unwrap_or(index);
        self.highlighted = Some(index);
        Some(self.entries[index].text.as_str())
    }

    /// Highlight the entry whose text equals `text`.
    /// Leaves the list untouched when nothing matches.
    pub fn sync_to(&mut self, text: &str) -> bool {
        match self.position(text) {
            Some(index) => {
                self.highlight(index);
                true
            }
            None => false,
        }
    }
}

fn paired_range(max: u32) -> Vec<ListEntry> {
    (0..=max)
        .map(|v| ListEntry {
            text: format!("{:02}", v),
            group: (v <= 1).then_some(0),
        })
        .collect()
}

/// The three lists of a widget, kept in step with its [`TimeValue`].
#[derive(Debug, Clone)]
pub struct SelectionSync {
    hour: SelectionList,
    minute: SelectionList,
    meridiem: Option<SelectionList>,
}

impl SelectionSync {
    pub fn new(mode: FormatMode) -> Self {
        Self {
            hour: SelectionList::hours(mode),
            minute: SelectionList::minutes(),
            meridiem: SelectionList::for_field(Field::Meridiem, mode),
        }
    }

    /// Build the lists and highlight the entries matching `value`.
    pub fn synced_with(value: &TimeValue) -> Self {
        let mut sync = Self::new(value.mode());
        for field in value.mode().fields() {
            sync.sync(*field, value.text(*field));
        }
        sync
    }

    pub fn list(&self, field: Field) -> Option<&SelectionList> {
        match field {
            Field::Hour => Some(&self.hour),
            Field::Minute => Some(&self.minute),
            Field::Meridiem => self.meridiem.as_ref(),
        }
    }

    fn list_mut(&mut self, field: Field) -> Option<&mut SelectionList> {
        match field {
            Field::Hour => Some(&mut self.hour),
            Field::Minute => Some(&mut self.minute),
            Field::Meridiem => self.meridiem.as_mut(),
        }
    }

    pub fn lists(&self) -> impl Iterator<Item = &SelectionList> {
        [Some(&self.hour), Some(&self.minute), self.meridiem.as_ref()]
            .into_iter()
            .flatten()
    }

    /// Click on an entry: highlight it and return the text the model field
    /// should take.
    pub fn click(&mut self, field: Field, index: usize) -> Option<String> {
        let text = self.list_mut(field)?.highlight(index)?.to_string();
        tlog_debug!("List click {} -> {}", field, text);
        Some(text)
    }

    /// Reverse sync after a typed commit.
    pub fn sync(&mut self, field: Field, text: &str) -> bool {
        self.list_mut(field)
            .map(|list| list.sync_to(text))
            .unwrap_or(false)
    }
}
