use crate::core::{Field, NodeId};
use std::sync::atomic::{AtomicU64, Ordering};

/// One text input as the presentation layer should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub text: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub text: String,
    pub highlighted: bool,
    /// First index of the visual group this entry shares a row with.
    pub group: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub field: Field,
    pub entries: Vec<EntryView>,
    pub scroll_top: usize,
}

impl ListView {
    /// Entries packed into display rows: grouped entries share a row, every
    /// other entry gets its own. Each row holds entry indices.
    pub fn rows(&self) -> Vec<Vec<usize>> {
        let mut rows: Vec<Vec<usize>> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            match (entry.group, rows.last_mut()) {
                (Some(group), Some(row)) if group != i && row.first() == Some(&group) => {
                    row.push(i)
                }
                _ => rows.push(vec![i]),
            }
        }
        rows
    }

    /// Row that contains the scroll target.
    pub fn scroll_row(&self) -> usize {
        self.rows()
            .iter()
            .position(|row| row.contains(&self.scroll_top))
            .unwrap_or(0)
    }
}

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub version: u64,
    /// Boundary root of the widget, `None` before the first snapshot.
    pub root: Option<NodeId>,
    pub label: Option<String>,
    pub display_value: String,
    pub fields: Vec<FieldView>,
    pub lists: Vec<ListView>,
    pub overlay_open: bool,
    /// Set when the widget is in its terminal error state.
    pub error: Option<String>,
}

impl RenderState {
    pub fn focused(&self) -> Option<Field> {
        self.fields.iter().find(|f| f.focused).map(|f| f.field)
    }
}
