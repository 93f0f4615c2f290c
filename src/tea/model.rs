//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure widget state - no channels, no terminal handles.

use chrono::NaiveTime;

use super::command::Command;
use crate::config::WidgetConfig;
use crate::core::{
    validate_default_time, Boundary, Field, FormatMode, InteractionHub, NodeId, Overlay,
    SelectionSync, TimeValue,
};
use crate::render::{next_version, EntryView, FieldView, ListView, RenderState};
use crate::{tlog_debug, tlog_warn};

/// Message shown in place of the widget body after a configuration error.
pub const INVALID_DEFAULT_TIME_MESSAGE: &str = "Invalid default time format";

/// Whether the widget body is usable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Ready,
    /// Terminal. The editable controls are no longer rendered.
    Error(String),
    /// Terminal. Torn down; the model no longer reacts to UI events.
    Unmounted,
}

/// Widget state - the single source of truth.
#[derive(Debug)]
pub struct Model {
    pub config: WidgetConfig,
    pub mode: FormatMode,
    pub display: DisplayState,

    pub time: TimeValue,
    pub lists: SelectionSync,
    pub overlay: Overlay,
    pub focus: Option<Field>,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,
}

impl Model {
    /// Mount a widget. `now` seeds the value when no default time is given.
    ///
    /// Returns the initial commands: the first `onTimeSelected`
    /// notification, unless the default time is malformed.
    pub fn init(config: WidgetConfig, now: NaiveTime, hub: &InteractionHub) -> (Self, Vec<Command>) {
        let mode = config.format_mode();
        let boundary = Boundary::new(NodeId::next());
        let overlay = Overlay::new(config.show_dropdown, boundary, hub.subscribe());

        let (time, display) = match config.default_time.as_deref() {
            None => (TimeValue::from_clock(now, mode), DisplayState::Ready),
            Some(raw) => match validate_default_time(raw, mode) {
                Ok(default) => (TimeValue::from_default(&default, mode), DisplayState::Ready),
                Err(e) => {
                    tlog_warn!("{}", e);
                    (
                        TimeValue::from_clock(now, mode),
                        DisplayState::Error(INVALID_DEFAULT_TIME_MESSAGE.to_string()),
                    )
                }
            },
        };

        let lists = SelectionSync::synced_with(&time);
        let mut model = Self {
            config,
            mode,
            display,
            time,
            lists,
            overlay,
            focus: None,
            dirty: true,
        };

        let mut cmds = Vec::new();
        if !model.is_error() {
            if let Some(value) = model.time.announce() {
                tlog_debug!("Initial time {}", value);
                cmds.push(Command::NotifyTimeSelected(value));
            }
        }
        (model, cmds)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.display, DisplayState::Error(_))
    }

    pub fn is_unmounted(&self) -> bool {
        self.display == DisplayState::Unmounted
    }

    /// Boundary root; hosts include it in the ancestry of inside targets.
    pub fn root(&self) -> NodeId {
        self.overlay.boundary().root()
    }

    /// Create an immutable snapshot for the render thread.
    pub fn snapshot(&self) -> RenderState {
        let error = match &self.display {
            DisplayState::Error(message) => Some(message.clone()),
            DisplayState::Ready | DisplayState::Unmounted => None,
        };

        let fields = self
            .mode
            .fields()
            .iter()
            .map(|&field| FieldView {
                field,
                text: self.time.text(field).to_string(),
                focused: self.focus == Some(field),
            })
            .collect();

        let lists = self
            .lists
            .lists()
            .map(|list| ListView {
                field: list.field(),
                entries: list
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| EntryView {
                        text: entry.text.clone(),
                        highlighted: list.highlighted() == Some(i),
                        group: entry.group,
                    })
                    .collect(),
                scroll_top: list.scroll_top(),
            })
            .collect();

        RenderState {
            version: next_version(),
            root: Some(self.root()),
            label: self.config.label.clone(),
            display_value: self.time.display_value().to_string(),
            fields,
            lists,
            overlay_open: self.overlay.is_open(),
            error,
        }
    }
}
