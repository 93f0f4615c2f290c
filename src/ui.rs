//! Terminal UI rendering for the time picker.
//!
//! Design:
//! - One bordered box holds the three fields; the overlay lists hang below
//!   the fields inside the same box, so the box is the widget boundary
//! - Highlighted list entries are bold + accent, matching the field value
//! - The focused field is reversed
//! - The `00`/`01` pair shares the first row of its list
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates widget state. Layout is a pure function of the area and the
//! snapshot, so the logic thread can hit-test mouse clicks against exactly
//! what was drawn.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::Field;
use crate::render::{ListView, RenderState};

// Color tokens
const COLOR_ACCENT: Color = Color::Rgb(0xF3, 0x03, 0x7E);
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_ERROR: Color = Color::Red;

// Layout constants
const MARGIN_X: u16 = 2;
const MARGIN_Y: u16 = 1;
const FIELD_WIDTH: u16 = 4;
const SEPARATOR_WIDTH: u16 = 3;
const LIST_WIDTH: u16 = 7;
const LIST_HEIGHT: u16 = 8;
const ENTRY_WIDTH: u16 = 2;
const BODY_WIDTH: u16 = 26;
const ERROR_BODY_WIDTH: u16 = 34;

/// Screen regions of everything clickable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetLayout {
    pub label: Option<Rect>,
    /// The bordered widget box. Anything inside is inside the boundary.
    pub body: Rect,
    pub fields: Vec<(Field, Rect)>,
    /// `(field, entry index, rect)` for every visible list entry.
    pub entries: Vec<(Field, usize, Rect)>,
    pub status: Option<Rect>,
}

/// What a click at a screen position landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Field(Field),
    Entry(Field, usize),
    /// Inside the widget box but not on a field or entry.
    Body,
    Outside,
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// First visible row of a list: the scroll target, clamped so the list
/// stays full when scrolled near its end.
fn first_visible_row(list: &ListView, total_rows: usize) -> usize {
    list.scroll_row()
        .min(total_rows.saturating_sub(LIST_HEIGHT as usize))
}

/// Compute the layout for a snapshot drawn into `area`.
pub fn layout(area: Rect, state: &RenderState) -> WidgetLayout {
    let mut y = area.y + MARGIN_Y;
    let x = area.x + MARGIN_X;

    let label = state.label.as_ref().map(|_| {
        let rect = Rect::new(x, y, BODY_WIDTH, 1).intersection(area);
        y += 1;
        rect
    });

    if state.error.is_some() {
        let body = Rect::new(x, y, ERROR_BODY_WIDTH, 4).intersection(area);
        return WidgetLayout {
            label,
            body,
            ..WidgetLayout::default()
        };
    }

    let list_rows = if state.overlay_open { LIST_HEIGHT + 1 } else { 0 };
    let body = Rect::new(x, y, BODY_WIDTH, 3 + list_rows).intersection(area);
    let inner_x = x + 1;
    let fields_y = y + 1;

    let mut fields = Vec::new();
    let mut field_x = inner_x;
    for view in &state.fields {
        fields.push((
            view.field,
            Rect::new(field_x, fields_y, FIELD_WIDTH, 1).intersection(area),
        ));
        field_x += FIELD_WIDTH + SEPARATOR_WIDTH;
    }

    let mut entries = Vec::new();
    if state.overlay_open {
        let lists_y = fields_y + 2;
        for (column, list) in state.lists.iter().enumerate() {
            let list_x = inner_x + column as u16 * LIST_WIDTH;
            let rows = list.rows();
            let start = first_visible_row(list, rows.len());
            for (offset, row) in rows.iter().skip(start).take(LIST_HEIGHT as usize).enumerate() {
                for (slot, &index) in row.iter().enumerate() {
                    let rect = Rect::new(
                        list_x + slot as u16 * (ENTRY_WIDTH + 1),
                        lists_y + offset as u16,
                        ENTRY_WIDTH,
                        1,
                    );
                    entries.push((list.field, index, rect.intersection(area)));
                }
            }
        }
    }

    let status_y = body.bottom();
    let status = (status_y < area.bottom()).then(|| Rect::new(area.x, area.bottom() - 1, area.width, 1));

    WidgetLayout {
        label,
        body,
        fields,
        entries,
        status,
    }
}

/// Map a screen position to what was drawn there.
pub fn hit_test(layout: &WidgetLayout, column: u16, row: u16) -> Hit {
    if let Some((field, _)) = layout.fields.iter().find(|(_, r)| contains(*r, column, row)) {
        return Hit::Field(*field);
    }
    if let Some((field, index, _)) = layout
        .entries
        .iter()
        .find(|(_, _, r)| contains(*r, column, row))
    {
        return Hit::Entry(*field, *index);
    }
    if contains(layout.body, column, row) {
        Hit::Body
    } else {
        Hit::Outside
    }
}

/// Main render function - entry point for all UI drawing.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    let layout = layout(area, state);

    if let (Some(rect), Some(label)) = (layout.label, state.label.as_deref()) {
        frame.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(COLOR_TEXT_DIMMED))),
            rect,
        );
    }

    if let Some(ref message) = state.error {
        render_error(frame, message, layout.body);
        return;
    }

    let border_style = if state.overlay_open {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", state.display_value)),
        layout.body,
    );

    render_fields(frame, state, &layout);
    if state.overlay_open {
        render_lists(frame, state, &layout);
    }
    if let Some(rect) = layout.status {
        frame.render_widget(Paragraph::new(keymap_line(state)), rect);
    }
}

fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(COLOR_ERROR),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_ERROR)),
    );
    frame.render_widget(paragraph, area);
}

fn render_fields(frame: &mut Frame, state: &RenderState, layout: &WidgetLayout) {
    for (view, (_, rect)) in state.fields.iter().zip(&layout.fields) {
        let style = if view.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let text = format!("[{:<2}]", view.text);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), *rect);

        // Separator after the field
        let sep = match view.field {
            Field::Hour => " : ",
            _ => "   ",
        };
        let sep_rect = Rect::new(rect.right(), rect.y, SEPARATOR_WIDTH, 1).intersection(layout.body);
        frame.render_widget(
            Paragraph::new(Span::styled(sep, Style::default().fg(COLOR_TEXT_MUTED))),
            sep_rect,
        );
    }
}

fn render_lists(frame: &mut Frame, state: &RenderState, layout: &WidgetLayout) {
    for (field, index, rect) in &layout.entries {
        let Some(entry) = state
            .lists
            .iter()
            .find(|l| l.field == *field)
            .and_then(|l| l.entries.get(*index))
        else {
            continue;
        };
        let style = if entry.highlighted {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT_DIMMED)
        };
        frame.render_widget(Paragraph::new(Span::styled(entry.text.clone(), style)), *rect);
    }
}

/// Bottom line: keybindings for the current focus.
fn keymap_line(state: &RenderState) -> Line<'static> {
    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);

    let mut bindings = vec![("Tab", "next"), ("S-Tab", "prev")];
    match state.focused() {
        Some(Field::Meridiem) => {
            bindings.push(("a/p", "AM/PM"));
            bindings.push(("Enter", "close"));
        }
        Some(_) => bindings.push(("0-9", "type")),
        None => bindings.push(("click", "open")),
    }
    bindings.push(("Esc", "quit"));

    let mut spans = Vec::new();
    for (i, (key, desc)) in bindings.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", desc_style));
        }
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }
    Line::from(spans)
}
