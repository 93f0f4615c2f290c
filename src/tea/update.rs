//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute. Typed commits update the list
//! highlight in the same call, so the highlight always observes the
//! post-commit value.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{mask_digits, mask_meridiem, Field, MaskOutcome, MeridiemOutcome, NodeId};
use crate::{tlog, tlog_debug, tlog_trace};

use super::command::Command;
use super::message::Message;
use super::model::{DisplayState, Model};

/// Pure update function: Model + Message → Commands
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    if model.is_error() || model.is_unmounted() {
        // Terminal states: only teardown and quitting are honored.
        match msg {
            Message::Teardown => model.overlay.teardown(),
            Message::Key(key) if is_quit_key(&key) => cmds.push(Command::Quit),
            _ => tlog_trace!("Ignoring {:?} in {:?}", msg, model.display),
        }
        return cmds;
    }

    match msg {
        Message::Key(key) => update_key(model, key, &mut cmds),
        Message::FieldInput { field, text } => field_input(model, field, &text, &mut cmds),
        Message::FocusIn(field) => focus_in(model, field, &mut cmds),
        Message::Blur(field) => blur(model, field, &mut cmds),
        Message::FocusOut => {
            if let Some(field) = model.focus {
                blur(model, field, &mut cmds);
            }
        }
        Message::ListClick { field, index } => list_click(model, field, index, &mut cmds),
        Message::Interaction { ancestry } => interaction(model, &ancestry),
        Message::EnterPressed => {
            if model.overlay.on_enter(model.focus) {
                model.dirty = true;
            }
        }
        Message::Teardown => {
            tlog_debug!("Widget teardown");
            model.overlay.teardown();
            model.focus = None;
            model.display = DisplayState::Unmounted;
            model.dirty = true;
        }
    }

    cmds
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn update_key(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    if is_quit_key(&key) {
        cmds.push(Command::Quit);
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if model.overlay.on_enter(model.focus) {
                model.dirty = true;
            }
        }

        KeyCode::Tab => {
            let fields = model.mode.fields();
            let next = match model.focus {
                None => fields.first().copied(),
                Some(field) => field.next(model.mode),
            };
            match next {
                Some(field) => focus_in(model, field, cmds),
                None => {
                    if let Some(field) = model.focus {
                        blur(model, field, cmds);
                    }
                }
            }
        }

        KeyCode::BackTab => {
            if let Some(previous) = model.focus.and_then(|f| f.previous()) {
                focus_in(model, previous, cmds);
            }
        }

        KeyCode::Backspace => {
            if let Some(field) = model.focus {
                let mut text = model.time.text(field).to_string();
                text.pop();
                field_input(model, field, &text, cmds);
            }
        }

        KeyCode::Char(c) => {
            if let Some(field) = model.focus {
                let text = format!("{}{}", model.time.text(field), c);
                field_input(model, field, &text, cmds);
            }
        }

        _ => {}
    }
}

fn notify(cmds: &mut Vec<Command>, value: Option<String>) {
    if let Some(value) = value {
        tlog!("Time selected: {}", value);
        cmds.push(Command::NotifyTimeSelected(value));
    }
}

fn field_input(model: &mut Model, field: Field, text: &str, cmds: &mut Vec<Command>) {
    if !model.config.allow_inline_edit {
        tlog_trace!("Inline edit disabled, ignoring {} input {:?}", field, text);
        return;
    }
    if !model.mode.fields().contains(&field) {
        return;
    }

    let previous = model.time.text(field).to_string();
    if field == Field::Meridiem {
        match mask_meridiem(&previous, text) {
            MeridiemOutcome::Selected(meridiem) => {
                notify(cmds, model.time.set_meridiem(Some(meridiem)));
                model.lists.sync(field, meridiem.as_str());
                model.overlay.close();
                tlog_debug!("Meridiem committed: {}", meridiem);
                cmds.push(Command::advance_from(field, model.mode));
            }
            MeridiemOutcome::Cleared => {
                notify(cmds, model.time.set_meridiem(None));
            }
        }
        model.dirty = true;
        return;
    }

    match mask_digits(field, model.mode, &previous, text) {
        MaskOutcome::Rejected => {
            tlog_trace!("Rejected {} input {:?} (kept {:?})", field, text, previous);
        }
        MaskOutcome::Pending(value) => {
            notify(cmds, model.time.set(field, &value));
            model.dirty = true;
        }
        MaskOutcome::Committed(value) => {
            notify(cmds, model.time.set(field, &value));
            model.lists.sync(field, &value);
            tlog_debug!("{} committed: {}", field, value);
            cmds.push(Command::advance_from(field, model.mode));
            model.dirty = true;
        }
    }
}

fn focus_in(model: &mut Model, field: Field, cmds: &mut Vec<Command>) {
    if !model.mode.fields().contains(&field) {
        return;
    }
    if let Some(current) = model.focus {
        if current != field {
            blur(model, current, cmds);
        }
    }
    model.focus = Some(field);
    model.overlay.on_focus_in();
    model.dirty = true;
}

fn blur(model: &mut Model, field: Field, cmds: &mut Vec<Command>) {
    if !model.time.is_complete(field) {
        notify(cmds, model.time.restore(field));
        let restored = model.time.text(field).to_string();
        model.lists.sync(field, &restored);
    }
    if model.focus == Some(field) {
        model.focus = None;
    }
    model.dirty = true;
}

fn list_click(model: &mut Model, field: Field, index: usize, cmds: &mut Vec<Command>) {
    if !model.overlay.is_open() {
        tlog_trace!("List click on {} ignored while overlay is closed", field);
        return;
    }
    if let Some(text) = model.lists.click(field, index) {
        notify(cmds, model.time.set(field, &text));
        model.dirty = true;
    }
}

fn interaction(model: &mut Model, ancestry: &[NodeId]) {
    if model.overlay.on_interaction(ancestry) {
        model.dirty = true;
    }
}
