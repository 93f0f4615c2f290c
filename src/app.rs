use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::config::WidgetConfig;
use crate::core::InteractionHub;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::ui::{self, Hit};
use crate::{tlog, tlog_debug, tlog_trace, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(5);

pub struct LogicThread;

impl LogicThread {
    /// Drive the widget from terminal events until quit or shutdown.
    ///
    /// Returns the last value the widget reported through `onTimeSelected`.
    pub fn run(
        config: WidgetConfig,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<Option<String>> {
        tlog_debug!(
            "LogicThread::run mode={:?} dropdown={} inline_edit={}",
            config.format_mode(),
            config.show_dropdown,
            config.allow_inline_edit
        );
        let hub = InteractionHub::new();
        let mut host = Host::new(config, chrono::Local::now().time(), &hub);
        send_state(&state_tx, &mut host);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                let (width, height) = crossterm::terminal::size()?;
                if host.handle_event(event, Rect::new(0, 0, width, height)) {
                    shutdown.store(true, Ordering::Relaxed);
                    break;
                }
            }

            if host.model.dirty {
                send_state(&state_tx, &mut host);
            }
        }

        host.teardown();
        tlog_debug!("Listeners left after teardown: {}", hub.listener_count());
        Ok(host.last_value)
    }
}

/// One mounted widget plus the host-side bookkeeping the terminal needs:
/// the last snapshot drawn (for hit-testing) and the last reported value.
pub struct Host {
    pub model: Model,
    pub last_value: Option<String>,
    last_state: RenderState,
}

impl Host {
    pub fn new(config: WidgetConfig, now: chrono::NaiveTime, hub: &InteractionHub) -> Self {
        let (model, cmds) = Model::init(config, now, hub);
        let last_state = model.snapshot();
        let mut host = Self {
            model,
            last_value: None,
            last_state,
        };
        host.execute(cmds);
        host
    }

    pub fn last_state(&self) -> &RenderState {
        &self.last_state
    }

    /// Translate one terminal event into messages. Returns true on quit.
    pub fn handle_event(&mut self, event: Event, area: Rect) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.dispatch(Message::Key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let messages = self.click_messages(area, mouse.column, mouse.row);
                messages.into_iter().any(|msg| self.dispatch(msg))
            }
            Event::Resize(..) => {
                self.model.dirty = true;
                false
            }
            _ => false,
        }
    }

    /// Messages for a left click, hit-tested against the last drawn frame.
    fn click_messages(&self, area: Rect, column: u16, row: u16) -> Vec<Message> {
        let layout = ui::layout(area, &self.last_state);
        let hit = ui::hit_test(&layout, column, row);
        tlog_trace!("Click at ({}, {}) hit {:?}", column, row, hit);

        let inside = || Message::Interaction {
            ancestry: vec![self.model.root()],
        };
        match hit {
            Hit::Field(field) => vec![inside(), Message::FocusIn(field)],
            Hit::Entry(field, index) => vec![inside(), Message::ListClick { field, index }],
            Hit::Body => vec![inside()],
            Hit::Outside => vec![Message::Interaction { ancestry: vec![] }, Message::FocusOut],
        }
    }

    /// Run one message through update and execute what comes back.
    pub fn dispatch(&mut self, msg: Message) -> bool {
        let cmds = update(&mut self.model, msg);
        self.execute(cmds)
    }

    fn execute(&mut self, cmds: Vec<Command>) -> bool {
        let mut queue: VecDeque<Command> = cmds.into();
        while let Some(cmd) = queue.pop_front() {
            match cmd {
                Command::NotifyTimeSelected(value) => {
                    tlog!("onTimeSelected({})", value);
                    self.last_value = Some(value);
                }
                Command::FocusField(field) => {
                    tlog_trace!("Command::FocusField {}", field);
                    queue.extend(update(&mut self.model, Message::FocusIn(field)));
                }
                Command::ReleaseFocus => {
                    tlog_trace!("Command::ReleaseFocus");
                    queue.extend(update(&mut self.model, Message::FocusOut));
                }
                Command::Quit => {
                    tlog_debug!("Command::Quit");
                    return true;
                }
            }
        }
        false
    }

    pub fn teardown(&mut self) {
        self.dispatch(Message::Teardown);
    }
}

fn send_state(state_tx: &Sender<RenderState>, host: &mut Host) {
    let state = host.model.snapshot();
    host.last_state = state.clone();
    host.model.dirty = false;
    let _ = state_tx.try_send(state);
}
