use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use timepick::app::LogicThread;
use timepick::config::WidgetConfig;
use timepick::render::RenderState;
use timepick::{tlog, tlog_error, ui, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// Timepick - pick a time of day in the terminal
#[derive(Parser, Debug)]
#[command(name = "timepick")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    TIMEPICK_DEBUG=1     Enable debug logging (alternative to --debug)\n    TIMEPICK_LOG=<lvl>   Log level: error, warn, info, debug, trace")]
pub struct Cli {
    /// Initial value, "HH:MM AM" (12-hour) or "HH:MM" (24-hour)
    #[arg(short = 't', long)]
    pub default_time: Option<String>,

    /// Label shown above the fields
    #[arg(short, long)]
    pub label: Option<String>,

    /// Never open the selection lists
    #[arg(long)]
    pub no_dropdown: bool,

    /// Disable typing into the fields
    #[arg(long)]
    pub read_only: bool,

    /// Use the 24-hour format
    #[arg(long = "24h")]
    pub use_24h: bool,

    /// Read configuration from this file instead of ~/.timepick/timepick.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the selected time as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (writes to ~/.timepick/timepick.log)
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut WidgetConfig) {
        if let Some(ref time) = self.default_time {
            config.default_time = Some(time.clone());
        }
        if let Some(ref label) = self.label {
            config.label = Some(label.clone());
        }
        if self.no_dropdown {
            config.show_dropdown = false;
        }
        if self.read_only {
            config.allow_inline_edit = false;
        }
        if self.use_24h {
            config.use_24_hour_format = true;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    timepick::log::init(cli.debug);
    if cli.debug {
        tlog!("Timepick starting (debug mode enabled)");
    } else {
        tlog!("Timepick starting");
    }

    let mut config = match cli.config {
        Some(ref path) => WidgetConfig::load_from(path)?,
        None => WidgetConfig::load()?,
    };
    cli.apply(&mut config);

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle = thread::spawn(move || LogicThread::run(config, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let selected = logic_handle.join();
    restore_terminal(&mut terminal)?;
    result?;

    match selected {
        Ok(value) => {
            if let Some(value) = value? {
                println!("{}", format_output(&value, cli.json)?);
            }
        }
        Err(_) => tlog_error!("Logic thread panicked"),
    }
    Ok(())
}

fn format_output(value: &str, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&serde_json::json!({ "time": value }))?)
    } else {
        Ok(value.to_string())
    }
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
