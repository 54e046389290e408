//! bxedit: a small terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p bxedit-tui -- [FILE] [--quit-times N] [--log-file PATH]
//! ```
//!
//! # Keys
//!
//! - Arrows, Home/End, PageUp/PageDown: move
//! - Ctrl-S: save (asks for a name when the buffer has none)
//! - Ctrl-O: open another file
//! - Ctrl-F: incremental search (arrows step between matches, Esc restores the cursor)
//! - Ctrl-G: help
//! - Ctrl-X: quit

mod config;
mod input;
mod logging;
mod ui;

use anyhow::{Context, Result};
use bxedit_core::{Document, EditorSession, KeyOutcome, session::HELP_MESSAGE};
use clap::Parser;
use config::Args;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::{
    io::{self, stdout},
    process,
    time::{Duration, Instant},
};
use tracing::{error, info};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct App {
    session: EditorSession,
    should_quit: bool,
}

impl App {
    fn new(args: &Args) -> Result<Self> {
        let config = args.editor_config(config::process_env);
        let mut session = match &args.file {
            Some(path) => EditorSession::with_file(path, config)
                .with_context(|| format!("opening {}", path.display()))?,
            None => EditorSession::new(Document::new(), config),
        };
        if session.status_message().is_none() {
            session.set_status(HELP_MESSAGE);
        }
        Ok(Self {
            session,
            should_quit: false,
        })
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(key) = input::translate_key(key) else {
            return;
        };
        if self.session.process_key(key) == KeyOutcome::Quit {
            self.should_quit = true;
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.session
            .set_screen_size(area.height as usize, area.width as usize);
        let snapshot = self.session.snapshot(Instant::now());
        ui::draw(frame, &snapshot);
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)
}

fn install_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        error!(%info, "panic");
        default_panic(info);
    }));
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("bxedit: {err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let _log_guard = logging::init(args.log_file.as_deref())?;
    let mut app = App::new(args)?;
    info!(file = ?args.file, "starting");

    install_panic_hook();
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let result = Terminal::new(backend)
        .context("initializing terminal")
        .and_then(|mut terminal| run_app(&mut terminal, &mut app));

    restore_terminal().context("restoring terminal")?;
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| app.render(f))
            .context("drawing frame")?;

        if app.should_quit {
            break;
        }

        if event::poll(POLL_INTERVAL).context("polling input")?
            && let Event::Key(key) = event::read().context("reading input")?
        {
            app.handle_key_event(key);
        }
    }

    terminal.show_cursor().context("showing cursor")?;
    Ok(())
}
