//! Terminal User Interface (TUI) module
//!
//! Interactive front end: shorten, QR codes, path lookup and the admin
//! record list, rendered on stderr so stdout stays clean.

use std::io;
use std::sync::Arc;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use crate::client::ServiceContext;
use crate::config::StaticConfig;
use app::App;
use ui::ui;

type TuiTerminal = Terminal<CrosstermBackend<io::Stderr>>;

/// Run the TUI application
pub async fn run_tui(config: Arc<StaticConfig>) -> color_eyre::Result<()> {
    // 只安装 eyre 钩子，panic 钩子由 system::panic_handler 负责
    let (_panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ServiceContext::new(config));
    info!("TUI started");
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    restore_terminal();
    terminal.show_cursor()?;
    info!("TUI exited");

    res.map_err(Into::into)
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        debug!("disable_raw_mode failed: {}", e);
    }
    if let Err(e) = execute!(io::stderr(), LeaveAlternateScreen) {
        debug!("LeaveAlternateScreen failed: {}", e);
    }
}

/// Main application loop
async fn run_app(terminal: &mut TuiTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // "Redirecting..." 已绘制，再发起查询
        if app.pending_redirect.is_some() {
            app.finish_redirect().await;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            let should_exit = event_handler::handle_key_event(app, key).await?;
            if should_exit {
                return Ok(());
            }
        }
    }
}
