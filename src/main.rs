//! evoscope - terminal dashboard for an evolution log
//!
//! Binary entry point for the TUI application.

use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use evoscope::app::App;
use evoscope::config::Config;
use evoscope::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::parse();
    logging::init(config.trace_file.as_deref())?;
    info!(log = %config.log.display(), "starting evoscope");

    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let mut app = App::new(config);

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a 200ms timeout so expired notifications disappear without
/// waiting for a key press.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
