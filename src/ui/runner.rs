use std::time::{Duration, Instant};
use crossterm::event::{self, Event, KeyEventKind};
use anyhow::Result;
use crate::clipboard::copy_to_clipboard;
use crate::ui::{App, handle_key_event, layout::render_ui, terminal::Tui};
use crate::ui::app::AppAction;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| render_ui(f, &app, Instant::now()))?;

        // Handle pending actions
        match std::mem::replace(&mut app.pending_action, AppAction::None) {
            AppAction::Copy(command) => match copy_to_clipboard(&command) {
                Ok(backend) => {
                    tracing::info!(%backend, "command copied");
                    app.copy_succeeded(Instant::now());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard copy failed");
                    app.copy_failed(format!("Copy failed: {:#}", e));
                }
            },
            AppAction::None => {}
        }

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(&mut app, key);
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick(Instant::now());
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
