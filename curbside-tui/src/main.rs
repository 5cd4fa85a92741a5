//! Terminal UI for curbside: pick a recycling zone, browse its pickups, export reminders.

mod app;
mod config;
mod input;
mod logging;
mod preference;
mod ui;

use std::{fs, io, path::PathBuf, sync::Arc, time::Duration as StdDuration};

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use curbside_core::{CurbsideService, export::ExportFormat};
use curbside_provider_maplewood as maplewood;
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use tracing::{error, info};

use crate::app::{App, Status};
use crate::input::Action;
use crate::preference::PreferenceStore;

const MATCH_LIMIT: usize = 5;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load(config::config_path().as_deref())?;
    let reminder = config.reminders.options()?;
    let pinned_time = config.reminders.time.is_some().then_some(reminder.time);

    let data_dir = dirs::data_dir()
        .map_or_else(|| PathBuf::from("."), |dir| dir.join(config::APP_DIR));
    logging::init(&data_dir)?;
    info!(year = config.season.year, exceptions = config.exceptions.len(), "starting curbside");

    // HTTP + service setup
    let client = Client::builder().user_agent("curbside/0.1").build()?;
    let town = maplewood::plugin_with_exceptions(client, Arc::new(config.exception_table()));
    let service = Arc::new(
        CurbsideService::new(Arc::new(town), config.season)
            .with_file_prefix(config.export.prefix.clone()),
    );

    let app = App::new(
        service,
        PreferenceStore::in_dir(&data_dir),
        config.export.directory(),
        reminder,
        pinned_time,
    );

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::LocateAddress => {
                    let query = app.address_input.trim().to_owned();
                    if query.is_empty() {
                        app.status = Some(Status::Error(
                            "Type a street address, then press Enter".into(),
                        ));
                        continue;
                    }

                    app.is_loading = true;
                    app.status = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app.service.locate(&query, MATCH_LIMIT).await;

                    app.is_loading = false;
                    match res {
                        Ok(matches) if matches.is_empty() => {
                            app.matches.clear();
                            app.status = Some(Status::Error(
                                "Address not found. Please select your zone manually.".into(),
                            ));
                        }
                        Ok(matches) => {
                            app.matches = matches;
                            app.match_index = 0;
                        }
                        Err(err) => {
                            error!(%err, "address lookup failed");
                            app.status = Some(Status::Error(format!("Lookup failed: {err}")));
                        }
                    }
                }
                Action::Export(format) => {
                    app.status = Some(match export(&app, format) {
                        Ok(path) => Status::Info(format!("Saved {}", path.display())),
                        Err(err) => {
                            error!(err = ?err, "export failed");
                            Status::Error(format!("Export failed: {err:#}"))
                        }
                    });
                }
            }
        }
    }

    Ok(())
}

fn export(app: &App, format: ExportFormat) -> Result<PathBuf> {
    let file = app
        .service
        .export(app.zone, &app.reminder, format, Utc::now())
        .context("failed to encode export")?;
    fs::create_dir_all(&app.export_dir)
        .with_context(|| format!("failed to create {}", app.export_dir.display()))?;
    let path = app.export_dir.join(&file.file_name);
    fs::write(&path, file.contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote export");
    Ok(path)
}
