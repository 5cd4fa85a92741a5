use curbside_core::{
    Material, Zone,
    reminder::ReminderTiming,
    schedule::{next_pickup_index, visible_weeks},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, Screen, Status};

const DATE_FORMAT: &str = "%a, %b %-d, %Y";

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let town = &app.service.town().meta.name;
    let header = Paragraph::new(format!(
        "{town} recycling calendar {}",
        app.service.season().year
    ))
    .block(Block::default().borders(Borders::ALL).title("Curbside"));
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::ZoneSelect => draw_zone_select(frame, app, *content_area),
        Screen::AddressSearch => draw_address_search(frame, app, *content_area),
        Screen::ScheduleView => draw_schedule_view(frame, app, *content_area),
        Screen::Guidelines => draw_guidelines(frame, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::ZoneSelect => {
            "↑/↓ move · Enter select zone · / find by address · g guidelines · q/Ctrl-C quit"
        }
        Screen::AddressSearch => {
            "Type an address · Enter search · Tab/→ use match · Left/Esc back · Ctrl-C quit"
        }
        Screen::ScheduleView => {
            "a all weeks · t timing · c CSV · i iCal · g guidelines · Esc/←/b zones · q quit"
        }
        Screen::Guidelines => "Esc/←/b/g back · q/Ctrl-C quit",
    };

    let (status_text, status_style) = if app.is_loading {
        (
            format!("Loading… · {nav_hint}"),
            Style::default().fg(Color::Yellow),
        )
    } else {
        match &app.status {
            Some(Status::Error(msg)) => (
                format!("{msg} · {nav_hint}"),
                Style::default().fg(Color::Red),
            ),
            Some(Status::Info(msg)) => (
                format!("{msg} · {nav_hint}"),
                Style::default().fg(Color::Green),
            ),
            None => (nav_hint.to_owned(), Style::default()),
        }
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_zone_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = Zone::ALL
        .iter()
        .enumerate()
        .map(|(idx, zone)| {
            let prefix = if idx == app.zone_list_index {
                "> "
            } else {
                "  "
            };
            let marker = if *zone == app.zone { " (saved)" } else { "" };
            ListItem::new(format!("{prefix}{}{marker}", zone.label()))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select your zone (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.zone_list_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_address_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input
            Constraint::Min(0),    // matches
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, results_area] = chunks else {
        return;
    };

    let input = Paragraph::new(app.address_input.as_str())
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Find your zone in {} (street address, Enter)",
            app.service.town().meta.name
        )))
        .wrap(Wrap { trim: true });

    frame.render_widget(input, *input_area);

    let items = if app.matches.is_empty() {
        vec![ListItem::new(
            "No matches yet. Type at least 3 characters and press Enter.",
        )]
    } else {
        app.matches
            .iter()
            .map(|found| {
                let zone = found
                    .zone
                    .map_or_else(|| "outside zones".to_owned(), |zone| zone.label().to_owned());
                ListItem::new(format!("{} · {zone}", found.candidate.label))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Matches (↑/↓, Tab/→ to use)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.matches.is_empty() {
        state.select(Some(app.match_index));
    }
    frame.render_stateful_widget(list, *results_area, &mut state);
}

fn draw_schedule_view(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(notice_height(app)),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [notice_area, table_area, reminder_area] = chunks else {
        return;
    };

    if let Some(notice) = &app.notice {
        let text = format!(
            "Pickup changed for {}: moved from {} to {} ({})",
            notice.zone_label(),
            notice.original_date.format(DATE_FORMAT),
            notice.new_date.format(DATE_FORMAT),
            notice.reason
        );
        let banner = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Notice"))
            .style(Style::default().fg(Color::Black).bg(Color::Yellow))
            .wrap(Wrap { trim: true });
        frame.render_widget(banner, *notice_area);
    }

    let title = format!("{} (Esc/←/b to go back)", app.zone.label());
    let today = App::today();
    let rows_source = visible_weeks(&app.weeks, today, app.show_all);

    if rows_source.is_empty() {
        let paragraph = Paragraph::new("No remaining pickups this season.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *table_area);
    } else {
        let next = next_pickup_index(&app.weeks, today);
        let rows = rows_source.into_iter().map(|(index, week)| {
            let note = if let Some(reason) = &week.delay_reason {
                format!("Delayed ({reason})")
            } else if Some(index) == next {
                "Next Pickup".to_owned()
            } else {
                String::new()
            };

            let mut style = Style::default().fg(material_color(week.material));
            if Some(index) == next {
                style = style.add_modifier(Modifier::BOLD);
            }

            Row::new(vec![
                Cell::from(week.pickup_date.format(DATE_FORMAT).to_string()),
                Cell::from(week.material.as_str()),
                Cell::from(note),
            ])
            .style(style)
        });

        let column_widths = [
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Min(20),
        ];

        let table = Table::new(rows, column_widths)
            .header(
                Row::new(vec!["Pickup Date", "Type", "Note"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::ALL).title(title))
            .column_spacing(1);

        frame.render_widget(table, *table_area);
    }

    let timing = match app.reminder.timing {
        ReminderTiming::Night => "night before",
        ReminderTiming::Morning => "morning of",
    };
    let reminder = Paragraph::new(format!(
        "Reminders: {timing} at {} · export to {}",
        app.reminder.time.format("%-I:%M %p"),
        app.export_dir.display()
    ))
    .block(Block::default().borders(Borders::ALL).title("Reminders"));
    frame.render_widget(reminder, *reminder_area);
}

fn draw_guidelines(frame: &mut Frame<'_>, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [accepted_area, rejected_area] = chunks else {
        return;
    };

    let column_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(*accepted_area);

    for (material, column) in [Material::Fibers, Material::Commingled]
        .into_iter()
        .zip(column_chunks.iter())
    {
        let items = material
            .accepted_items()
            .iter()
            .map(|item| ListItem::new(format!("✓ {item}")))
            .collect::<Vec<ListItem<'_>>>();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(material.guideline_title()),
            )
            .style(Style::default().fg(material_color(material)));
        frame.render_widget(list, *column);
    }

    let rejected = Material::rejected_items().join(" · ");
    let paragraph = Paragraph::new(format!(
        "If in doubt, throw it out. Anything not listed above should not be recycled.\n\n{rejected}"
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Not accepted: these contaminate the recycling"),
    )
    .style(Style::default().fg(Color::Red))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, *rejected_area);
}

fn notice_height(app: &App) -> u16 {
    if app.notice.is_some() { 3 } else { 0 }
}

fn material_color(material: Material) -> Color {
    match material {
        Material::Commingled => Color::Blue,
        Material::Fibers => Color::Green,
    }
}
