use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use curbside_core::Zone;
use curbside_core::export::ExportFormat;

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.locate`(...) for the typed address
    LocateAddress,
    /// Write the current zone's reminders to disk
    Export(ExportFormat),
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Right, Tab, Up};

    // Global quit shortcut
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    // 'q' is text while typing an address
    if key.code == Char('q') && key.modifiers.is_empty() && app.screen != Screen::AddressSearch {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::ZoneSelect => match key.code {
            Up | Char('k') => {
                if app.zone_list_index > 0 {
                    app.zone_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.zone_list_index + 1 < Zone::ALL.len() {
                    app.zone_list_index += 1;
                }
            }
            Enter | Char(' ') => {
                app.select_current_zone();
            }
            Char('/' | 'f') => {
                app.screen = Screen::AddressSearch;
                app.status = None;
            }
            Char('g') => {
                app.open_guidelines();
            }
            _ => {}
        },

        Screen::AddressSearch => match key.code {
            Up => {
                if app.match_index > 0 {
                    app.match_index -= 1;
                }
            }
            Down => {
                if app.match_index + 1 < app.matches.len() {
                    app.match_index += 1;
                }
            }
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    app.address_input.push(character);
                }
            }
            Backspace => {
                app.address_input.pop();
            }
            Enter => {
                action = Action::LocateAddress;
            }
            Right | Tab => {
                app.select_current_match();
            }
            Left | Esc => {
                app.screen = Screen::ZoneSelect;
                app.matches.clear();
                app.match_index = 0;
            }
            _ => {}
        },

        Screen::ScheduleView => match key.code {
            Char('a') => {
                app.show_all = !app.show_all;
            }
            Char('t') => {
                app.toggle_timing();
            }
            Char('c') => {
                action = Action::Export(ExportFormat::Csv);
            }
            Char('i') => {
                action = Action::Export(ExportFormat::Ics);
            }
            Char('g') => {
                app.open_guidelines();
            }
            Left | Esc | Char('b') => {
                app.screen = Screen::ZoneSelect;
            }
            _ => {}
        },

        Screen::Guidelines => {
            if matches!(key.code, Left | Esc | Char('b' | 'g')) {
                app.close_guidelines();
            }
        }
    }
    action
}
