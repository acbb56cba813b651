use crate::app::state::{App, InputMode};
use crate::compose::Focus;
use crate::log_key_event;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    log_key_event!(app.log_config, "{:?} mode={:?}", key, app.input_mode);

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Priority 1: Help modal
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.toggle_help();
        }
        return Ok(());
    }

    match app.input_mode {
        InputMode::Typing => handle_compose_keys(app, key),
        InputMode::Navigation => handle_navigation_keys(app, key),
    }
}

fn handle_compose_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('p') => {
                app.toggle_image_panel();
                return Ok(());
            }
            KeyCode::Char('x') => {
                app.compose.remove_image();
                return Ok(());
            }
            KeyCode::Char('s') => {
                app.submit();
                return Ok(());
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => {
            // Close the image panel first, then leave the form
            if app.compose.image_panel_open {
                app.toggle_image_panel();
            } else {
                app.input_mode = InputMode::Navigation;
            }
        }
        KeyCode::Tab if app.compose.image_panel_open => {
            app.compose.focus = match app.compose.focus {
                Focus::Text => Focus::ImageUrl,
                Focus::ImageUrl => Focus::Text,
            };
        }
        KeyCode::Tab => {}
        KeyCode::Enter => match app.compose.focus {
            Focus::ImageUrl => app.add_image(),
            Focus::Text => {
                app.submit();
            }
        },
        _ => match app.compose.focus {
            Focus::ImageUrl => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.compose.push_url_char(c)
                }
                KeyCode::Backspace => app.compose.pop_url_char(),
                _ => {}
            },
            Focus::Text => app.compose.handle_text_input(key),
        },
    }

    Ok(())
}

fn handle_navigation_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('i') | KeyCode::Char('n') | KeyCode::Enter => {
            app.input_mode = InputMode::Typing;
        }
        KeyCode::Char('r') => app.refresh_feed(),
        KeyCode::Char('j') | KeyCode::Down => app.feed.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.feed.select_previous(),
        _ => {}
    }

    Ok(())
}
