use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::formatting::truncate_to_width;
use super::theme::ThemeColors;
use crate::app::{App, InputMode};
use crate::compose::{Focus, IMAGE_URL_PLACEHOLDER, MAX_CHARS};

const AVATAR_WIDTH: u16 = 18;

/// Rows needed by the compose form in its current state
pub fn compose_height(app: &App) -> u16 {
    let mut height = 2 + 3 + 1; // borders + text input + toolbar
    if app.compose.image_panel_open {
        height += 3;
    }
    if !app.compose.image.is_empty() {
        height += 3;
    }
    height
}

/// Render the compose form: avatar column, text input, toolbar, URL panel, preview
pub fn render_compose_form(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let active = app.input_mode == InputMode::Typing;
    let outer = Block::default()
        .title(" Compose ")
        .borders(Borders::ALL)
        .border_style(if active {
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border)
        });
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(AVATAR_WIDTH), Constraint::Min(0)])
        .split(inner);

    render_avatar(frame, app, columns[0], theme);

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(1)];
    if app.compose.image_panel_open {
        constraints.push(Constraint::Length(3));
    }
    if !app.compose.image.is_empty() {
        constraints.push(Constraint::Length(3));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(columns[1]);

    // Text input
    let text_focused = active && app.compose.focus == Focus::Text;
    let text_block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(text_focused, theme));
    let text_area = text_block.inner(rows[0]);
    frame.render_widget(text_block, rows[0]);
    frame.render_widget(&app.compose.textarea, text_area);

    render_toolbar(frame, app, rows[1], theme);

    let mut row = 2;
    if app.compose.image_panel_open {
        render_image_panel(frame, app, rows[row], theme);
        row += 1;
    }
    if !app.compose.image.is_empty() {
        render_preview(frame, app, rows[row], theme);
    }
}

fn focus_style(focused: bool, theme: &ThemeColors) -> Style {
    if focused {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.border)
    }
}

fn render_avatar(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let width = area.width.saturating_sub(2) as usize;
    let (name, avatar) = tweetbox_types::identity(app.session.as_ref());

    let lines = match &app.session {
        Some(_) => vec![
            Line::from(Span::styled("( ◕‿◕ )", Style::default().fg(theme.primary))),
            Line::from(Span::styled(
                truncate_to_width(&format!("@{}", name), width),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(avatar, width),
                Style::default().fg(theme.text_dim),
            )),
        ],
        None => vec![
            Line::from(Span::styled("( ? )", Style::default().fg(theme.text_dim))),
            Line::from(Span::styled("signed out", Style::default().fg(theme.text_dim))),
            Line::from(Span::styled(
                truncate_to_width(avatar, width),
                Style::default().fg(theme.text_dim),
            )),
        ],
    };

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_toolbar(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12), Constraint::Length(11)])
        .split(area);

    let icon_style = if app.compose.image_panel_open {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.primary)
    };
    let icons = Paragraph::new(Line::from(vec![
        Span::styled("🖼 ^P image", icon_style),
        Span::styled("  ^X remove", Style::default().fg(theme.text_dim)),
    ]));
    frame.render_widget(icons, chunks[0]);

    let count = app.compose.char_count();
    let counter_style = if app.compose.is_over_limit() {
        Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
    } else if count >= MAX_CHARS * 9 / 10 {
        Style::default().fg(theme.warning)
    } else {
        Style::default().fg(theme.text_dim)
    };
    let counter = Paragraph::new(format!("{}/{}", count, MAX_CHARS))
        .style(counter_style)
        .alignment(Alignment::Right);
    frame.render_widget(counter, chunks[1]);

    // Disabled button is dimmed, same as the web form
    let button_style = if app.can_submit() {
        Style::default()
            .fg(theme.background)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_dim).bg(theme.highlight_bg)
    };
    let button = Paragraph::new(" Tweet ")
        .style(button_style)
        .alignment(Alignment::Center);
    frame.render_widget(button, chunks[2]);
}

fn render_image_panel(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let focused = app.input_mode == InputMode::Typing && app.compose.focus == Focus::ImageUrl;

    let content = if app.compose.image_url_input.is_empty() {
        Span::styled(IMAGE_URL_PLACEHOLDER, Style::default().fg(theme.text_dim))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Span::styled(
            format!("{}{}", app.compose.image_url_input, cursor),
            Style::default().fg(theme.text),
        )
    };

    let panel = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Image URL ")
            .title_bottom(Line::from(" Enter: Add Image ").right_aligned())
            .border_style(focus_style(focused, theme).bg(theme.highlight_bg)),
    );
    frame.render_widget(panel, area);
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let width = area.width.saturating_sub(4) as usize;
    let preview = Paragraph::new(Line::from(Span::styled(
        truncate_to_width(&app.compose.image, width),
        Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Attached image ")
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(preview, area);
}
