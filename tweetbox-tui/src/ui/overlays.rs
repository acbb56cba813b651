use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::formatting::{centered_rect, truncate_to_width};
use super::theme::ThemeColors;
use crate::app::{App, InputMode};
use crate::toast::ToastLevel;

pub fn render_header(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let who = match &app.session {
        Some(session) => format!("@{}", session.username()),
        None => "signed out".to_string(),
    };
    let mut spans = vec![
        Span::styled(" TweetBox ", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
        Span::styled(format!("· {} ", app.server_url), Style::default().fg(theme.text_dim)),
        Span::styled(format!("· {}", who), Style::default().fg(theme.text)),
    ];
    if app.in_flight > 0 {
        spans.push(Span::styled(
            format!("  posting… ({})", app.in_flight),
            Style::default().fg(theme.warning),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_footer(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let text = match app.input_mode {
        InputMode::Typing if app.compose.image_panel_open => {
            "Enter: Add Image | Tab: Switch field | ^P/Esc: Close panel | ^C: Quit"
        }
        InputMode::Typing => "Enter: Tweet | ^P: Image URL | ^X: Remove image | Esc: Feed | ^C: Quit",
        InputMode::Navigation => "i: Compose | j/k: Scroll | r: Refresh | ?: Help | q: Quit",
    };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(theme.text_dim))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Toasts stack in the top-right corner, newest at the bottom
pub fn render_toasts(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    if app.toaster.is_empty() {
        return;
    }
    let width = 40.min(area.width.saturating_sub(2));
    let mut y = area.y + 1;

    for toast in app.toaster.visible() {
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);
        let color = match toast.level {
            ToastLevel::Success => theme.success,
            ToastLevel::Warning => theme.warning,
            ToastLevel::Error => theme.error,
        };

        frame.render_widget(Clear, rect);
        let widget = Paragraph::new(truncate_to_width(&toast.label(), width.saturating_sub(4) as usize))
            .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(theme.highlight_bg)),
            );
        frame.render_widget(widget, rect);
        y += 3;
    }
}

pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &ThemeColors) {
    let modal_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, modal_area);

    let sections: [(&str, &[(&str, &str)]); 2] = [
        (
            "Compose",
            &[
                ("Enter", "Post tweet (needs text and a session)"),
                ("Ctrl+S", "Post tweet"),
                ("Ctrl+P", "Open/close the image URL box"),
                ("Tab", "Switch between text and image URL"),
                ("Ctrl+X", "Remove attached image"),
                ("Esc", "Close image box, then back to feed"),
            ],
        ),
        (
            "Feed",
            &[
                ("i / n", "Compose"),
                ("j / k", "Scroll"),
                ("r", "Refresh"),
                ("q / Esc", "Quit"),
                ("Ctrl+C", "Quit from anywhere"),
            ],
        ),
    ];

    let mut lines = vec![Line::from("")];
    for (category, items) in sections {
        lines.push(Line::from(Span::styled(
            category,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        for (key, description) in items {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Style::default().fg(theme.success)),
                Span::styled(*description, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
            .title(" Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(theme.background)),
    );
    frame.render_widget(help, modal_area);
}
