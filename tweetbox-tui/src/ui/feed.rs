use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::formatting::{format_age, truncate_to_width, wrap_text, BORDER_PADDING};
use super::theme::ThemeColors;
use crate::app::{App, InputMode};

pub fn render_feed(frame: &mut Frame, app: &mut App, area: Rect, theme: &ThemeColors) {
    let title = if app.feed.loading {
        " Feed ⟳ ".to_string()
    } else {
        format!(" Feed ({}) ", app.feed.visible().count())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if app.input_mode == InputMode::Navigation {
            Style::default().fg(theme.primary)
        } else {
            Style::default().fg(theme.border)
        });

    if app.feed.visible().next().is_none() {
        let message = if app.feed.loading { "Loading tweets..." } else { "No tweets yet" };
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                message,
                Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press 'r' to refresh",
                Style::default().fg(theme.text_dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(BORDER_PADDING) as usize;
    let now = chrono::Utc::now();

    let items: Vec<ListItem> = app
        .feed
        .visible()
        .map(|tweet| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("@{}", tweet.username),
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" · {}", format_age(&tweet.created_at, now)),
                    Style::default().fg(theme.text_dim),
                ),
            ])];

            for line in wrap_text(&tweet.text, width.saturating_sub(2)) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", line),
                    Style::default().fg(theme.text),
                )));
            }

            if let Some(url) = tweet.image_url() {
                lines.push(Line::from(Span::styled(
                    format!("  🖼 {}", truncate_to_width(url, width.saturating_sub(5))),
                    Style::default().fg(theme.accent),
                )));
            }

            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.highlight_bg));

    frame.render_stateful_widget(list, area, &mut app.feed.list_state);
}
