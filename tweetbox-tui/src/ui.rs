// UI module - split into cohesive submodules for maintainability
pub mod theme;
mod compose;
mod feed;
mod formatting;
mod overlays;

// Re-export main render function
pub use self::render_main::render;

// Main render logic
mod render_main {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph},
        Frame,
    };

    use super::compose::{compose_height, render_compose_form};
    use super::feed::render_feed;
    use super::overlays::{render_footer, render_header, render_help_modal, render_toasts};
    use super::theme::ThemeColors;
    use crate::app::App;

    /// Render the UI
    pub fn render(app: &mut App, frame: &mut Frame) {
        let area = frame.area();
        let theme = ThemeColors::default();

        frame.render_widget(Clear, area);

        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, area);

        const MIN_WIDTH: u16 = 60;
        const MIN_HEIGHT: u16 = 20;

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let warning = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Terminal Too Small",
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Minimum size: {}x{}", MIN_WIDTH, MIN_HEIGHT),
                    Style::default().fg(theme.text),
                )),
                Line::from(Span::styled(
                    format!("Current size: {}x{}", area.width, area.height),
                    Style::default().fg(theme.warning),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Please resize your terminal window",
                    Style::default().fg(theme.text_dim),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.error)),
            );

            frame.render_widget(warning, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                      // Header
                Constraint::Length(compose_height(app)),    // Compose form
                Constraint::Min(0),                         // Feed
                Constraint::Length(1),                      // Footer
            ])
            .split(area);

        render_header(frame, app, chunks[0], &theme);
        render_compose_form(frame, app, chunks[1], &theme);
        render_feed(frame, app, chunks[2], &theme);
        render_footer(frame, app, chunks[3], &theme);

        render_toasts(frame, app, area, &theme);

        if app.show_help {
            render_help_modal(frame, area, &theme);
        }
    }
}
