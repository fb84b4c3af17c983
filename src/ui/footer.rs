use crate::ui::app::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// (key, action) pairs shown for each screen.
fn key_hints(route: Route) -> &'static [(&'static str, &'static str)] {
    match route {
        Route::SignUp => &[
            ("Tab/↓", "Next"),
            ("Shift+Tab/↑", "Previous"),
            ("Enter", "Select"),
            ("Esc", "Quit"),
        ],
        Route::Home => &[("Esc", "Quit")],
    }
}

#[derive(Default)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, route: Route) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let separator = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled(" ", dim)];
        for (i, (key, action)) in key_hints(route).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", separator));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {}", action), dim));
        }

        // Right-align the version inside the borders; widths in chars.
        let version = format!("v{} ", VERSION);
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let inner_width = area.width.saturating_sub(2) as usize;
        let padding = inner_width.saturating_sub(used + version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), dim));
        spans.push(Span::styled(version, dim));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
