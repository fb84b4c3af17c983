use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use crate::ui::view::{Element, Tone};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const PANEL_WIDTH: u16 = 52;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view_model();

    frame.render_widget(Header::new().widget(view.title, app.endpoint()), header);
    frame.render_widget(Clear, body);

    let content_height: u16 = view.elements.iter().map(element_height).sum();
    let panel = centered_rect_by_size(body, PANEL_WIDTH, content_height.saturating_add(2));
    let block = Block::default()
        .title(Span::styled(view.title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut y = inner.y;
    for element in &view.elements {
        if y >= inner.bottom() {
            break;
        }
        let focused = element.control() == Some(app.focus());
        let remaining = inner.bottom() - y;

        match element {
            Element::Input {
                label,
                value,
                masked,
                error,
                ..
            } => {
                let rect = Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 3.min(remaining),
                };
                let shown = if *masked {
                    "•".repeat(value.chars().count())
                } else {
                    value.clone()
                };
                let border = if focused {
                    FOCUS_BORDER
                } else if error.is_some() {
                    STATUS_ERROR
                } else {
                    GLOBAL_BORDER
                };
                let cursor_x = rect.x + 1 + (shown.chars().count() as u16).min(rect.width.saturating_sub(3));
                let widget = Paragraph::new(shown).style(Style::default().fg(HEADER_TEXT)).block(
                    Block::default()
                        .title(*label)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                );
                frame.render_widget(widget, rect);
                if focused && rect.height == 3 {
                    frame.set_cursor_position((cursor_x, rect.y + 1));
                }
                y += rect.height;

                if let Some(error) = error {
                    if y < inner.bottom() {
                        let line = Rect {
                            x: inner.x + 1,
                            y,
                            width: inner.width.saturating_sub(1),
                            height: 1,
                        };
                        frame.render_widget(
                            Paragraph::new(error.as_str()).style(Style::default().fg(STATUS_ERROR)),
                            line,
                        );
                        y += 1;
                    }
                }
            }
            Element::Button { label, enabled, .. } => {
                // Blank line above every button.
                y += 1;
                if y >= inner.bottom() {
                    break;
                }
                let style = button_style(*enabled, focused);
                let line = Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(format!("[ {} ]", label), style))
                        .alignment(Alignment::Center),
                    line,
                );
                y += 1;
            }
            Element::Message { tone, text } => {
                let line = Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(text.as_str())
                        .style(Style::default().fg(tone_color(*tone)))
                        .alignment(Alignment::Center),
                    line,
                );
                y += 1;
            }
        }
    }

    frame.render_widget(Footer::new().widget(footer, app.route()), footer);
}

fn element_height(element: &Element) -> u16 {
    match element {
        Element::Input { error, .. } => 3 + u16::from(error.is_some()),
        Element::Button { .. } => 2,
        Element::Message { .. } => 1,
    }
}

fn button_style(enabled: bool, focused: bool) -> Style {
    match (enabled, focused) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(ACCENT),
        (false, true) => Style::default().fg(DISABLED_TEXT).bg(ACTIVE_HIGHLIGHT),
        (false, false) => Style::default().fg(DISABLED_TEXT),
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => HEADER_TEXT,
        Tone::Success => STATUS_OK,
        Tone::Error => STATUS_ERROR,
    }
}
