//! Popup Components
//!
//! Confirmation and alert dialogs drawn over the current view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Fixed size centered rectangle
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn dialog_block(title: &str, border: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black))
}

/// Confirmation dialog
pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect_fixed(50, 7, area);

        Clear.render(popup_area, buf);

        let block = dialog_block(self.title, Color::Yellow);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let msg = Paragraph::new(self.message)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        msg.render(Rect::new(inner.x, inner.y, inner.width, inner.height.min(2)), buf);

        if inner.height < 4 {
            return;
        }
        let hint = Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" Yes  "),
            Span::styled("[n]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" No"),
        ]);
        buf.set_line(inner.x, inner.y + 3, &hint, inner.width);
    }
}

/// A modal message with a single OK button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct AlertDialog<'a> {
    alert: &'a Alert,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect_fixed(50, 7, area);

        Clear.render(popup_area, buf);

        let title = format!(" {} ", self.alert.title);
        let block = dialog_block(&title, Color::Red);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let msg = Paragraph::new(self.alert.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        msg.render(Rect::new(inner.x, inner.y, inner.width, inner.height.min(3)), buf);

        if inner.height < 4 {
            return;
        }
        let ok_style = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
        let ok = Span::styled("[ OK ]", ok_style);
        let ok_x = inner.x + inner.width.saturating_sub(6) / 2;
        buf.set_span(ok_x, inner.y + 3, &ok, 6);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(r, Rect::new(10, 3, 10, 4));

        let clipped = centered_rect_fixed(50, 7, Rect::new(0, 0, 20, 5));
        assert_eq!(clipped, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_alert_renders_title_and_message() {
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        let alert = Alert::new("Error", "All fields must be filled");

        AlertDialog::new(&alert).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains(" Error "));
        assert!(text.contains("All fields must be filled"));
        assert!(text.contains("[ OK ]"));
    }
}
