//! Status Line Component
//!
//! Displays mode indicator, search query, messages and row counts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Success => Color::Green,
        }
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    mode: InputMode,
    search: Option<&'a str>,
    message: Option<(&'a str, MessageType)>,
    item_count: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            search: None,
            message: None,
            item_count: None,
        }
    }

    pub fn search(mut self, query: &'a str) -> Self {
        self.search = Some(query);
        self
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn item_count(mut self, selected: usize, total: usize) -> Self {
        self.item_count = Some((selected, total));
        self
    }
}

fn mode_style(mode: InputMode) -> Style {
    let bg = match mode {
        InputMode::Normal => Color::Blue,
        InputMode::Insert => Color::Green,
        InputMode::Search => Color::Magenta,
        InputMode::Confirm => Color::Red,
        InputMode::Alert => Color::Yellow,
    };
    Style::default().fg(Color::Black).bg(bg)
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style(self.mode).add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16 + 1;

        let text_style = Style::default().bg(Color::DarkGray);
        if let Some(query) = self.search {
            buf.set_string(x, area.y, format!("/{}", query), text_style.fg(Color::White));
        } else if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, text_style.fg(msg_type.color()));
        }

        let Some((selected, total)) = self.item_count else { return };
        let right_text = format!("{}/{}", selected + 1, total);
        let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
        buf.set_string(right_x, area.y, &right_text, text_style.fg(Color::Gray));
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl HelpBar<'_> {
    pub fn for_mode(mode: InputMode) -> Self {
        let hints = match mode {
            InputMode::Normal => vec![
                ("j/k", "navigate"),
                ("n", "new"),
                ("dd", "delete"),
                ("D", "delete all"),
                ("/", "search"),
                ("q", "quit"),
            ],
            InputMode::Insert => vec![
                ("Tab", "next field"),
                ("C-g", "generate"),
                ("Enter", "save"),
                ("Esc", "cancel"),
            ],
            InputMode::Search => vec![
                ("Enter", "keep filter"),
                ("Esc", "clear"),
                ("C-u", "clear line"),
            ],
            InputMode::Confirm => vec![("y", "yes"), ("n", "no")],
            InputMode::Alert => vec![("Enter", "ok")],
        };
        Self { hints }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            let key_style = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
