//! Registration Form Component
//!
//! Name / email / password form used to add a login.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::input::modes::byte_index;

const NAME: usize = 0;
const EMAIL: usize = 1;
const PASSWORD: usize = 2;

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    pub fn text(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Registration form state
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub fields: Vec<FormField>,
    pub active_field: usize,
    /// Cursor position in the active field, in characters
    pub cursor: usize,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text("Username"),
                FormField::text("Email"),
                FormField::text("Password"),
            ],
            active_field: NAME,
            cursor: 0,
        }
    }

    pub fn active_field(&self) -> &FormField {
        &self.fields[self.active_field]
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % self.fields.len();
        self.cursor = self.fields[self.active_field].char_len();
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            0 => self.fields.len() - 1,
            n => n - 1,
        };
        self.cursor = self.fields[self.active_field].char_len();
    }

    pub fn insert_char(&mut self, c: char) {
        let field = &mut self.fields[self.active_field];
        let at = byte_index(&field.value, self.cursor);
        field.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let field = &mut self.fields[self.active_field];
        let at = byte_index(&field.value, self.cursor);
        field.value.remove(at);
    }

    pub fn delete_char_forward(&mut self) {
        let field = &mut self.fields[self.active_field];
        if self.cursor < field.char_len() {
            let at = byte_index(&field.value, self.cursor);
            field.value.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.active_field().char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.active_field().char_len();
    }

    pub fn clear_field(&mut self) {
        self.fields[self.active_field].value.clear();
        self.cursor = 0;
    }

    /// Replace the password with a generated one
    pub fn set_password(&mut self, password: String) {
        self.fields[PASSWORD].value = password;
        if self.active_field == PASSWORD {
            self.cursor = self.fields[PASSWORD].char_len();
        }
    }

    /// Every field must be filled in. Whitespace counts as content.
    pub fn validate(&self) -> Result<(), String> {
        if self.fields.iter().any(|f| f.value.is_empty()) {
            return Err("All fields must be filled".to_string());
        }
        Ok(())
    }

    pub fn get_name(&self) -> &str {
        &self.fields[NAME].value
    }

    pub fn get_email(&self) -> &str {
        &self.fields[EMAIL].value
    }

    pub fn get_password(&self) -> &str {
        &self.fields[PASSWORD].value
    }
}

/// Registration form widget
pub struct RegistrationFormWidget<'a> {
    form: &'a RegistrationForm,
}

impl<'a> RegistrationFormWidget<'a> {
    pub fn new(form: &'a RegistrationForm) -> Self {
        Self { form }
    }
}

fn field_style(is_active: bool) -> Style {
    if is_active {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default().bg(Color::Black)
    }
}

fn render_field(
    buf: &mut Buffer,
    inner: Rect,
    y: u16,
    field: &FormField,
    is_active: bool,
    cursor: usize,
) {
    let label_width = 12u16;
    let label_style = if is_active {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    buf.set_string(inner.x, y, format!("{}:", field.label), label_style);

    let value_x = inner.x + label_width;
    let value_width = inner.width.saturating_sub(label_width + 1);
    let bg = field_style(is_active);
    for x in value_x..value_x + value_width {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_style(bg);
        }
    }

    buf.set_stringn(value_x, y, &field.value, value_width as usize, bg.fg(Color::White));

    if !is_active {
        return;
    }
    let cursor_x = value_x + cursor as u16;
    if cursor_x < value_x + value_width {
        if let Some(cell) = buf.cell_mut((cursor_x, y)) {
            cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
        }
    }
}

impl Widget for RegistrationFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form_width = 60u16.min(area.width.saturating_sub(4));
        let form_height = 11u16.min(area.height.saturating_sub(2));
        let form_x = area.x + (area.width.saturating_sub(form_width)) / 2;
        let form_y = area.y + (area.height.saturating_sub(form_height)) / 2;
        let form_area = Rect::new(form_x, form_y, form_width, form_height);

        Clear.render(form_area, buf);

        let block = Block::default()
            .title(" Registration ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(form_area);
        block.render(form_area, buf);
        if inner.height == 0 {
            return;
        }

        let mut y = inner.y + 1;
        for (i, field) in self.form.fields.iter().enumerate() {
            if y >= inner.y + inner.height {
                break;
            }
            render_field(buf, inner, y, field, i == self.form.active_field, self.form.cursor);
            y += 2;
        }

        let help_y = inner.y + inner.height - 1;
        let help_text = Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Magenta)),
            Span::raw(" next  "),
            Span::styled("Ctrl+g", Style::default().fg(Color::Magenta)),
            Span::raw(" generate password  "),
            Span::styled("Enter", Style::default().fg(Color::Magenta)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(Color::Magenta)),
            Span::raw(" cancel"),
        ]);
        buf.set_line(inner.x, help_y, &help_text, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(name: &str, email: &str, password: &str) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.fields[NAME].value = name.to_string();
        form.fields[EMAIL].value = email.to_string();
        form.fields[PASSWORD].value = password.to_string();
        form
    }

    #[test]
    fn test_field_cycling() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.active_field().label, "Username");

        form.next_field();
        form.next_field();
        assert_eq!(form.active_field().label, "Password");

        form.next_field();
        assert_eq!(form.active_field().label, "Username");

        form.prev_field();
        assert_eq!(form.active_field().label, "Password");
    }

    #[test]
    fn test_typing_into_fields() {
        let mut form = RegistrationForm::new();
        "Alice".chars().for_each(|c| form.insert_char(c));
        form.next_field();
        "a@x.com".chars().for_each(|c| form.insert_char(c));
        form.delete_char();
        form.insert_char('m');

        assert_eq!(form.get_name(), "Alice");
        assert_eq!(form.get_email(), "a@x.com");
    }

    #[test]
    fn test_delete_forward_removes_char_under_cursor() {
        let mut form = RegistrationForm::new();
        "a§b".chars().for_each(|c| form.insert_char(c));
        form.cursor_home();
        form.cursor_right();

        form.delete_char_forward();
        assert_eq!(form.get_name(), "ab");
        assert_eq!(form.cursor, 1);

        form.cursor_end();
        form.delete_char_forward();
        assert_eq!(form.get_name(), "ab");
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert!(filled_form("Alice", "a@x.com", "p1").validate().is_ok());
        assert_eq!(
            filled_form("Alice", "", "p1").validate(),
            Err("All fields must be filled".to_string())
        );
        assert!(filled_form("", "a@x.com", "p1").validate().is_err());
        assert!(filled_form("Alice", "a@x.com", "").validate().is_err());
    }

    #[test]
    fn test_validate_does_not_trim() {
        assert!(filled_form(" ", "a@x.com", "p1").validate().is_ok());
    }

    #[test]
    fn test_set_password_moves_cursor_when_active() {
        let mut form = RegistrationForm::new();
        form.prev_field();
        form.set_password("ab§±cd12".to_string());

        assert_eq!(form.get_password(), "ab§±cd12");
        assert_eq!(form.cursor, 8);

        form.delete_char();
        assert_eq!(form.get_password(), "ab§±cd1");
    }
}
