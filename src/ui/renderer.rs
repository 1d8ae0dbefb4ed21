//! Renderer
//!
//! Main rendering logic for the application.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use super::components::{
    Alert, AlertDialog, ConfirmDialog, EmptyState, HelpBar, ListViewState, LoginList, MessageType,
    RegistrationForm, RegistrationFormWidget, SplashScreen, SplashState, StatusLine,
};
use crate::input::InputMode;
use crate::store::LoginRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Splash,
    List,
    Form,
}

pub struct UiState<'a> {
    pub view: View,
    pub mode: InputMode,
    pub splash: &'a SplashState,
    pub rows: Vec<&'a LoginRecord>,
    pub list_state: &'a mut ListViewState,
    pub search: Option<&'a str>,
    pub message: Option<(&'a str, MessageType)>,
    pub confirm_message: Option<&'a str>,
    pub alert: Option<&'a Alert>,
    pub registration_form: Option<&'a RegistrationForm>,
}

pub struct Renderer;

impl Renderer {
    pub fn hex_color(rgb: u32) -> Color {
        Color::Rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let size = frame.area();

        if state.view == View::Splash {
            frame.render_widget(SplashScreen::new(state.splash), size);
            return;
        }

        let chunks = create_main_layout(size);

        render_content(frame, chunks[0], state);
        render_status_line(frame, chunks[1], state);
        frame.render_widget(HelpBar::for_mode(state.mode), chunks[2]);
        render_overlays(frame, size, state);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_content(frame: &mut Frame, area: Rect, state: &mut UiState) {
    render_list(frame, area, state);
    if state.view == View::Form {
        if let Some(form) = state.registration_form {
            frame.render_widget(RegistrationFormWidget::new(form), area);
        }
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode);

    if let Some(query) = state.search {
        status = status.search(query);
    } else if let Some((msg, msg_type)) = state.message {
        status = status.message(msg, msg_type);
    }

    if let Some(selected) = state.list_state.selected() {
        status = status.item_count(selected, state.list_state.total);
    }

    frame.render_widget(status, area);
}

fn render_list(frame: &mut Frame, area: Rect, state: &mut UiState) {
    let block = create_logins_block(Color::Magenta);

    if state.rows.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = EmptyState::new("Nothing here yet").hint("Press 'n' to add a login");
        frame.render_widget(empty, inner);
        return;
    }

    let list = LoginList::new(&state.rows).block(block);
    frame.render_stateful_widget(list, area, state.list_state);
}

fn create_logins_block(border_color: Color) -> Block<'static> {
    Block::default()
        .title(" Logins ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}

fn render_overlays(frame: &mut Frame, area: Rect, state: &UiState) {
    if let Some(alert) = state.alert {
        frame.render_widget(AlertDialog::new(alert), area);
        return;
    }

    if state.mode != InputMode::Confirm {
        return;
    }
    if let Some(msg) = state.confirm_message {
        frame.render_widget(ConfirmDialog::new(" Confirm ", msg), area);
    }
}
