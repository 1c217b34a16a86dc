use crate::ui_state::{UiState, new_textarea};
use tui_textarea::TextArea;

#[derive(Debug, Clone, PartialEq)]
pub enum PopupType {
    None,
    Error(String),
    /// Path prompt standing in for the open-file dialog.
    Open,
}

pub struct PopupState {
    pub current: PopupType,
    pub input: TextArea<'static>,
}

impl PopupState {
    pub(crate) fn new() -> PopupState {
        PopupState {
            current: PopupType::None,
            input: new_textarea("Enter a file or directory"),
        }
    }

    fn open(&mut self, popup: PopupType) {
        if popup == PopupType::Open {
            self.input.select_all();
            self.input.cut();
        }
        self.current = popup
    }

    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    fn close(&mut self) {
        self.current = PopupType::None;
        self.input.select_all();
        self.input.cut();
    }
}

impl UiState {
    pub fn show_popup(&mut self, popup: PopupType) {
        self.popup.open(popup);
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.popup.current {
            PopupType::Error(e) => Some(e.as_str()),
            _ => None,
        }
    }

    /// Text typed into the open prompt.
    pub fn popup_input(&self) -> String {
        self.popup.input.lines().join("")
    }
}
