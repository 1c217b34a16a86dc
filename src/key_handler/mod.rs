mod action;

use std::{cell::RefCell, time::Duration, time::Instant};

pub use action::{handle_key_event, handle_mouse_event, handle_paste};
use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

use crate::ui_state::Control;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;

#[derive(Debug, PartialEq)]
pub enum Action {
    // Transport
    TogglePlayPause,
    Stop,
    SeekForward,
    SeekBack,
    VolumeUp,
    VolumeDown,
    SetVolume(i32),
    ToggleLoop,
    ToggleShuffle,

    // Seek bar drag session, fraction of the bar width
    SeekPress(f64),
    SeekDrag(f64),
    SeekRelease(f64),

    // Playlist
    PlaySelected,
    PlayIndex(usize),
    SelectRow(usize),
    Scroll(Director),
    ClearPlaylist,
    Drop(String),

    // Display
    Press(Control),
    ToggleFullscreen,
    CycleTheme,

    // Popups
    OpenPrompt,
    OpenConfirm,
    PopupInput(KeyEvent),
    PopupPaste(String),
    ClosePopup,

    SoftReset,
    QUIT,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}

const DOUBLE_CLICK: Duration = Duration::from_millis(400);

thread_local! {
    static LAST_CLICK: RefCell<Option<(Instant, usize)>> = const { RefCell::new(None) };
}

/// Records a click on playlist row `row` and reports whether it completes a
/// double click on that same row.
pub fn is_double_click(row: usize, now: Instant) -> bool {
    LAST_CLICK.with(|last| {
        let mut last = last.borrow_mut();

        let double = match *last {
            Some((prev, prev_row)) => prev_row == row && now.duration_since(prev) < DOUBLE_CLICK,
            None => false,
        };

        // A completed double click starts a fresh sequence
        *last = match double {
            true => None,
            false => Some((now, row)),
        };
        double
    })
}
