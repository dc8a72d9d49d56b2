//! Key mapping for the terminal app.
//!
//! Turns crossterm key events into driver inputs so the driver stays
//! independent of the terminal backend.

use crate::driver::{DriverInput, Speed};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the main loop should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Driver(DriverInput),
    Quit,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    // Ignore release/repeat events reported by some terminals
    if key.kind != KeyEventKind::Press {
        return AppAction::Driver(DriverInput::Other);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppAction::Quit;
    }

    let input = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
        KeyCode::Char(' ') => DriverInput::Toggle,
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => DriverInput::Step,
        KeyCode::Char('r') | KeyCode::Char('R') => DriverInput::Reset,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => DriverInput::Faster,
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => DriverInput::Slower,
        KeyCode::Char('1') => DriverInput::SetSpeed(Speed::VeryFast),
        KeyCode::Char('2') => DriverInput::SetSpeed(Speed::Fast),
        KeyCode::Char('3') => DriverInput::SetSpeed(Speed::Medium),
        KeyCode::Char('4') => DriverInput::SetSpeed(Speed::Slow),
        _ => DriverInput::Other,
    };
    AppAction::Driver(input)
}
