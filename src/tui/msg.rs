//! TEA Message Types for the TUI
//!
//! This module defines the Msg enum representing all possible user
//! actions. Messages are just data describing what happened; a single
//! update function processes them.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::select::Region;

/// All possible messages/actions in the TUI
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // === Cursor (transient, never touches selections) ===
    /// Move the bar cursor left
    CursorLeft,
    /// Move the bar cursor right
    CursorRight,
    /// Jump cursor to the first bar
    JumpFirst,
    /// Jump cursor to the last bar
    JumpLast,

    // === Regions ===
    /// Cycle to the next chart region (Tab)
    NextRegion,
    /// Cycle to the previous chart region (Shift+Tab)
    PrevRegion,
    /// Switch to a specific region
    SwitchToRegion(Region),

    // === Selection ===
    /// Commit the cursor position as this region's selection
    Select,
    /// Clear the current region's selection
    ClearSelection,

    // === Detail panel ===
    /// Toggle detail panel visibility
    ToggleDetailPanel,
    /// Scroll detail panel up
    DetailScrollUp,
    /// Scroll detail panel down
    DetailScrollDown,

    // === Patronus modal ===
    /// Open the patronus name input
    OpenPatronus,
    /// Add a character to the name field
    PatronusInput(char),
    /// Remove a character from the name field
    PatronusBackspace,
    /// Run the assignment and close the modal
    PatronusConfirm,
    /// Close the modal without assigning
    PatronusCancel,

    // === Modals ===
    /// Toggle help overlay
    ToggleHelp,
    /// Close any open overlay
    CloseModal,

    // === Actions ===
    /// Reload the dataset from disk
    ReloadData,

    // === Lifecycle ===
    /// Quit the application
    Quit,
    /// Tick event (for status expiry)
    Tick,
    /// Window resized
    Resize(u16, u16),

    // === Internal ===
    /// No operation (for unhandled keys)
    Noop,
}

/// Convert a key event to a message
///
/// Pure function: pattern matching only. The patronus modal captures
/// text input; the help overlay captures everything until closed.
pub fn key_to_msg(
    code: KeyCode,
    modifiers: KeyModifiers,
    patronus_open: bool,
    help_open: bool,
) -> Msg {
    if patronus_open {
        return match code {
            KeyCode::Enter => Msg::PatronusConfirm,
            KeyCode::Esc => Msg::PatronusCancel,
            KeyCode::Backspace => Msg::PatronusBackspace,
            KeyCode::Char(c) => Msg::PatronusInput(c),
            _ => Msg::Noop,
        };
    }

    if help_open {
        return match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Msg::CloseModal,
            _ => Msg::Noop,
        };
    }

    match code {
        // Quit
        KeyCode::Char('q') => Msg::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Msg::Quit,

        // Cursor
        KeyCode::Char('h') | KeyCode::Left => Msg::CursorLeft,
        KeyCode::Char('l') | KeyCode::Right => Msg::CursorRight,
        KeyCode::Char('g') | KeyCode::Home => Msg::JumpFirst,
        KeyCode::Char('G') | KeyCode::End => Msg::JumpLast,

        // Regions
        KeyCode::Tab => Msg::NextRegion,
        KeyCode::BackTab => Msg::PrevRegion,
        KeyCode::Char('1') => Msg::SwitchToRegion(Region::Houses),
        KeyCode::Char('2') => Msg::SwitchToRegion(Region::Species),
        KeyCode::Char('3') => Msg::SwitchToRegion(Region::Blood),

        // Selection
        KeyCode::Enter => Msg::Select,
        KeyCode::Char('c') => Msg::ClearSelection,

        // Detail panel
        KeyCode::Char('d') => Msg::ToggleDetailPanel,
        KeyCode::Char('j') | KeyCode::Down => Msg::DetailScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Msg::DetailScrollUp,

        // Patronus
        KeyCode::Char('p') => Msg::OpenPatronus,

        // Modals
        KeyCode::Char('?') => Msg::ToggleHelp,
        KeyCode::Esc => Msg::CloseModal,

        // Actions
        KeyCode::Char('r') => Msg::ReloadData,

        _ => Msg::Noop,
    }
}

/// Check if a message should cause the app to quit
pub fn is_quit(msg: &Msg) -> bool {
    matches!(msg, Msg::Quit)
}
