//! TEA Update Function
//!
//! The pure update function that processes messages:
//!
//! ```text
//! update : Msg -> Model -> (Model, Cmd)
//! ```
//!
//! Side effects (dataset reload, committing a selection through the
//! controller, patronus assignment) are represented as Commands the
//! imperative shell executes.

use crate::select::Region;

use super::msg::Msg;
use super::state;

/// Commands that need to be executed by the runtime (imperative shell)
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// No command
    None,
    /// Quit the application
    Quit,
    /// Reload the dataset from disk
    ReloadData,
    /// Commit the bar at an index as a region's selection
    CommitSelection(Region, usize),
    /// Clear a region's selection
    ClearSelection(Region),
    /// Run the patronus assignment for a name
    AssignPatronus(String),
    /// Set a status message
    SetStatus(String),
}

impl Cmd {
    /// Check if this is a quit command
    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}

/// Pure view-state model; no I/O dependencies
#[derive(Debug, Clone)]
pub struct Model {
    /// Chart region currently on screen
    pub region: Region,
    /// Transient bar cursor (the hover analogue), never part of the
    /// selection state
    pub cursor: usize,
    /// Bars in the current region's chart
    pub bar_count: usize,

    // Detail panel
    pub detail_visible: bool,
    pub detail_scroll: usize,
    pub detail_lines: usize,
    pub detail_height: usize,

    // Patronus modal
    pub patronus_open: bool,
    pub patronus_input: String,

    // Help overlay
    pub help_open: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            region: Region::Houses,
            cursor: 0,
            bar_count: 0,
            detail_visible: true,
            detail_scroll: 0,
            detail_lines: 0,
            detail_height: 20,
            patronus_open: false,
            patronus_input: String::new(),
            help_open: false,
        }
    }
}

/// The core update function - processes a message and returns new
/// state plus the command the shell must run. Pure and deterministic.
pub fn update(msg: Msg, model: Model) -> (Model, Cmd) {
    match msg {
        // === Lifecycle ===
        Msg::Quit => (model, Cmd::Quit),
        Msg::Tick => (model, Cmd::None),
        Msg::Resize(_, _) => (model, Cmd::None),
        Msg::Noop => (model, Cmd::None),

        // === Cursor ===
        Msg::CursorLeft => (
            Model {
                cursor: state::move_cursor_left(model.cursor),
                ..model
            },
            Cmd::None,
        ),

        Msg::CursorRight => (
            Model {
                cursor: state::move_cursor_right(model.cursor, model.bar_count),
                ..model
            },
            Cmd::None,
        ),

        Msg::JumpFirst => (Model { cursor: 0, ..model }, Cmd::None),

        Msg::JumpLast => (
            Model {
                cursor: model.bar_count.saturating_sub(1),
                ..model
            },
            Cmd::None,
        ),

        // === Regions ===
        // Switching regions moves the cursor home but leaves every
        // region's committed selection untouched.
        Msg::NextRegion => (
            Model {
                region: model.region.next(),
                cursor: 0,
                detail_scroll: 0,
                ..model
            },
            Cmd::None,
        ),

        Msg::PrevRegion => (
            Model {
                region: model.region.prev(),
                cursor: 0,
                detail_scroll: 0,
                ..model
            },
            Cmd::None,
        ),

        Msg::SwitchToRegion(region) => (
            Model {
                region,
                cursor: 0,
                detail_scroll: 0,
                ..model
            },
            Cmd::None,
        ),

        // === Selection ===
        Msg::Select => {
            if model.bar_count == 0 {
                (model, Cmd::None)
            } else {
                let cmd = Cmd::CommitSelection(model.region, model.cursor);
                (
                    Model {
                        detail_scroll: 0,
                        ..model
                    },
                    cmd,
                )
            }
        }

        Msg::ClearSelection => {
            let region = model.region;
            (model, Cmd::ClearSelection(region))
        }

        // === Detail panel ===
        Msg::ToggleDetailPanel => (
            Model {
                detail_visible: !model.detail_visible,
                ..model
            },
            Cmd::None,
        ),

        Msg::DetailScrollUp => (
            Model {
                detail_scroll: state::scroll_detail(
                    model.detail_scroll,
                    -1,
                    model.detail_lines,
                    model.detail_height,
                ),
                ..model
            },
            Cmd::None,
        ),

        Msg::DetailScrollDown => (
            Model {
                detail_scroll: state::scroll_detail(
                    model.detail_scroll,
                    1,
                    model.detail_lines,
                    model.detail_height,
                ),
                ..model
            },
            Cmd::None,
        ),

        // === Patronus modal ===
        Msg::OpenPatronus => (
            Model {
                patronus_open: true,
                patronus_input: String::new(),
                ..model
            },
            Cmd::None,
        ),

        Msg::PatronusInput(c) => {
            let mut input = model.patronus_input.clone();
            input.push(c);
            (
                Model {
                    patronus_input: input,
                    ..model
                },
                Cmd::None,
            )
        }

        Msg::PatronusBackspace => {
            let mut input = model.patronus_input.clone();
            input.pop();
            (
                Model {
                    patronus_input: input,
                    ..model
                },
                Cmd::None,
            )
        }

        Msg::PatronusConfirm => {
            let name = model.patronus_input.clone();
            (
                Model {
                    patronus_open: false,
                    patronus_input: String::new(),
                    ..model
                },
                Cmd::AssignPatronus(name),
            )
        }

        Msg::PatronusCancel => (
            Model {
                patronus_open: false,
                patronus_input: String::new(),
                ..model
            },
            Cmd::None,
        ),

        // === Modals ===
        Msg::ToggleHelp => (
            Model {
                help_open: !model.help_open,
                ..model
            },
            Cmd::None,
        ),

        Msg::CloseModal => (
            Model {
                help_open: false,
                patronus_open: false,
                ..model
            },
            Cmd::None,
        ),

        // === Actions ===
        Msg::ReloadData => (model, Cmd::ReloadData),
    }
}
