//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; `App::dispatch` applies them.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Cursor ===
    /// Move the cursor down on the current screen
    CursorDown,
    /// Move the cursor up on the current screen
    CursorUp,

    // === Form ===
    /// Open the drill-down screen of the focused picker
    Open,
    /// Focus and open the picker at this form row
    OpenRow(usize),

    // === Drill-down ===
    /// Choose the row under the cursor
    Choose,
    /// Choose the row at this index
    ChooseRow(usize),
    /// Pop the drill-down screen
    Back,

    /// No action
    None,
}
