//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::SortOrder;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move selection up (previous row in grid view)
    MoveUp,
    /// Move selection down (next row in grid view)
    MoveDown,
    /// Move selection left (previous product)
    MoveLeft,
    /// Move selection right (next product)
    MoveRight,
    /// Jump to first product
    FirstItem,
    /// Jump to last product
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling (detail overlay)
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll detail view up one line
    ScrollUp,
    /// Scroll detail view down one line
    ScrollDown,
    /// Scroll detail view up one page
    PageUp,
    /// Scroll detail view down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail view for the selected product
    OpenDetail,
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the category filter picker
    OpenCategoryFilter,
    /// Open the sort order picker
    OpenSortMenu,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Navigate up in modal (previous option)
    ModalUp,
    /// Navigate down in modal (next option)
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Browse State
    // ─────────────────────────────────────────────────────────────────────────
    /// Apply a category filter
    SetCategoryFilter(String),
    /// Clear the category filter (back to "all")
    ClearCategoryFilter,
    /// Apply a sort order
    SetSortOrder(SortOrder),
    /// Toggle between grid and list presentation
    ToggleView,
    /// Restore query, category, sort, and view to their defaults
    ResetBrowse,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────
    /// Reload the catalog from disk
    ReloadCatalog,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::MoveUp => write!(f, "MoveUp"),
            Action::MoveDown => write!(f, "MoveDown"),
            Action::MoveLeft => write!(f, "MoveLeft"),
            Action::MoveRight => write!(f, "MoveRight"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenDetail => write!(f, "OpenDetail"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenCategoryFilter => write!(f, "OpenCategoryFilter"),
            Action::OpenSortMenu => write!(f, "OpenSortMenu"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::SetCategoryFilter(category) => write!(f, "SetCategoryFilter({})", category),
            Action::ClearCategoryFilter => write!(f, "ClearCategoryFilter"),
            Action::SetSortOrder(sort) => write!(f, "SetSortOrder({})", sort.label()),
            Action::ToggleView => write!(f, "ToggleView"),
            Action::ResetBrowse => write!(f, "ResetBrowse"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ReloadCatalog => write!(f, "ReloadCatalog"),
        }
    }
}
