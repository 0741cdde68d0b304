//! Constants for the interactive gallery
//!
//! Timing, layout and pagination values live here so the reducer, renderer and
//! shell agree on them.

// Pagination
/// Number of hits the API returns per page
pub const PAGE_SIZE: usize = 12;

/// First page of every search
pub const FIRST_PAGE: u32 = 1;

// Timing constants
/// Display duration for the "nothing found" / "no more images" toasts
pub const INFO_TOAST_DURATION_MS: u64 = 1500;

/// Display duration for the generic failure toast
pub const ERROR_TOAST_DURATION_MS: u64 = 2000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the footer holding the loader / load-more control
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Page size for PageUp/PageDown navigation
pub const LIST_PAGE_JUMP: usize = 10;

// Dialog dimensions
/// Maximum width for the help dialog and image modal
pub const DIALOG_MAX_WIDTH: u16 = 90;

/// Minimum margin around dialogs
pub const DIALOG_MARGIN: u16 = 4;

/// Maximum width of a toast notification
pub const TOAST_MAX_WIDTH: u16 = 50;

// Messages
pub const NO_RESULTS_TEXT: &str = "Nothing found. Try a different query.";
pub const NO_MORE_RESULTS_TEXT: &str = "No more images found.";
pub const FAILURE_TEXT: &str = "Something went wrong...";
pub const EXIT_PROMPT_TEXT: &str = "Press Ctrl+C again to exit";
