//! Exhaustion policy applied after every successful page.
//!
//! The check is a heuristic: `floor(total_hits / page)` is compared against the page
//! size rather than computing the exact number of remaining hits, so it can stop one
//! page early or late near exact page boundaries.

use crate::interactive_ratatui::constants::PAGE_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exhaustion {
    /// The search matched nothing.
    NoResults,
    /// Results were found but no further page is expected.
    NoMoreResults,
}

/// Decide whether the search is exhausted after receiving `page`.
///
/// `None` means another page may be requested.
pub fn check_exhaustion(total_hits: u64, page: u32) -> Option<Exhaustion> {
    if total_hits == 0 {
        return Some(Exhaustion::NoResults);
    }

    let remaining_estimate = total_hits / u64::from(page.max(1));
    if remaining_estimate < PAGE_SIZE as u64 {
        Some(Exhaustion::NoMoreResults)
    } else {
        None
    }
}
