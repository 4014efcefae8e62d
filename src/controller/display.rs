//! Listing display state.

/// Finite render state of the primary listing.
///
/// Transitions are driven by the listing controller's operations; consumers
/// only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch completed
    Success,
    /// The last fetch failed with a user-facing message
    Error(String),
}
