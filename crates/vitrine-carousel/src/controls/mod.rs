//! Navigation and pagination control state
//!
//! Pure state derived from [`MoveEvent`](crate::MoveEvent)s. The browser
//! binding mirrors it onto buttons and indicators through class toggles.

mod navigation;
mod pagination;

pub use navigation::NavigationState;
pub use pagination::Pagination;
