//! Tool definitions module.
//!
//! The complete tool table, grouped by controller area. Adding a tool means
//! adding one [`ToolDescriptor`] entry; no handler code is written per tool.

pub mod chart;
pub mod watchlist;

pub use chart::CHART_TOOLS;
pub use watchlist::WATCHLIST_TOOLS;

use super::descriptor::ToolDescriptor;

/// Every built-in descriptor in discovery order: watchlists first, then charts.
pub fn all() -> impl Iterator<Item = &'static ToolDescriptor> {
    WATCHLIST_TOOLS.iter().chain(CHART_TOOLS.iter())
}
