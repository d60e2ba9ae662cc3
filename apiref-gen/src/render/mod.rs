//! Documents rendered from a catalog.
//!
//! - [`markdown`] - API reference in Markdown
//! - [`listing`] - Compact one-line-per-endpoint signatures

mod listing;
mod markdown;

pub use listing::listing;
pub use markdown::markdown;
