//! Data models for vcslinks.

mod lines;
mod permalink;

pub use lines::{LinesSpecifier, parse_lines_spec};
pub use permalink::PermalinkMode;
