//! Render models handed to the host
//!
//! Layout only: these types say what a screen shows, not how it is drawn.

pub mod detail;
pub mod prompt;
pub mod rows;

pub use detail::{MapRegion, SchoolDetail};
pub use prompt::Prompt;
pub use rows::{BoardRow, DirectoryRow};
