//! Shared utility functions used by the CLI commands.

mod formatting;
mod interaction;

pub use formatting::format_date_only;
pub use interaction::confirm;
