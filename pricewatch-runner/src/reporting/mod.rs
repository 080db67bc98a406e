//! Human-readable output: the summary file and the console status.

mod console;
mod format;
mod summary;

pub use console::print_status;
pub use format::format_amount;
pub use summary::{render_summary, write_summary, ALERTS_HEADER, SUMMARY_HEADER};
