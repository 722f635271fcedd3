//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod load;
mod output;

pub use generate::{GenerateReport, PreviewFile, PreviewReport};
pub use load::LoadReport;
pub use output::{Report, TerminalOutput};
