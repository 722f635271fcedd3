//! Load command report data structures.

use super::output::{Output, Report};

/// Module produced for one marked import.
#[derive(Debug)]
pub struct LoadReport {
    pub code: String,
    /// Source map, printed after the code when requested.
    pub map: Option<String>,
}

impl Report for LoadReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(self.code.trim_end());
        if let Some(map) = &self.map {
            out.divider("Source map");
            out.preformatted(map);
        }
    }
}
