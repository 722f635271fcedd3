//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from one regeneration pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Icons directory as shown to the user.
    pub icons_dir: String,
    /// Directories the scanner skipped. Each one was already logged.
    pub unscanned: usize,
    /// Directories skipped because of duplicate export names.
    pub collisions: usize,
    /// Barrels written in this pass.
    pub written: Vec<String>,
    /// Barrels already up to date.
    pub unchanged: usize,
    /// Stale barrels deleted.
    pub removed: Vec<String>,
    pub icon_count: usize,
}

impl GenerateReport {
    pub fn has_collisions(&self) -> bool {
        self.collisions > 0
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.written.is_empty() && self.removed.is_empty() {
            out.preformatted(&format!("All barrels in {} are up to date.", self.icons_dir));
        } else {
            if !self.written.is_empty() {
                out.section("Written");
                for path in &self.written {
                    out.added_item(path);
                }
            }
            if !self.removed.is_empty() {
                out.section("Removed");
                for path in &self.removed {
                    out.removed_item(path);
                }
            }
        }

        out.newline();
        out.key_value("Icons", &self.icon_count.to_string());
        out.key_value(
            "Barrels",
            &format!("{} ({} unchanged)", self.written.len() + self.unchanged, self.unchanged),
        );
        let skipped = self.unscanned + self.collisions;
        if skipped > 0 {
            out.key_value("Skipped", &directories(skipped));
        }
    }
}

fn directories(count: usize) -> String {
    format!("{} director{}", count, if count == 1 { "y" } else { "ies" })
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    /// Directories that would be skipped because of duplicate export names.
    pub collisions: usize,
    pub files: Vec<PreviewFile>,
}

/// A barrel in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} barrel{} would be generated",
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" }
        ));
        if self.collisions > 0 {
            out.key_value("Skipped", &directories(self.collisions));
        }
    }
}
