//! Plain-text rendering of grouped search results.

use crate::classify::GroupedResults;
use indexmap::IndexMap;
use std::io::{self, Write};

const DIVIDER: &str = "===============";

/// Writes one labeled section: the label, an `[<id>] <title>` line per entry, and a blank line.
pub fn write_section(
    out: &mut impl Write,
    label: &str,
    entries: &IndexMap<String, String>,
) -> io::Result<()> {
    writeln!(out, "{label}:")?;
    for (id, title) in entries {
        writeln!(out, "[{id}] {title}")?;
    }
    writeln!(out)
}

impl GroupedResults {
    /// Writes the videos, channels and playlists sections, in that order, separated by a divider.
    ///
    /// Every section header is written even when its group is empty.
    pub fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        write_section(out, "Videos", &self.videos)?;
        writeln!(out, "{DIVIDER}")?;
        write_section(out, "Channels", &self.channels)?;
        writeln!(out, "{DIVIDER}")?;
        write_section(out, "Playlists", &self.playlists)?;
        out.flush()
    }
}
