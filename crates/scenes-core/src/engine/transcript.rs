//! Scanning of YASARA command transcripts.
//!
//! A transcript written by `RecordLog` echoes every command after a `>`
//! prompt. YASARA may interleave warning blocks (a line starting with
//! `WARNING`, possibly framed by `*`) that run until the next prompt.

use std::fs;
use std::io;
use std::path::Path;

pub const PROMPT: char = '>';
pub const TERMINATOR: &str = ">Exit";
const WARNING_MARKER: &str = "WARNING";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptStats {
    pub total_lines: usize,
    pub has_terminator: bool,
    /// Lines covered by warning blocks, `None` if there were none.
    pub warning_block_lines: Option<usize>,
}

impl TranscriptStats {
    pub fn scan(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let has_terminator = lines
            .iter()
            .rev()
            .find(|line| !line.trim().is_empty())
            .is_some_and(|line| line.trim_end() == TERMINATOR);

        Self {
            total_lines: lines.len(),
            has_terminator,
            warning_block_lines: warning_block_lines(&lines),
        }
    }

    pub fn read(path: &Path) -> io::Result<Self> {
        fs::read_to_string(path).map(|text| Self::scan(&text))
    }

    /// Line count with warning blocks removed.
    pub fn command_lines(&self) -> usize {
        self.total_lines
            .saturating_sub(self.warning_block_lines.unwrap_or(0))
    }
}

fn is_warning_start(line: &str) -> bool {
    line.trim_start_matches([' ', '*'])
        .starts_with(WARNING_MARKER)
}

/// Sums the spans of all warning blocks that are closed by a later prompt.
fn warning_block_lines(lines: &[&str]) -> Option<usize> {
    let mut total = None;
    let mut index = 0;
    while index < lines.len() {
        if !is_warning_start(lines[index]) {
            index += 1;
            continue;
        }
        let Some(offset) = lines[index + 1..]
            .iter()
            .position(|line| line.starts_with(PROMPT))
        else {
            break;
        };
        let span = offset + 1;
        *total.get_or_insert(0) += span;
        index += span;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_counts_lines_and_detects_terminator() {
        let stats = TranscriptStats::scan("\n>Processors CPUThreads=1\n>LoadPDB 1crn.pdb\n>Exit\n");
        assert_eq!(stats.total_lines, 4);
        assert!(stats.has_terminator);
        assert_eq!(stats.warning_block_lines, None);
        assert_eq!(stats.command_lines(), 4);
    }

    #[test]
    fn scan_ignores_trailing_blank_lines_for_terminator() {
        let stats = TranscriptStats::scan(">LoadPDB 1crn.pdb\n>Exit\n\n  \n");
        assert!(stats.has_terminator);
    }

    #[test]
    fn scan_requires_exit_as_last_command() {
        assert!(!TranscriptStats::scan(">Exit\n>SaveSce x.sce\n").has_terminator);
        assert!(!TranscriptStats::scan(">Exit now\n").has_terminator);
        assert!(!TranscriptStats::scan("").has_terminator);
    }

    #[test]
    fn scan_measures_warning_block_up_to_next_prompt() {
        let text = [
            "",
            ">LoadPDB 1crn.pdb",
            "*** WARNING 325: Residue 40A not found",
            "*** Selection is empty",
            "*** Continuing",
            "",
            ">ColorAll Grey",
            ">Exit",
        ]
        .join("\n");
        let stats = TranscriptStats::scan(&text);
        assert_eq!(stats.total_lines, 8);
        assert_eq!(stats.warning_block_lines, Some(4));
        assert_eq!(stats.command_lines(), 4);
    }

    #[test]
    fn scan_sums_multiple_warning_blocks() {
        let text = ">A\nWARNING one\n>B\n  WARNING two\ndetail\n>Exit\n";
        let stats = TranscriptStats::scan(text);
        assert_eq!(stats.warning_block_lines, Some(3));
        assert_eq!(stats.command_lines(), 3);
    }

    #[test]
    fn scan_ignores_warning_without_following_prompt() {
        let stats = TranscriptStats::scan(">A\n>Exit\nWARNING trailing\n");
        assert_eq!(stats.warning_block_lines, None);
        assert!(!stats.has_terminator);
    }

    #[test]
    fn read_reports_missing_transcript() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TranscriptStats::read(&dir.path().join("none.log")).is_err());
    }
}
