use super::error::{FormatErrorKind, ListFileError};
use bzip2::read::MultiBzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lines starting with this marker terminate the meaningful content of a list.
pub const END_SENTINEL: &str = "*END";

/// Defines the interface for reading a WHAT IF list file format.
///
/// A list file holds one fixed-width record per line. Implementors provide the
/// per-line parser and the aggregation rule; the provided methods take care of
/// decompression, the `*END` terminator and error positioning.
pub trait ListFile {
    /// The typed record produced for one line.
    type Record;

    /// The aggregated result of a whole file.
    type Output: Default;

    /// Parses and validates a single line.
    ///
    /// # Errors
    ///
    /// Returns the specific violated expectation if the line does not follow the
    /// record layout.
    fn parse_line(line: &str) -> Result<Self::Record, FormatErrorKind>;

    /// Folds one record into the aggregated output.
    fn accumulate(output: &mut Self::Output, record: Self::Record);

    /// Reads all records from an already decompressed line source.
    ///
    /// Blank lines are skipped. The first malformed line aborts the read; no
    /// partial result is returned. Bytes that are not ASCII make the line
    /// malformed rather than failing the read.
    ///
    /// # Errors
    ///
    /// Returns [`ListFileError::Format`] with the 1-based line number for the
    /// first malformed line, or [`ListFileError::Read`] if the source fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, ListFileError> {
        let mut output = Self::Output::default();
        let mut buffer = Vec::new();
        let mut line_number = 0;
        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_number += 1;
            if buffer.starts_with(END_SENTINEL.as_bytes()) {
                break;
            }
            let format_error = |kind| ListFileError::Format {
                line: line_number,
                kind,
            };
            let line = decode_line(&buffer).map_err(format_error)?;
            if line.trim().is_empty() {
                continue;
            }
            let record = Self::parse_line(line).map_err(format_error)?;
            Self::accumulate(&mut output, record);
        }
        Ok(output)
    }

    /// Reads a bzip2-compressed list file.
    ///
    /// # Errors
    ///
    /// Missing, empty, uncompressed or truncated files are reported as a single
    /// [`ListFileError::Io`] carrying the path. Format errors propagate unchanged.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, ListFileError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| ListFileError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        if file.metadata().map_err(io_error)?.len() == 0 {
            return Err(io_error(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "file is empty",
            )));
        }
        let mut reader = BufReader::new(MultiBzDecoder::new(file));
        Self::read_from(&mut reader).map_err(|e| e.at_path(path))
    }
}

/// Strips the line terminator and rejects bytes outside ASCII.
fn decode_line(bytes: &[u8]) -> Result<&str, FormatErrorKind> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    if !bytes.is_ascii() {
        return Err(FormatErrorKind::NonAscii);
    }
    std::str::from_utf8(bytes).map_err(|_| FormatErrorKind::NonAscii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_line_strips_unix_and_windows_terminators() {
        assert_eq!(decode_line(b"    1 MET\n"), Ok("    1 MET"));
        assert_eq!(decode_line(b"    1 MET\r\n"), Ok("    1 MET"));
        assert_eq!(decode_line(b"*END"), Ok("*END"));
    }

    #[test]
    fn decode_line_rejects_non_ascii_bytes() {
        assert_eq!(decode_line(b"   35 S\xe9R\n"), Err(FormatErrorKind::NonAscii));
        assert_eq!(
            decode_line("   35 S\u{e9}R".as_bytes()),
            Err(FormatErrorKind::NonAscii)
        );
    }
}
