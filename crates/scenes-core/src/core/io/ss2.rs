//! Reader for WHAT IF symmetry contact lists (`*.ss2.bz2`).
//!
//! Each line describes one residue and the number of crystal contacts it makes
//! with symmetry mates:
//!
//! ```text
//!    35 SER (  40A)A              0
//! ```
//!
//! Fields are taken from fixed columns and the whole line is cross-checked
//! against an independent pattern, so a shifted line that happens to yield
//! numeric-looking substrings is still rejected.

use super::error::{FormatErrorKind, ListFileError};
use super::fields::{Field, check_extent};
use super::traits::ListFile;
use crate::core::models::contact::{ContactRecord, SymmetryContacts};
use crate::core::models::residue::ResidueId;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const RECORD: &str = "symmetry contact";

const SEQ_NUM: Field = Field::new("Sequential WHAT IF residue number", 0, 5);
const RES_TYPE: Field = Field::new("Residue type", 6, 10);
const RES_NUM: Field = Field::new("PDB residue number", 11, 15);
const RES_IC: Field = Field::new("PDB insertion code", 15, 16);
const CHAIN: Field = Field::new("Chain", 17, 18);
const NUM_CONTACTS: Field = Field::new("Number of symmetry contacts", 18, 33);

const MIN_LINE_LENGTH: usize = NUM_CONTACTS.end;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<seq_num>\s*\d+)\                # sequential WHAT IF number
        (?P<res_type>\w[\w\ ]{3}|\ \w[\w\ ]{2}|\ {2}\w[\w\ ]|\ {3}\w)
        \(
        (?P<res_num>[\d\ -]{3}\d)           # PDB residue number
        (?P<res_ic>[A-Z\ ])                 # PDB insertion code
        \)
        (?P<chain>\w)
        (?P<num_contacts>\s+\d+)
        \s*$
        ",
    )
    .expect("symmetry contact pattern is valid")
});

fn check_pattern(line: &str) -> Result<(), FormatErrorKind> {
    if LINE_PATTERN.is_match(line) {
        Ok(())
    } else {
        Err(FormatErrorKind::PatternMismatch { record: RECORD })
    }
}

/// Parses one symmetry contact line into a typed record.
pub fn parse_contact_record(line: &str) -> Result<ContactRecord, FormatErrorKind> {
    check_extent(line, RECORD, MIN_LINE_LENGTH)?;
    check_pattern(line)?;

    let sequence_number = SEQ_NUM.parse_int(line)?;
    let number = RES_NUM.parse_int(line)?;
    let contact_count = NUM_CONTACTS.parse_int(line)?;
    let chain_id = CHAIN
        .optional_char(line)
        .ok_or(FormatErrorKind::PatternMismatch { record: RECORD })?;

    Ok(ContactRecord {
        sequence_number,
        residue_type: RES_TYPE.trimmed(line).to_string(),
        residue: ResidueId::new(number, RES_IC.optional_char(line), chain_id),
        contact_count,
    })
}

/// Parses one symmetry contact line into its YASARA residue selection and
/// number of contacts, e.g. `("40A mol A", 0)`.
pub fn parse_contact_line(line: &str) -> Result<(String, u32), FormatErrorKind> {
    parse_contact_record(line).map(ContactRecord::into_entry)
}

pub struct SymmetryContactsFile;

impl ListFile for SymmetryContactsFile {
    type Record = ContactRecord;
    type Output = SymmetryContacts;

    fn parse_line(line: &str) -> Result<Self::Record, FormatErrorKind> {
        parse_contact_record(line)
    }

    /// A repeated selection overwrites the earlier count.
    fn accumulate(output: &mut Self::Output, record: Self::Record) {
        let (selection, count) = record.into_entry();
        output.insert(selection, count);
    }
}

/// Decodes a bzip2-compressed symmetry contact list.
pub fn decode_symmetry_contacts<P: AsRef<Path>>(
    path: P,
) -> Result<SymmetryContacts, ListFileError> {
    SymmetryContactsFile::read_from_path(path)
}
