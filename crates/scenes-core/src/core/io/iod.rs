//! Reader for WHAT IF ion coordination lists (`*.iod.bz2`).
//!
//! Each line pairs a ligand atom with the ion it coordinates and their
//! distance:
//!
//! ```text
//!    93 HIS (  94 )A       NE2 -   262  ZN ( 262 )A      ZN       2.191
//! ```
//!
//! The ion chain is printed twice, once in WHAT IF numbering (column 49) and
//! once in PDB numbering (column 53). The PDB chain wins when it is present.

use super::error::{FormatErrorKind, ListFileError};
use super::fields::{Field, check_extent};
use super::traits::ListFile;
use crate::core::models::ion::{IonContactRecord, IonLigand, IonSites};
use crate::core::models::residue::ResidueId;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const RECORD: &str = "ion coordination";

const SEQ_NUM: Field = Field::new("Sequential WHAT IF residue number", 0, 5);
const RES_TYPE: Field = Field::new("Residue type", 6, 10);
const RES_NUM: Field = Field::new("PDB residue number", 11, 15);
const RES_IC: Field = Field::new("PDB insertion code", 15, 16);
const CHAIN: Field = Field::new("Chain", 17, 18);
const ATOM_NAME: Field = Field::new("Atom name", 24, 28);
const ION_SEQ_NUM: Field = Field::new("Sequential WHAT IF ion number", 31, 36);
const ION_RES_TYPE: Field = Field::new("Ion residue type", 37, 41);
const ION_RES_NUM: Field = Field::new("PDB ion residue number", 42, 46);
const ION_RES_IC: Field = Field::new("PDB ion insertion code", 46, 47);
const ION_CHAIN: Field = Field::new("Ion chain", 48, 49);
const ION_PDB_CHAIN: Field = Field::new("Ion PDB chain", 52, 53);
const ION_ELEMENT: Field = Field::new("Ion element", 55, 57);
const DISTANCE: Field = Field::new("Distance", 64, 69);

const MIN_LINE_LENGTH: usize = DISTANCE.end;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<seq_num>[\ \d]{4}\d)\           # sequential WHAT IF number
        (?P<res_type>\w[\w\ ]{3}|\ \w[\w\ ]{2}|\ {2}\w[\w\ ]|\ {3}\w)
        \((?P<res_num>[\d\ -]{3}\d)(?P<res_ic>[A-Z\ ])\)
        (?P<chain>\w)
        \ {6}
        (?P<atom>[\ \w][\w'*][\w'*\ ]{2})   # PDB-aligned atom name
        \ -\ (?P<ion_seq_num>[\ \d]{4}\d)\ # ligand separator, ion number
        (?P<ion_res_type>\w[\w\ ]{3}|\ \w[\w\ ]{2}|\ {2}\w[\w\ ]|\ {3}\w)
        \((?P<ion_res_num>[\d\ -]{3}\d)(?P<ion_res_ic>[A-Z\ ])\)
        (?P<ion_chain>\w)
        \ {3}
        (?P<ion_pdb_chain>[\w\ ])
        \ {2}
        (?P<ion_element>[\ A-Z][A-Z][A-Z\d\ ]{2})
        \ {5}
        (?P<distance>\d\.\d{3})
        \s*$
        ",
    )
    .expect("ion coordination pattern is valid")
});

fn check_pattern(line: &str) -> Result<(), FormatErrorKind> {
    if LINE_PATTERN.is_match(line) {
        Ok(())
    } else {
        Err(FormatErrorKind::PatternMismatch { record: RECORD })
    }
}

/// Parses one ion coordination line into a typed record.
pub fn parse_ion_record(line: &str) -> Result<IonContactRecord, FormatErrorKind> {
    check_extent(line, RECORD, MIN_LINE_LENGTH)?;
    check_pattern(line)?;

    let mismatch = FormatErrorKind::PatternMismatch { record: RECORD };
    let chain_id = CHAIN.optional_char(line).ok_or(mismatch.clone())?;
    let ion_chain_id = ION_PDB_CHAIN
        .optional_char(line)
        .or_else(|| ION_CHAIN.optional_char(line))
        .ok_or(mismatch)?;

    Ok(IonContactRecord {
        sequence_number: SEQ_NUM.parse_int(line)?,
        residue_type: RES_TYPE.trimmed(line).to_string(),
        residue: ResidueId::new(
            RES_NUM.parse_int(line)?,
            RES_IC.optional_char(line),
            chain_id,
        ),
        atom_name: ATOM_NAME.trimmed(line).to_string(),
        ion_sequence_number: ION_SEQ_NUM.parse_int(line)?,
        ion_residue_type: ION_RES_TYPE.trimmed(line).to_string(),
        ion: ResidueId::new(
            ION_RES_NUM.parse_int(line)?,
            ION_RES_IC.optional_char(line),
            ion_chain_id,
        ),
        ion_element: ION_ELEMENT.trimmed(line).to_string(),
        distance: DISTANCE.parse_decimal3(line)?,
    })
}

/// Parses one ion coordination line into the ion selection, ion element,
/// ligand residue selection, ligand atom selection and distance.
pub fn parse_ion_line(line: &str) -> Result<IonLigand, FormatErrorKind> {
    parse_ion_record(line).map(IonLigand::from)
}

pub struct IonSitesFile;

impl ListFile for IonSitesFile {
    type Record = IonContactRecord;
    type Output = IonSites;

    fn parse_line(line: &str) -> Result<Self::Record, FormatErrorKind> {
        parse_ion_record(line)
    }

    fn accumulate(output: &mut Self::Output, record: Self::Record) {
        output.insert(record.into());
    }
}

/// Decodes a bzip2-compressed ion coordination list.
pub fn decode_ion_sites<P: AsRef<Path>>(path: P) -> Result<IonSites, ListFileError> {
    IonSitesFile::read_from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzip2::Compression;
    use bzip2::write::BzEncoder;
    use std::fs::File;
    use std::io::{Cursor, Write};

    const ZN_LINE: &str =
        "   93 HIS (  94 )A       NE2 -   262  ZN ( 262 )A      ZN       2.191";
    const ZN_LINE_2: &str =
        "   95 HIS (  96 )A       NE2 -   262  ZN ( 262 )A      ZN       2.054";
    const HG_LINE: &str =
        "  136 PRO ( 138 )A       N   -   263  HG ( 495 )A      HG       4.063";

    fn lines(lines: &[&str]) -> String {
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    #[test]
    fn parse_ion_line_returns_all_selections() {
        let ligand = parse_ion_line(ZN_LINE).unwrap();
        assert_eq!(ligand.ion_selection, "res 262 mol A");
        assert_eq!(ligand.ion_element, "ZN");
        assert_eq!(ligand.residue_selection, "94 mol A");
        assert_eq!(ligand.atom_selection, "NE2 res 94 mol A");
        assert_eq!(ligand.distance, 2.191);
    }

    #[test]
    fn parse_ion_line_handles_various_ions_and_atoms() {
        let cases = [
            (HG_LINE, "res 495 mol A", "HG", "138 mol A", "N res 138 mol A", 4.063),
            (
                "  251 SAM ( 501 )A       O3' -   259  NA ( 820 )A      NA       4.221",
                "res 820 mol A",
                "NA",
                "501 mol A",
                "O3' res 501 mol A",
                4.221,
            ),
            (
                "  307 ASN ( 309 )A       O   -   832 K   (1419 )A       K       2.757",
                "res 1419 mol A",
                "K",
                "309 mol A",
                "O res 309 mol A",
                2.757,
            ),
            (
                "    6 CGU (   6 )L      OE11 -   594  CA ( 505 )L      CA       2.941",
                "res 505 mol L",
                "CA",
                "6 mol L",
                "OE11 res 6 mol L",
                2.941,
            ),
            (
                "  330 MSE ( 352 )A      SE   -  1844  MG ( 501 )A      MG       4.268",
                "res 501 mol A",
                "MG",
                "352 mol A",
                "SE res 352 mol A",
                4.268,
            ),
        ];
        for (line, ion, element, residue, atom, distance) in cases {
            let ligand = parse_ion_line(line).unwrap();
            assert_eq!(ligand.ion_selection, ion, "{line}");
            assert_eq!(ligand.ion_element, element, "{line}");
            assert_eq!(ligand.residue_selection, residue, "{line}");
            assert_eq!(ligand.atom_selection, atom, "{line}");
            assert_eq!(ligand.distance, distance, "{line}");
        }
    }

    #[test]
    fn parse_ion_line_accepts_ions_with_numbered_element_tokens() {
        for line in [
            "   23 ASP (  37 )A       OD1 -   683 UNL ( 401 )A      MN1      2.430",
            "   14 ARG (  14 )A       NH2 -   135 CPT ( 206 )A      PT1      2.727",
            "  115 HIS ( 127 )A       NE2 -   126  RH ( 403 )A      RH1      2.269",
            "  135 SER ( 279 )A       OG  -   459 UNL ( 604 )A       UNL     3.410",
        ] {
            assert!(parse_ion_line(line).is_ok(), "line should parse: {line:?}");
        }
    }

    #[test]
    fn parse_ion_line_prefers_pdb_chain_for_the_ion() {
        let line = "   93 HIS (  94 )A       NE2 -   262  ZN ( 262 )A   B  ZN       2.191";
        let ligand = parse_ion_line(line).unwrap();
        assert_eq!(ligand.ion_selection, "res 262 mol B");
        assert_eq!(ligand.residue_selection, "94 mol A");
    }

    #[test]
    fn parse_ion_record_keeps_informational_fields() {
        let record = parse_ion_record(ZN_LINE).unwrap();
        assert_eq!(record.sequence_number, 93);
        assert_eq!(record.residue_type, "HIS");
        assert_eq!(record.atom_name, "NE2");
        assert_eq!(record.ion_sequence_number, 262);
        assert_eq!(record.ion_residue_type, "ZN");
        assert_eq!(record.ion, ResidueId::new(262, None, 'A'));
    }

    #[test]
    fn parse_ion_line_rejects_misaligned_atom_name() {
        let line = "   93 HIS (  94 )A         N -   262  ZN ( 262 )A      ZN       2.191";
        assert_eq!(
            parse_ion_line(line),
            Err(FormatErrorKind::PatternMismatch { record: RECORD })
        );
    }

    #[test]
    fn parse_ion_line_rejects_missing_separator_space() {
        let line = "   93 HIS (  94 )A       NE2-   262  ZN ( 262 )A      ZN       2.191 ";
        assert_eq!(
            parse_ion_line(line),
            Err(FormatErrorKind::PatternMismatch { record: RECORD })
        );
    }

    #[test]
    fn parse_ion_line_rejects_numeric_element() {
        let line = "   93 HIS (  94 )A       NE2 -   262  ZN ( 262 )A      1ION     2.191";
        assert_eq!(
            parse_ion_line(line),
            Err(FormatErrorKind::PatternMismatch { record: RECORD })
        );
    }

    #[test]
    fn parse_ion_line_rejects_distance_with_two_decimals() {
        let line = "   93 HIS (  94 )A       NE2 -   262  ZN ( 262 )A      ZN       2.19";
        assert!(matches!(
            parse_ion_line(line),
            Err(FormatErrorKind::LineTooShort { min: 69, .. })
        ));
        let padded = format!("{line} ");
        assert_eq!(
            parse_ion_line(&padded),
            Err(FormatErrorKind::PatternMismatch { record: RECORD })
        );
    }

    #[test]
    fn parse_ion_line_reports_unconvertible_ion_number() {
        let line = "   93 HIS (  94 )A       NE2 -   262  ZN ( 2-2 )A      ZN       2.191";
        assert_eq!(
            parse_ion_line(line),
            Err(FormatErrorKind::InvalidInt {
                field: "PDB ion residue number",
                columns: "43-46".to_string(),
                value: "2-2".to_string(),
            })
        );
    }

    #[test]
    fn read_from_accumulates_ligands_per_ion() {
        let text = lines(&[ZN_LINE, HG_LINE, ZN_LINE_2, "*END"]);
        let sites = IonSitesFile::read_from(&mut Cursor::new(text.as_bytes())).unwrap();

        assert_eq!(sites.len(), 2);
        let zn = sites.get("res 262 mol A").unwrap();
        assert_eq!(zn.ion_element_name, "ZN");
        assert_eq!(zn.coordinating_residues, vec!["94 mol A", "96 mol A"]);
        assert_eq!(zn.atom_distances["NE2 res 96 mol A"], 2.054);
        assert_eq!(sites.first().unwrap().ion_selection, "res 262 mol A");
    }

    #[test]
    fn decode_reads_bzip2_compressed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1cra.iod.bz2");
        let file = File::create(&path).unwrap();
        let mut encoder = BzEncoder::new(file, Compression::default());
        encoder
            .write_all(lines(&[ZN_LINE, ZN_LINE_2, HG_LINE, "*END"]).as_bytes())
            .unwrap();
        encoder.finish().unwrap();

        let sites = decode_ion_sites(&path).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(
            sites.get("res 495 mol A").unwrap().coordinating_residues,
            vec!["138 mol A"]
        );
    }

    #[test]
    fn decode_reports_uncompressed_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1cra.iod");
        std::fs::write(&path, lines(&[ZN_LINE])).unwrap();
        assert!(matches!(
            decode_ion_sites(&path),
            Err(ListFileError::Io { .. })
        ));
    }

    #[test]
    fn decode_reports_missing_file_as_io_error() {
        assert!(matches!(
            decode_ion_sites("1cra.iod.bz2"),
            Err(ListFileError::Io { .. })
        ));
    }
}
