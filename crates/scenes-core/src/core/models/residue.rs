use std::fmt;

/// PDB identity of a residue as printed in WHAT IF list records.
///
/// The residue number follows PDB numbering (it may be zero or negative) and the
/// optional insertion code disambiguates residues sharing a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueId {
    pub number: i32,
    pub insertion_code: Option<char>,
    pub chain_id: char,
}

impl ResidueId {
    pub fn new(number: i32, insertion_code: Option<char>, chain_id: char) -> Self {
        Self {
            number,
            insertion_code,
            chain_id,
        }
    }

    /// Residue number with the insertion code appended, e.g. `40A` or `-1`.
    pub fn numbering(&self) -> String {
        match self.insertion_code {
            Some(code) => format!("{}{}", self.number, code),
            None => self.number.to_string(),
        }
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chain_id, self.numbering())
    }
}
