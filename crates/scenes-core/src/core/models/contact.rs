use super::residue::ResidueId;
use crate::core::selection;
use std::collections::BTreeMap;

/// Symmetry contacts keyed by YASARA residue selection (`<number><ic> mol <chain>`).
pub type SymmetryContacts = BTreeMap<String, u32>;

/// One record of a WHAT IF symmetry contact (`ss2`) list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    /// WHAT IF sequential numbering; informational only.
    pub sequence_number: u32,
    pub residue_type: String,
    pub residue: ResidueId,
    pub contact_count: u32,
}

impl ContactRecord {
    pub fn selection(&self) -> String {
        selection::residue(&self.residue)
    }

    pub fn into_entry(self) -> (String, u32) {
        (self.selection(), self.contact_count)
    }
}
