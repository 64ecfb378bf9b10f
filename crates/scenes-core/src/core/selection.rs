//! Conversion of parsed identifiers into YASARA selection strings.
//!
//! YASARA refers to residues as `<number> mol <chain>` (with an optional
//! `res` keyword when the selection is used as an atom selection) and to atoms
//! as `<atom> res <number> mol <chain>`. Insertion codes are glued to the
//! residue number; a blank insertion code is omitted entirely.

use crate::core::models::residue::ResidueId;

/// Residue selection, e.g. `40A mol A`.
pub fn residue(id: &ResidueId) -> String {
    format!("{} mol {}", id.numbering(), id.chain_id)
}

/// Residue selection usable in atom commands, e.g. `res 262 mol A`.
pub fn ion_residue(id: &ResidueId) -> String {
    format!("res {}", residue(id))
}

/// Atom selection, e.g. `NE2 res 94 mol A`.
pub fn atom(atom_name: &str, id: &ResidueId) -> String {
    format!("{} {}", atom_name.trim(), ion_residue(id))
}

/// Side-chain atoms of a residue selection produced by [`residue`].
pub fn sidechain(residue_selection: &str) -> String {
    format!("Sidechain res {}", residue_selection)
}
