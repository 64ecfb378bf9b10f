use super::residue::ResidueId;
use crate::core::selection;
use std::collections::{BTreeMap, HashMap};

/// One record of a WHAT IF ion coordination (`iod`) list: a ligand atom and the
/// ion it coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct IonContactRecord {
    pub sequence_number: u32,
    pub residue_type: String,
    pub residue: ResidueId,
    pub atom_name: String,
    pub ion_sequence_number: u32,
    pub ion_residue_type: String,
    pub ion: ResidueId,
    pub ion_element: String,
    pub distance: f64,
}

/// Selection strings derived from an [`IonContactRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct IonLigand {
    pub ion_selection: String,
    pub ion_element: String,
    pub residue_selection: String,
    pub atom_selection: String,
    pub distance: f64,
}

impl From<IonContactRecord> for IonLigand {
    fn from(record: IonContactRecord) -> Self {
        Self {
            ion_selection: selection::ion_residue(&record.ion),
            residue_selection: selection::residue(&record.residue),
            atom_selection: selection::atom(&record.atom_name, &record.residue),
            ion_element: record.ion_element,
            distance: record.distance,
        }
    }
}

/// All ligands of a single ion.
#[derive(Debug, Clone, PartialEq)]
pub struct IonSite {
    pub ion_selection: String,
    pub ion_element_name: String,
    /// One entry per ligand line, in file order; may contain duplicates.
    pub coordinating_residues: Vec<String>,
    /// Last distance seen for each ligand atom.
    pub atom_distances: BTreeMap<String, f64>,
}

impl IonSite {
    fn new(ion_selection: String, ion_element_name: String) -> Self {
        Self {
            ion_selection,
            ion_element_name,
            coordinating_residues: Vec::new(),
            atom_distances: BTreeMap::new(),
        }
    }
}

/// Ion sites in the order their ions were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IonSites {
    sites: Vec<IonSite>,
    index: HashMap<String, usize>,
}

impl IonSites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a ligand to the site of its ion, creating the site on first sight.
    pub fn insert(&mut self, ligand: IonLigand) {
        let slot = match self.index.get(&ligand.ion_selection) {
            Some(&slot) => slot,
            None => {
                let slot = self.sites.len();
                self.index.insert(ligand.ion_selection.clone(), slot);
                self.sites.push(IonSite::new(
                    ligand.ion_selection.clone(),
                    ligand.ion_element.clone(),
                ));
                slot
            }
        };
        let site = &mut self.sites[slot];
        site.coordinating_residues.push(ligand.residue_selection);
        site.atom_distances.insert(ligand.atom_selection, ligand.distance);
    }

    pub fn get(&self, ion_selection: &str) -> Option<&IonSite> {
        self.index.get(ion_selection).map(|&slot| &self.sites[slot])
    }

    pub fn first(&self) -> Option<&IonSite> {
        self.sites.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IonSite> {
        self.sites.iter()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
