use serde::{Deserialize, Serialize};

/// Header row of a structure table, in column order
pub const STRUCTURE_TABLE_HEADER: [&str; 6] = [
    "Family",
    "EC_Number",
    "PDB_ID",
    "UniProt_ID",
    "Ligands",
    "Resolution",
];

/// One normalized structure record of a family page
///
/// Field names map onto the columns of the structure table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureEntry {
    /// Family name, e.g. `GH12`
    #[serde(rename = "Family")]
    pub family: String,

    /// First EC code of the protein row, or `unk`
    #[serde(rename = "EC_Number")]
    pub ec_number: String,

    #[serde(rename = "PDB_ID")]
    pub pdb_id: String,

    /// UniProt accession of the protein row, or `noID`
    #[serde(rename = "UniProt_ID", default)]
    pub uniprot_id: String,

    /// Ligand text, or `none`
    #[serde(rename = "Ligands", default)]
    pub ligand: String,

    #[serde(rename = "Resolution", default)]
    pub resolution: String,
}

impl StructureEntry {
    /// Returns the record's fields in table column order
    pub fn as_row(&self) -> [&str; 6] {
        [
            &self.family,
            &self.ec_number,
            &self.pdb_id,
            &self.uniprot_id,
            &self.ligand,
            &self.resolution,
        ]
    }
}
