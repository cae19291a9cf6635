//! Record assembly from classified page lines
//!
//! The structure page spreads one protein row over several places: its EC codes
//! open the row, its structures sit in a nested table, and its UniProt accession
//! closes the row. The assembler collects these into parallel, index-aligned
//! lists and joins them once the whole page has been read.

use crate::extractor::classifier::{ClassifiedLine, LineRole, NO_UNIPROT_ID};
use crate::extractor::entry::StructureEntry;

/// Structures listed in one nested table of a protein row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBlock {
    pub pdb_ids: Vec<String>,
    pub ligands: Vec<String>,
    pub resolutions: Vec<String>,
}

impl TableBlock {
    /// Number of structures with a PDB id, ligand and resolution at the same index
    pub fn complete_rows(&self) -> usize {
        self.pdb_ids
            .len()
            .min(self.ligands.len())
            .min(self.resolutions.len())
    }
}

/// EC codes of one protein row (never empty; `["unk"]` when unknown)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcBlock {
    pub codes: Vec<String>,
}

impl EcBlock {
    /// The code written to the structure table
    pub fn primary(&self) -> &str {
        self.codes.first().map(String::as_str).unwrap_or_default()
    }
}

/// Per-page accumulator of the parallel row attributes
///
/// One assembler serves one page; it is consumed by [`Assembler::finish`].
#[derive(Debug, Default)]
pub struct Assembler {
    open_block: Option<TableBlock>,
    ec_blocks: Vec<EcBlock>,
    table_blocks: Vec<TableBlock>,
    uniprot_ids: Vec<String>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one classified line
    pub fn push(&mut self, line: &ClassifiedLine<'_>) {
        self.push_role(&line.role);
    }

    /// Feeds one line role
    pub fn push_role(&mut self, role: &LineRole) {
        match role {
            LineRole::TableStart => {
                self.open_block = Some(TableBlock::default());
            }
            LineRole::EcRow { codes } => {
                self.ec_blocks.push(EcBlock {
                    codes: codes.clone(),
                });
            }
            LineRole::PdbCell(pdb_id) => {
                if let Some(block) = self.open_block.as_mut() {
                    block.pdb_ids.push(pdb_id.clone());
                }
            }
            LineRole::LigandCell(ligand) => {
                if let Some(block) = self.open_block.as_mut() {
                    block.ligands.push(ligand.clone());
                }
            }
            LineRole::ResolutionCell(resolution) => {
                if let Some(block) = self.open_block.as_mut() {
                    block.resolutions.push(resolution.clone());
                }
            }
            LineRole::TableEnd => {
                self.table_blocks
                    .push(self.open_block.take().unwrap_or_default());
            }
            LineRole::UniprotCell(uniprot_id) => {
                self.uniprot_ids.push(uniprot_id.clone());
            }
            LineRole::MissingUniprotCell { counted: true } => {
                self.uniprot_ids.push(NO_UNIPROT_ID.to_string());
            }
            LineRole::MissingUniprotCell { counted: false } | LineRole::Other => {}
        }
    }

    pub fn ec_blocks(&self) -> &[EcBlock] {
        &self.ec_blocks
    }

    pub fn table_blocks(&self) -> &[TableBlock] {
        &self.table_blocks
    }

    pub fn uniprot_ids(&self) -> &[String] {
        &self.uniprot_ids
    }

    /// Joins the accumulated lists into structure entries for `family`
    ///
    /// Protein row `i` pairs EC block `i`, table block `i` and UniProt id `i`.
    /// All structures of a row share the row's UniProt id. Any index missing from
    /// one of the parallel lists is skipped without error.
    pub fn finish(self, family: &str) -> Vec<StructureEntry> {
        let mut entries = Vec::new();

        for (i, ec_block) in self.ec_blocks.iter().enumerate() {
            let (Some(block), Some(uniprot_id)) =
                (self.table_blocks.get(i), self.uniprot_ids.get(i))
            else {
                continue;
            };

            for j in 0..block.complete_rows() {
                entries.push(StructureEntry {
                    family: family.to_string(),
                    ec_number: ec_block.primary().to_string(),
                    pdb_id: block.pdb_ids[j].clone(),
                    uniprot_id: uniprot_id.clone(),
                    ligand: block.ligands[j].clone(),
                    resolution: block.resolutions[j].clone(),
                });
            }
        }

        entries
    }
}
