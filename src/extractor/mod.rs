//! Structure-page extraction engine
//!
//! This module turns the markup of one CAZy family structure page into
//! normalized [`StructureEntry`] records. It works in two passes:
//! - the [`classifier`] tags every line with its layout role
//! - the [`assembler`] collects the tagged values and joins them into records
//!
//! Extraction is a pure function of the page text. Malformed or partially
//! recognized pages degrade to fewer records rather than to an error.
//!
//! # Known limitation
//!
//! Page structure is recognized through literals at fixed character offsets
//! (see [`markers`]). Any change of the upstream layout silently reduces the
//! output until the marker table is updated.

pub mod assembler;
pub mod classifier;
mod entry;
pub mod markers;

pub use assembler::{Assembler, EcBlock, TableBlock};
pub use classifier::{
    classify_line, classify_page, ClassifiedLine, LineRole, NO_LIGAND, NO_UNIPROT_ID, UNKNOWN_EC,
};
pub use entry::{StructureEntry, STRUCTURE_TABLE_HEADER};

/// Extracts all structure entries of a family page
///
/// # Arguments
///
/// * `family` - Family name written into every entry, e.g. `GH12`
/// * `page` - Full text of the family's structure page
///
/// # Example
///
/// ```
/// use cazy_harvest::extract_entries;
///
/// let entries = extract_entries("GH1", "<html></html>");
/// assert!(entries.is_empty());
/// ```
pub fn extract_entries(family: &str, page: &str) -> Vec<StructureEntry> {
    let lines = classify_page(page);

    let mut assembler = Assembler::new();
    for line in &lines {
        assembler.push(line);
    }

    tracing::debug!(
        "{}: {} lines, {} EC rows, {} structure tables, {} UniProt ids",
        family,
        lines.len(),
        assembler.ec_blocks().len(),
        assembler.table_blocks().len(),
        assembler.uniprot_ids().len()
    );

    assembler.finish(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = include_str!("../../tests/fixtures/GH5_structure.html");

    fn scenario_page() -> String {
        [
            "<table>",
            r#"  <tr valign="top" onmouseover="this.bgColor='#F0F0F0';" onmouseout="this.bgColor='#FFFFFF';">"#,
            r#"    <td id="separateur2">Cel5A</td>"#,
            r#"    <td id="separateur2"><a href="http://www.enzyme-database.org/query.php?ec=3.2.1.4" target="_link">3.2.1.4</a></td>"#,
            r#"    <td id="separateur2">"#,
            "     <table width='100%' border='0'>",
            "      <tr>",
            r#"  <td id="separateur2"   width="125px"><a href="http://www.rcsb.org/pdb/explore/explore.do?structureId=1ABC">1ABC</a>[A]</td>"#,
            r#"     <td id="separateur2" >GLC</a></td>"#,
            r#"     <td id="separateur2"  width="145px">1.5</td>"#,
            "      </tr>",
            "      <tr>",
            r#"  <td id="separateur2"   width="125px"><a href="http://www.rcsb.org/pdb/explore/explore.do?structureId=1ABD">1ABD</a>[A]</td>"#,
            "     <td ></td>",
            r#"     <td  width="145px">2.0</td>"#,
            "      </tr>",
            "     </table></td>",
            r#"   <td id="separateur2"><a href="http://www.uniprot.org/uniprot/P12345">P12345</a></td>"#,
            "  </tr>",
            "</table>",
        ]
        .join("\n")
    }

    #[test]
    fn test_scenario_page_yields_two_rows() {
        let entries = extract_entries("GH5", &scenario_page());
        assert_eq!(
            entries,
            vec![
                StructureEntry {
                    family: "GH5".to_string(),
                    ec_number: "3.2.1.4".to_string(),
                    pdb_id: "1ABC".to_string(),
                    uniprot_id: "P12345".to_string(),
                    ligand: "GLC".to_string(),
                    resolution: "1.5".to_string(),
                },
                StructureEntry {
                    family: "GH5".to_string(),
                    ec_number: "3.2.1.4".to_string(),
                    pdb_id: "1ABD".to_string(),
                    uniprot_id: "P12345".to_string(),
                    ligand: "none".to_string(),
                    resolution: "2.0".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let page = scenario_page();
        assert_eq!(extract_entries("GH5", &page), extract_entries("GH5", &page));
    }

    #[test]
    fn test_sample_page() {
        let entries = extract_entries("GH5", SAMPLE_PAGE);
        assert_eq!(entries.len(), 4);

        // First protein: two structures, one UniProt id for both
        assert_eq!(entries[0].pdb_id, "1CEC");
        assert_eq!(entries[0].ligand, "none");
        assert_eq!(entries[1].pdb_id, "1CEN");
        assert_eq!(entries[1].ligand, "BGCGLC");
        assert!(entries[..2].iter().all(|e| e.uniprot_id == "P07984"));
        assert!(entries[..2].iter().all(|e| e.ec_number == "3.2.1.4"));

        // Second protein: no EC code and no UniProt accession
        assert_eq!(entries[2].ec_number, "unk");
        assert_eq!(entries[2].uniprot_id, "noID");
        assert_eq!(entries[2].resolution, "2.30");

        // Third protein: first of several EC codes
        assert_eq!(entries[3].ec_number, "3.2.1.78");
        assert_eq!(entries[3].uniprot_id, "Q9XBH6");
    }
}
