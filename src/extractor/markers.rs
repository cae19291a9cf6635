//! Positional markers of the CAZy structure page layout
//!
//! Every row role on a structure page is recognized by a literal that appears at
//! a fixed character offset of its line. The whole layout coupling lives here, so
//! when the upstream markup drifts this table is the only place to change.
//!
//! This is a deliberately brittle match on the current page layout, not a parser.

/// A literal expected at a fixed 0-based character offset of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub offset: usize,
    pub literal: &'static str,
}

impl Marker {
    pub const fn new(offset: usize, literal: &'static str) -> Self {
        Self { offset, literal }
    }

    /// Returns true if `line` carries this marker at its offset
    ///
    /// Offsets count characters, not bytes. A line shorter than the marker's span
    /// simply does not match.
    pub fn matches(&self, line: &str) -> bool {
        match line.char_indices().nth(self.offset) {
            Some((start, _)) => line[start..].starts_with(self.literal),
            None => false,
        }
    }
}

/// Start of a protein row; its EC links sit two lines further down
pub const EC_ROW: Marker = Marker::new(2, r#"<tr valign="top" onmouseover="this.bgColor="#);

/// Opening of the nested structure table of a protein row
pub const TABLE_START: Marker = Marker::new(5, "<table width='100%' border='0'>");

/// Closing of the nested structure table
pub const TABLE_END: Marker = Marker::new(5, "</table></td>");

pub const PDB_CELL: Marker = Marker::new(2, r#"<td id="separateur2"   width="125px">"#);

pub const LIGAND_CELL_STYLED: Marker = Marker::new(5, r#"<td id="separateur2" >"#);
pub const LIGAND_CELL_PLAIN: Marker = Marker::new(5, "<td >");

pub const RESOLUTION_CELL_STYLED: Marker =
    Marker::new(5, r#"<td id="separateur2"  width="145px""#);
pub const RESOLUTION_CELL_PLAIN: Marker = Marker::new(5, r#"<td  width="145px""#);

pub const UNIPROT_CELL: Marker = Marker::new(
    3,
    r#"<td id="separateur2"><a href="http://www.uniprot.org/uniprot/"#,
);

pub const MISSING_UNIPROT_CELL: Marker = Marker::new(3, r#"<td id="separateur2">&nbsp;</td>"#);

/// Number of lines between an EC row marker and the line holding its EC links
pub const EC_LINE_DISTANCE: usize = 2;

/// Separator preceding each EC code on the EC line
pub const EC_LINK_SEPARATOR: &str = r#"target="_link">"#;

/// Empty ligand cells, anywhere on the line
pub const EMPTY_LIGAND_CELLS: [&str; 2] = [r#"<td id="separateur2" ></td>"#, "<td ></td>"];

/// Characters of closing markup trailing each ligand fragment
pub const LIGAND_FRAGMENT_TRAILER: usize = 3;

/// Delimiter used to cut cells into segments
pub const TAG_CLOSE: char = '>';

/// Delimiter ending the text of a segment
pub const TAG_OPEN: char = '<';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_matches_at_offset() {
        let line = "     </table></td>";
        assert!(TABLE_END.matches(line));
        assert!(!TABLE_END.matches("    </table></td>"));
        assert!(!TABLE_END.matches("      </table></td>"));
    }

    #[test]
    fn test_short_line_is_not_a_match() {
        assert!(!UNIPROT_CELL.matches(""));
        assert!(!UNIPROT_CELL.matches("   <td"));
        assert!(!EC_ROW.matches("  "));
    }

    #[test]
    fn test_offset_counts_characters() {
        assert!(LIGAND_CELL_PLAIN.matches("éé   <td >GLC</a></td>"));
    }
}
