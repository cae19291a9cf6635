//! Line classification for CAZy structure pages
//!
//! Each line of a page is tagged with the role it plays in the page layout,
//! together with the value extracted from it. Classification only looks at the
//! line itself, except for two roles:
//! - an EC row reads its codes from the line two positions further down
//! - a missing-UniProt cell peeks at the next line to avoid double counting

use crate::extractor::markers::{
    self, EC_LINE_DISTANCE, EC_LINK_SEPARATOR, EMPTY_LIGAND_CELLS, LIGAND_FRAGMENT_TRAILER,
    TAG_CLOSE, TAG_OPEN,
};

/// Sentinel stored for an EC row without any EC code
pub const UNKNOWN_EC: &str = "unk";

/// Sentinel stored for an empty ligand cell
pub const NO_LIGAND: &str = "none";

/// Sentinel stored for a protein row without a UniProt accession
pub const NO_UNIPROT_ID: &str = "noID";

/// The role of a single page line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRole {
    /// Opens a structure table block
    TableStart,

    /// Starts a protein row; carries its EC codes (`["unk"]` when none)
    EcRow { codes: Vec<String> },

    /// PDB identifier cell
    PdbCell(String),

    /// Ligand cell; `"none"` for an empty cell
    LigandCell(String),

    /// Resolution cell
    ResolutionCell(String),

    /// Closes the current structure table block
    TableEnd,

    /// UniProt accession cell
    UniprotCell(String),

    /// Empty UniProt cell; `counted` is false when the next line is itself a
    /// UniProt cell (of either kind) and this one must not produce `"noID"`
    MissingUniprotCell { counted: bool },

    /// Anything else
    Other,
}

/// A page line tagged with its role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub role: LineRole,
    pub text: &'a str,
    pub index: usize,
}

/// Classifies every line of a page
///
/// # Example
///
/// ```
/// use cazy_harvest::extractor::{classify_page, LineRole};
///
/// let page = "     <table width='100%' border='0'>\n     </table></td>";
/// let roles: Vec<_> = classify_page(page).into_iter().map(|l| l.role).collect();
/// assert_eq!(roles, vec![LineRole::TableStart, LineRole::TableEnd]);
/// ```
pub fn classify_page(page: &str) -> Vec<ClassifiedLine<'_>> {
    let lines: Vec<&str> = page.lines().collect();
    (0..lines.len())
        .map(|index| ClassifiedLine {
            role: classify_line(&lines, index),
            text: lines[index],
            index,
        })
        .collect()
}

/// Classifies the line at `index` of `lines`
///
/// Markers are mutually exclusive, so the first match decides. A marker whose
/// cell cannot be cut into the expected segments degrades to [`LineRole::Other`].
pub fn classify_line(lines: &[&str], index: usize) -> LineRole {
    let Some(&line) = lines.get(index) else {
        return LineRole::Other;
    };

    if markers::EC_ROW.matches(line) {
        let codes = lines
            .get(index + EC_LINE_DISTANCE)
            .map(|ec_line| extract_ec_codes(ec_line))
            .unwrap_or_default();
        return LineRole::EcRow {
            codes: if codes.is_empty() {
                vec![UNKNOWN_EC.to_string()]
            } else {
                codes
            },
        };
    }

    if markers::TABLE_START.matches(line) {
        return LineRole::TableStart;
    }

    if markers::PDB_CELL.matches(line) {
        return segment_text(line, 2)
            .map(LineRole::PdbCell)
            .unwrap_or(LineRole::Other);
    }

    if markers::LIGAND_CELL_STYLED.matches(line) || markers::LIGAND_CELL_PLAIN.matches(line) {
        return LineRole::LigandCell(extract_ligand(line));
    }

    if markers::RESOLUTION_CELL_STYLED.matches(line) || markers::RESOLUTION_CELL_PLAIN.matches(line)
    {
        return segment_text(line, 1)
            .map(LineRole::ResolutionCell)
            .unwrap_or(LineRole::Other);
    }

    if markers::TABLE_END.matches(line) {
        return LineRole::TableEnd;
    }

    if markers::UNIPROT_CELL.matches(line) {
        return segment_text(line, 2)
            .map(LineRole::UniprotCell)
            .unwrap_or(LineRole::Other);
    }

    if markers::MISSING_UNIPROT_CELL.matches(line) {
        let counted = lines.get(index + 1).is_some_and(|next| {
            !markers::UNIPROT_CELL.matches(next) && !markers::MISSING_UNIPROT_CELL.matches(next)
        });
        return LineRole::MissingUniprotCell { counted };
    }

    LineRole::Other
}

/// Extracts the EC codes linked on an EC line
///
/// Every fragment following a `target="_link">` separator contributes the text up
/// to its first `<`.
pub fn extract_ec_codes(ec_line: &str) -> Vec<String> {
    ec_line
        .split(EC_LINK_SEPARATOR)
        .skip(1)
        .map(|fragment| text_before_tag(fragment).to_string())
        .collect()
}

/// Reconstructs the ligand text of a ligand cell
///
/// The interior segments between `>` delimiters are concatenated, each stripped
/// of its three trailing characters of closing markup.
pub fn extract_ligand(line: &str) -> String {
    if EMPTY_LIGAND_CELLS.iter().any(|empty| line.contains(empty)) {
        return NO_LIGAND.to_string();
    }

    let segments: Vec<&str> = line.split(TAG_CLOSE).collect();
    let interior = segments.len().saturating_sub(2);
    let ligand: String = segments
        .iter()
        .take(interior)
        .skip(1)
        .map(|segment| drop_trailing_chars(segment, LIGAND_FRAGMENT_TRAILER))
        .collect();

    if ligand.is_empty() {
        NO_LIGAND.to_string()
    } else {
        ligand
    }
}

/// Text of the `position`-th `>`-delimited segment, cut at its first `<`
fn segment_text(line: &str, position: usize) -> Option<String> {
    line.split(TAG_CLOSE)
        .nth(position)
        .map(|segment| text_before_tag(segment).to_string())
}

fn text_before_tag(fragment: &str) -> &str {
    fragment.split(TAG_OPEN).next().unwrap_or_default()
}

fn drop_trailing_chars(segment: &str, count: usize) -> &str {
    let keep = segment.chars().count().saturating_sub(count);
    match segment.char_indices().nth(keep) {
        Some((end, _)) => &segment[..end],
        None => segment,
    }
}
