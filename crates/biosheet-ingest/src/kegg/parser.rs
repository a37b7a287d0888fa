//! KEGG flat-file parsing
//!
//! DBGET records use a 12-column key field; continuation lines leave it
//! blank and belong to the previous key. A record ends at `///`.

use super::{Compound, CompoundHit, KeggPathway};
use crate::error::{IngestError, Result};

const SERVICE: &str = "kegg";
const KEY_WIDTH: usize = 12;

fn split_line(line: &str) -> (&str, &str) {
    if line.len() > KEY_WIDTH && line.is_char_boundary(KEY_WIDTH) {
        let (key, value) = line.split_at(KEY_WIDTH);
        (key.trim(), value.trim())
    } else {
        (line.trim(), "")
    }
}

/// Parse a `/get/<compound>` response
pub fn parse_compound(text: &str) -> Result<Compound> {
    let mut compound = Compound::default();
    let mut current_key = String::new();

    for line in text.lines() {
        if line.starts_with("///") {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = split_line(line);
        if !line.starts_with(' ') {
            current_key = key.to_string();
        }
        let value = if line.starts_with(' ') { line.trim() } else { value };

        match current_key.as_str() {
            "ENTRY" if compound.id.is_empty() => {
                compound.id = value.split_whitespace().next().unwrap_or_default().to_string();
            },
            "NAME" => {
                let name = value.trim_end_matches(';').trim();
                if !name.is_empty() {
                    compound.names.push(name.to_string());
                }
            },
            "FORMULA" => compound.formula = value.to_string(),
            "EXACT_MASS" => compound.exact_mass = value.parse().ok(),
            "PATHWAY" => {
                let mut parts = value.splitn(2, char::is_whitespace);
                if let Some(id) = parts.next().filter(|id| !id.is_empty()) {
                    compound.pathways.push(KeggPathway {
                        id: id.to_string(),
                        name: parts.next().unwrap_or_default().trim().to_string(),
                    });
                }
            },
            "ENZYME" => {
                compound
                    .enzymes
                    .extend(value.split_whitespace().map(str::to_string));
            },
            _ => {},
        }
    }

    if compound.id.is_empty() {
        return Err(IngestError::malformed(SERVICE, "record has no ENTRY line"));
    }
    Ok(compound)
}

/// Parse a `/find/compound/<query>` response (`cpd:C00041\tL-Alanine; Alanine`)
pub fn parse_find(text: &str) -> Vec<CompoundHit> {
    text.lines()
        .filter_map(|line| {
            let (id, names) = line.split_once('\t')?;
            let id = id.trim().trim_start_matches("cpd:");
            if id.is_empty() {
                return None;
            }
            Some(CompoundHit {
                id: id.to_string(),
                names: names
                    .split(';')
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const ALANINE: &str = "\
ENTRY       C00041                      Compound
NAME        L-Alanine;
            Alanine
FORMULA     C3H7NO2
EXACT_MASS  89.0477
MOL_WEIGHT  89.0932
REACTION    R00258 R00396 R00397
PATHWAY     map00250  Alanine, aspartate and glutamate metabolism
            map00430  Taurine and hypotaurine metabolism
ENZYME      1.4.1.1         2.1.2.7         2.3.1.-
            2.6.1.2
DBLINKS     CAS: 56-41-7
///
";

    #[test]
    fn test_parse_compound_record() {
        let compound = parse_compound(ALANINE).unwrap();

        assert_eq!(compound.id, "C00041");
        assert_eq!(compound.names, vec!["L-Alanine", "Alanine"]);
        assert_eq!(compound.formula, "C3H7NO2");
        assert_eq!(compound.exact_mass, Some(89.0477));
        assert_eq!(compound.pathways.len(), 2);
        assert_eq!(compound.pathways[0].id, "map00250");
        assert_eq!(
            compound.pathways[1].name,
            "Taurine and hypotaurine metabolism"
        );
        assert_eq!(compound.enzymes, vec!["1.4.1.1", "2.1.2.7", "2.3.1.-", "2.6.1.2"]);
    }

    #[test]
    fn test_parse_compound_without_entry_fails() {
        assert!(parse_compound("NAME        Nothing\n///\n").is_err());
        assert!(parse_compound("").is_err());
    }

    #[test]
    fn test_parse_find_lines() {
        let hits = parse_find("cpd:C00041\tL-Alanine; Alanine\ncpd:C00133\tD-Alanine\n\nbroken line\n");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "C00041");
        assert_eq!(hits[0].names, vec!["L-Alanine", "Alanine"]);
        assert_eq!(hits[1].names, vec!["D-Alanine"]);
    }
}
