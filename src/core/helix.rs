//! Secondary-structure annotations carried over from official PDB headers.
//!
//! `HELIX` record layout (1-based columns):
//!
//! | Columns | Field |
//! |---------|-------|
//! | 12-14   | Helix identifier |
//! | 16-18   | Initial residue name |
//! | 20      | Initial chain |
//! | 22-25   | Initial residue number |
//! | 28-30   | Terminal residue name |
//! | 32      | Terminal chain |
//! | 34-37   | Terminal residue number |
//! | 39-40   | Helix class |
//! | 72-76   | Helix length |

use serde::{Deserialize, Serialize};

use crate::utils::columns::field;

/// A parsed `HELIX` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelixRecord {
    pub helix_id: String,
    pub start_resname: String,
    pub start_asym: String,
    pub start_resnum: i32,
    pub end_resname: String,
    pub end_asym: String,
    pub end_resnum: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helix_class: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    /// The record exactly as it appeared in the header
    pub raw: String,
}

impl HelixRecord {
    /// Parse a `HELIX` line.
    ///
    /// Residue numbers are required; class and length are optional since
    /// many hand-edited files leave them blank.
    ///
    /// # Errors
    ///
    /// Returns the name of the first required field that is not an integer.
    pub fn parse(line: &str) -> Result<Self, &'static str> {
        let start_resnum = field(line, 21, 25)
            .parse()
            .map_err(|_| "initial residue number")?;
        let end_resnum = field(line, 33, 37)
            .parse()
            .map_err(|_| "terminal residue number")?;

        Ok(Self {
            helix_id: field(line, 11, 14).to_string(),
            start_resname: field(line, 15, 18).to_string(),
            start_asym: field(line, 19, 20).to_string(),
            start_resnum,
            end_resname: field(line, 27, 30).to_string(),
            end_asym: field(line, 31, 32).to_string(),
            end_resnum,
            helix_class: field(line, 38, 40).parse().ok(),
            length: field(line, 71, 76).parse().ok(),
            raw: line.to_string(),
        })
    }
}
