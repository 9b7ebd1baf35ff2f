//! Dataset loading
//!
//! Reads the semicolon-delimited characters file into typed records.
//! Rows without a House are dropped at this boundary, the remainder is
//! filtered to the known houses and decorated with the cleaned blood
//! status. The returned vector is never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregate::{filter_to_houses, normalize_blood_status};

/// The four grouping houses. Everything else is dropped at load time.
pub const KNOWN_HOUSES: [&str; 4] = ["Gryffindor", "Slytherin", "Ravenclaw", "Hufflepuff"];

/// Columns the dataset must carry in its header row
pub const REQUIRED_COLUMNS: [&str; 5] = ["Name", "House", "Gender", "Blood status", "Species"];

/// One character row, validated and decorated at the load boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: String,
    /// Trimmed house name, guaranteed non-empty after load
    pub house: String,
    pub gender: String,
    /// Raw blood status as it appears in the file
    pub blood_status: String,
    pub species: String,
    /// Derived once from `blood_status`; re-deriving is idempotent
    pub blood_status_clean: String,
}

impl Character {
    /// Build a character from raw field values, deriving the cleaned
    /// blood status. House is stored trimmed.
    pub fn from_raw(
        name: &str,
        house: &str,
        gender: &str,
        blood_status: &str,
        species: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            house: house.trim().to_string(),
            gender: gender.trim().to_string(),
            blood_status: blood_status.to_string(),
            species: species.trim().to_string(),
            blood_status_clean: normalize_blood_status(Some(blood_status)),
        }
    }
}

/// Raw CSV row shape, header-mapped. Missing cells default to empty.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "House", default)]
    house: String,
    #[serde(rename = "Gender", default)]
    gender: String,
    #[serde(rename = "Blood status", default)]
    blood_status: String,
    #[serde(rename = "Species", default)]
    species: String,
}

/// Errors from the load boundary
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(csv::Error),
    MissingColumn(&'static str),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Failed to read dataset: {}", e),
            LoadError::Parse(e) => write!(f, "Failed to parse dataset: {}", e),
            LoadError::MissingColumn(col) => {
                write!(f, "Dataset is missing required column: {:?}", col)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Parse(e)
    }
}

/// Load the characters dataset from a semicolon-delimited file.
///
/// The result is the working set: trimmed, filtered to `allowed_houses`,
/// with `blood_status_clean` already derived. Rows with an empty House
/// cell are dropped silently, not errored.
pub fn load_characters<P: AsRef<Path>>(
    path: P,
    allowed_houses: &[String],
) -> Result<Vec<Character>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut characters = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row?;
        if row.house.trim().is_empty() {
            continue;
        }
        characters.push(Character::from_raw(
            &row.name,
            &row.house,
            &row.gender,
            &row.blood_status,
            &row.species,
        ));
    }

    Ok(filter_to_houses(&characters, allowed_houses))
}

/// Default allowed-house list as owned strings, for config defaults
pub fn default_houses() -> Vec<String> {
    KNOWN_HOUSES.iter().map(|h| h.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_filters_and_decorates() {
        let file = write_csv(
            "Name;House;Gender;Blood status;Species\n\
             Harry Potter;Gryffindor;Male;Half-blood;Human\n\
             Firenze;;Male;;Centaur\n\
             Draco Malfoy; Slytherin ;Male;Pure-blood;Human\n",
        );

        let characters = load_characters(file.path(), &default_houses()).unwrap();
        assert_eq!(characters.len(), 2);
        assert_eq!(characters[0].name, "Harry Potter");
        assert_eq!(characters[0].blood_status_clean, "Half-blood");
        // Whitespace around the house cell is trimmed, not dropped
        assert_eq!(characters[1].house, "Slytherin");
    }

    #[test]
    fn test_load_drops_unknown_houses() {
        let file = write_csv(
            "Name;House;Gender;Blood status;Species\n\
             Firenze;Forbidden Forest;Male;;Centaur\n\
             Luna Lovegood;Ravenclaw;Female;Pure-blood;Human\n",
        );

        let characters = load_characters(file.path(), &default_houses()).unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].house, "Ravenclaw");
    }

    #[test]
    fn test_load_missing_column() {
        let file = write_csv("Name;House;Gender\nHarry;Gryffindor;Male\n");

        let err = load_characters(file.path(), &default_houses()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Blood status")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_characters("/nonexistent/characters.csv", &default_houses()).unwrap_err();
        assert!(matches!(err, LoadError::Io(_) | LoadError::Parse(_)));
    }

    #[test]
    fn test_from_raw_derives_clean_status() {
        let c = Character::from_raw(
            "Severus Snape",
            "Slytherin",
            "Male",
            "Pure-blood and Half-blood (disputed)",
            "Human",
        );
        assert_eq!(c.blood_status_clean, "Pure-blood or half-blood");
    }
}
