//! Program catalog: the immutable dataset the bot searches over
//!
//! The catalog is loaded once at startup from a JSON file and shared
//! read-only across all conversations. Each record describes one
//! university's offerings across up to three education levels, with
//! Russian and Kazakh title variants.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::{AppError, AppResult};

/// Education level selected by the user at the start of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    /// Command token as the user sends it (`/bachelor` etc., without the slash).
    pub fn token(self) -> &'static str {
        match self {
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Doctorate => "doctorate",
        }
    }

    /// Parses a command token (without the leading slash).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "bachelor" => Some(EducationLevel::Bachelor),
            "master" => Some(EducationLevel::Master),
            "doctorate" => Some(EducationLevel::Doctorate),
            _ => None,
        }
    }

    /// Russian display title used in prompts.
    pub fn title_ru(self) -> &'static str {
        match self {
            EducationLevel::Bachelor => "Бакалавриат",
            EducationLevel::Master => "Магистратура",
            EducationLevel::Doctorate => "Докторантура",
        }
    }
}

/// One university-program entry.
///
/// A populated field for a given level means the university offers that
/// level; an empty or missing field means it does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProgramRecord {
    pub name: String,
    #[serde(default)]
    pub baccalaureate: String,
    #[serde(default)]
    pub baccalaureate_kz: String,
    #[serde(default)]
    pub magistracy: String,
    #[serde(default)]
    pub magistracy_kz: String,
    #[serde(default)]
    pub doctorate: String,
    #[serde(default)]
    pub doctorate_kz: String,
}

impl ProgramRecord {
    /// Program title displayed for the given level (Russian variant).
    pub fn title_for(&self, level: EducationLevel) -> &str {
        match level {
            EducationLevel::Bachelor => &self.baccalaureate,
            EducationLevel::Master => &self.magistracy,
            EducationLevel::Doctorate => &self.doctorate,
        }
    }

    /// Whether this record offers the given level (non-empty title field).
    pub fn offers(&self, level: EducationLevel) -> bool {
        !self.title_for(level).is_empty()
    }

    /// All six searchable text fields (three levels × two languages).
    pub fn text_fields(&self) -> [&str; 6] {
        [
            &self.baccalaureate,
            &self.baccalaureate_kz,
            &self.magistracy,
            &self.magistracy_kz,
            &self.doctorate,
            &self.doctorate_kz,
        ]
    }
}

/// Ordered, immutable sequence of program records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramCatalog {
    records: Vec<ProgramRecord>,
}

impl ProgramCatalog {
    /// Loads the catalog from a JSON file.
    ///
    /// Any failure here is fatal at startup: the bot must not serve
    /// search requests over a missing, malformed or empty catalog.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<ProgramRecord> =
            serde_json::from_str(&raw).map_err(|source| AppError::CatalogParse {
                path: path.display().to_string(),
                source,
            })?;
        if records.is_empty() {
            return Err(AppError::CatalogEmpty(path.display().to_string()));
        }
        Ok(Self { records })
    }

    /// Builds a catalog from already-parsed records (used in tests).
    pub fn from_records(records: Vec<ProgramRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProgramRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Deduplicated university names, sorted lexicographically.
    ///
    /// The returned sequence is the canonical numbered menu: the same
    /// materialized list must be reused verbatim to resolve a chosen
    /// index back to a university name.
    pub fn universities(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn record(name: &str) -> ProgramRecord {
        ProgramRecord {
            name: name.to_string(),
            ..ProgramRecord::default()
        }
    }

    #[test]
    fn load_reads_records_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "KazNU", "baccalaureate": "Computer Science"}}]"#
        )
        .unwrap();

        let catalog = ProgramCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].name, "KazNU");
        assert_eq!(catalog.records()[0].baccalaureate, "Computer Science");
        assert_eq!(catalog.records()[0].magistracy, "");
    }

    #[test]
    fn load_fails_on_missing_file() {
        let err = ProgramCatalog::load(Path::new("/nonexistent/programs.json")).unwrap_err();
        assert!(matches!(err, AppError::CatalogRead { .. }));
    }

    #[test]
    fn load_fails_on_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = ProgramCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::CatalogParse { .. }));
    }

    #[test]
    fn load_fails_on_empty_record_list() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = ProgramCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::CatalogEmpty(_)));
    }

    #[test]
    fn universities_are_deduplicated_and_sorted() {
        let catalog = ProgramCatalog::from_records(vec![
            record("KBTU"),
            record("ENU"),
            record("KBTU"),
            record("KazNU"),
            record("ENU"),
        ]);

        assert_eq!(catalog.universities(), vec!["ENU", "KBTU", "KazNU"]);
    }

    #[test]
    fn universities_index_mapping_is_stable_across_calls() {
        let catalog = ProgramCatalog::from_records(vec![
            record("Satbayev"),
            record("KazNU"),
            record("ENU"),
            record("KazNU"),
        ]);

        assert_eq!(catalog.universities(), catalog.universities());
    }

    #[test]
    fn offers_level_iff_field_non_empty() {
        let rec = ProgramRecord {
            name: "KazNU".to_string(),
            baccalaureate: "CS".to_string(),
            ..ProgramRecord::default()
        };

        assert!(rec.offers(EducationLevel::Bachelor));
        assert!(!rec.offers(EducationLevel::Master));
        assert!(!rec.offers(EducationLevel::Doctorate));
    }

    #[test]
    fn level_token_roundtrip() {
        for level in [
            EducationLevel::Bachelor,
            EducationLevel::Master,
            EducationLevel::Doctorate,
        ] {
            assert_eq!(EducationLevel::parse(level.token()), Some(level));
        }
        assert_eq!(EducationLevel::parse("phd"), None);
    }
}
