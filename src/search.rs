//! Search engine: the two filter modes over the program catalog
//!
//! Both functions are pure over the immutable catalog. An empty result
//! is a first-class outcome ("no programs found"), never an error.

use crate::catalog::{EducationLevel, ProgramCatalog, ProgramRecord};

/// Index-based lookup against a previously rendered university menu.
///
/// `menu` must be the exact materialized sequence shown to the user;
/// resolving the selector against anything recomputed later risks an
/// index/name mismatch. Non-numeric or out-of-range selectors yield an
/// empty result. Matching records are filtered by level presence, so a
/// record whose level field is empty is never returned here.
pub fn by_university<'a>(
    catalog: &'a ProgramCatalog,
    menu: &[String],
    selector: &str,
    level: EducationLevel,
) -> Vec<&'a ProgramRecord> {
    let index: usize = match selector.trim().parse() {
        Ok(i) => i,
        Err(_) => return Vec::new(),
    };
    let Some(university) = menu.get(index) else {
        return Vec::new();
    };
    catalog
        .records()
        .iter()
        .filter(|r| r.name == *university && r.offers(level))
        .collect()
}

/// Case-insensitive substring search across all six text fields.
///
/// Level-agnostic at the matching stage: the selected level only affects
/// which title is displayed afterwards. An empty or whitespace-only query
/// yields an empty result. Catalog order is preserved.
pub fn by_specialty<'a>(catalog: &'a ProgramCatalog, query: &str) -> Vec<&'a ProgramRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .records()
        .iter()
        .filter(|r| {
            r.text_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn catalog() -> ProgramCatalog {
        ProgramCatalog::from_records(vec![
            ProgramRecord {
                name: "KazNU".to_string(),
                baccalaureate: "Information Technology".to_string(),
                baccalaureate_kz: "Ақпараттық технологиялар".to_string(),
                ..ProgramRecord::default()
            },
            ProgramRecord {
                name: "ENU".to_string(),
                magistracy: "Data Science".to_string(),
                magistracy_kz: "Деректер ғылымы".to_string(),
                ..ProgramRecord::default()
            },
            ProgramRecord {
                name: "KBTU".to_string(),
                doctorate: "Computer Engineering".to_string(),
                ..ProgramRecord::default()
            },
        ])
    }

    #[test]
    fn by_university_filters_on_level_presence() {
        let catalog = catalog();
        let menu = catalog.universities(); // ["ENU", "KBTU", "KazNU"]

        let hits = by_university(&catalog, &menu, "2", EducationLevel::Bachelor);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "KazNU");

        // Same university, level it does not offer.
        let empty = by_university(&catalog, &menu, "2", EducationLevel::Master);
        assert!(empty.is_empty());
    }

    #[test]
    fn by_university_ignores_non_numeric_selector() {
        let catalog = catalog();
        let menu = catalog.universities();
        assert!(by_university(&catalog, &menu, "abc", EducationLevel::Bachelor).is_empty());
        assert!(by_university(&catalog, &menu, "", EducationLevel::Bachelor).is_empty());
        assert!(by_university(&catalog, &menu, "-1", EducationLevel::Bachelor).is_empty());
    }

    #[test]
    fn by_university_ignores_out_of_range_index() {
        let catalog = catalog();
        let menu = catalog.universities();
        assert!(by_university(&catalog, &menu, "99", EducationLevel::Bachelor).is_empty());
    }

    #[test]
    fn by_specialty_is_case_insensitive() {
        let catalog = catalog();
        let upper = by_specialty(&catalog, "IT");
        let lower = by_specialty(&catalog, "it");
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }

    #[test]
    fn by_specialty_matches_substrings() {
        let catalog = catalog();
        let hits = by_specialty(&catalog, "format");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "KazNU");
    }

    #[test]
    fn by_specialty_matches_any_level_and_language() {
        let catalog = catalog();

        // Match in a Kazakh-language field.
        let kz = by_specialty(&catalog, "деректер");
        assert_eq!(kz.len(), 1);
        assert_eq!(kz[0].name, "ENU");

        // Match in a doctorate field regardless of any selected level.
        let doc = by_specialty(&catalog, "engineering");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc[0].name, "KBTU");
    }

    #[test]
    fn by_specialty_empty_query_yields_no_results() {
        let catalog = catalog();
        assert!(by_specialty(&catalog, "").is_empty());
        assert!(by_specialty(&catalog, "   ").is_empty());
    }

    #[test]
    fn by_specialty_preserves_catalog_order() {
        let catalog = ProgramCatalog::from_records(vec![
            ProgramRecord {
                name: "B-University".to_string(),
                baccalaureate: "Applied Mathematics".to_string(),
                ..ProgramRecord::default()
            },
            ProgramRecord {
                name: "A-University".to_string(),
                magistracy: "Mathematics".to_string(),
                ..ProgramRecord::default()
            },
        ]);

        let hits = by_specialty(&catalog, "math");
        let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B-University", "A-University"]);
    }
}
