//! Archive listing/search data model shared across contracts and implementations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Kind of a listed archive entry.
pub enum ArchiveEntryKind {
    /// File entry.
    File,
    /// Folder entry.
    Folder,
}

impl ArchiveEntryKind {
    /// Returns `true` for folder entries.
    pub fn is_folder(self) -> bool {
        matches!(self, Self::Folder)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One item in a folder listing.
pub struct ArchiveEntry {
    /// Display name, leaf segment only.
    pub name: String,
    /// Canonical archive-rooted path.
    pub path: String,
    /// File or folder kind.
    pub kind: ArchiveEntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One search result returned by the archive index.
pub struct SearchHit {
    /// Indexed file name.
    pub filename: String,
    /// Institution the document was filed under.
    pub institution: String,
    /// Archive year the document was filed under.
    pub year: u16,
    /// Canonical archive-rooted path of the indexed file.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
/// File payload handed to the upload endpoint.
pub struct UploadFile {
    /// Original file name.
    pub name: String,
    /// MIME type reported by the picker, empty when unknown.
    pub mime_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One entry of the fixed language catalog offered by the translate/explain modal.
pub struct LanguageOption {
    /// Language code passed through verbatim as the `lang` query parameter.
    pub code: &'static str,
    /// Display name shown in the selector.
    pub name: &'static str,
}

/// Fixed catalog of languages supported by the translate/explain backend.
pub const SUPPORTED_LANGUAGES: [LanguageOption; 11] = [
    LanguageOption { code: "EN-US", name: "English (US)" },
    LanguageOption { code: "EN-GB", name: "English (UK)" },
    LanguageOption { code: "DE", name: "German" },
    LanguageOption { code: "FR", name: "French" },
    LanguageOption { code: "IT", name: "Italian" },
    LanguageOption { code: "ES", name: "Spanish" },
    LanguageOption { code: "NL", name: "Dutch" },
    LanguageOption { code: "PL", name: "Polish" },
    LanguageOption { code: "RO", name: "Romanian" },
    LanguageOption { code: "JA", name: "Japanese" },
    LanguageOption { code: "ZH", name: "Chinese" },
];

/// Language preselected when the translate/explain modal opens.
pub const DEFAULT_LANGUAGE_CODE: &str = "EN-US";

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn entry_kind_serde_values_match_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ArchiveEntryKind::File).expect("serialize"),
            "\"file\""
        );
        assert_eq!(
            serde_json::to_string(&ArchiveEntryKind::Folder).expect("serialize"),
            "\"folder\""
        );

        let kind: ArchiveEntryKind = serde_json::from_str("\"folder\"").expect("deserialize");
        assert!(kind.is_folder());
    }

    #[test]
    fn listing_and_search_records_round_trip_with_serde() {
        let entry = ArchiveEntry {
            name: "invoice.pdf".to_string(),
            path: "Archive/Finance/invoice.pdf".to_string(),
            kind: ArchiveEntryKind::File,
        };
        let value = serde_json::to_value(&entry).expect("serialize entry");
        assert_eq!(value["kind"], json!("file"));
        let round_trip: ArchiveEntry = serde_json::from_value(value).expect("deserialize entry");
        assert_eq!(round_trip, entry);

        let hit: SearchHit = serde_json::from_value(json!({
            "filename": "invoice.pdf",
            "institution": "Acme",
            "year": 2023,
            "path": "Archive/Finance/invoice.pdf"
        }))
        .expect("deserialize hit");
        assert_eq!(hit.year, 2023);
        assert_eq!(hit.institution, "Acme");
    }

    #[test]
    fn default_language_is_part_of_the_catalog() {
        assert!(SUPPORTED_LANGUAGES
            .iter()
            .any(|lang| lang.code == DEFAULT_LANGUAGE_CODE));
    }
}
