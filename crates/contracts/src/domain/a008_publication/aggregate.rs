use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationKind {
    #[default]
    Book,
    Report,
    JournalArticle,
    JournalIssue,
}

impl PublicationKind {
    pub fn code(&self) -> &'static str {
        match self {
            PublicationKind::Book => "book",
            PublicationKind::Report => "report",
            PublicationKind::JournalArticle => "journal-article",
            PublicationKind::JournalIssue => "journal-issue",
        }
    }

    pub fn label(&self) -> LocalizedText {
        match self {
            PublicationKind::Book => LocalizedText::pair("Book", "كتاب"),
            PublicationKind::Report => LocalizedText::pair("Report", "تقرير"),
            PublicationKind::JournalArticle => LocalizedText::pair("Article", "مقال"),
            PublicationKind::JournalIssue => LocalizedText::pair("Issue", "عدد"),
        }
    }
}

/// Library holding or journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    #[serde(default)]
    pub kind: PublicationKind,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    /// e.g. "Vol. 12, No. 3" for journal content
    #[serde(default, alias = "journal_issue")]
    pub journal_issue: Option<String>,
}

impl Publication {
    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }
}

impl EntityRecord for Publication {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "library"
    }

    fn envelope_key() -> &'static str {
        "publications"
    }

    fn element_name() -> &'static str {
        "Publication"
    }

    fn list_name() -> &'static str {
        "Publications"
    }
}

impl Searchable for Publication {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        let mut fields = vec![SearchField::Localized(Some(&self.title))];
        fields.extend(self.authors.iter().map(|a| SearchField::Text(a.as_str())));
        fields
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "kind" => Some(self.kind.code().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_filter::{filter_items, FilterState};
    use serde_json::json;

    #[test]
    fn test_search_matches_any_author() {
        let items: Vec<Publication> = serde_json::from_value(json!([
            {"id": "p1", "kind": "book", "title": "Thin Films", "authors": ["A. Haddad", "M. Noor"]},
            {"id": "p2", "kind": "journal-article", "title": "Catalysis", "authors": ["R. Aziz"]}
        ]))
        .unwrap();
        let found = filter_items(&items, &FilterState::with_search("noor"), "en");
        assert_eq!(found[0].id, "p1");
        let found = filter_items(&items, &FilterState::default().with_facet("kind", "journal-article"), "en");
        assert_eq!(found[0].id, "p2");
        assert_eq!(items[0].authors_line(), "A. Haddad, M. Noor");
    }
}
