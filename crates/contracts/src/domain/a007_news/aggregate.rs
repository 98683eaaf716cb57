use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;

/// Published news item (read-only on the public site)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub summary: Option<LocalizedText>,
    #[serde(default)]
    pub slug: String,
    #[serde(default, alias = "published_at")]
    pub published_at: Option<String>,
    #[serde(default, alias = "image_url")]
    pub image_url: Option<String>,
}

impl EntityRecord for NewsArticle {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "news"
    }

    fn envelope_key() -> &'static str {
        "news"
    }

    fn element_name() -> &'static str {
        "News article"
    }

    fn list_name() -> &'static str {
        "News"
    }
}

impl Searchable for NewsArticle {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::Localized(Some(&self.title)),
            SearchField::Localized(self.summary.as_ref()),
        ]
    }
}
