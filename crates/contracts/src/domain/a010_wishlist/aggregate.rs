use serde::{Deserialize, Serialize};

use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;

/// Event or service a learner saved for later
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    #[serde(default, alias = "target_id")]
    pub target_id: String,
    #[serde(default, alias = "target_kind")]
    pub target_kind: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default, alias = "added_at")]
    pub added_at: Option<String>,
}

impl EntityRecord for WishlistItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "me/wishlist"
    }

    fn envelope_key() -> &'static str {
        "items"
    }

    fn element_name() -> &'static str {
        "Wishlist item"
    }

    fn list_name() -> &'static str {
        "Wishlist"
    }
}

impl Searchable for WishlistItem {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![SearchField::Localized(Some(&self.title))]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "kind" => Some(self.target_kind.clone()).filter(|k| !k.is_empty()),
            _ => None,
        }
    }
}

impl DeleteGuard for WishlistItem {}
