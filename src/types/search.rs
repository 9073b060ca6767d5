use serde::{Deserialize, Serialize};

pub const AUTHORS_INDEX: &str = "contacts-index";
pub const POSTS_INDEX: &str = "posts-index";

/// Query string accepted by the search endpoints.
#[derive(Deserialize, Debug, Default)]
pub struct RSearch {
    #[serde(default)]
    pub keywords: String,
    pub filters: Option<String>,
    #[serde(rename = "hitsPerPage")]
    pub hits_per_page: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keywords: String,
    pub filters: Option<String>,
    pub hits_per_page: Option<u32>,
    pub page: Option<u32>,
}

impl From<RSearch> for SearchQuery {
    fn from(r: RSearch) -> Self {
        SearchQuery {
            keywords: r.keywords,
            filters: r.filters.filter(|f| !f.is_empty()),
            hits_per_page: r.hits_per_page,
            page: r.page,
        }
    }
}
