use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier scheme names used as keys in [`MetaRecord::identifiers`].
pub mod ids {
    pub const ISBN: &str = "ISBN";
    pub const ISBN13: &str = "ISBN13";
}

/// Points a record back at the provider that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSourceInfo {
    pub id: String,
    pub description: String,
    pub link: String,
}

/// Normalized book metadata, the same shape for every provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetaRecord {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub url: String,
    pub source: MetaSourceInfo,
    pub cover: String,
    pub description: String,
    pub series: String,
    pub series_index: f64,
    pub identifiers: BTreeMap<String, Vec<String>>,
    pub publisher: String,
    #[serde(rename = "publishedDate")]
    pub published_date: String,
    pub rating: u8,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
}

impl MetaRecord {
    pub fn new(
        id: String,
        title: String,
        authors: Vec<String>,
        url: String,
        source: MetaSourceInfo,
    ) -> Self {
        Self {
            id,
            title,
            authors,
            url,
            source,
            cover: String::new(),
            description: String::new(),
            series: String::new(),
            series_index: 0.0,
            identifiers: BTreeMap::new(),
            publisher: String::new(),
            published_date: String::new(),
            rating: 0,
            languages: vec![],
            tags: vec![],
        }
    }
}
