use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::AladinConfig;
use crate::helpers::{
    OneOrMany, Scalar, encode_query, identifier_list, parse_cover, parse_pub_date, parse_tags,
    text,
};
use crate::http::{HttpClient, ReqwestClient};
use crate::record::{MetaRecord, MetaSourceInfo, ids};
use crate::traits::MetadataProvider;

pub const ALADIN_ID: &str = "aladin";
pub const ALADIN_NAME: &str = "Aladin";
pub const ALADIN_DESCRIPTION: &str = "Aladin Books";
pub const ALADIN_META_URL: &str = "https://www.aladin.co.kr/";

/// Aladin only lists Korean-market books.
const ALADIN_LANGUAGE: &str = "Korean";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    item: Option<Vec<serde_json::Value>>,
    #[serde(default, rename = "errorCode")]
    error_code: Option<Scalar>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<Scalar>,
}

/// Every field is loosely typed so one odd value never costs the whole item.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AladinItem {
    item_id: Option<Scalar>,
    title: Option<Scalar>,
    author: Option<Scalar>,
    link: Option<Scalar>,
    cover: Option<Scalar>,
    description: Option<Scalar>,
    publisher: Option<Scalar>,
    pub_date: Option<Scalar>,
    series_info: Option<serde_json::Value>,
    category_name: Option<Scalar>,
    isbn: Option<OneOrMany<Scalar>>,
    isbn13: Option<OneOrMany<Scalar>>,
}

pub struct Aladin {
    config: AladinConfig,
    active: AtomicBool,
    client: Arc<dyn HttpClient>,
}

impl Aladin {
    pub fn new(config: AladinConfig) -> Result<Self> {
        config.validate()?;
        let client = ReqwestClient::new(config.timeout())?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    pub fn with_client(config: AladinConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            active: AtomicBool::new(config.enabled),
            config,
            client,
        }
    }

    pub fn config(&self) -> &AladinConfig {
        &self.config
    }

    pub fn search_url(&self, query: &str) -> String {
        let endpoint = &self.config.endpoint;
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{endpoint}{separator}ttbkey={key}&Cover={cover}&ItemIdType=ISBN13&MaxResults={max}&start=1&SearchTarget=Book&output=JS&Version=20131101&Query={query}",
            key = urlencoding::encode(&self.config.api_key),
            cover = self.config.cover_size,
            max = self.config.max_results,
            query = encode_query(query),
        )
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn fetch_json(&self, url: &str) -> Result<String> {
        debug!("fetching Aladin search results");
        self.client.get(url).await
    }

    /// Like [`MetadataProvider::search`] but returns the failure instead of
    /// logging it.
    #[instrument(skip(self, generic_cover))]
    pub async fn try_search(
        &self,
        query: &str,
        generic_cover: &str,
        locale: &str,
    ) -> Result<Vec<MetaRecord>> {
        if !self.is_active() {
            debug!("Aladin is disabled, skipping search");
            return Ok(vec![]);
        }

        let url = self.search_url(query);
        let body = self.fetch_json(&url).await.context("fetch Aladin search")?;
        self.parse_search_response(&body, generic_cover)
    }

    /// Normalize a raw `ItemSearch` response body.
    pub fn parse_search_response(
        &self,
        body: &str,
        generic_cover: &str,
    ) -> Result<Vec<MetaRecord>> {
        // output=JS responses sometimes end with a statement terminator
        let body = body.trim().trim_end_matches(';');
        let value: serde_json::Value =
            serde_json::from_str(body).context("parse Aladin search json")?;
        if !value.is_object() {
            bail!("Aladin search response is not a JSON object");
        }
        let response: SearchResponse =
            serde_json::from_value(value).context("decode Aladin search response")?;

        if let Some(code) = response.error_code.and_then(Scalar::into_text) {
            bail!(
                "Aladin returned error {code}: {}",
                text(response.error_message)
            );
        }

        let items = response.item.unwrap_or_default();
        let mut records = Vec::with_capacity(items.len());
        for (i, raw) in items.into_iter().enumerate() {
            if !raw.is_object() {
                warn!(index = i, "skipping Aladin item that is not an object");
                continue;
            }
            match serde_json::from_value::<AladinItem>(raw) {
                Ok(item) => records.push(self.parse_item(item, generic_cover)),
                Err(err) => warn!(index = i, "skipping undecodable Aladin item: {err}"),
            }
        }
        debug!(count = records.len(), "Aladin search results");
        Ok(records)
    }

    fn parse_item(&self, item: AladinItem, generic_cover: &str) -> MetaRecord {
        let mut record = MetaRecord::new(
            text(item.item_id),
            text(item.title),
            vec![text(item.author)],
            text(item.link),
            self.source_info(),
        );

        record.cover = parse_cover(Some(text(item.cover).as_str()), generic_cover);
        record.description = text(item.description);
        record.languages = vec![ALADIN_LANGUAGE.to_string()];
        record.publisher = text(item.publisher);
        record.published_date = parse_pub_date(&text(item.pub_date));
        record.series = item
            .series_info
            .as_ref()
            .and_then(|s| s.get("seriesName"))
            .and_then(|n| n.as_str())
            .unwrap_or_default()
            .to_string();
        record.tags = parse_tags(Some(text(item.category_name).as_str()));
        record
            .identifiers
            .insert(ids::ISBN13.to_string(), identifier_list(item.isbn13));
        record
            .identifiers
            .insert(ids::ISBN.to_string(), identifier_list(item.isbn));

        record
    }
}

#[async_trait]
impl MetadataProvider for Aladin {
    fn id(&self) -> &str {
        ALADIN_ID
    }

    fn name(&self) -> &str {
        ALADIN_NAME
    }

    fn source_info(&self) -> MetaSourceInfo {
        MetaSourceInfo {
            id: ALADIN_ID.to_string(),
            description: ALADIN_DESCRIPTION.to_string(),
            link: ALADIN_META_URL.to_string(),
        }
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    async fn search(
        &self,
        query: &str,
        generic_cover: &str,
        locale: &str,
    ) -> Option<Vec<MetaRecord>> {
        match self.try_search(query, generic_cover, locale).await {
            Ok(records) => Some(records),
            Err(err) => {
                warn!(provider = ALADIN_ID, "Aladin search failed: {err:#}");
                None
            }
        }
    }
}
