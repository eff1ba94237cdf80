use async_trait::async_trait;

use crate::record::{MetaRecord, MetaSourceInfo};

/// A remote source of book metadata that the host library can query.
///
/// Providers are switched on and off by the host while shared, so the active
/// flag is set through `&self`.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Short stable id for the provider, e.g. "aladin"
    fn id(&self) -> &str;

    /// Human readable name shown by the host.
    fn name(&self) -> &str;

    fn source_info(&self) -> MetaSourceInfo;

    fn is_active(&self) -> bool;

    fn set_active(&self, active: bool);

    /// Search for `query`. Results without a cover use `generic_cover`.
    ///
    /// Returns `None` when the provider could not be reached, and an empty
    /// list when it is inactive or nothing matched.
    async fn search(
        &self,
        query: &str,
        generic_cover: &str,
        locale: &str,
    ) -> Option<Vec<MetaRecord>>;
}
