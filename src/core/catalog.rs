use crate::core::fund::{FundRecord, FundType};
use anyhow::Result;
use async_trait::async_trait;

/// Name of the collection holding catalog records.
pub const FUNDS_COLLECTION: &str = "funds";

/// Insert-only storage for catalog records, keyed by record name.
#[async_trait]
pub trait FundStore: Send + Sync {
    /// Inserts a record. Fails if a record with the same name exists.
    async fn insert(&self, record: &FundRecord) -> Result<()>;

    /// Lists stored records ordered by name, optionally filtered by type.
    async fn list(&self, fund_type: Option<FundType>) -> Result<Vec<FundRecord>>;

    async fn count(&self) -> Result<usize> {
        Ok(self.list(None).await?.len())
    }
}
