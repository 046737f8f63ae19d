use crate::core::catalog::FundStore;
use crate::core::fund::{FundRecord, FundType};
use anyhow::{Result, bail};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory catalog store, ordered by record name.
#[derive(Clone, Default)]
pub struct MemoryFundStore {
    inner: Arc<Mutex<BTreeMap<String, FundRecord>>>,
}

impl MemoryFundStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FundStore for MemoryFundStore {
    async fn insert(&self, record: &FundRecord) -> Result<()> {
        let mut funds = self.inner.lock().await;
        if funds.contains_key(&record.name) {
            bail!("Duplicate fund: {}", record.name);
        }
        debug!("Stored fund: {}", record.name);
        funds.insert(record.name.clone(), record.clone());
        Ok(())
    }

    async fn list(&self, fund_type: Option<FundType>) -> Result<Vec<FundRecord>> {
        let funds = self.inner.lock().await;
        Ok(funds
            .values()
            .filter(|record| fund_type.is_none_or(|t| t == record.fund_type))
            .cloned()
            .collect())
    }
}
