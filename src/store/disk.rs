use crate::core::catalog::{FUNDS_COLLECTION, FundStore};
use crate::core::fund::{FundRecord, FundType};
use anyhow::{Result, bail};
use async_trait::async_trait;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

/// Catalog store backed by a fjall partition. Records are stored as JSON keyed
/// by name.
pub struct FjallFundStore {
    keyspace: Keyspace,
    funds: PartitionHandle,
}

impl FjallFundStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;

        let keyspace = Config::new(path).open()?;
        let funds = keyspace.open_partition(FUNDS_COLLECTION, PartitionCreateOptions::default())?;
        Ok(Self { keyspace, funds })
    }
}

#[async_trait]
impl FundStore for FjallFundStore {
    async fn insert(&self, record: &FundRecord) -> Result<()> {
        if self.funds.contains_key(&record.name)? {
            bail!("Duplicate fund: {}", record.name);
        }

        self.funds
            .insert(record.name.as_str(), serde_json::to_vec(record)?)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Stored fund: {}", record.name);
        Ok(())
    }

    async fn list(&self, fund_type: Option<FundType>) -> Result<Vec<FundRecord>> {
        let mut records = Vec::new();
        for item in self.funds.iter() {
            let (_, value) = item?;
            let record: FundRecord = serde_json::from_slice(&value)?;
            if fund_type.is_none_or(|t| t == record.fund_type) {
                records.push(record);
            }
        }
        debug!("Listed {} funds", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fund::tests::{sample_bond, sample_fund};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fjall_store_insert_and_list() {
        let dir = tempdir().unwrap();
        let store = FjallFundStore::open(dir.path()).unwrap();

        // Initially, store is empty
        assert_eq!(store.count().await.unwrap(), 0);

        store.insert(&sample_fund("Quant ESG")).await.unwrap();
        store.insert(&sample_bond("NTPC Bond")).await.unwrap();

        let all = store.list(None).await.unwrap();
        assert_eq!(all.len(), 2);
        // Keys are ordered by name
        assert_eq!(all[0].name, "NTPC Bond");
        assert_eq!(all[1], sample_fund("Quant ESG"));

        let bonds = store.list(Some(FundType::GreenBond)).await.unwrap();
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].name, "NTPC Bond");
        assert!(store.list(Some(FundType::Invit)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fjall_store_rejects_duplicates() {
        let dir = tempdir().unwrap();
        let store = FjallFundStore::open(dir.path()).unwrap();

        store.insert(&sample_fund("Quant ESG")).await.unwrap();
        let err = store.insert(&sample_fund("Quant ESG")).await.unwrap_err();
        assert!(err.to_string().contains("Duplicate fund"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fjall_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = FjallFundStore::open(dir.path()).unwrap();
            store.insert(&sample_bond("NTPC Bond")).await.unwrap();
        }

        let store = FjallFundStore::open(dir.path()).unwrap();
        let all = store.list(None).await.unwrap();
        assert_eq!(all, vec![sample_bond("NTPC Bond")]);
    }
}
