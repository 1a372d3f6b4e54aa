//! Account retrieval.

use crate::account::AccountState;
use async_trait::async_trait;
use solana_pubkey::Pubkey;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use std::{
    collections::HashMap,
    sync::{
        RwLock,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

/// Max number of keys in one `getMultipleAccounts` request.
pub const MAX_MULTIPLE_ACCOUNTS: usize = 100;

/// Read access to account data.
///
/// A missing account is `Ok(None)`, errors are transport failures.
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn get_account_data(&self, address: &Pubkey) -> crate::Result<Option<Vec<u8>>>;

    /// Result is index-aligned with `addresses`.
    async fn get_multiple_account_data(
        &self,
        addresses: &[Pubkey],
    ) -> crate::Result<Vec<Option<Vec<u8>>>>;
}

#[async_trait]
impl AccountSource for RpcClient {
    async fn get_account_data(&self, address: &Pubkey) -> crate::Result<Option<Vec<u8>>> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn get_multiple_account_data(
        &self,
        addresses: &[Pubkey],
    ) -> crate::Result<Vec<Option<Vec<u8>>>> {
        let response = self
            .get_multiple_accounts_with_commitment(addresses, self.commitment())
            .await?;
        Ok(response
            .value
            .into_iter()
            .map(|account| account.map(|account| account.data))
            .collect())
    }
}

/// In-memory accounts, counts the requests it serves.
#[derive(Debug, Default)]
pub struct MemoryAccounts {
    accounts: RwLock<HashMap<Pubkey, Vec<u8>>>,
    single_requests: AtomicUsize,
    multiple_requests: AtomicUsize,
    offline: AtomicBool,
}

impl MemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, address: Pubkey, data: Vec<u8>) {
        if let Ok(mut accounts) = self.accounts.write() {
            accounts.insert(address, data);
        }
    }

    pub fn remove(&self, address: &Pubkey) -> Option<Vec<u8>> {
        self.accounts.write().ok()?.remove(address)
    }

    /// Make every request fail with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    pub fn single_requests(&self) -> usize {
        self.single_requests.load(Ordering::Relaxed)
    }

    pub fn multiple_requests(&self) -> usize {
        self.multiple_requests.load(Ordering::Relaxed)
    }

    fn get(&self, address: &Pubkey) -> crate::Result<Option<Vec<u8>>> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(crate::Error::custom(anyhow::anyhow!("connection refused")));
        }
        let accounts = self
            .accounts
            .read()
            .map_err(|_| crate::Error::custom(anyhow::anyhow!("accounts lock poisoned")))?;
        Ok(accounts.get(address).cloned())
    }
}

#[async_trait]
impl AccountSource for MemoryAccounts {
    async fn get_account_data(&self, address: &Pubkey) -> crate::Result<Option<Vec<u8>>> {
        self.single_requests.fetch_add(1, Ordering::Relaxed);
        self.get(address)
    }

    async fn get_multiple_account_data(
        &self,
        addresses: &[Pubkey],
    ) -> crate::Result<Vec<Option<Vec<u8>>>> {
        self.multiple_requests.fetch_add(1, Ordering::Relaxed);
        addresses.iter().map(|address| self.get(address)).collect()
    }
}

/// Fetch and decode one account. Missing or undecodable accounts are `None`.
pub async fn fetch_state<T, S>(source: &S, address: &Pubkey) -> crate::Result<Option<T>>
where
    T: AccountState,
    S: AccountSource + ?Sized,
{
    let data = source.get_account_data(address).await?;
    tracing::debug!("fetched {} {}: {:?} bytes", T::NAME, address, data.as_ref().map(Vec::len));
    Ok(data.and_then(|data| T::try_decode(&data)))
}

/// Fetch and decode many accounts, one request per
/// [`MAX_MULTIPLE_ACCOUNTS`] keys. Result is index-aligned with `addresses`.
pub async fn fetch_many<T, S>(source: &S, addresses: &[Pubkey]) -> crate::Result<Vec<Option<T>>>
where
    T: AccountState,
    S: AccountSource + ?Sized,
{
    if addresses.is_empty() {
        return Ok(Vec::new());
    }
    let chunks = futures::future::try_join_all(
        addresses
            .chunks(MAX_MULTIPLE_ACCOUNTS)
            .map(|chunk| source.get_multiple_account_data(chunk)),
    )
    .await?;
    let states = chunks
        .into_iter()
        .flatten()
        .map(|data| data.and_then(|data| T::try_decode(&data)))
        .collect::<Vec<_>>();
    tracing::debug!(
        "fetched {} {}: {} decoded",
        addresses.len(),
        T::NAME,
        states.iter().filter(|s| s.is_some()).count()
    );
    Ok(states)
}
