use artmint_types::project_key;
use near_sdk::borsh::BorshSerialize;
use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{
    env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise, PromiseError,
};

pub mod constants;
mod errors;
mod events;
mod external;

mod admin;
mod auction;
mod hooks;
mod pricing;
mod purchase;
mod splits;

mod types;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::MinterError;
pub use events::MinterEvent;
pub use external::{ext_issuer, ext_self};
pub use types::{
    AuctionConfig, AuctionLimits, AuctionLimitsUpdate, DecayKind, PendingPurchase,
    ProjectSplits, ProviderConfig, ProviderConfigUpdate,
};

#[derive(BorshSerialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKey {
    Auctions,
    ProjectSplits,
    BoundProjects,
    PurchaseCounts,
    PurchaseLocks,
}

pub(crate) fn now_seconds() -> u64 {
    env::block_timestamp() / NANOS_PER_SECOND
}

/// Dutch-auction pricing strategy: computes the current mint price as a
/// deterministic function of elapsed time (exponential or linear decay) and
/// distributes primary-sale revenue among the configured stakeholders.
#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub owner_id: AccountId,
    // The only account allowed to drive binding hooks.
    pub filter_id: AccountId,
    pub provider_config: ProviderConfig,
    pub auction_limits: AuctionLimits,
    pub auctions: IterableMap<String, AuctionConfig>,
    pub project_splits: IterableMap<String, ProjectSplits>,
    pub bound_projects: IterableSet<String>,
    pub purchase_counts: LookupMap<String, u64>,
    // Reentrancy guard: keys held from purchase entry until settlement.
    pub purchase_locks: IterableSet<String>,
}

#[near]
impl Contract {
    #[init]
    pub fn new(filter_id: AccountId, provider_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id: env::predecessor_account_id(),
            filter_id,
            provider_config: ProviderConfig::new(provider_id),
            auction_limits: AuctionLimits::default(),
            auctions: IterableMap::new(StorageKey::Auctions),
            project_splits: IterableMap::new(StorageKey::ProjectSplits),
            bound_projects: IterableSet::new(StorageKey::BoundProjects),
            purchase_counts: LookupMap::new(StorageKey::PurchaseCounts),
            purchase_locks: IterableSet::new(StorageKey::PurchaseLocks),
        }
    }

    // --- Auction configuration ---

    #[handle_result]
    pub fn set_auction_details(
        &mut self,
        contract_id: AccountId,
        project_id: u64,
        start_time: u64,
        kind: DecayKind,
        start_price: U128,
        base_price: U128,
    ) -> Result<(), MinterError> {
        self.configure_auction(
            &env::predecessor_account_id(),
            contract_id,
            project_id,
            start_time,
            kind,
            start_price,
            base_price,
        )
    }

    #[handle_result]
    pub fn reset_auction_details(
        &mut self,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<(), MinterError> {
        self.reset_auction(&env::predecessor_account_id(), contract_id, project_id)
    }

    pub fn get_auction(&self, contract_id: AccountId, project_id: u64) -> Option<AuctionConfig> {
        self.auctions
            .get(&project_key(contract_id.as_str(), project_id))
            .cloned()
    }

    #[handle_result]
    pub fn get_price(
        &self,
        contract_id: AccountId,
        project_id: u64,
        at: Option<u64>,
    ) -> Result<U128, MinterError> {
        self.price_for(&project_key(contract_id.as_str(), project_id), at)
            .map(U128)
    }

    // --- Revenue splits ---

    #[handle_result]
    pub fn set_project_splits(
        &mut self,
        contract_id: AccountId,
        project_id: u64,
        artist_id: AccountId,
        additional_payee_id: Option<AccountId>,
        additional_payee_percentage: u8,
    ) -> Result<(), MinterError> {
        self.set_splits(
            &env::predecessor_account_id(),
            contract_id,
            project_id,
            artist_id,
            additional_payee_id,
            additional_payee_percentage,
        )
    }

    pub fn get_project_splits(
        &self,
        contract_id: AccountId,
        project_id: u64,
    ) -> Option<ProjectSplits> {
        self.project_splits
            .get(&project_key(contract_id.as_str(), project_id))
            .cloned()
    }

    #[handle_result]
    pub fn get_splits(
        &self,
        contract_id: AccountId,
        project_id: u64,
        gross_amount: U128,
    ) -> Result<Vec<(AccountId, U128)>, MinterError> {
        let key = project_key(contract_id.as_str(), project_id);
        Ok(self
            .splits_for(&key, gross_amount.0)?
            .into_iter()
            .map(|(recipient, amount)| (recipient, U128(amount)))
            .collect())
    }

    // --- Purchase ---

    #[payable]
    #[handle_result]
    pub fn purchase(
        &mut self,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<Promise, MinterError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        let pending =
            self.prepare_purchase(&buyer_id, contract_id.clone(), project_id, deposit)?;

        Ok(ext_issuer::ext(contract_id)
            .with_static_gas(GAS_MINT_TOKEN)
            .mint_token(project_id, buyer_id)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(GAS_RESOLVE_PURCHASE)
                    .resolve_purchase(pending),
            ))
    }

    #[private]
    pub fn resolve_purchase(
        &mut self,
        pending: PendingPurchase,
        #[callback_result] minted: Result<String, PromiseError>,
    ) -> Option<String> {
        self.finish_purchase(pending, minted.ok())
    }

    pub fn get_purchase_count(&self, contract_id: AccountId, project_id: u64) -> u64 {
        self.purchase_counts
            .get(&project_key(contract_id.as_str(), project_id))
            .copied()
            .unwrap_or(0)
    }

    // --- Binding hooks ---

    #[handle_result]
    pub fn on_project_bound(
        &mut self,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<(), MinterError> {
        self.record_binding(&env::predecessor_account_id(), contract_id, project_id)
    }

    #[handle_result]
    pub fn on_project_unbound(
        &mut self,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<(), MinterError> {
        self.clear_binding(&env::predecessor_account_id(), contract_id, project_id)
    }

    pub fn is_project_bound(&self, contract_id: AccountId, project_id: u64) -> bool {
        self.bound_projects
            .contains(&project_key(contract_id.as_str(), project_id))
    }

    pub fn get_bound_projects(&self, limit: u32, offset: u32) -> Vec<String> {
        assert!(limit <= MAX_PAGE_LIMIT, "Limit exceeds maximum allowed value");
        let start = offset as usize;
        let end = (offset + limit) as usize;
        self.bound_projects
            .iter()
            .skip(start)
            .take(end - start)
            .cloned()
            .collect()
    }

    // --- Platform configuration ---

    #[handle_result]
    pub fn update_provider_config(
        &mut self,
        patch: ProviderConfigUpdate,
    ) -> Result<(), MinterError> {
        self.patch_provider_config(&env::predecessor_account_id(), patch)
    }

    #[handle_result]
    pub fn update_auction_limits(
        &mut self,
        patch: AuctionLimitsUpdate,
    ) -> Result<(), MinterError> {
        self.patch_auction_limits(&env::predecessor_account_id(), patch)
    }

    pub fn get_provider_config(&self) -> ProviderConfig {
        self.provider_config.clone()
    }

    pub fn get_auction_limits(&self) -> AuctionLimits {
        self.auction_limits.clone()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        env::state_read().unwrap_or_else(|| env::panic_str("Failed to read contract state"))
    }
}
