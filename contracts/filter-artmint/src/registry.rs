use crate::errors::FilterError;
use crate::state::StorageKey;
use crate::types::RegisteredContract;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::IterableMap;
use near_sdk::AccountId;

/// Tracks which issuing contracts the platform recognizes. No other component
/// may treat a contract as valid unless it is present here.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct ContractRegistry {
    contracts: IterableMap<AccountId, RegisteredContract>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self {
            contracts: IterableMap::new(StorageKey::RegisteredContracts),
        }
    }

    pub fn register(
        &mut self,
        contract_id: AccountId,
        admin_id: AccountId,
        registered_at: u64,
    ) -> Result<(), FilterError> {
        if self.contracts.contains_key(&contract_id) {
            return Err(FilterError::AlreadyRegistered(format!(
                "Contract already registered: {}",
                contract_id
            )));
        }
        self.contracts.insert(
            contract_id.clone(),
            RegisteredContract {
                contract_id,
                admin_id,
                registered_at,
            },
        );
        Ok(())
    }

    pub fn unregister(&mut self, contract_id: &AccountId) -> Result<RegisteredContract, FilterError> {
        self.contracts
            .remove(contract_id)
            .ok_or_else(|| FilterError::contract_not_registered(contract_id))
    }

    pub fn is_registered(&self, contract_id: &AccountId) -> bool {
        self.contracts.contains_key(contract_id)
    }

    pub fn get(&self, contract_id: &AccountId) -> Option<&RegisteredContract> {
        self.contracts.get(contract_id)
    }

    pub fn require_registered(
        &self,
        contract_id: &AccountId,
    ) -> Result<&RegisteredContract, FilterError> {
        self.contracts
            .get(contract_id)
            .ok_or_else(|| FilterError::contract_not_registered(contract_id))
    }

    pub fn list(&self, limit: u32, offset: u32) -> Vec<RegisteredContract> {
        let start = offset as usize;
        let end = (offset + limit) as usize;
        self.contracts
            .values()
            .skip(start)
            .take(end - start)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> u32 {
        self.contracts.len()
    }
}
