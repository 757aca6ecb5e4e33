use crate::errors::FilterError;
use crate::events::FilterEvent;
use crate::external::{ext_minter, GAS_BINDING_HOOK};
use crate::registry::ContractRegistry;
use crate::types::ProjectBinding;
use artmint_types::project_key;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{env, AccountId, BorshStorageKey};

const MAX_PAGE_LIMIT: u32 = 100;

#[derive(BorshSerialize, BorshDeserialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKey {
    RegisteredContracts,
    GloballyApproved,
    MinterTypes,
    ContractApprovals,
    ContractApprovalSet { contract_id: AccountId },
    Bindings,
    BindingsByContract,
    BindingsByContractSet { contract_id: AccountId },
    BindingsByMinter,
    BindingsByMinterSet { minter_id: AccountId },
}

pub(crate) fn now_seconds() -> u64 {
    env::block_timestamp() / 1_000_000_000
}

#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct FilterState {
    pub version: String,
    pub owner_id: AccountId,
    pub registry: ContractRegistry,
    // Approval tiers are independent: a minter is usable against a contract
    // iff it is globally approved OR in that contract's approval set.
    pub globally_approved: IterableSet<AccountId>,
    pub contract_approvals: LookupMap<AccountId, IterableSet<AccountId>>,
    pub minter_types: LookupMap<AccountId, String>,
    pub bindings: IterableMap<String, ProjectBinding>,
    pub bindings_by_contract: LookupMap<AccountId, IterableSet<String>>,
    pub bindings_by_minter: LookupMap<AccountId, IterableSet<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id: env::predecessor_account_id(),
            registry: ContractRegistry::new(),
            globally_approved: IterableSet::new(StorageKey::GloballyApproved),
            contract_approvals: LookupMap::new(StorageKey::ContractApprovals),
            minter_types: LookupMap::new(StorageKey::MinterTypes),
            bindings: IterableMap::new(StorageKey::Bindings),
            bindings_by_contract: LookupMap::new(StorageKey::BindingsByContract),
            bindings_by_minter: LookupMap::new(StorageKey::BindingsByMinter),
        }
    }

    fn check_owner(&self, caller: &AccountId) -> Result<(), FilterError> {
        if caller != &self.owner_id {
            return Err(FilterError::only_owner());
        }
        Ok(())
    }

    // Per-contract admin rights: the admin recorded at registration, or the
    // platform owner. Requires the contract to be registered.
    fn check_contract_admin(
        &self,
        caller: &AccountId,
        contract_id: &AccountId,
    ) -> Result<(), FilterError> {
        let record = self.registry.require_registered(contract_id)?;
        if caller != &record.admin_id && caller != &self.owner_id {
            return Err(FilterError::only_contract_admin(contract_id));
        }
        Ok(())
    }

    // --- Registry ---

    pub fn register_contract(
        &mut self,
        caller: &AccountId,
        contract_id: AccountId,
        admin_id: AccountId,
    ) -> Result<(), FilterError> {
        self.check_owner(caller)?;
        self.registry
            .register(contract_id.clone(), admin_id.clone(), now_seconds())?;
        FilterEvent::ContractRegistered {
            contract_id,
            admin_id,
        }
        .emit();
        Ok(())
    }

    pub fn unregister_contract(
        &mut self,
        caller: &AccountId,
        contract_id: &AccountId,
    ) -> Result<(), FilterError> {
        self.check_owner(caller)?;
        let record = self.registry.unregister(contract_id)?;
        FilterEvent::ContractUnregistered {
            contract_id: record.contract_id,
            admin_id: record.admin_id,
        }
        .emit();
        Ok(())
    }

    pub fn is_registered(&self, contract_id: &AccountId) -> bool {
        self.registry.is_registered(contract_id)
    }

    // --- Approvals ---

    pub fn approve_minter_globally(
        &mut self,
        caller: &AccountId,
        minter_id: AccountId,
        minter_type: String,
    ) -> Result<(), FilterError> {
        self.check_owner(caller)?;
        if self.globally_approved.contains(&minter_id) {
            return Err(FilterError::AlreadyApproved(format!(
                "Minter already globally approved: {}",
                minter_id
            )));
        }
        self.globally_approved.insert(minter_id.clone());
        self.minter_types
            .insert(minter_id.clone(), minter_type.clone());
        FilterEvent::MinterApprovedGlobally {
            minter_id,
            minter_type,
        }
        .emit();
        Ok(())
    }

    pub fn revoke_minter_globally(
        &mut self,
        caller: &AccountId,
        minter_id: &AccountId,
    ) -> Result<(), FilterError> {
        self.check_owner(caller)?;
        // Revocation independence: contract-level approvals are untouched.
        if !self.globally_approved.remove(minter_id) {
            return Err(FilterError::NotApproved(format!(
                "Minter is not globally approved: {}",
                minter_id
            )));
        }
        FilterEvent::MinterRevokedGlobally {
            minter_id: minter_id.clone(),
        }
        .emit();
        Ok(())
    }

    pub fn approve_minter_for_contract(
        &mut self,
        caller: &AccountId,
        contract_id: AccountId,
        minter_id: AccountId,
        minter_type: String,
    ) -> Result<(), FilterError> {
        self.check_contract_admin(caller, &contract_id)?;
        if self.globally_approved.contains(&minter_id) {
            return Err(FilterError::AlreadyApproved(format!(
                "Minter {} is already globally approved",
                minter_id
            )));
        }
        if self
            .contract_approvals
            .get(&contract_id)
            .is_some_and(|set| set.contains(&minter_id))
        {
            return Err(FilterError::AlreadyApproved(format!(
                "Minter {} is already approved for {}",
                minter_id, contract_id
            )));
        }
        if self.contract_approvals.get(&contract_id).is_none() {
            self.contract_approvals.insert(
                contract_id.clone(),
                IterableSet::new(StorageKey::ContractApprovalSet {
                    contract_id: contract_id.clone(),
                }),
            );
        }
        self.contract_approvals
            .get_mut(&contract_id)
            .expect("Approval set should exist")
            .insert(minter_id.clone());
        self.minter_types
            .insert(minter_id.clone(), minter_type.clone());
        FilterEvent::MinterApprovedForContract {
            contract_id,
            minter_id,
            minter_type,
        }
        .emit();
        Ok(())
    }

    pub fn revoke_minter_for_contract(
        &mut self,
        caller: &AccountId,
        contract_id: AccountId,
        minter_id: &AccountId,
    ) -> Result<(), FilterError> {
        self.check_contract_admin(caller, &contract_id)?;
        // Revocation independence: global approval is untouched.
        let set = self
            .contract_approvals
            .get_mut(&contract_id)
            .ok_or_else(|| {
                FilterError::NotApproved(format!(
                    "Minter {} is not approved for {}",
                    minter_id, contract_id
                ))
            })?;
        if !set.remove(minter_id) {
            return Err(FilterError::NotApproved(format!(
                "Minter {} is not approved for {}",
                minter_id, contract_id
            )));
        }
        if set.is_empty() {
            self.contract_approvals.remove(&contract_id);
        }
        FilterEvent::MinterRevokedForContract {
            contract_id,
            minter_id: minter_id.clone(),
        }
        .emit();
        Ok(())
    }

    pub fn is_minter_approved(&self, contract_id: &AccountId, minter_id: &AccountId) -> bool {
        self.globally_approved.contains(minter_id)
            || self
                .contract_approvals
                .get(contract_id)
                .is_some_and(|set| set.contains(minter_id))
    }

    // --- Bindings ---

    pub fn set_minter_for_project(
        &mut self,
        caller: &AccountId,
        contract_id: AccountId,
        project_id: u64,
        minter_id: AccountId,
    ) -> Result<(), FilterError> {
        self.check_contract_admin(caller, &contract_id)?;
        // Approval is required at bind time only; an existing binding is not
        // re-checked when approvals change later.
        if !self.is_minter_approved(&contract_id, &minter_id) {
            return Err(FilterError::NotApproved(format!(
                "Minter {} is not approved for {}",
                minter_id, contract_id
            )));
        }
        let minter_type = self
            .minter_types
            .get(&minter_id)
            .cloned()
            .unwrap_or_default();
        let key = project_key(contract_id.as_str(), project_id);
        let previous = self.bindings.insert(
            key.clone(),
            ProjectBinding {
                contract_id: contract_id.clone(),
                project_id,
                minter_id: minter_id.clone(),
                minter_type: minter_type.clone(),
                bound_at: now_seconds(),
            },
        );

        if let Some(prev) = &previous {
            if prev.minter_id != minter_id {
                self.drop_minter_index(&prev.minter_id, &key);
            }
        }
        if self.bindings_by_minter.get(&minter_id).is_none() {
            self.bindings_by_minter.insert(
                minter_id.clone(),
                IterableSet::new(StorageKey::BindingsByMinterSet {
                    minter_id: minter_id.clone(),
                }),
            );
        }
        self.bindings_by_minter
            .get_mut(&minter_id)
            .expect("Minter index should exist")
            .insert(key.clone());
        if self.bindings_by_contract.get(&contract_id).is_none() {
            self.bindings_by_contract.insert(
                contract_id.clone(),
                IterableSet::new(StorageKey::BindingsByContractSet {
                    contract_id: contract_id.clone(),
                }),
            );
        }
        self.bindings_by_contract
            .get_mut(&contract_id)
            .expect("Contract index should exist")
            .insert(key);

        FilterEvent::ProjectMinterSet {
            contract_id: contract_id.clone(),
            project_id,
            minter_id: minter_id.clone(),
            minter_type,
            previous_minter_id: previous.as_ref().map(|prev| prev.minter_id.clone()),
        }
        .emit();

        if let Some(prev) = previous {
            if prev.minter_id != minter_id {
                let _ = ext_minter::ext(prev.minter_id)
                    .with_static_gas(GAS_BINDING_HOOK)
                    .on_project_unbound(contract_id.clone(), project_id);
            }
        }
        let _ = ext_minter::ext(minter_id)
            .with_static_gas(GAS_BINDING_HOOK)
            .on_project_bound(contract_id, project_id);
        Ok(())
    }

    pub fn remove_minter_for_project(
        &mut self,
        caller: &AccountId,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<(), FilterError> {
        self.check_contract_admin(caller, &contract_id)?;
        let key = project_key(contract_id.as_str(), project_id);
        let binding = self
            .bindings
            .remove(&key)
            .ok_or_else(|| FilterError::no_binding(&contract_id, project_id))?;

        self.drop_minter_index(&binding.minter_id, &key);
        if let Some(set) = self.bindings_by_contract.get_mut(&contract_id) {
            set.remove(&key);
            if set.is_empty() {
                self.bindings_by_contract.remove(&contract_id);
            }
        }

        FilterEvent::ProjectMinterRemoved {
            contract_id: contract_id.clone(),
            project_id,
            minter_id: binding.minter_id.clone(),
        }
        .emit();

        let _ = ext_minter::ext(binding.minter_id)
            .with_static_gas(GAS_BINDING_HOOK)
            .on_project_unbound(contract_id, project_id);
        Ok(())
    }

    fn drop_minter_index(&mut self, minter_id: &AccountId, key: &String) {
        if let Some(set) = self.bindings_by_minter.get_mut(minter_id) {
            set.remove(key);
            if set.is_empty() {
                self.bindings_by_minter.remove(minter_id);
            }
        }
    }

    // --- Views ---

    pub fn get_minter_for_project(
        &self,
        contract_id: &AccountId,
        project_id: u64,
    ) -> Result<AccountId, FilterError> {
        self.bindings
            .get(&project_key(contract_id.as_str(), project_id))
            .map(|binding| binding.minter_id.clone())
            .ok_or_else(|| FilterError::no_binding(contract_id, project_id))
    }

    pub fn is_project_bound(&self, contract_id: &AccountId, project_id: u64) -> bool {
        self.bindings
            .contains_key(&project_key(contract_id.as_str(), project_id))
    }

    pub fn get_projects_for_minter(
        &self,
        minter_id: &AccountId,
        limit: u32,
        offset: u32,
    ) -> Vec<ProjectBinding> {
        assert!(limit <= MAX_PAGE_LIMIT, "Limit exceeds maximum allowed value");
        let keys = match self.bindings_by_minter.get(minter_id) {
            Some(set) => set,
            None => return Vec::new(),
        };
        self.collect_bindings(keys, limit, offset)
    }

    pub fn get_bindings_for_contract(
        &self,
        contract_id: &AccountId,
        limit: u32,
        offset: u32,
    ) -> Vec<ProjectBinding> {
        assert!(limit <= MAX_PAGE_LIMIT, "Limit exceeds maximum allowed value");
        let keys = match self.bindings_by_contract.get(contract_id) {
            Some(set) => set,
            None => return Vec::new(),
        };
        self.collect_bindings(keys, limit, offset)
    }

    pub fn get_registered_contracts(
        &self,
        limit: u32,
        offset: u32,
    ) -> Vec<crate::types::RegisteredContract> {
        assert!(limit <= MAX_PAGE_LIMIT, "Limit exceeds maximum allowed value");
        self.registry.list(limit, offset)
    }

    fn collect_bindings(
        &self,
        keys: &IterableSet<String>,
        limit: u32,
        offset: u32,
    ) -> Vec<ProjectBinding> {
        let start = offset as usize;
        let end = (offset + limit) as usize;
        keys.iter()
            .skip(start)
            .take(end - start)
            .filter_map(|key| self.bindings.get(key).cloned())
            .collect()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
