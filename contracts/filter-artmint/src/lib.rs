use crate::errors::FilterError;
use crate::state::FilterState;
use crate::types::{ProjectBinding, RegisteredContract};
use near_sdk::{env, near, AccountId, PanicOnDefault};

pub mod errors;
mod events;
pub mod external;
pub mod registry;
pub mod state;
pub mod types;

/// Binds each creative project, scoped to a registered issuing contract, to
/// exactly one approved pricing strategy. Approval is two-tier: platform-wide
/// or scoped to a single issuing contract.
#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MinterFilter {
    state: FilterState,
}

#[near]
impl MinterFilter {
    #[init]
    pub fn new() -> Self {
        Self {
            state: FilterState::new(),
        }
    }

    // --- Registry ---

    #[handle_result]
    pub fn register_contract(
        &mut self,
        contract_id: AccountId,
        admin_id: AccountId,
    ) -> Result<(), FilterError> {
        self.state
            .register_contract(&env::predecessor_account_id(), contract_id, admin_id)
    }

    #[handle_result]
    pub fn unregister_contract(&mut self, contract_id: AccountId) -> Result<(), FilterError> {
        self.state
            .unregister_contract(&env::predecessor_account_id(), &contract_id)
    }

    pub fn is_registered(&self, contract_id: AccountId) -> bool {
        self.state.is_registered(&contract_id)
    }

    pub fn get_registered_contracts(&self, limit: u32, offset: u32) -> Vec<RegisteredContract> {
        self.state.get_registered_contracts(limit, offset)
    }

    // --- Approvals ---

    #[handle_result]
    pub fn approve_minter_globally(
        &mut self,
        minter_id: AccountId,
        minter_type: String,
    ) -> Result<(), FilterError> {
        self.state
            .approve_minter_globally(&env::predecessor_account_id(), minter_id, minter_type)
    }

    #[handle_result]
    pub fn revoke_minter_globally(&mut self, minter_id: AccountId) -> Result<(), FilterError> {
        self.state
            .revoke_minter_globally(&env::predecessor_account_id(), &minter_id)
    }

    #[handle_result]
    pub fn approve_minter_for_contract(
        &mut self,
        contract_id: AccountId,
        minter_id: AccountId,
        minter_type: String,
    ) -> Result<(), FilterError> {
        self.state.approve_minter_for_contract(
            &env::predecessor_account_id(),
            contract_id,
            minter_id,
            minter_type,
        )
    }

    #[handle_result]
    pub fn revoke_minter_for_contract(
        &mut self,
        contract_id: AccountId,
        minter_id: AccountId,
    ) -> Result<(), FilterError> {
        self.state.revoke_minter_for_contract(
            &env::predecessor_account_id(),
            contract_id,
            &minter_id,
        )
    }

    pub fn is_minter_approved(&self, contract_id: AccountId, minter_id: AccountId) -> bool {
        self.state.is_minter_approved(&contract_id, &minter_id)
    }

    // --- Bindings ---

    #[handle_result]
    pub fn set_minter_for_project(
        &mut self,
        contract_id: AccountId,
        project_id: u64,
        minter_id: AccountId,
    ) -> Result<(), FilterError> {
        self.state.set_minter_for_project(
            &env::predecessor_account_id(),
            contract_id,
            project_id,
            minter_id,
        )
    }

    #[handle_result]
    pub fn remove_minter_for_project(
        &mut self,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<(), FilterError> {
        self.state
            .remove_minter_for_project(&env::predecessor_account_id(), contract_id, project_id)
    }

    #[handle_result]
    pub fn get_minter_for_project(
        &self,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<AccountId, FilterError> {
        self.state.get_minter_for_project(&contract_id, project_id)
    }

    pub fn is_project_bound(&self, contract_id: AccountId, project_id: u64) -> bool {
        self.state.is_project_bound(&contract_id, project_id)
    }

    pub fn get_projects_for_minter(
        &self,
        minter_id: AccountId,
        limit: u32,
        offset: u32,
    ) -> Vec<ProjectBinding> {
        self.state.get_projects_for_minter(&minter_id, limit, offset)
    }

    pub fn get_bindings_for_contract(
        &self,
        contract_id: AccountId,
        limit: u32,
        offset: u32,
    ) -> Vec<ProjectBinding> {
        self.state
            .get_bindings_for_contract(&contract_id, limit, offset)
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        env::state_read().unwrap_or_else(|| env::panic_str("Failed to read contract state"))
    }
}
