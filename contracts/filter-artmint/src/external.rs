use near_sdk::{ext_contract, AccountId, Gas};

pub const GAS_BINDING_HOOK: Gas = Gas::from_tgas(10);

/// Best-effort hooks fired at a minter when its project assignments change,
/// so strategy contracts can mirror the filter's bindings locally.
#[ext_contract(ext_minter)]
pub trait MinterBindingHooks {
    fn on_project_bound(&mut self, contract_id: AccountId, project_id: u64);
    fn on_project_unbound(&mut self, contract_id: AccountId, project_id: u64);
}
