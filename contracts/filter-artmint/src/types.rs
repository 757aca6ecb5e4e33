use near_sdk::{near, AccountId};

/// Registry record for one issuing contract. The record's presence in the
/// registry is the active flag; unregistration removes it.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct RegisteredContract {
    pub contract_id: AccountId,
    pub admin_id: AccountId,
    pub registered_at: u64,
}

/// Active assignment of one approved minter to one `(contract, project)`
/// pair. At most one binding exists per pair; setting overwrites.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct ProjectBinding {
    pub contract_id: AccountId,
    pub project_id: u64,
    pub minter_id: AccountId,
    pub minter_type: String,
    pub bound_at: u64,
}
