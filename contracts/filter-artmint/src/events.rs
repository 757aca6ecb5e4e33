use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum FilterEvent {
    #[event_version("1.0.0")]
    ContractRegistered { contract_id: AccountId, admin_id: AccountId },
    #[event_version("1.0.0")]
    ContractUnregistered { contract_id: AccountId, admin_id: AccountId },
    #[event_version("1.0.0")]
    MinterApprovedGlobally { minter_id: AccountId, minter_type: String },
    #[event_version("1.0.0")]
    MinterRevokedGlobally { minter_id: AccountId },
    #[event_version("1.0.0")]
    MinterApprovedForContract {
        contract_id: AccountId,
        minter_id: AccountId,
        minter_type: String,
    },
    #[event_version("1.0.0")]
    MinterRevokedForContract { contract_id: AccountId, minter_id: AccountId },
    #[event_version("1.0.0")]
    ProjectMinterSet {
        contract_id: AccountId,
        project_id: u64,
        minter_id: AccountId,
        minter_type: String,
        previous_minter_id: Option<AccountId>,
    },
    #[event_version("1.0.0")]
    ProjectMinterRemoved {
        contract_id: AccountId,
        project_id: u64,
        minter_id: AccountId,
    },
}
