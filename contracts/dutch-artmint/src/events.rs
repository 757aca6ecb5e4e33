use crate::types::DecayKind;
use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum MinterEvent {
    #[event_version("1.0.0")]
    AuctionConfigured {
        contract_id: AccountId,
        project_id: u64,
        start_time: u64,
        start_price: U128,
        base_price: U128,
        kind: DecayKind,
        reconfigured: bool,
    },
    #[event_version("1.0.0")]
    AuctionReset {
        contract_id: AccountId,
        project_id: u64,
        was_configured: bool,
    },
    #[event_version("1.0.0")]
    ProjectSplitsUpdated {
        contract_id: AccountId,
        project_id: u64,
        artist_id: AccountId,
        additional_payee_id: Option<AccountId>,
        additional_payee_percentage: u8,
        previous_artist_id: Option<AccountId>,
    },
    #[event_version("1.0.0")]
    ProviderConfigUpdated {
        provider_id: AccountId,
        provider_primary_percentage: u8,
        platform_provider_id: Option<AccountId>,
        platform_provider_primary_percentage: u8,
    },
    #[event_version("1.0.0")]
    AuctionLimitsUpdated {
        min_half_life_seconds: u64,
        max_half_life_seconds: u64,
    },
    #[event_version("1.0.0")]
    ProjectBound { contract_id: AccountId, project_id: u64 },
    #[event_version("1.0.0")]
    ProjectUnbound { contract_id: AccountId, project_id: u64 },
    #[event_version("1.0.0")]
    PurchaseCompleted {
        contract_id: AccountId,
        project_id: u64,
        buyer_id: AccountId,
        token_id: String,
        price: U128,
        purchase_count: u64,
    },
    #[event_version("1.0.0")]
    PurchaseFailed {
        contract_id: AccountId,
        project_id: u64,
        buyer_id: AccountId,
        refunded: U128,
        error: String,
    },
}
