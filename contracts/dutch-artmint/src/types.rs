use crate::constants::{
    DEFAULT_MAX_HALF_LIFE_SECONDS, DEFAULT_MIN_HALF_LIFE_SECONDS,
    DEFAULT_PROVIDER_PRIMARY_PERCENTAGE,
};
use crate::errors::MinterError;
use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// Decay shape of a Dutch auction. One strategy contract serves both shapes;
/// the shape is data, not a contract variant.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub enum DecayKind {
    Exponential { half_life_seconds: u64 },
    Linear { end_time: u64 },
}

/// Per-project auction configuration. Absence from the auctions map is the
/// explicit Unconfigured state; reset removes the record rather than zeroing
/// it.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct AuctionConfig {
    pub start_time: u64,
    pub start_price: U128,
    pub base_price: U128,
    pub kind: DecayKind,
    pub configured_by: AccountId,
    pub configured_at: u64,
}

/// Per-project revenue recipients. The additional payee's percentage applies
/// to the artist's remainder, not the gross amount.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct ProjectSplits {
    pub artist_id: AccountId,
    pub additional_payee_id: Option<AccountId>,
    pub additional_payee_percentage: u8,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct ProviderConfig {
    pub provider_id: AccountId,
    pub provider_primary_percentage: u8,
    pub platform_provider_id: Option<AccountId>,
    pub platform_provider_primary_percentage: u8,
}

impl ProviderConfig {
    pub fn new(provider_id: AccountId) -> Self {
        Self {
            provider_id,
            provider_primary_percentage: DEFAULT_PROVIDER_PRIMARY_PERCENTAGE,
            platform_provider_id: None,
            platform_provider_primary_percentage: 0,
        }
    }

    pub fn validate_patch(&self, patch: &ProviderConfigUpdate) -> Result<(), MinterError> {
        let provider_pct = patch
            .provider_primary_percentage
            .unwrap_or(self.provider_primary_percentage);
        let platform_pct = patch
            .platform_provider_primary_percentage
            .unwrap_or(self.platform_provider_primary_percentage);
        if provider_pct > 100 || platform_pct > 100 {
            return Err(MinterError::PercentagesInvalid(
                "provider percentages must be 0..=100".into(),
            ));
        }
        if provider_pct as u16 + platform_pct as u16 > 100 {
            return Err(MinterError::PercentagesInvalid(
                "combined provider percentages cannot exceed 100".into(),
            ));
        }
        let platform_id = patch
            .platform_provider_id
            .as_ref()
            .or(self.platform_provider_id.as_ref());
        if platform_pct > 0 && platform_id.is_none() {
            return Err(MinterError::PercentagesInvalid(
                "platform provider percentage set without a recipient".into(),
            ));
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, patch: &ProviderConfigUpdate) {
        if let Some(id) = &patch.provider_id {
            self.provider_id = id.clone();
        }
        if let Some(pct) = patch.provider_primary_percentage {
            self.provider_primary_percentage = pct;
        }
        if let Some(id) = &patch.platform_provider_id {
            self.platform_provider_id = Some(id.clone());
        }
        if let Some(pct) = patch.platform_provider_primary_percentage {
            self.platform_provider_primary_percentage = pct;
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct ProviderConfigUpdate {
    pub provider_id: Option<AccountId>,
    pub provider_primary_percentage: Option<u8>,
    pub platform_provider_id: Option<AccountId>,
    pub platform_provider_primary_percentage: Option<u8>,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct AuctionLimits {
    pub min_half_life_seconds: u64,
    pub max_half_life_seconds: u64,
}

impl Default for AuctionLimits {
    fn default() -> Self {
        Self {
            min_half_life_seconds: DEFAULT_MIN_HALF_LIFE_SECONDS,
            max_half_life_seconds: DEFAULT_MAX_HALF_LIFE_SECONDS,
        }
    }
}

impl AuctionLimits {
    pub fn validate_patch(&self, patch: &AuctionLimitsUpdate) -> Result<(), MinterError> {
        let min = patch
            .min_half_life_seconds
            .unwrap_or(self.min_half_life_seconds);
        let max = patch
            .max_half_life_seconds
            .unwrap_or(self.max_half_life_seconds);
        if min == 0 {
            return Err(MinterError::InvalidConfiguration(
                "minimum half-life must be positive".into(),
            ));
        }
        if min > max {
            return Err(MinterError::InvalidConfiguration(
                "minimum half-life cannot exceed maximum".into(),
            ));
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, patch: &AuctionLimitsUpdate) {
        if let Some(min) = patch.min_half_life_seconds {
            self.min_half_life_seconds = min;
        }
        if let Some(max) = patch.max_half_life_seconds {
            self.max_half_life_seconds = max;
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct AuctionLimitsUpdate {
    pub min_half_life_seconds: Option<u64>,
    pub max_half_life_seconds: Option<u64>,
}

/// Purchase context carried across the mint call into its settlement
/// callback. All state mutations happen before the call; the callback only
/// settles funds or rolls back.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct PendingPurchase {
    pub contract_id: AccountId,
    pub project_id: u64,
    pub buyer_id: AccountId,
    pub deposit: U128,
    pub price: U128,
    pub splits: Vec<(AccountId, U128)>,
}
