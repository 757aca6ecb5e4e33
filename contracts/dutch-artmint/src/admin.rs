use crate::*;

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), MinterError> {
        if actor_id != &self.owner_id {
            return Err(MinterError::only_owner());
        }
        Ok(())
    }

    pub(crate) fn patch_provider_config(
        &mut self,
        actor_id: &AccountId,
        patch: ProviderConfigUpdate,
    ) -> Result<(), MinterError> {
        self.check_contract_owner(actor_id)?;
        self.provider_config.validate_patch(&patch)?;
        self.provider_config.apply_patch(&patch);

        MinterEvent::ProviderConfigUpdated {
            provider_id: self.provider_config.provider_id.clone(),
            provider_primary_percentage: self.provider_config.provider_primary_percentage,
            platform_provider_id: self.provider_config.platform_provider_id.clone(),
            platform_provider_primary_percentage: self
                .provider_config
                .platform_provider_primary_percentage,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn patch_auction_limits(
        &mut self,
        actor_id: &AccountId,
        patch: AuctionLimitsUpdate,
    ) -> Result<(), MinterError> {
        self.check_contract_owner(actor_id)?;
        self.auction_limits.validate_patch(&patch)?;
        self.auction_limits.apply_patch(&patch);

        MinterEvent::AuctionLimitsUpdated {
            min_half_life_seconds: self.auction_limits.min_half_life_seconds,
            max_half_life_seconds: self.auction_limits.max_half_life_seconds,
        }
        .emit();
        Ok(())
    }
}
