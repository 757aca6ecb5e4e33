use crate::*;

impl Contract {
    pub(crate) fn configure_auction(
        &mut self,
        actor_id: &AccountId,
        contract_id: AccountId,
        project_id: u64,
        start_time: u64,
        kind: DecayKind,
        start_price: U128,
        base_price: U128,
    ) -> Result<(), MinterError> {
        let key = project_key(contract_id.as_str(), project_id);
        self.check_project_authority(actor_id, &key)?;

        if start_price.0 < base_price.0 {
            return Err(MinterError::InvalidConfiguration(format!(
                "Start price {} is below base price {}",
                start_price.0, base_price.0
            )));
        }
        let now = now_seconds();
        if start_time.saturating_add(START_TIME_CORRECTION_WINDOW_SECONDS) < now {
            return Err(MinterError::InvalidConfiguration(format!(
                "Start time {} is more than {}s in the past",
                start_time, START_TIME_CORRECTION_WINDOW_SECONDS
            )));
        }
        match kind {
            DecayKind::Exponential { half_life_seconds } => {
                if half_life_seconds < self.auction_limits.min_half_life_seconds
                    || half_life_seconds > self.auction_limits.max_half_life_seconds
                {
                    return Err(MinterError::InvalidConfiguration(format!(
                        "Half-life {}s outside allowed range {}..={}s",
                        half_life_seconds,
                        self.auction_limits.min_half_life_seconds,
                        self.auction_limits.max_half_life_seconds
                    )));
                }
            }
            DecayKind::Linear { end_time } => {
                if end_time <= start_time {
                    return Err(MinterError::InvalidConfiguration(format!(
                        "End time {} must be after start time {}",
                        end_time, start_time
                    )));
                }
            }
        }

        let config = AuctionConfig {
            start_time,
            start_price,
            base_price,
            kind: kind.clone(),
            configured_by: actor_id.clone(),
            configured_at: now,
        };
        let previous = self.auctions.insert(key, config);

        MinterEvent::AuctionConfigured {
            contract_id,
            project_id,
            start_time,
            start_price,
            base_price,
            kind,
            reconfigured: previous.is_some(),
        }
        .emit();
        Ok(())
    }

    // Idempotent: resetting an unconfigured project succeeds and reports
    // `was_configured: false` so indexers can tell the two apart.
    pub(crate) fn reset_auction(
        &mut self,
        actor_id: &AccountId,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<(), MinterError> {
        let key = project_key(contract_id.as_str(), project_id);
        self.check_project_authority(actor_id, &key)?;

        let previous = self.auctions.remove(&key);
        MinterEvent::AuctionReset {
            contract_id,
            project_id,
            was_configured: previous.is_some(),
        }
        .emit();
        Ok(())
    }

    pub(crate) fn price_for(&self, key: &str, at: Option<u64>) -> Result<u128, MinterError> {
        let config = self
            .auctions
            .get(key)
            .ok_or_else(|| MinterError::auction_not_configured(key))?;
        config.price_at(at.unwrap_or_else(now_seconds))
    }

    // Auction details may be set by the project's artist or the owner. A
    // project with no split config yet has no artist, so only the owner may
    // act on it.
    pub(crate) fn check_project_authority(
        &self,
        actor_id: &AccountId,
        key: &str,
    ) -> Result<(), MinterError> {
        if actor_id == &self.owner_id {
            return Ok(());
        }
        match self.project_splits.get(key) {
            Some(splits) if &splits.artist_id == actor_id => Ok(()),
            _ => Err(MinterError::Unauthorized(
                "Only the project artist or the contract owner can perform this action".into(),
            )),
        }
    }
}
