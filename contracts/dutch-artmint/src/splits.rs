use crate::*;
use artmint_types::SplitConfig;

impl Contract {
    pub(crate) fn set_splits(
        &mut self,
        actor_id: &AccountId,
        contract_id: AccountId,
        project_id: u64,
        artist_id: AccountId,
        additional_payee_id: Option<AccountId>,
        additional_payee_percentage: u8,
    ) -> Result<(), MinterError> {
        let key = project_key(contract_id.as_str(), project_id);
        // Initial artist assignment is owner-only; afterwards the artist may
        // maintain their own payee configuration.
        if actor_id != &self.owner_id {
            match self.project_splits.get(&key) {
                Some(splits) if &splits.artist_id == actor_id => {}
                _ => {
                    return Err(MinterError::Unauthorized(
                        "Only the contract owner or the current artist can update splits".into(),
                    ))
                }
            }
        }
        if additional_payee_percentage > 100 {
            return Err(MinterError::PercentagesInvalid(format!(
                "Additional payee percentage {} exceeds 100",
                additional_payee_percentage
            )));
        }
        if additional_payee_percentage > 0 && additional_payee_id.is_none() {
            return Err(MinterError::PercentagesInvalid(
                "Additional payee percentage set without a recipient".into(),
            ));
        }

        let previous = self.project_splits.insert(
            key,
            ProjectSplits {
                artist_id: artist_id.clone(),
                additional_payee_id: additional_payee_id.clone(),
                additional_payee_percentage,
            },
        );

        MinterEvent::ProjectSplitsUpdated {
            contract_id,
            project_id,
            artist_id,
            additional_payee_id,
            additional_payee_percentage,
            previous_artist_id: previous.map(|splits| splits.artist_id),
        }
        .emit();
        Ok(())
    }

    pub(crate) fn split_config(&self, key: &str) -> Result<SplitConfig<AccountId>, MinterError> {
        let project = self
            .project_splits
            .get(key)
            .ok_or_else(|| MinterError::splits_not_configured(key))?;
        Ok(SplitConfig {
            provider: self.provider_config.provider_id.clone(),
            provider_percentage: self.provider_config.provider_primary_percentage,
            platform_provider: self.provider_config.platform_provider_id.clone(),
            platform_provider_percentage: self
                .provider_config
                .platform_provider_primary_percentage,
            artist: project.artist_id.clone(),
            additional_payee: project.additional_payee_id.clone(),
            additional_payee_percentage: project.additional_payee_percentage,
        })
    }

    pub(crate) fn splits_for(
        &self,
        key: &str,
        gross: u128,
    ) -> Result<Vec<(AccountId, u128)>, MinterError> {
        let config = self.split_config(key)?;
        artmint_types::compute_splits(gross, &config)
            .map_err(|err| MinterError::PercentagesInvalid(err.to_string()))
    }
}
