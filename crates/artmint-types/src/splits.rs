use crate::error::SplitError;

/// Revenue-split configuration for one primary sale.
///
/// Generic over the recipient type so the calculation stays usable off-chain;
/// contracts instantiate `R = AccountId`. The provider percentages are
/// independent line items on the gross amount; the additional-payee
/// percentage applies to the artist's remainder, not the gross.
#[derive(Debug, Clone)]
pub struct SplitConfig<R> {
    pub provider: R,
    pub provider_percentage: u8,
    pub platform_provider: Option<R>,
    pub platform_provider_percentage: u8,
    pub artist: R,
    pub additional_payee: Option<R>,
    pub additional_payee_percentage: u8,
}

impl<R> SplitConfig<R> {
    pub fn validate(&self) -> Result<(), SplitError> {
        for (name, pct) in [
            ("provider", self.provider_percentage),
            ("platform provider", self.platform_provider_percentage),
            ("additional payee", self.additional_payee_percentage),
        ] {
            if pct > 100 {
                return Err(SplitError::PercentagesInvalid(format!(
                    "{name} percentage {pct} exceeds 100"
                )));
            }
        }
        if self.provider_percentage as u16 + self.platform_provider_percentage as u16 > 100 {
            return Err(SplitError::PercentagesInvalid(
                "combined provider percentages exceed 100".into(),
            ));
        }
        if self.platform_provider_percentage > 0 && self.platform_provider.is_none() {
            return Err(SplitError::PercentagesInvalid(
                "platform provider percentage set without a recipient".into(),
            ));
        }
        if self.additional_payee_percentage > 0 && self.additional_payee.is_none() {
            return Err(SplitError::PercentagesInvalid(
                "additional payee percentage set without a recipient".into(),
            ));
        }
        Ok(())
    }
}

// Exact floor(amount * pct / 100) without widening: amount = 100q + r, so
// the product splits into q*pct + r*pct/100 and r*pct stays far below u128::MAX.
fn percentage_of(amount: u128, pct: u8) -> u128 {
    let pct = pct as u128;
    (amount / 100) * pct + (amount % 100) * pct / 100
}

/// Partition `gross` among the configured recipients.
///
/// Output order: provider, platform provider, additional payee, artist.
/// Recipients whose share is exactly zero are omitted entirely. The artist's
/// share is the remainder after all other shares, so the outputs always sum
/// to `gross` and truncation losses land with the artist.
pub fn compute_splits<R: Clone>(
    gross: u128,
    config: &SplitConfig<R>,
) -> Result<Vec<(R, u128)>, SplitError> {
    config.validate()?;

    let provider_share = percentage_of(gross, config.provider_percentage);
    let platform_share = percentage_of(gross, config.platform_provider_percentage);
    let remainder = gross - provider_share - platform_share;
    let payee_share = percentage_of(remainder, config.additional_payee_percentage);
    let artist_share = remainder - payee_share;

    let mut out = Vec::with_capacity(4);
    if provider_share > 0 {
        out.push((config.provider.clone(), provider_share));
    }
    if platform_share > 0 {
        if let Some(platform) = &config.platform_provider {
            out.push((platform.clone(), platform_share));
        }
    }
    if payee_share > 0 {
        if let Some(payee) = &config.additional_payee {
            out.push((payee.clone(), payee_share));
        }
    }
    if artist_share > 0 {
        out.push((config.artist.clone(), artist_share));
    }
    Ok(out)
}
