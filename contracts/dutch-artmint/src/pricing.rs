use crate::*;
use primitive_types::U256;

impl AuctionConfig {
    /// Current price at `now` (seconds since epoch). Pure in the config and
    /// the clock; monotonically non-increasing in elapsed time and never
    /// below the base price.
    pub fn price_at(&self, now: u64) -> Result<u128, MinterError> {
        if now < self.start_time {
            return Err(MinterError::AuctionNotStarted(format!(
                "Auction starts at {}, now {}",
                self.start_time, now
            )));
        }
        let elapsed = now - self.start_time;
        let start = self.start_price.0;
        let base = self.base_price.0;
        let delta = start - base;

        let price = match self.kind {
            DecayKind::Exponential { half_life_seconds } => {
                base + exponential_delta(delta, elapsed, half_life_seconds)
            }
            DecayKind::Linear { end_time } => {
                if now >= end_time {
                    base
                } else {
                    let duration = end_time - self.start_time;
                    let drop = (U256::from(delta) * U256::from(elapsed)
                        / U256::from(duration))
                    .as_u128();
                    start - drop
                }
            }
        };
        Ok(price)
    }
}

// Decay of the gap above the base price: one halving per full half-life,
// then linear interpolation within the current period. The interpolated
// value lands exactly on half at each period boundary, so the curve is
// continuous and non-increasing all the way down to zero.
fn exponential_delta(delta: u128, elapsed: u64, half_life_seconds: u64) -> u128 {
    let halvings = elapsed / half_life_seconds;
    if halvings >= 128 {
        return 0;
    }
    let value = delta >> halvings;
    let rem = elapsed % half_life_seconds;
    let fraction = (U256::from(value) * U256::from(rem)
        / (U256::from(half_life_seconds) * U256::from(2u8)))
    .as_u128();
    value - fraction
}
