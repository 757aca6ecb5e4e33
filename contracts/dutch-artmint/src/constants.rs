use near_sdk::Gas;

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

pub const DEFAULT_PROVIDER_PRIMARY_PERCENTAGE: u8 = 10;
pub const DEFAULT_MIN_HALF_LIFE_SECONDS: u64 = 45;
pub const DEFAULT_MAX_HALF_LIFE_SECONDS: u64 = 3_600;

// Admin-correction window: a start time this far in the past is still
// accepted, so an operator can re-issue a mistyped configuration.
pub const START_TIME_CORRECTION_WINDOW_SECONDS: u64 = 300;

pub const MAX_PAGE_LIMIT: u32 = 100;

pub const GAS_MINT_TOKEN: Gas = Gas::from_tgas(30);
pub const GAS_RESOLVE_PURCHASE: Gas = Gas::from_tgas(30);
