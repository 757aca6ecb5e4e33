use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum MinterError {
    Unauthorized(String),
    InvalidConfiguration(String),
    AuctionNotConfigured(String),
    AuctionNotStarted(String),
    PriceNotMet(String),
    PaymentFailed(String),
    PercentagesInvalid(String),
    OperationInProgress(String),
}

impl std::fmt::Display for MinterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Self::AuctionNotConfigured(msg) => write!(f, "Auction not configured: {}", msg),
            Self::AuctionNotStarted(msg) => write!(f, "Auction not started: {}", msg),
            Self::PriceNotMet(msg) => write!(f, "Price not met: {}", msg),
            Self::PaymentFailed(msg) => write!(f, "Payment failed: {}", msg),
            Self::PercentagesInvalid(msg) => write!(f, "Invalid percentages: {}", msg),
            Self::OperationInProgress(msg) => write!(f, "Operation in progress: {}", msg),
        }
    }
}

impl MinterError {
    pub fn only_owner() -> Self {
        Self::Unauthorized("Only the contract owner can perform this action".into())
    }
    pub fn auction_not_configured(key: &str) -> Self {
        Self::AuctionNotConfigured(format!("No auction configured for {}", key))
    }
    pub fn not_bound(key: &str) -> Self {
        Self::Unauthorized(format!("This minter is not bound for {}", key))
    }
    pub fn splits_not_configured(key: &str) -> Self {
        Self::InvalidConfiguration(format!("No revenue splits configured for {}", key))
    }
}
