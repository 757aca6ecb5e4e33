/// Platform-independent revenue-split error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    PercentagesInvalid(String),
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PercentagesInvalid(msg) => write!(f, "invalid split percentages: {msg}"),
        }
    }
}

impl std::error::Error for SplitError {}
