use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum FilterError {
    Unauthorized(String),
    AlreadyRegistered(String),
    NotRegistered(String),
    AlreadyApproved(String),
    NotApproved(String),
    NoBindingExists(String),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::AlreadyRegistered(msg) => write!(f, "Already registered: {}", msg),
            Self::NotRegistered(msg) => write!(f, "Not registered: {}", msg),
            Self::AlreadyApproved(msg) => write!(f, "Already approved: {}", msg),
            Self::NotApproved(msg) => write!(f, "Not approved: {}", msg),
            Self::NoBindingExists(msg) => write!(f, "No binding exists: {}", msg),
        }
    }
}

impl FilterError {
    pub fn only_owner() -> Self {
        Self::Unauthorized("Only the platform owner can perform this action".into())
    }
    pub fn only_contract_admin(contract_id: &near_sdk::AccountId) -> Self {
        Self::Unauthorized(format!(
            "Only the admin of {} or the platform owner can perform this action",
            contract_id
        ))
    }
    pub fn contract_not_registered(contract_id: &near_sdk::AccountId) -> Self {
        Self::NotRegistered(format!("Contract not registered: {}", contract_id))
    }
    pub fn no_binding(contract_id: &near_sdk::AccountId, project_id: u64) -> Self {
        Self::NoBindingExists(format!(
            "No minter bound for project {} on {}",
            project_id, contract_id
        ))
    }
}
