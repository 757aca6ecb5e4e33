use crate::types::PendingPurchase;
use near_sdk::{ext_contract, AccountId};

/// The issuing contract owns token supply and mint side effects; this
/// strategy only authorizes, prices, and distributes.
#[ext_contract(ext_issuer)]
pub trait IssuingContract {
    fn mint_token(&mut self, project_id: u64, receiver_id: AccountId) -> String;
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn resolve_purchase(&mut self, pending: PendingPurchase) -> Option<String>;
}
