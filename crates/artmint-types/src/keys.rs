// Key invariant: the delimiter cannot appear in NEAR account IDs, preventing
// collisions between (contract, project) keys of different contracts.
pub const PROJECT_KEY_DELIMITER: &str = ":";

/// Storage key for a `(contract, project)` pair, shared by the filter and
/// minter contracts so their maps agree on addressing.
pub fn project_key(contract_id: &str, project_id: u64) -> String {
    format!("{contract_id}{PROJECT_KEY_DELIMITER}{project_id}")
}
