
// --- Unit Tests ---
pub mod unit {
    pub mod auction_test;
    pub mod config_test;
    pub mod hooks_test;
    pub mod pricing_test;
    pub mod purchase_test;
    pub mod splits_test;
}
