// Admin layer: role-checked cross-entity listings and admin-originated
// conversations. All data access goes through store::MarketplaceStore.

pub mod aggregation;
pub mod conversations;
pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod store;
