// Adapters layer: concrete implementations at the edges (inbound events, persistence).

pub mod api;
pub mod database;
