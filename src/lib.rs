//! Medical assistant API: thin HTTP endpoints over external AI and map-data
//! services, plus an offline builder for the retrieval index the chat
//! endpoint reads at startup.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
