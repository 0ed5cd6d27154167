//! CLI commands.

pub mod logout;
pub mod tenants;
