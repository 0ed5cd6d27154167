//! API modules.

mod user;

pub use user::{by_external_path, log_out_path, parse_lookup, UserApi};
