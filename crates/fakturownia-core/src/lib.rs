//! Core types shared by the Fakturownia MCP gateway crates.
//!
//! Nothing in here talks to the network: this crate only knows the resource
//! table of the Fakturownia API, how credentials are resolved, and the error
//! vocabulary the upper layers translate into JSON-RPC envelopes.

pub mod config;
pub mod credentials;
pub mod error;
pub mod resource;

pub use config::Config;
pub use credentials::Credentials;
pub use error::{CoreError, CoreResult};
pub use resource::Resource;
