//! Federal Register Adapter
//!
//! - **FederalRegisterClient** - Presidential documents from the Federal Register API

mod client;

pub use client::{FederalRegisterClient, FederalRegisterConfig, DEFAULT_BASE_URL};
