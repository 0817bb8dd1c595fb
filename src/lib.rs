//! EO Tracker - Executive orders and the court challenges filed against them
//!
//! This crate keeps a curated JSON collection of presidential documents up to
//! date and answers filtered, sorted queries over it:
//!
//! - the docket updater polls CourtListener and rewrites each tracked
//!   challenge's `lastUpdated` date
//! - the query layer projects the collection by search text, status,
//!   document type and sort order

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
