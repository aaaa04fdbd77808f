//! Client administration core.
//!
//! [`service::ClientService`] validates client requests, guards referential
//! integrity (no duplicate RUTs, no deleting clients with sales) and computes
//! each client's total debt. Persistence sits behind
//! [`repository::ClientRepository`], with [`store::SledStore`] as the
//! embedded implementation.

pub mod client;
pub mod config;
pub mod error;
pub mod repository;
pub mod sale;
pub mod service;
pub mod store;
pub mod telemetry;
pub mod utils;
