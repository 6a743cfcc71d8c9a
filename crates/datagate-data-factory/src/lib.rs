#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed client for the Data Factory registry service
//!
//! Declarative REST CRUD over named resources; responses flow through the
//! shared decoding core

mod client;

pub use client::DataFactoryClient;
