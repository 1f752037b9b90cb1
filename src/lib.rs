//! SARD to-do: lists pending evidence work items over HTTP.
//!
//! The service reads pending records from either a GraphQL task board or a
//! `MongoDB` collection, keeps those whose status marks them as to-do, and
//! returns each one with the output location its results are written to.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: qualification and output path rules, free of I/O
//! - **Ports**: the [`todo::ports::ToDoSource`] backend contract
//! - **Adapters**: board, document and in-memory sources
//!
//! # Modules
//!
//! - [`config`]: environment-driven startup configuration
//! - [`http`]: the `GET /` endpoint
//! - [`todo`]: listing domain, ports, adapters and service

pub mod config;
pub mod http;
pub mod todo;
