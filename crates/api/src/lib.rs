//! HTTP API: server, routing, and request/response mapping.
//!
//! This crate is the composition root: it builds the one menu store, order
//! store and event broadcaster the process uses, and wires every privileged
//! route through the admin gate.

pub mod app;
pub mod config;
pub mod middleware;
