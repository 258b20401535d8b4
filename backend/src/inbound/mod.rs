//! Inbound adapters that translate external requests into domain calls while
//! keeping framework details at the edge.
//!
//! HTTP handlers live under [`http`]; no other inbound transport exists.

pub mod http;
