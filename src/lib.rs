//! Rust Chat Directory - transport layer
//!
//! Exposed as a library so the router can be driven in-process by the
//! integration tests; the binary in `main.rs` is the real entry point.

pub mod routes;
