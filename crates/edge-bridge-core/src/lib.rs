//! Core translation pipeline for edge-bridge.
//!
//! This crate defines the handler capability boundary and the pure
//! request/result transformation, independent of any HTTP types:
//!
//! - [`RequestHandler`]: the flat call contract of the embedded handler
//! - [`HandlerCall`]: a flattened HTTP request
//! - [`HandlerResult`]: the decoded handler result
//! - [`HandlerRunner`]: the dispatch pipeline

pub mod call;
pub mod handler;
pub mod result;
pub mod runner;

pub use call::HandlerCall;
pub use handler::RequestHandler;
pub use result::{HandlerResult, renormalize_json};
pub use runner::HandlerRunner;
