//! API client modules for external service integrations.
//!
//! The only integration is the remote activity log service: an HTTP API
//! that receives finalized time-log records. The client authenticates with
//! a bearer token cached in encrypted secret storage.

pub mod logs;

pub use logs::RemoteLogs;
