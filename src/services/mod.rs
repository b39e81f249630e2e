//! Business logic services.
//!
//! Services contain the multi-statement database work separated from
//! HTTP handlers.

pub mod posting_service;
