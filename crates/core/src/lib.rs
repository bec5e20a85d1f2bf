//! Core for the scheduleflow partner service.
//!
//! Pure data types and functions shared by the server: partner entities,
//! request/response payloads, validation, and the repository contracts that
//! storage backends implement. Nothing in this crate performs I/O.

pub mod partner;
pub mod serde;
pub mod storage;
