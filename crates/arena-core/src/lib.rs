//! # arena-core
//!
//! Core types and error types for the Arena client.
//!
//! This crate provides the foundational types shared across all Arena crates:
//! - Wire types for the orchestration backend (`/api/ask`, `/api/history`,
//!   `/api/feedback`)
//! - Agent and feedback enums
//! - The authenticated user identity handed out by `arena-auth`
//! - The example history shown to anonymous callers
//! - Cross-cutting error types

pub mod demo;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
