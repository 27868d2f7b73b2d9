//! multi-claude-install library exports.
//!
//! Exposes the install components for integration testing. The binary in
//! `main.rs` is a thin CLI over these modules.

pub mod audit;
pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod distribution;
pub mod doctor;
pub mod error;
pub mod fsutil;
pub mod launcher;
pub mod link;
pub mod stage;
