//! Core library components.
//!
//! The Shamir engine, data key protection with master keys, share
//! encodings and configuration handling.

pub mod config;
pub mod constants;
pub mod encoding;
pub mod keygroup;
pub mod shamir;
