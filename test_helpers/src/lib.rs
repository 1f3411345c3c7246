//! Test helpers shared across crates.
//!
//! This crate provides sample native faults, Figment jail wrappers and text
//! normalisation for the behavioural suites.

pub mod faults;
pub mod jail;
pub mod text;
