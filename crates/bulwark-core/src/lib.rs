//! Core types and definitions for the Bulwark tower-defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, stage paths and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod paths;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
