//! Datewise CLI — argument parsing, configuration and command dispatch.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
