// src/lib.rs

pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod scoring;
pub use crate::core::engine::GrammarEngine;
pub use crate::error::{GrammarError, Result};
