// src/core/mod.rs

pub mod agreement;
pub mod data;
pub mod engine;
pub mod highlight;
pub mod puzzle;
pub mod template;
pub mod types;
