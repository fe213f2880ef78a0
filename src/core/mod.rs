//! Certificate model, assembly, output and configuration

pub mod assembler;
pub mod config;
pub mod document;
pub mod error;
pub mod fields;
pub mod file_system;
pub mod sink;
pub mod workflow;
