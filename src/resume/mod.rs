// src/resume/mod.rs
pub mod assembler;
pub mod batch;
pub mod models;

pub use assembler::{ParsedDocument, ResumeParser};
