//! # Prompt Template Modules
//!
//! This module organizes the prompt templates used by the pipeline stages.

pub mod tasks;
