//! CV Wizard - Guided CV editor core
//!
//! A single-user session edits a structured CV through a six-step wizard,
//! previews it against one of the seeded templates and exports it as
//! markdown, HTML or PDF.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
