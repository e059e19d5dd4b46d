//! Domain layer containing the CV editor's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, IDs, timestamps, state machines)
//! - `cv` - The CV document store, its records and commands
//! - `validation` - Field rules and per-record schemas
//! - `wizard` - Ordered editor steps, navigation and submissions
//! - `template` - Seeded template catalog and selection
//! - `export` - Export status machine, formats and artifacts

pub mod cv;
pub mod export;
pub mod foundation;
pub mod template;
pub mod validation;
pub mod wizard;
