pub mod discovery;
pub mod engine;
pub mod i18n;
pub mod naming;
pub mod overrides;
pub mod report;
pub mod runner;
pub mod types;

// Re-export the localization macros
pub use crate::i18n::{t, t_with_args};
