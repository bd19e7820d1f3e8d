// src/config/mod.rs

//! Settings for locating and running vmcli.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a settings file from disk and apply env overrides (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    apply_env_overrides, default_config_path, load_and_validate, load_from_path, load_settings,
    VMCLI_PATH_ENV,
};
pub use model::{ConfigFile, Settings};
pub use validate::validate_config;
