// src/catalog/mod.rs

//! Lookup tables of identifiers understood by vmcli.

pub mod entry_names;
pub mod guest_os;
