// src/catalog/entry_names.rs

//! Well-known `.vmx` entry names, for use with `ConfigParams setentry`.

pub const CONFIG_VERSION: &str = "config.version";
pub const DISPLAY_NAME: &str = "displayName";
pub const GUEST_OS: &str = "guestOS";
pub const HPET0_PRESENT: &str = "hpet0.present";
pub const MEMORY_MAX_SIZE: &str = "memory.maxsize";
/// Guest memory in MB.
pub const MEMORY_SIZE: &str = "memsize";
pub const MKS_ENABLE_3D: &str = "mks.enable3d";
pub const NUM_VCPUS: &str = "numvcpus";
pub const NVRAM: &str = "nvram";
