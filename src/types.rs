// src/types.rs

use std::str::FromStr;
use serde::Deserialize;

/// How a power transition is carried out by the tool (`-o <op>`).
///
/// - `TrySoft`: ask the guest first, fall back to a hard operation.
/// - `RequireSoft`: fail unless the guest cooperates.
/// - `Hard`: act on the virtual hardware directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerOpType {
    #[default]
    TrySoft,
    RequireSoft,
    Hard,
}

impl PowerOpType {
    pub fn as_arg(self) -> &'static str {
        match self {
            PowerOpType::TrySoft => "trySoft",
            PowerOpType::RequireSoft => "requireSoft",
            PowerOpType::Hard => "hard",
        }
    }
}

impl FromStr for PowerOpType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trysoft" | "try-soft" => Ok(PowerOpType::TrySoft),
            "requiresoft" | "require-soft" => Ok(PowerOpType::RequireSoft),
            "hard" => Ok(PowerOpType::Hard),
            other => Err(format!(
                "invalid power op type: {other} (expected \"trySoft\", \"requireSoft\" or \"hard\")"
            )),
        }
    }
}

/// Virtual disk adapter passed to `Disk create --adapter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskAdapterType {
    Ide,
    BusLogic,
    LsiLogic,
}

impl DiskAdapterType {
    pub fn as_arg(self) -> &'static str {
        match self {
            DiskAdapterType::Ide => "ide",
            DiskAdapterType::BusLogic => "buslogic",
            DiskAdapterType::LsiLogic => "lsilogic",
        }
    }
}

impl FromStr for DiskAdapterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ide" => Ok(DiskAdapterType::Ide),
            "buslogic" => Ok(DiskAdapterType::BusLogic),
            "lsilogic" => Ok(DiskAdapterType::LsiLogic),
            other => Err(format!(
                "invalid disk adapter: {other} (expected \"ide\", \"buslogic\" or \"lsilogic\")"
            )),
        }
    }
}

/// Allocation layout of a new virtual disk (`Disk create --type <n>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VirtualDiskType {
    #[default]
    SingleGrowable,
    SplitGrowable,
    SinglePreallocated,
    SplitPreallocated,
}

impl VirtualDiskType {
    pub fn as_arg(self) -> &'static str {
        match self {
            VirtualDiskType::SingleGrowable => "0",
            VirtualDiskType::SplitGrowable => "1",
            VirtualDiskType::SinglePreallocated => "2",
            VirtualDiskType::SplitPreallocated => "3",
        }
    }
}

impl FromStr for VirtualDiskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "single-growable" => Ok(VirtualDiskType::SingleGrowable),
            "1" | "split-growable" => Ok(VirtualDiskType::SplitGrowable),
            "2" | "single-preallocated" => Ok(VirtualDiskType::SinglePreallocated),
            "3" | "split-preallocated" => Ok(VirtualDiskType::SplitPreallocated),
            other => Err(format!(
                "invalid disk type: {other} (expected 0-3 or e.g. \"single-growable\")"
            )),
        }
    }
}

/// How bytes read from a child stream become text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineDecoding {
    /// Invalid UTF-8 is replaced with U+FFFD.
    #[default]
    Lossy,
    /// Invalid UTF-8 fails the drain task.
    Strict,
}

impl FromStr for LineDecoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lossy" => Ok(LineDecoding::Lossy),
            "strict" => Ok(LineDecoding::Strict),
            other => Err(format!(
                "invalid line decoding: {other} (expected \"lossy\" or \"strict\")"
            )),
        }
    }
}
