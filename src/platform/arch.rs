//! CPU architecture probe.

use std::fmt;

/// Processor architecture of a build host.
///
/// Mirrors the architectures a build tool cares about when picking task
/// hosts and native tool directories. Anything else maps to `Unknown`
/// rather than failing; callers treat unknown hosts generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorArchitecture {
    /// 32-bit x86.
    X86,
    /// 64-bit x86 (amd64).
    X64,
    /// 32-bit ARM.
    Arm,
    /// 64-bit ARM (aarch64).
    Arm64,
    /// Anything this crate has no special handling for.
    Unknown,
}

impl ProcessorArchitecture {
    /// Architecture of the running process.
    pub fn current() -> Self {
        Self::from_target_arch(std::env::consts::ARCH)
    }

    /// Map a Rust `target_arch` string to an architecture.
    pub fn from_target_arch(arch: &str) -> Self {
        match arch {
            "x86" => Self::X86,
            "x86_64" => Self::X64,
            "arm" => Self::Arm,
            "aarch64" => Self::Arm64,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ProcessorArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
