//! Operating system and CPU architecture identifiers.
//!
//! Both sets are closed: a manifest or a detector can only ever produce one
//! of the variants below, and anything else is rejected at parse time.

use serde::{Deserialize, Serialize};

/// Operating system an asset targets (or a visitor runs).
///
/// # Example
///
/// ```
/// use gethub_schema::Os;
///
/// let os: Os = "osx".parse().unwrap();
/// assert_eq!(os.label(), "macOS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    /// Microsoft Windows.
    Windows,
    /// Linux distributions.
    Linux,
    /// Apple macOS.
    Osx,
    /// Android.
    Android,
}

impl Os {
    /// Every variant, in declaration order.
    pub const ALL: [Os; 4] = [Os::Windows, Os::Linux, Os::Osx, Os::Android];

    /// Wire/manifest representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Osx => "osx",
            Self::Android => "android",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::Osx => "macOS",
            Self::Android => "Android",
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Os {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|os| os.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Os::as_str).collect();
                format!("Unknown operating system: {s} (expected one of {})", names.join(", "))
            })
    }
}

/// CPU architecture an asset targets (or a visitor runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// 32-bit Intel/AMD.
    X86,
    /// 64-bit Intel/AMD.
    X64,
    /// 32-bit ARM.
    Arm,
    /// 64-bit ARM.
    Arm64,
}

impl Arch {
    /// Every variant, in declaration order.
    pub const ALL: [Arch; 4] = [Arch::X86, Arch::X64, Arch::Arm, Arch::Arm64];

    /// Wire/manifest representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Arm => "ARM",
            Self::Arm64 => "ARM64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|arch| arch.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Arch::as_str).collect();
                format!("Unknown architecture: {s} (expected one of {})", names.join(", "))
            })
    }
}

/// Best-effort guess of the visitor's platform. Either half may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformGuess {
    /// Detected operating system.
    pub os: Option<Os>,
    /// Detected CPU architecture.
    pub arch: Option<Arch>,
}

impl PlatformGuess {
    /// Create a guess from its two halves.
    pub fn new(os: Option<Os>, arch: Option<Arch>) -> Self {
        Self { os, arch }
    }

    /// Human-readable label, see [`format_platform`].
    pub fn label(&self) -> String {
        format_platform(self.os, self.arch)
    }
}

/// Render an optional OS/arch pair, e.g. `"macOS ARM64"`.
///
/// ```
/// use gethub_schema::{format_platform, Arch, Os};
///
/// assert_eq!(format_platform(Some(Os::Windows), Some(Arch::X64)), "Windows x64");
/// assert_eq!(format_platform(None, Some(Arch::Arm)), "ARM");
/// assert_eq!(format_platform(None, None), "Any platform");
/// ```
pub fn format_platform(os: Option<Os>, arch: Option<Arch>) -> String {
    match (os, arch) {
        (None, None) => "Any platform".to_string(),
        (Some(os), None) => os.label().to_string(),
        (None, Some(arch)) => arch.label().to_string(),
        (Some(os), Some(arch)) => format!("{} {}", os.label(), arch.label()),
    }
}
