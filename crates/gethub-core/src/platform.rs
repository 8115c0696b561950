//! Platform detection for recommendations.
//!
//! Best effort only: anything not positively identified stays `None`.

use gethub_schema::{Arch, Os, PlatformGuess, contains_word};

/// Guess the platform this process runs on.
pub fn detect() -> PlatformGuess {
    from_target(std::env::consts::OS, std::env::consts::ARCH)
}

/// Map Rust target names (`std::env::consts::{OS, ARCH}`) to a guess.
pub fn from_target(os: &str, arch: &str) -> PlatformGuess {
    let os = match os {
        "windows" => Some(Os::Windows),
        "linux" => Some(Os::Linux),
        "macos" => Some(Os::Osx),
        "android" => Some(Os::Android),
        _ => None,
    };
    let arch = match arch {
        "x86_64" => Some(Arch::X64),
        "x86" => Some(Arch::X86),
        "aarch64" => Some(Arch::Arm64),
        "arm" => Some(Arch::Arm),
        _ => None,
    };
    PlatformGuess { os, arch }
}

/// Sniff a browser `User-Agent` (and optional `navigator.platform`) string.
///
/// ```
/// use gethub_core::platform::from_user_agent;
/// use gethub_schema::{Arch, Os};
///
/// let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
/// let guess = from_user_agent(ua, "Win32");
/// assert_eq!(guess.os, Some(Os::Windows));
/// assert_eq!(guess.arch, Some(Arch::X64));
/// ```
pub fn from_user_agent(user_agent: &str, platform: &str) -> PlatformGuess {
    let ua = user_agent.to_lowercase();
    let platform = platform.to_lowercase();
    let either = |words: &[&str]| {
        words
            .iter()
            .any(|w| contains_word(&ua, w) || contains_word(&platform, w))
    };

    // Android user agents also say "Linux", so check it first.
    let os = if either(&["android"]) {
        Some(Os::Android)
    } else if either(&["windows", "win32", "win64", "wow64"]) {
        Some(Os::Windows)
    } else if either(&["macintosh", "macintel", "mac", "darwin"]) {
        Some(Os::Osx)
    } else if either(&["linux"]) {
        Some(Os::Linux)
    } else {
        None
    };

    let arch = if ["wow64", "x64", "x86_64", "amd64"].iter().any(|k| ua.contains(k)) {
        Some(Arch::X64)
    } else if ua.contains("arm64") || ua.contains("aarch64") {
        Some(Arch::Arm64)
    } else if ua.contains("arm") {
        Some(Arch::Arm)
    } else if ["x86", "i386", "i686"].iter().any(|k| ua.contains(k)) {
        Some(Arch::X86)
    } else {
        None
    };

    PlatformGuess { os, arch }
}
