//! Filename heuristics for repositories that ship no `gethub.json`.
//!
//! Vendors name their artifacts inconsistently (`darwin`/`macos`/`osx`,
//! `amd64`/`x86_64`/`x64`, ...), so each platform is recognised from a group
//! of keywords. Keywords only count as whole words: the characters around
//! them must not be alphanumeric, so `arm` never fires inside `alarm` and
//! `mac` never fires inside `macro`.

use serde::{Deserialize, Serialize};

use crate::platform::{Arch, Os};

const WINDOWS_WORDS: &[&str] = &["windows", "win32", "win64", "win-x64", "win-x86", "win-arm64"];
const LINUX_WORDS: &[&str] = &["linux", "ubuntu", "debian", "fedora", "rhel", "centos"];
const OSX_WORDS: &[&str] = &["macos", "osx", "darwin", "mac"];
const ANDROID_WORDS: &[&str] = &["android"];

const X64_WORDS: &[&str] = &["x64", "x86_64", "amd64", "win64"];
const X86_WORDS: &[&str] = &["x86", "win32", "i386", "i686"];
const ARM64_WORDS: &[&str] = &["arm64", "aarch64", "apple-silicon"];
const ARM_WORDS: &[&str] = &["arm", "armv7", "armhf"];

/// Tag name and the keywords that produce it, in output order.
const TAG_RULES: &[(&str, &[&str])] = &[
    ("Portable", &["portable", "standalone"]),
    ("Installer", &["installer", "setup", "msi"]),
    ("CLI", &["cli", "console"]),
    ("GUI", &["gui", "desktop"]),
    ("Musl", &["musl"]),
];

/// Platform indicators inferred from an asset filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPattern {
    /// Detected operating system, if any keyword group matched.
    pub os: Option<Os>,
    /// Detected CPU architecture, if any keyword group matched.
    pub arch: Option<Arch>,
    /// Descriptive tags such as `Portable` or `Installer`. Never absent.
    pub tags: Vec<String>,
}

impl AssetPattern {
    /// Infer OS, architecture and tags from a filename.
    ///
    /// ```
    /// use gethub_schema::{Arch, AssetPattern, Os};
    ///
    /// let p = AssetPattern::from_filename("app-win-x64-portable.zip");
    /// assert_eq!(p.os, Some(Os::Windows));
    /// assert_eq!(p.arch, Some(Arch::X64));
    /// assert_eq!(p.tags, vec!["Portable".to_string()]);
    /// ```
    pub fn from_filename(filename: &str) -> Self {
        let f = filename.to_lowercase();

        Self {
            os: detect_os(&f),
            arch: detect_arch(&f),
            tags: detect_tags(&f),
        }
    }

    /// True when nothing at all was recognised.
    pub fn is_empty(&self) -> bool {
        self.os.is_none() && self.arch.is_none() && self.tags.is_empty()
    }
}

fn detect_os(f: &str) -> Option<Os> {
    // An APK is an Android package whatever else the name says.
    if f.ends_with(".apk") {
        return Some(Os::Android);
    }

    if any_word(f, WINDOWS_WORDS) || f.ends_with(".exe") {
        Some(Os::Windows)
    } else if any_word(f, LINUX_WORDS) || f.contains(".appimage") {
        Some(Os::Linux)
    } else if any_word(f, OSX_WORDS) || f.contains("mac-") {
        Some(Os::Osx)
    } else if any_word(f, ANDROID_WORDS) {
        Some(Os::Android)
    } else {
        None
    }
}

fn detect_arch(f: &str) -> Option<Arch> {
    if any_word(f, X64_WORDS) {
        Some(Arch::X64)
    } else if any_word(f, X86_WORDS) {
        Some(Arch::X86)
    } else if any_word(f, ARM64_WORDS) {
        Some(Arch::Arm64)
    } else if any_word(f, ARM_WORDS) {
        Some(Arch::Arm)
    } else {
        None
    }
}

fn detect_tags(f: &str) -> Vec<String> {
    TAG_RULES
        .iter()
        .filter(|(_, words)| any_word(f, words))
        .map(|(tag, _)| (*tag).to_string())
        .collect()
}

fn any_word(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|w| contains_word(haystack, w))
}

/// Whole-word containment: `word` occurs with no alphanumeric character
/// directly before or after it.
///
/// ```
/// use gethub_schema::contains_word;
///
/// assert!(contains_word("tool-arm-v1.tgz", "arm"));
/// assert!(!contains_word("alarm.tgz", "arm"));
/// ```
pub fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_x64_infix() {
        for name in [
            "app-win-x64-1.0.zip",
            "Tool-WIN-X64-setup.exe",
            "x-win-x64-.tar.gz",
        ] {
            let p = AssetPattern::from_filename(name);
            assert_eq!(p.os, Some(Os::Windows), "{name}");
            assert_eq!(p.arch, Some(Arch::X64), "{name}");
        }
    }

    #[test]
    fn test_apk_is_always_android() {
        for name in ["app.apk", "app-windows-x64.apk", "linux-arm64-release.APK"] {
            assert_eq!(AssetPattern::from_filename(name).os, Some(Os::Android), "{name}");
        }
    }

    #[test]
    fn test_os_priority_first_match_wins() {
        // windows group is checked before linux
        let p = AssetPattern::from_filename("bundle-windows-linux.zip");
        assert_eq!(p.os, Some(Os::Windows));

        let p = AssetPattern::from_filename("tool.exe");
        assert_eq!(p.os, Some(Os::Windows));

        let p = AssetPattern::from_filename("Editor-1.2.AppImage");
        assert_eq!(p.os, Some(Os::Linux));

        let p = AssetPattern::from_filename("tool-darwin-universal.tar.gz");
        assert_eq!(p.os, Some(Os::Osx));

        let p = AssetPattern::from_filename("app-mac-universal.dmg");
        assert_eq!(p.os, Some(Os::Osx));

        let p = AssetPattern::from_filename("client-android-arm64.zip");
        assert_eq!(p.os, Some(Os::Android));
    }

    #[test]
    fn test_whole_word_boundaries() {
        let p = AssetPattern::from_filename("alarm-clock-macro-edition.zip");
        assert_eq!(p.os, None);
        assert_eq!(p.arch, None);

        let p = AssetPattern::from_filename("darwinism.txt");
        assert_eq!(p.os, None);

        // underscore is a boundary
        let p = AssetPattern::from_filename("tool_linux_arm.tar.gz");
        assert_eq!(p.os, Some(Os::Linux));
        assert_eq!(p.arch, Some(Arch::Arm));
    }

    #[test]
    fn test_arch_priority() {
        assert_eq!(
            AssetPattern::from_filename("tool-linux-x86_64.tar.gz").arch,
            Some(Arch::X64)
        );
        assert_eq!(
            AssetPattern::from_filename("tool-linux-i686.tar.gz").arch,
            Some(Arch::X86)
        );
        assert_eq!(
            AssetPattern::from_filename("tool-win32.zip").arch,
            Some(Arch::X86)
        );
        assert_eq!(
            AssetPattern::from_filename("tool-linux-aarch64.tar.gz").arch,
            Some(Arch::Arm64)
        );
        assert_eq!(
            AssetPattern::from_filename("tool-apple-silicon.dmg").arch,
            Some(Arch::Arm64)
        );
        assert_eq!(
            AssetPattern::from_filename("tool-linux-armv7.tar.gz").arch,
            Some(Arch::Arm)
        );
        assert_eq!(
            AssetPattern::from_filename("tool-linux-armhf.deb").arch,
            Some(Arch::Arm)
        );
    }

    #[test]
    fn test_tags_are_independent() {
        let p = AssetPattern::from_filename("app-cli-portable-musl.tar.gz");
        assert_eq!(p.tags, vec!["Portable", "CLI", "Musl"]);

        let p = AssetPattern::from_filename("App Setup 2.0.msi");
        assert_eq!(p.tags, vec!["Installer"]);

        let p = AssetPattern::from_filename("desktop-gui.zip");
        assert_eq!(p.tags, vec!["GUI"]);

        // "client" contains "cli" but not as a word
        let p = AssetPattern::from_filename("client.zip");
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_unrecognised_name() {
        let p = AssetPattern::from_filename("readme.txt");
        assert!(p.is_empty());
        assert_eq!(p, AssetPattern::default());
    }

    #[test]
    fn test_contains_word() {
        assert!(contains_word("arm", "arm"));
        assert!(contains_word("x-arm.", "arm"));
        assert!(!contains_word("alarm", "arm"));
        assert!(!contains_word("arm64", "arm"));
        // a later occurrence can still qualify
        assert!(contains_word("alarm-arm", "arm"));
    }
}
