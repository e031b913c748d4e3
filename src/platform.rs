/// Executable file suffix on Windows-family hosts
pub const WINDOWS_EXE_SUFFIX: &str = ".exe";

/// Host operating system family, as far as binary naming is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Other,
}

impl Platform {
    /// Platform of the compile target
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Maps an OS name as reported by `std::env::consts::OS` (e.g., "windows",
    /// "linux", "macos"). Matching is case-insensitive.
    pub fn from_os(os: &str) -> Self {
        if os.eq_ignore_ascii_case("windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// File name of the binary `name` on this platform.
    ///
    /// Windows gets an `.exe` suffix unless `name` already ends with exactly
    /// `.exe`. Other platforms return `name` unchanged.
    pub fn binary_name(&self, name: &str) -> String {
        match self {
            Platform::Windows if !name.ends_with(WINDOWS_EXE_SUFFIX) => {
                format!("{}{}", name, WINDOWS_EXE_SUFFIX)
            }
            _ => name.to_string(),
        }
    }
}

/// File name of the binary `name` on the host platform.
pub fn platform_binary_name(name: &str) -> String {
    Platform::current().binary_name(name)
}
