use crate::error::{Result, ToolUtilError};
use std::fmt;
use std::str::FromStr;

/// Separator between a module path and its version
pub const VERSION_SEPARATOR: char = '@';

/// Splits `path@version` on the first `@`.
///
/// Returns `None` if `spec` contains no `@`. Everything after the first `@`
/// belongs to the version, so a version may itself contain `@`.
///
/// # Example
/// ```
/// use tool_util::module::split_module_version;
///
/// assert_eq!(
///     split_module_version("example.com/mod@v1.2.3"),
///     Some(("example.com/mod", "v1.2.3"))
/// );
/// assert_eq!(split_module_version("example.com/mod"), None);
/// ```
pub fn split_module_version(spec: &str) -> Option<(&str, &str)> {
    spec.split_once(VERSION_SEPARATOR)
}

/// Joins a module path and version as `path@version`.
pub fn join_module_version(path: &str, version: &str) -> String {
    format!("{}{}{}", path, VERSION_SEPARATOR, version)
}

/// A module path pinned to a version (e.g., `golang.org/x/tools/gopls@v0.14.2`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleVersion {
    pub path: String,
    pub version: String,
}

impl ModuleVersion {
    /// Create a new module version
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        ModuleVersion {
            path: path.into(),
            version: version.into(),
        }
    }
}

impl FromStr for ModuleVersion {
    type Err = ToolUtilError;

    fn from_str(s: &str) -> Result<Self> {
        let (path, version) = split_module_version(s).ok_or_else(|| {
            ToolUtilError::module_spec(format!("'{}' - expected path@version", s))
        })?;
        Ok(ModuleVersion::new(path, version))
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.path, VERSION_SEPARATOR, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(
            split_module_version("example.com/mod@v1.2.3"),
            Some(("example.com/mod", "v1.2.3"))
        );
    }

    #[test]
    fn test_split_without_separator() {
        assert_eq!(split_module_version("example.com/mod"), None);
        assert_eq!(split_module_version(""), None);
    }

    #[test]
    fn test_split_on_first_separator() {
        assert_eq!(split_module_version("a@b@c"), Some(("a", "b@c")));
    }

    #[test]
    fn test_split_empty_parts() {
        assert_eq!(split_module_version("@"), Some(("", "")));
        assert_eq!(split_module_version("@latest"), Some(("", "latest")));
        assert_eq!(split_module_version("mod@"), Some(("mod", "")));
    }

    #[test]
    fn test_join() {
        assert_eq!(
            join_module_version("example.com/mod", "v1.2.3"),
            "example.com/mod@v1.2.3"
        );
    }

    #[test]
    fn test_round_trip_without_at_in_path() {
        let joined = join_module_version("golang.org/x/tools/gopls", "v0.14.2");
        assert_eq!(
            split_module_version(&joined),
            Some(("golang.org/x/tools/gopls", "v0.14.2"))
        );
    }

    #[test]
    fn test_round_trip_breaks_with_at_in_path() {
        let joined = join_module_version("a@b", "v1");
        assert_eq!(split_module_version(&joined), Some(("a", "b@v1")));
    }

    #[test]
    fn test_module_version_parse_and_display() {
        let mv: ModuleVersion = "example.com/mod@latest".parse().unwrap();
        assert_eq!(mv, ModuleVersion::new("example.com/mod", "latest"));
        assert_eq!(mv.to_string(), "example.com/mod@latest");
    }

    #[test]
    fn test_module_version_parse_error() {
        let err = "example.com/mod".parse::<ModuleVersion>().unwrap_err();
        assert!(err.to_string().contains("expected path@version"));
    }
}
