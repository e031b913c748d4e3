use std::path::{Component, Path, PathBuf};

/// Cleans a path lexically, without touching the filesystem.
///
/// - Repeated separators collapse into one.
/// - `.` segments are removed.
/// - `..` removes the preceding normal segment. Directly after a root it is
///   dropped; at the start of a relative path it is kept.
/// - Trailing separators are removed.
/// - An empty result becomes `.`.
///
/// Separator rules are those of the host platform.
///
/// # Example
/// ```
/// use tool_util::path::clean_path;
///
/// # #[cfg(unix)] {
/// assert_eq!(clean_path("a//b/./c/../d/"), "a/b/d");
/// assert_eq!(clean_path("../x/.."), "..");
/// # }
/// ```
pub fn clean_path(path: &str) -> String {
    let mut stack: Vec<Component<'_>> = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => stack.push(component),
            },
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return ".".to_string();
    }

    let cleaned: PathBuf = stack.iter().collect();
    cleaned.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_empty_is_dot() {
        assert_eq!(clean_path(""), ".");
        assert_eq!(clean_path("."), ".");
        assert_eq!(clean_path("a/.."), ".");
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_keeps_leading_parent_dirs() {
        assert_eq!(clean_path("../../a"), "../../a");
        assert_eq!(clean_path("a/../../b"), "../b");
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_unix_paths() {
        assert_eq!(clean_path("/"), "/");
        assert_eq!(clean_path("//usr///local/"), "/usr/local");
        assert_eq!(clean_path("/../etc"), "/etc");
        assert_eq!(clean_path("./bin/./go"), "bin/go");
        assert_eq!(clean_path("/opt/go/bin/../pkg"), "/opt/go/pkg");
    }
}
