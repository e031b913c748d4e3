//! Environment variable interpolation
//!
//! Templates reference variables as `$NAME`, where `NAME` is one or more ASCII
//! letters or underscores. Braced (`${NAME}`) forms and digits in names are not
//! recognized.
//!
//! Values come from an override table first and then from an [`EnvLookup`].
//! Production code uses [`ProcessEnv`]; tests can pass a `HashMap` or a closure
//! instead of mutating the real process environment.

use crate::path::clean_path;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, trace};

fn env_var_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$[A-Za-z_]+").expect("valid regex"))
}

/// Read-only source of environment variable values
pub trait EnvLookup {
    /// Returns the value of `key`, or `None` if it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Looks variables up in the environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Renders `$NAME` references in `template` using `overrides` and then the
/// process environment.
///
/// See [`render_with_env_lookup`] for the resolution rules.
pub fn render_with_env(template: &str, overrides: &HashMap<String, String>) -> String {
    render_with_env_lookup(template, overrides, &ProcessEnv)
}

/// Renders `$NAME` references in `template`.
///
/// For every reference, in order of appearance, the value is taken from
/// `overrides`; an absent or empty override falls through to `env`. A
/// non-empty value replaces every occurrence of the reference text in the
/// working string. References with no non-empty value are left untouched.
///
/// Replacement is plain substring replacement, so resolving `$GO` also
/// rewrites the `$GO` prefix of a later `$GOPATH` still in the string.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use tool_util::env::render_with_env_lookup;
///
/// let mut overrides = HashMap::new();
/// overrides.insert("FOO".to_string(), "bar".to_string());
/// let env = |_: &str| None::<String>;
///
/// assert_eq!(render_with_env_lookup("path/$FOO/x", &overrides, &env), "path/bar/x");
/// assert_eq!(render_with_env_lookup("$MISSING/x", &overrides, &env), "$MISSING/x");
/// ```
pub fn render_with_env_lookup<E>(
    template: &str,
    overrides: &HashMap<String, String>,
    env: &E,
) -> String
where
    E: EnvLookup + ?Sized,
{
    let tokens: Vec<&str> = env_var_regex()
        .find_iter(template)
        .map(|m| m.as_str())
        .collect();

    let mut rendered = template.to_string();
    for token in tokens {
        let key = &token[1..];
        let value = overrides
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
            .or_else(|| env.lookup(key))
            .unwrap_or_default();

        if value.is_empty() {
            debug!(variable = key, "environment variable not resolved");
            continue;
        }
        trace!(variable = key, value = %value, "environment variable resolved");
        rendered = rendered.replace(token, &value);
    }
    rendered
}

/// Renders a path template like [`render_with_env`] and cleans the result
/// lexically with [`clean_path`].
pub fn render_path_with_env(path: &str, overrides: &HashMap<String, String>) -> String {
    render_path_with_env_lookup(path, overrides, &ProcessEnv)
}

/// Renders a path template like [`render_with_env_lookup`] and cleans the
/// result lexically with [`clean_path`].
pub fn render_path_with_env_lookup<E>(
    path: &str,
    overrides: &HashMap<String, String>,
    env: &E,
) -> String
where
    E: EnvLookup + ?Sized,
{
    clean_path(&render_with_env_lookup(path, overrides, env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_render_from_overrides() {
        let ext = overrides(&[("FOO", "bar")]);
        assert_eq!(render_with_env_lookup("path/$FOO/x", &ext, &no_env), "path/bar/x");
    }

    #[test]
    fn test_render_unresolved_is_unchanged() {
        let ext = HashMap::new();
        assert_eq!(render_with_env_lookup("path/$FOO/x", &ext, &no_env), "path/$FOO/x");
    }

    #[test]
    fn test_render_falls_back_to_lookup() {
        let ext = HashMap::new();
        let env = overrides(&[("HOME", "/home/gopher")]);
        assert_eq!(
            render_with_env_lookup("$HOME/go", &ext, &env),
            "/home/gopher/go"
        );
    }

    #[test]
    fn test_render_empty_override_falls_back() {
        let ext = overrides(&[("GOROOT", "")]);
        let env = overrides(&[("GOROOT", "/usr/local/go")]);
        assert_eq!(
            render_with_env_lookup("$GOROOT/bin", &ext, &env),
            "/usr/local/go/bin"
        );
    }

    #[test]
    fn test_render_override_wins_over_env() {
        let ext = overrides(&[("GOROOT", "/opt/go")]);
        let env = overrides(&[("GOROOT", "/usr/local/go")]);
        assert_eq!(render_with_env_lookup("$GOROOT", &ext, &env), "/opt/go");
    }

    #[test]
    fn test_render_empty_everywhere_leaves_token() {
        let ext = overrides(&[("X", "")]);
        let env = overrides(&[("X", "")]);
        assert_eq!(render_with_env_lookup("a/$X/b", &ext, &env), "a/$X/b");
    }

    #[test]
    fn test_render_replaces_all_occurrences() {
        let ext = overrides(&[("V", "1")]);
        assert_eq!(render_with_env_lookup("$V-$V-$V", &ext, &no_env), "1-1-1");
    }

    #[test]
    fn test_render_token_stops_at_non_letter() {
        let ext = overrides(&[("GO", "go")]);
        assert_eq!(render_with_env_lookup("$GO1.22", &ext, &no_env), "go1.22");
        assert_eq!(render_with_env_lookup("${GO}", &ext, &no_env), "${GO}");
    }

    #[test]
    fn test_render_shorter_token_rewrites_longer_prefix() {
        let ext = overrides(&[("GO", "x")]);
        assert_eq!(
            render_with_env_lookup("$GO/$GOPATH", &ext, &no_env),
            "x/xPATH"
        );
    }

    #[test]
    fn test_render_lone_dollar_untouched() {
        let ext = HashMap::new();
        assert_eq!(render_with_env_lookup("cost: $5 $", &ext, &no_env), "cost: $5 $");
    }

    #[cfg(unix)]
    #[test]
    fn test_render_path_cleans_result() {
        let ext = overrides(&[("X", "mid")]);
        assert_eq!(render_path_with_env_lookup("a/$X/../b", &ext, &no_env), "a/b");
        assert_eq!(
            render_path_with_env_lookup("$ROOT//bin/", &HashMap::new(), &no_env),
            "$ROOT/bin"
        );
    }

    #[test]
    #[serial]
    fn test_render_with_process_env() {
        std::env::set_var("TOOL_UTIL_TEST_VAR", "from_env");
        let rendered = render_with_env("[$TOOL_UTIL_TEST_VAR]", &HashMap::new());
        std::env::remove_var("TOOL_UTIL_TEST_VAR");
        assert_eq!(rendered, "[from_env]");
    }

    #[test]
    #[serial]
    fn test_render_with_process_env_unset() {
        std::env::remove_var("TOOL_UTIL_UNSET_VAR");
        let rendered = render_with_env("[$TOOL_UTIL_UNSET_VAR]", &HashMap::new());
        assert_eq!(rendered, "[$TOOL_UTIL_UNSET_VAR]");
    }
}
