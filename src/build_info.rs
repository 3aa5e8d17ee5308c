//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "arena YYYY-MM-DD (commit)" for `--version`.
pub fn version_string(program: &str) -> String {
    format!("{} {} ({})", program, BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_string_names_program() {
        let version = version_string("simulator");
        assert!(version.starts_with("simulator "));
        assert!(version.contains(BUILD_COMMIT));
    }
}
