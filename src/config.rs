use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "fieldmark";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
/// One line per generated file at `info`, renderer internals at `debug`.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Fixed output directory for generated symbol files, relative to the
/// invocation directory. The consuming game imports from this path.
pub fn output_dir() -> PathBuf {
    PathBuf::from("assets/units/symbols")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_is_relative() {
        let dir = output_dir();
        assert!(dir.is_relative());
        assert!(dir.ends_with("units/symbols"));
    }

    #[test]
    fn app_name_is_fieldmark() {
        assert_eq!(APP_NAME, "fieldmark");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
