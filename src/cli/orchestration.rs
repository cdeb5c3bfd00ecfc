//! Main workflow orchestration logic
//!
//! Keeps clap out of the composition workflow so it can be driven
//! programmatically and tested with a pinned clock.

use std::path::PathBuf;

use tracing::debug;

use crate::clock::Clock;
use crate::compose::{ComposedVersion, DateStamp};
use crate::config::Config;
use crate::error::{Result, ServiceVersionError};
use crate::manifest::Manifest;
use crate::version::BaseVersion;

/// Arguments for the compose workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposeArgs {
    /// Manifest path overriding the configured one
    pub manifest: Option<PathBuf>,

    /// Build identifier appended to the version, used verbatim
    pub build_id: Option<String>,
}

/// Compose workflow
///
/// 1. Read and decode the manifest
/// 2. Look up the version field
/// 3. Extract major and minor
/// 4. Stamp today's date
/// 5. Append the build identifier
///
/// # Arguments
///
/// * `args` - Workflow arguments (manifest override, build id)
/// * `config` - Loaded configuration
/// * `clock` - Date source
///
/// # Returns
///
/// The composed version, or the first error encountered
pub fn run_compose<C: Clock>(
    args: ComposeArgs,
    config: &Config,
    clock: &C,
) -> Result<ComposedVersion> {
    let manifest_path = args.manifest.unwrap_or_else(|| config.manifest.clone());
    debug!(path = %manifest_path.display(), "reading manifest");

    let manifest = Manifest::load(&manifest_path)?;
    let version = manifest.string_field(&config.version_field)?;
    let base = BaseVersion::extract(version)?;
    debug!(%version, %base, "extracted base version");

    let date = DateStamp::new(clock.today(), &config.date_format)?;
    debug!(%date, "date stamp");

    let build_id = args
        .build_id
        .ok_or_else(|| ServiceVersionError::argument("missing build identifier"))?;

    Ok(ComposedVersion::new(base, date, build_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
    }

    fn manifest_dir(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn args(path: PathBuf, build_id: Option<&str>) -> ComposeArgs {
        ComposeArgs {
            manifest: Some(path),
            build_id: build_id.map(str::to_string),
        }
    }

    #[test]
    fn test_compose_basic() {
        let (_dir, path) = manifest_dir(r#"{"version": "1.2.3"}"#);
        let composed =
            run_compose(args(path, Some("42")), &Config::default(), &clock()).unwrap();
        assert_eq!(composed.to_string(), "1.2.240307.42");
    }

    #[test]
    fn test_compose_multi_digit_patch() {
        let (_dir, path) = manifest_dir(r#"{"version": "10.20.300"}"#);
        let composed =
            run_compose(args(path, Some("7")), &Config::default(), &clock()).unwrap();
        assert_eq!(composed.to_string(), "10.20.240307.7");
    }

    #[test]
    fn test_compose_is_idempotent() {
        let (_dir, path) = manifest_dir(r#"{"version": "5.6.7"}"#);
        let first =
            run_compose(args(path.clone(), Some("b1")), &Config::default(), &clock()).unwrap();
        let second = run_compose(args(path, Some("b1")), &Config::default(), &clock()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_build_id() {
        let (_dir, path) = manifest_dir(r#"{"version": "1.2.3"}"#);
        let err = run_compose(args(path, None), &Config::default(), &clock()).unwrap_err();
        assert!(matches!(err, ServiceVersionError::Argument(_)));
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        let err = run_compose(args(path, Some("1")), &Config::default(), &clock()).unwrap_err();
        assert!(matches!(err, ServiceVersionError::FileAccess { .. }));
    }

    #[test]
    fn test_missing_version_field() {
        let (_dir, path) = manifest_dir(r#"{"name": "svc"}"#);
        let err = run_compose(args(path, Some("1")), &Config::default(), &clock()).unwrap_err();
        assert!(matches!(err, ServiceVersionError::Schema(_)));
    }

    #[test]
    fn test_unmatched_version() {
        let (_dir, path) = manifest_dir(r#"{"version": "1.x"}"#);
        let err = run_compose(args(path, Some("1")), &Config::default(), &clock()).unwrap_err();
        assert!(matches!(err, ServiceVersionError::Parse(_)));
    }

    #[test]
    fn test_manifest_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        fs::write(&path, r#"{"appVersion": "2.4.6"}"#).unwrap();

        let config = Config {
            manifest: path,
            version_field: "appVersion".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        };
        let composed = run_compose(
            ComposeArgs {
                manifest: None,
                build_id: Some("99".to_string()),
            },
            &config,
            &clock(),
        )
        .unwrap();
        assert_eq!(composed.to_string(), "2.4.2024-03-07.99");
    }
}
