// Cargo install records index
// reason: `cargo install` tracks installed packages in <cargo home>/.crates2.json
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use jetstream_core::domain::DistributionName;
use jetstream_core::port::{MetadataError, MetadataIndex};
use jetstream_core::AppError;

/// Install tracking file name inside the Cargo home
pub const CRATES2_FILE: &str = ".crates2.json";

/// Cargo home directory name under the user's home
pub const CARGO_HOME_DIR: &str = ".cargo";

/// Raw `.crates2.json` layout (only the keys are needed)
#[derive(Debug, Default, Deserialize)]
struct InstallRecords {
    #[serde(default)]
    installs: BTreeMap<String, serde_json::Value>,
}

/// Package id parsed from an install key: `"<name> <version> (<source>)"`
#[derive(Debug, PartialEq, Eq)]
struct PackageId<'a> {
    name: &'a str,
    version: &'a str,
}

impl<'a> PackageId<'a> {
    fn parse(key: &'a str) -> Option<Self> {
        let mut parts = key.split_whitespace();
        let name = parts.next()?;
        let version = parts.next()?;
        Some(Self { name, version })
    }
}

/// Index over packages installed with `cargo install`
///
/// The file is re-read on every lookup. Keys are visited in sorted order and
/// the first one naming the distribution wins.
#[derive(Debug, Clone)]
pub struct CargoInstallIndex {
    path: PathBuf,
}

impl CargoInstallIndex {
    /// Index backed by an explicit `.crates2.json` file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Index at `~/.cargo/.crates2.json`
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn discover() -> Option<Self> {
        let dirs = directories::BaseDirs::new()?;
        Some(Self::at(
            dirs.home_dir().join(CARGO_HOME_DIR).join(CRATES2_FILE),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> jetstream_core::Result<InstallRecords> {
        let raw = std::fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&raw)?;
        Ok(records)
    }

    fn to_metadata_error(&self, distribution: &DistributionName, err: AppError) -> MetadataError {
        match err {
            AppError::Io(e) if e.kind() == ErrorKind::NotFound => {
                MetadataError::not_found(distribution)
            }
            AppError::Io(e) => {
                MetadataError::Unreadable(format!("{}: {}", self.path.display(), e))
            }
            other => MetadataError::Malformed(format!("{}: {}", self.path.display(), other)),
        }
    }
}

impl MetadataIndex for CargoInstallIndex {
    fn version(&self, distribution: &DistributionName) -> Result<String, MetadataError> {
        let records = self
            .read_records()
            .map_err(|e| self.to_metadata_error(distribution, e))?;

        debug!(
            path = %self.path.display(),
            installs = records.installs.len(),
            "Cargo install records loaded"
        );

        for key in records.installs.keys() {
            let id = PackageId::parse(key).ok_or_else(|| {
                MetadataError::Malformed(format!("{}: invalid package id {:?}", self.path.display(), key))
            })?;
            if id.name == distribution.as_str() {
                return Ok(id.version.to_string());
            }
        }

        Err(MetadataError::not_found(distribution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempFile(PathBuf);

    impl TempFile {
        fn with_contents(contents: &str) -> Self {
            let path = std::env::temp_dir()
                .join(format!("jetstream_crates2_{}.json", uuid::Uuid::new_v4()));
            std::fs::write(&path, contents).unwrap();
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn jetstream() -> DistributionName {
        DistributionName::new("mhkb-jetstream").unwrap()
    }

    #[test]
    fn test_package_id_parse() {
        let id = PackageId::parse(
            "mhkb-jetstream 1.2.3 (registry+https://github.com/rust-lang/crates.io-index)",
        )
        .unwrap();
        assert_eq!(id.name, "mhkb-jetstream");
        assert_eq!(id.version, "1.2.3");

        assert!(PackageId::parse("lonely").is_none());
        assert!(PackageId::parse("").is_none());
    }

    #[test]
    fn test_installed_version_found() {
        let file = TempFile::with_contents(
            r#"{
                "installs": {
                    "ripgrep 14.1.0 (registry+https://github.com/rust-lang/crates.io-index)": {"bins": ["rg"]},
                    "mhkb-jetstream 1.2.3 (path+file:///src/jetstream)": {"bins": []}
                }
            }"#,
        );
        let index = CargoInstallIndex::at(&file.0);

        assert_eq!(index.version(&jetstream()).unwrap(), "1.2.3");
    }

    #[test]
    fn test_absent_entry_not_found() {
        let file = TempFile::with_contents(
            r#"{"installs": {"ripgrep 14.1.0 (registry+https://github.com/rust-lang/crates.io-index)": {}}}"#,
        );
        let index = CargoInstallIndex::at(&file.0);

        assert!(index.version(&jetstream()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_missing_installs_key_not_found() {
        let file = TempFile::with_contents("{}");
        let index = CargoInstallIndex::at(&file.0);

        assert!(index.version(&jetstream()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_missing_file_not_found() {
        let path = std::env::temp_dir().join(format!("jetstream_missing_{}.json", uuid::Uuid::new_v4()));
        let index = CargoInstallIndex::at(path);

        assert!(index.version(&jetstream()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_invalid_json_malformed() {
        let file = TempFile::with_contents("{ not json");
        let index = CargoInstallIndex::at(&file.0);

        let err = index.version(&jetstream()).unwrap_err();
        assert!(matches!(err, MetadataError::Malformed(_)));
    }

    #[test]
    fn test_invalid_key_malformed() {
        let file = TempFile::with_contents(r#"{"installs": {"broken": {}}}"#);
        let index = CargoInstallIndex::at(&file.0);

        let err = index.version(&jetstream()).unwrap_err();
        assert!(err.to_string().contains("invalid package id"));
    }

    #[test]
    fn test_directory_unreadable() {
        let dir = std::env::temp_dir().join(format!("jetstream_dir_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let index = CargoInstallIndex::at(&dir);

        let err = index.version(&jetstream()).unwrap_err();
        let _ = std::fs::remove_dir(&dir);
        assert!(matches!(err, MetadataError::Unreadable(_)));
    }

    #[test]
    fn test_discover_points_into_cargo_home() {
        if let Some(index) = CargoInstallIndex::discover() {
            assert!(index.path().ends_with(Path::new(CARGO_HOME_DIR).join(CRATES2_FILE)));
        }
    }
}
