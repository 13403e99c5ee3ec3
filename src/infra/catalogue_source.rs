//! Resolves the destination catalogue once per process.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use tracing::{error, info, warn};

use crate::{
    domain::{Catalogue, CatalogueError},
    util::{
        assets::{asset_bytes, CATALOGUE_ASSET},
        config::AppConfig,
    },
};

/// Where the active catalogue came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogueOrigin {
    Embedded,
    File(PathBuf),
    /// Both the override and the bundled data were unusable.
    Empty,
}

impl fmt::Display for CatalogueOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueOrigin::Embedded => write!(f, "bundled catalogue"),
            CatalogueOrigin::File(path) => write!(f, "{}", path.display()),
            CatalogueOrigin::Empty => write!(f, "empty catalogue"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoadedCatalogue {
    pub catalogue: Arc<Catalogue>,
    pub origin: CatalogueOrigin,
    /// User-facing note when a fallback was taken.
    pub warning: Option<String>,
}

static LOADED: OnceLock<LoadedCatalogue> = OnceLock::new();

/// Parses the catalogue bundled into the binary.
pub fn embedded_catalogue() -> Result<Catalogue, CatalogueError> {
    let bytes = asset_bytes(CATALOGUE_ASSET).ok_or(CatalogueError::MissingAsset(CATALOGUE_ASSET))?;
    let json = String::from_utf8_lossy(&bytes);
    Catalogue::from_json(&json)
}

pub fn load_catalogue_file(path: &Path) -> Result<Catalogue, CatalogueError> {
    let json = fs::read_to_string(path)?;
    Catalogue::from_json(&json)
}

/// Picks the override file when configured, falling back to the bundled set
/// and finally to an empty catalogue. Never fails.
pub fn resolve_catalogue(config: &AppConfig) -> LoadedCatalogue {
    let mut warning = None;

    if let Some(path) = config.catalogue_path.as_deref() {
        match load_catalogue_file(path) {
            Ok(catalogue) => {
                info!(
                    "[catalogue] Loaded {} destinations from {}",
                    catalogue.len(),
                    path.display()
                );
                return LoadedCatalogue {
                    catalogue: Arc::new(catalogue),
                    origin: CatalogueOrigin::File(path.to_path_buf()),
                    warning: None,
                };
            }
            Err(err) => {
                warn!("[catalogue] Ignoring {}: {err}", path.display());
                warning = Some(format!(
                    "Could not load {} ({err}); showing the bundled destinations.",
                    path.display()
                ));
            }
        }
    }

    match embedded_catalogue() {
        Ok(catalogue) => {
            info!("[catalogue] Loaded {} bundled destinations", catalogue.len());
            LoadedCatalogue {
                catalogue: Arc::new(catalogue),
                origin: CatalogueOrigin::Embedded,
                warning,
            }
        }
        Err(err) => {
            error!("[catalogue] Bundled catalogue is unusable: {err}");
            LoadedCatalogue {
                catalogue: Arc::new(Catalogue::default()),
                origin: CatalogueOrigin::Empty,
                warning: Some(format!("Destination data failed to load: {err}")),
            }
        }
    }
}

/// Resolves the catalogue on first call; later calls return the same instance.
pub fn init_catalogue(config: &AppConfig) -> &'static LoadedCatalogue {
    LOADED.get_or_init(|| resolve_catalogue(config))
}

/// The process-wide catalogue, resolved with default config if startup skipped it.
pub fn loaded_catalogue() -> &'static LoadedCatalogue {
    LOADED.get_or_init(|| resolve_catalogue(&AppConfig::default()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_with(path: &Path) -> AppConfig {
        AppConfig {
            catalogue_path: Some(path.to_path_buf()),
            ..AppConfig::default()
        }
    }

    #[test]
    fn bundled_catalogue_is_valid() {
        let catalogue = embedded_catalogue().unwrap();
        assert_eq!(catalogue.len(), 6);
        let names: Vec<_> = catalogue.destinations().iter().map(|d| d.name.as_str()).collect();
        assert!(names.contains(&"Skardu"));
        assert!(names.contains(&"Naran Kaghan"));
    }

    #[test]
    fn default_config_uses_bundled_catalogue() {
        let loaded = resolve_catalogue(&AppConfig::default());
        assert_eq!(loaded.origin, CatalogueOrigin::Embedded);
        assert!(loaded.warning.is_none());
        assert_eq!(loaded.catalogue.len(), 6);
    }

    #[test]
    fn override_file_replaces_bundled_catalogue() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 42, "name": "Gwadar", "region": "Balochistan", "rating": 4.2,
                "reviews": 31, "budget": "high", "security": "low",
                "description": "Port city", "price_range": "PKR 30,000 - 50,000",
                "highlights": ["Hammerhead"]}}]"#
        )
        .unwrap();

        let loaded = resolve_catalogue(&config_with(file.path()));
        assert_eq!(loaded.origin, CatalogueOrigin::File(file.path().to_path_buf()));
        assert!(loaded.warning.is_none());
        assert_eq!(loaded.catalogue.len(), 1);
        assert_eq!(loaded.catalogue.get(42).map(|d| d.name.as_str()), Some("Gwadar"));
    }

    #[test]
    fn broken_override_falls_back_with_warning() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let loaded = resolve_catalogue(&config_with(file.path()));
        assert_eq!(loaded.origin, CatalogueOrigin::Embedded);
        assert_eq!(loaded.catalogue.len(), 6);
        assert!(loaded.warning.unwrap().contains("bundled destinations"));
    }

    #[test]
    fn missing_override_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = resolve_catalogue(&config_with(&dir.path().join("absent.json")));
        assert_eq!(loaded.origin, CatalogueOrigin::Embedded);
        assert!(loaded.warning.is_some());
    }

    #[test]
    fn process_catalogue_is_shared() {
        let first = loaded_catalogue();
        let second = loaded_catalogue();
        assert!(Arc::ptr_eq(&first.catalogue, &second.catalogue));
    }
}
