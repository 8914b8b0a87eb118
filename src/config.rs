// =============================================================================
// CONFIG — Préférences d'affichage (TOML)
// =============================================================================
//
// Emplacement du fichier, par ordre de priorité :
//   1. chemin explicite (--config)
//   2. variable d'environnement THEOCAT_CONFIG
//   3. <config_dir>/theocat/config.toml   (ex: ~/.config/theocat/config.toml)
//
// Exemple :
//
// ```toml
// [render]
// width = 70          # absent : largeur propre à chaque démonstration (70 ou 80)
// bullet = "-"
// ascii_only = false  # true : toute la sortie est ramenée à l'ASCII
// ```
//
// Fichier absent → valeurs par défaut. Fichier illisible ou invalide → erreur.
//
// =============================================================================

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV: &str = "THEOCAT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct TheocatConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Options du rendu texte.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Largeur des bannières et séparateurs, pour toutes les démonstrations.
    /// `None` : chaque démonstration garde la sienne.
    pub width: Option<usize>,
    /// Puce devant chaque propriété
    pub bullet: String,
    /// Sortie strictement ASCII (flèches, symboles, indices translittérés)
    pub ascii_only: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: None,
            bullet: "•".to_string(),
            ascii_only: false,
        }
    }
}

impl RenderConfig {
    /// La puce effectivement utilisée
    pub fn bullet(&self) -> &str {
        if self.ascii_only && !self.bullet.is_ascii() {
            "*"
        } else {
            &self.bullet
        }
    }
}

impl TheocatConfig {
    /// Charge la configuration depuis l'emplacement par défaut.
    ///
    /// `Ok(None)` si aucun fichier n'existe.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Charge la configuration depuis un chemin donné.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Charge la configuration, ou les valeurs par défaut si aucun fichier.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match explicit {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        Ok(loaded.unwrap_or_default())
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("theocat").join("config.toml"))
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty_config() {
        let config: TheocatConfig = toml::from_str("").unwrap();
        assert_eq!(config, TheocatConfig::default());
        assert_eq!(config.render.width, None);
    }

    #[test]
    fn test_parse_render_config() {
        let toml_str = r#"
[render]
width = 70
bullet = "-"
"#;
        let config: TheocatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.render.width, Some(70));
        assert_eq!(config.render.bullet(), "-");
        assert!(!config.render.ascii_only);
    }

    #[test]
    fn test_ascii_only_replaces_bullet() {
        let render = RenderConfig {
            ascii_only: true,
            ..RenderConfig::default()
        };
        assert_eq!(render.bullet(), "*");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(TheocatConfig::load_from(&path).unwrap().is_none());
        assert_eq!(
            TheocatConfig::load_or_default(Some(&path)).unwrap(),
            TheocatConfig::default()
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nwidth = 40\nascii_only = true").unwrap();

        let config = TheocatConfig::load_from(file.path()).unwrap().unwrap();
        assert_eq!(config.render.width, Some(40));
        assert!(config.render.ascii_only);
        assert_eq!(config.render.bullet, "•");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nwidth = \"wide\"").unwrap();

        let err = TheocatConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &file.path().to_path_buf());
    }
}
