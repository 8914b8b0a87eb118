//! Erreurs de la bibliothèque.
//!
//! Les registres de contenu ne peuvent pas échouer : seules les entrées
//! textuelles (noms de démonstration, touches, configuration) le peuvent.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown topic '{0}' (expected one of: michael, history, categorical, defects, divine-name)")]
    UnknownTopic(String),

    #[error("unknown experiment '{0}' (expected one of: divine-name, push-pull, warrior, defects)")]
    UnknownExperiment(String),

    #[error("unknown key '{0}' (expected space, left, right, escape or a digit)")]
    UnknownKey(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
