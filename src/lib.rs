// =============================================================================
// THEOCAT — Théologie catégorique en Rust
// =============================================================================
//
// Theocat présente des concepts théologiques (Archange Michel, dualité
// Maitreya / Messie, défauts topologiques) comme des données structurées,
// et fournit la seule abstraction réutilisable du domaine : la paire
// Pushforward / Pullback.
//
// Architecture :
//   core/       → Les formes pures (directions, transformations, concepts)
//   content/    → Les registres de contenu (données statiques)
//   render/     → Traduction des registres en texte (brut, Markdown)
//   experiment/ → Les vues interactives comme machines à états
//   config      → Préférences d'affichage (TOML)
//   error       → Les erreurs des entrées textuelles
//
// Concepts fondamentaux :
//   Pushforward = compose "self puis other"   (covariant, vers le futur)
//   Pullback    = compose "other puis self"   (contravariant, vers le passé)
//   Registre    = fonctions pures sans entrée, même résultat à chaque appel
//
// =============================================================================

pub mod core;
pub mod content;
pub mod render;
pub mod experiment;
pub mod config;
pub mod error;

pub use crate::core::transform::{Pullback, Pushforward, Transformation};
pub use error::{Error, Result};
