// =============================================================================
// CORE — Le cœur abstrait : directions, transformations, concepts
// =============================================================================
//
// Ce module ne contient AUCUN texte théologique : seulement les formes.
//
// Architecture :
//   direction → l'orientation temporelle (valeur + drapeau de type)
//   transform → Pushforward / Pullback (apply, compose)
//   concept   → l'enregistrement partagé par les registres de contenu
//
// Le contenu (module content) s'appuie sur ces formes, jamais l'inverse.
//
// =============================================================================

pub mod direction;
pub mod transform;
pub mod concept;
