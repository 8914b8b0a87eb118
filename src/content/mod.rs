// =============================================================================
// CONTENT — Les registres de contenu (données statiques)
// =============================================================================
//
// Chaque sous-module est un registre indépendant de fonctions pures :
// pas d'entrée, pas d'erreur, le même résultat à chaque appel.
//
//   categorical → Maitreya ↔ Messie, 二郎神 ↔ Michel (s'appuie sur core)
//   michael     → rôles, iconographie et traditions de l'Archange Michel
//   history     → chronologie Michel / Michel-Ange
//   defects     → défauts topologiques et brisures de symétrie
//   divine_name → transformation du nom divin (Ça / Moi / Surmoi)
//   catalog     → recherche par nom à travers les registres
//
// =============================================================================

pub mod categorical;
pub mod michael;
pub mod history;
pub mod defects;
pub mod divine_name;
pub mod catalog;
