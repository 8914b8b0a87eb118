// =============================================================================
// DIRECTION — L'orientation temporelle des transformations
// =============================================================================
//
// Deux directions seulement :
//   Forward  (pushforward, covariant)     → Présent → Futur   (Maitreya)
//   Backward (pullback, contravariant)    → Futur ← Passé     (Messie)
//
// La direction existe à DEUX niveaux :
//   - comme valeur (TemporalDirection), étiquette portée par les concepts
//   - comme type (Forward / Backward), drapeau qui fixe l'ordre de
//     composition d'une Transformation à la compilation
//
// =============================================================================

use std::fmt;

/// Orientation temporelle d'un concept théologique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalDirection {
    /// Tourné vers le futur (Maitreya)
    Forward,
    /// Tourné vers le passé (Messie)
    Backward,
}

impl TemporalDirection {
    /// Étiquette textuelle : "forward" ou "backward"
    pub fn value(&self) -> &'static str {
        match self {
            TemporalDirection::Forward => "forward",
            TemporalDirection::Backward => "backward",
        }
    }

    /// La direction opposée (dualité)
    pub fn dual(&self) -> TemporalDirection {
        match self {
            TemporalDirection::Forward => TemporalDirection::Backward,
            TemporalDirection::Backward => TemporalDirection::Forward,
        }
    }
}

impl fmt::Display for TemporalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Drapeau de direction au niveau des types.
///
/// Implémenté uniquement par `Forward` et `Backward` : c'est lui qui
/// décide de l'ordre dans `Transformation::compose`.
pub trait Direction: sealed::Sealed {
    /// La direction temporelle correspondante
    const TEMPORAL: TemporalDirection;
    /// Flèche utilisée à l'affichage
    const ARROW: &'static str;
}

/// Marqueur : composition "self puis other"
#[derive(Debug, Clone, Copy)]
pub enum Forward {}

/// Marqueur : composition "other puis self"
#[derive(Debug, Clone, Copy)]
pub enum Backward {}

impl Direction for Forward {
    const TEMPORAL: TemporalDirection = TemporalDirection::Forward;
    const ARROW: &'static str = "→";
}

impl Direction for Backward {
    const TEMPORAL: TemporalDirection = TemporalDirection::Backward;
    const ARROW: &'static str = "←";
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Forward {}
    impl Sealed for super::Backward {}
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_labels() {
        assert_eq!(TemporalDirection::Forward.value(), "forward");
        assert_eq!(TemporalDirection::Backward.to_string(), "backward");
    }

    #[test]
    fn test_dual_is_involution() {
        for d in [TemporalDirection::Forward, TemporalDirection::Backward] {
            assert_ne!(d.dual(), d);
            assert_eq!(d.dual().dual(), d);
        }
    }

    #[test]
    fn test_markers_match_values() {
        assert_eq!(Forward::TEMPORAL, TemporalDirection::Forward);
        assert_eq!(Backward::TEMPORAL, TemporalDirection::Backward);
        assert_eq!(Forward::ARROW, "→");
        assert_eq!(Backward::ARROW, "←");
    }
}
