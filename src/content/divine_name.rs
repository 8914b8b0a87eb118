// =============================================================================
// DIVINE NAME — "yawhel elo elohim" → "yahweh leo leohim"
// =============================================================================
//
// Lecture Ça / Moi / Surmoi du nom divin transformé :
//   Surmoi : yahweh  (autorité divine)
//   Moi    : leo     (fonction médiatrice)
//   Ça     : leohim  (forces primitives)
//
// =============================================================================

use std::fmt;

use crate::core::transform::{Pushforward, Transformation};

pub const ORIGINAL_FORM: &str = "yawhel elo elohim";
pub const TRANSFORMED_FORM: &str = "yahweh leo leohim";

/// Les trois instances de l'appareil psychique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsycheLayer {
    Superego,
    Ego,
    Id,
}

impl fmt::Display for PsycheLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PsycheLayer::Superego => write!(f, "Superego"),
            PsycheLayer::Ego => write!(f, "Ego"),
            PsycheLayer::Id => write!(f, "Id"),
        }
    }
}

/// (instance, terme, fonction), du Surmoi vers le Ça.
pub fn analysis() -> Vec<(PsycheLayer, &'static str, &'static str)> {
    vec![
        (PsycheLayer::Superego, "yahweh", "Divine Authority"),
        (PsycheLayer::Ego, "leo", "Mediating Function"),
        (PsycheLayer::Id, "leohim", "Primal Forces"),
    ]
}

/// Le libellé affiché pour une ligne d'analyse : "Superego: yahweh (Divine Authority)".
pub fn analysis_label(layer: PsycheLayer, term: &str, function: &str) -> String {
    format!("{}: {} ({})", layer, term, function)
}

/// La transformation du nom, comme pushforward sur les formes connues.
/// Une forme inconnue passe inchangée.
pub fn name_transformation() -> Pushforward<&'static str, &'static str> {
    Transformation::new(|form: &'static str| {
        if form == ORIGINAL_FORM {
            TRANSFORMED_FORM
        } else {
            form
        }
    })
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transformation() {
        let t = name_transformation();
        assert_eq!(t.apply(ORIGINAL_FORM), TRANSFORMED_FORM);
        assert_eq!(t.apply(TRANSFORMED_FORM), TRANSFORMED_FORM);
    }

    #[test]
    fn test_analysis_covers_transformed_terms() {
        let rows = analysis();
        assert_eq!(rows.len(), 3);
        let terms: Vec<&str> = rows.iter().map(|(_, term, _)| *term).collect();
        assert_eq!(terms.join(" "), TRANSFORMED_FORM);
    }

    #[test]
    fn test_labels() {
        let (layer, term, function) = analysis()[0];
        assert_eq!(
            analysis_label(layer, term, function),
            "Superego: yahweh (Divine Authority)"
        );
    }
}
