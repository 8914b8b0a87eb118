// =============================================================================
// CONCEPT — L'enregistrement de base de tous les registres
// =============================================================================
//
// Un TheologicalConcept est une donnée INERTE :
//   - construit à partir de littéraux au moment de l'appel
//   - jamais modifié
//   - sans identité (deux concepts égaux champ à champ sont le même concept)
//
// Les seules relations entre concepts passent par le vocabulaire partagé
// des énumérations (TemporalDirection ici).
//
// =============================================================================

use std::fmt;

use super::direction::TemporalDirection;

/// Un concept théologique orienté dans le temps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheologicalConcept {
    /// Nom du concept (ex: "Maitreya")
    pub name: String,
    /// Tradition d'origine (ex: "Buddhism")
    pub tradition: String,
    /// Orientation temporelle (étiquette, pas de comportement)
    pub temporal_direction: TemporalDirection,
    /// Propriétés descriptives en texte libre
    pub properties: Vec<String>,
}

impl TheologicalConcept {
    pub fn new(
        name: &str,
        tradition: &str,
        temporal_direction: TemporalDirection,
        properties: &[&str],
    ) -> Self {
        TheologicalConcept {
            name: name.to_string(),
            tradition: tradition.to_string(),
            temporal_direction,
            properties: properties.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Vrai si les deux concepts partagent la même orientation
    pub fn same_direction(&self, other: &TheologicalConcept) -> bool {
        self.temporal_direction == other.temporal_direction
    }
}

impl fmt::Display for TheologicalConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.tradition, self.temporal_direction)
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let c = TheologicalConcept::new(
            "Maitreya",
            "Buddhism",
            TemporalDirection::Forward,
            &["Future Buddha"],
        );
        assert_eq!(c.to_string(), "Maitreya (Buddhism): forward");
        assert_eq!(c.properties, vec!["Future Buddha".to_string()]);
    }

    #[test]
    fn test_same_direction() {
        let a = TheologicalConcept::new("A", "X", TemporalDirection::Forward, &[]);
        let b = TheologicalConcept::new("B", "Y", TemporalDirection::Forward, &[]);
        let c = TheologicalConcept::new("C", "Z", TemporalDirection::Backward, &[]);
        assert!(a.same_direction(&b));
        assert!(!a.same_direction(&c));
    }
}
