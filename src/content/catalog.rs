// =============================================================================
// CATALOG — Registre en lecture seule, indexé par nom
// =============================================================================
//
// Le catalogue ne crée rien : il aiguille un nom vers la fonction de
// registre qui construit l'enregistrement correspondant.
//
//   Topic   → une démonstration imprimable (michael, history, ...)
//   concept → un TheologicalConcept par son nom
//   defect  → un TopologicalDefect par son nom
//
// Les recherches ignorent la casse.
//
// =============================================================================

use std::fmt;
use std::str::FromStr;

use super::defects::TopologicalDefect;
use super::{categorical, defects};
use crate::core::concept::TheologicalConcept;
use crate::error::Error;

/// Une démonstration du catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Michael,
    History,
    Categorical,
    Defects,
    DivineName,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Michael,
        Topic::History,
        Topic::Categorical,
        Topic::Defects,
        Topic::DivineName,
    ];

    /// Identifiant en kebab-case, accepté par `FromStr`
    pub fn slug(&self) -> &'static str {
        match self {
            Topic::Michael => "michael",
            Topic::History => "history",
            Topic::Categorical => "categorical",
            Topic::Defects => "defects",
            Topic::DivineName => "divine-name",
        }
    }

    /// Largeur des bannières de la démonstration console
    pub fn rule_width(&self) -> usize {
        match self {
            Topic::Categorical => 70,
            _ => 80,
        }
    }

    /// Titre de la bannière
    pub fn title(&self) -> &'static str {
        match self {
            Topic::Michael => "ARCHANGEL MICHAEL: THEOLOGICAL AND ARTISTIC FRAMEWORK",
            Topic::History => "ARCHANGEL MICHAEL vs. MICHELANGELO: Historical Timeline",
            Topic::Categorical => "CATEGORICAL THEOLOGY: Pushforward & Pullback",
            Topic::Defects => "TOPOLOGICAL DEFECTS IN THEOLOGICAL FRAMEWORK",
            Topic::DivineName => "DIVINE NAME TRANSFORMATION: Id-Ego-Superego Framework",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Topic::ALL
            .into_iter()
            .find(|t| normalize(t.slug()) == wanted)
            .ok_or_else(|| Error::UnknownTopic(s.to_string()))
    }
}

/// Tous les concepts nommés du registre catégorique.
pub fn concepts() -> Vec<TheologicalConcept> {
    vec![
        categorical::maitreya(),
        categorical::messiah(),
        categorical::erlang_shen(),
        categorical::archangel_michael(),
    ]
}

/// Recherche d'un concept. "erlang shen" trouve "二郎神 (Erlang Shen)".
pub fn concept(name: &str) -> Option<TheologicalConcept> {
    let wanted = normalize(name);
    concepts().into_iter().find(|c| {
        let full = normalize(&c.name);
        full == wanted || full.contains(&format!("({})", wanted))
    })
}

/// Recherche d'un défaut. "vortex" et "string" trouvent tous deux "Vortex/String".
pub fn defect(name: &str) -> Option<TopologicalDefect> {
    let wanted = normalize(name);
    defects::all_defects().into_iter().find(|d| {
        let full = normalize(&d.name);
        full == wanted || full.split('/').any(|part| part == wanted)
    })
}

/// Minuscules, tirets et underscores vus comme des espaces.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
}
