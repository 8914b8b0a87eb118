// =============================================================================
// CATEGORICAL — Théologie catégorique : Maitreya ↔ Messie, 二郎神 ↔ Michel
// =============================================================================
//
// Deux correspondances :
//
//   1. DUALITÉ  Pushforward ↔ Pullback  ::  Maitreya ↔ Messie
//        Maitreya pousse le dharma vers le futur     (covariant)
//        le Messie tire la prophétie depuis le passé (contravariant)
//
//   2. IDENTITÉ  二郎神 (Erlang Shen) ↔ Archange Michel
//        l'archétype du guerrier divin est préservé d'une tradition à l'autre
//
// Les transformations illustratives (enlightenment_pushforward,
// prophecy_pullback) sont de vraies Transformation du cœur.
//
// =============================================================================

use crate::core::concept::TheologicalConcept;
use crate::core::direction::TemporalDirection;
use crate::core::transform::{Pullback, Pushforward, Transformation};

/// États spirituels poussés vers l'illumination future.
pub const SPIRITUAL_STATES: [&str; 4] = ["ignorance", "practice", "insight", "wisdom"];

/// Événements présents tirés vers la prophétie ancienne.
pub const CURRENT_EVENTS: [&str; 4] = [
    "redemption",
    "liberation",
    "covenant_renewal",
    "restoration",
];

/// Maitreya : le Bouddha futur (pushforward, covariant).
pub fn maitreya() -> TheologicalConcept {
    TheologicalConcept::new(
        "Maitreya",
        "Buddhism",
        TemporalDirection::Forward,
        &[
            "Future Buddha",
            "Will appear in future",
            "Teaches dharma in degenerate age",
            "Represents hope and future enlightenment",
            "Covariant with time's arrow",
        ],
    )
}

/// Le Messie : accomplissement de la prophétie (pullback, contravariant).
pub fn messiah() -> TheologicalConcept {
    TheologicalConcept::new(
        "Messiah",
        "Abrahamic",
        TemporalDirection::Backward,
        &[
            "Fulfillment of prophecy",
            "References ancient covenants",
            "Validates past promises",
            "Redeemer and deliverer",
            "Contravariant validation of history",
        ],
    )
}

pub fn erlang_shen() -> TheologicalConcept {
    TheologicalConcept::new(
        "二郎神 (Erlang Shen)",
        "Chinese (Taoist/Folk)",
        TemporalDirection::Forward,
        &[
            "Three-eyed warrior god",
            "Defeats demons and controls floods",
            "Protector deity with celestial hound",
            "Maintains cosmic order",
            "Active guardian of righteousness",
        ],
    )
}

pub fn archangel_michael() -> TheologicalConcept {
    TheologicalConcept::new(
        "Archangel Michael",
        "Abrahamic (Judaism/Christianity/Islam)",
        TemporalDirection::Forward,
        &[
            "Chief of heavenly armies",
            "Defeats Satan and demons",
            "Protector and warrior angel",
            "Defender of divine order",
            "Active guardian of the faithful",
        ],
    )
}

/// La dualité (Maitreya, Messie).
pub fn duality() -> (TheologicalConcept, TheologicalConcept) {
    (maitreya(), messiah())
}

/// La correspondance (Erlang Shen, Michel) du foncteur identité.
pub fn warrior_correspondence() -> (TheologicalConcept, TheologicalConcept) {
    (erlang_shen(), archangel_michael())
}

/// Pushforward : état spirituel → illumination future.
pub fn enlightenment_pushforward() -> Pushforward<String, String> {
    Transformation::new(|state: String| {
        format!("{} → future_enlightenment (via Maitreya's teaching)", state)
    })
}

/// Pullback : accomplissement présent → promesse ancienne.
pub fn prophecy_pullback() -> Pullback<String, String> {
    Transformation::new(|event: String| {
        format!("{} ← ancient_prophecy (fulfilled by Messiah)", event)
    })
}

/// Le foncteur identité entre guerriers divins : la structure passe telle quelle.
pub fn warrior_identity() -> Pushforward<TheologicalConcept, TheologicalConcept> {
    Transformation::identity()
}

pub fn explain_correspondence() -> &'static str {
    "\
CATEGORICAL THEOLOGY: Pushforward ↔ Pullback :: Maitreya ↔ Messiah

PUSHFORWARD (Covariant) ~ MAITREYA:
----------------------------------------
• Direction: Present → Future
• Operation: Projects current state forward
• Preserves: Direction of temporal flow
• Meaning: Hope oriented toward future completion
• Example: Current practice → Future enlightenment

PULLBACK (Contravariant) ~ MESSIAH:
----------------------------------------
• Direction: Future ← Past
• Operation: References fulfillment back to origins
• Reverses: Direction to validate prophecy
• Meaning: Present fulfillment of past promises
• Example: Current redemption ← Ancient covenant

DUALITY:
----------------------------------------
Both concepts mediate between temporal states but in opposite directions:
- Maitreya: pushes dharma forward into the future
- Messiah: pulls prophecy backward from the past

Together they form a complete categorical framework for understanding
eschatological hope across religious traditions."
}

pub fn explain_warrior_correspondence() -> &'static str {
    "\
CATEGORICAL THEOLOGY: Identity Functor :: 二郎神 ↔ Archangel Michael

IDENTITY FUNCTOR (Structure Preservation):
----------------------------------------
An identity functor preserves the categorical structure while allowing
for different manifestations across contexts. The warrior deity archetype
maintains its essential properties across traditions.

二郎神 (ERLANG SHEN) - Chinese Tradition:
----------------------------------------
• Role: Three-eyed warrior god
• Function: Defeats demons and controls floods
• Properties: Celestial protector with divine hound
• Context: Taoist and folk religious tradition
• Action: Maintains cosmic order through active intervention

ARCHANGEL MICHAEL - Abrahamic Tradition:
----------------------------------------
• Role: Chief of heavenly armies
• Function: Defeats Satan and demons
• Properties: Warrior angel and protector
• Context: Jewish, Christian, and Islamic tradition
• Action: Defends divine order through militant service

CATEGORICAL CORRESPONDENCE:
----------------------------------------
The identity functor maps between these concepts while preserving:
1. Warrior archetype: Both are divine warriors
2. Protective function: Both defend against evil forces
3. Active intervention: Both engage in cosmic battles
4. Maintaining order: Both uphold divine/cosmic law

Despite different cultural contexts (Chinese vs Abrahamic), the
categorical structure of the warrior deity archetype remains invariant.
This demonstrates how identity functors preserve essential properties
across different theological categories."
}
