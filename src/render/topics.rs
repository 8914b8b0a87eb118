// =============================================================================
// TOPICS — Une démonstration par registre, sous forme de blocs
// =============================================================================
//
// Chaque fonction lit UNIQUEMENT les registres de content et assemble les
// blocs dans l'ordre de la démonstration console correspondante.
//
// =============================================================================

use super::Block;
use crate::content::catalog::Topic;
use crate::content::{categorical, defects, divine_name, history, michael};
use crate::core::concept::TheologicalConcept;

/// Les blocs d'une démonstration.
pub fn blocks(topic: Topic) -> Vec<Block> {
    match topic {
        Topic::Michael => michael_blocks(),
        Topic::History => history_blocks(),
        Topic::Categorical => categorical_blocks(),
        Topic::Defects => defect_blocks(),
        Topic::DivineName => divine_name_blocks(),
    }
}

fn concept_blocks(out: &mut Vec<Block>, heading: &str, concept: &TheologicalConcept) {
    out.push(Block::Section(heading.to_string()));
    out.push(Block::line(concept.to_string()));
    for prop in &concept.properties {
        out.push(Block::bullet(2, prop.as_str()));
    }
    out.push(Block::Blank);
}

fn michael_blocks() -> Vec<Block> {
    let mut out = vec![Block::Banner(Topic::Michael.title().to_string())];

    out.push(Block::Section("NAME ETYMOLOGY".into()));
    out.push(Block::Text(michael::name_etymology().into()));
    out.push(Block::Blank);

    out.push(Block::Section("BIBLICAL REFERENCES".into()));
    for (reference, description) in michael::biblical_references() {
        out.push(Block::bullet(0, format!("{}: {}", reference, description)));
    }
    out.push(Block::Blank);

    out.push(Block::Section("THEOLOGICAL ROLES".into()));
    for role in michael::theological_roles() {
        out.push(Block::line(format!("{} ({})", role.name, role.tradition)));
        out.push(Block::indented(2, format!("Description: {}", role.description)));
        out.push(Block::indented(2, format!("Symbolic Meaning: {}", role.symbolic_meaning)));
        out.push(Block::indented(2, format!("Artistic Form: {}", role.artistic_representation)));
        out.push(Block::Blank);
    }

    for (heading, text) in [
        ("MICHELANGELO CONNECTION", michael::michelangelo_connection()),
        ("CROSS-TRADITION COMPARISON", michael::cross_tradition_comparison()),
        ("WARRIOR ARCHETYPE ANALYSIS", michael::warrior_archetype()),
        ("THEOLOGICAL SIGNIFICANCE", michael::theological_significance()),
    ] {
        out.push(Block::Section(heading.into()));
        out.push(Block::Text(text.into()));
        out.push(Block::Blank);
    }

    out.push(Block::Rule);
    out
}

fn history_blocks() -> Vec<Block> {
    let mut out = vec![Block::Banner(Topic::History.title().to_string())];

    for (heading, figure) in [
        ("ARCHANGEL MICHAEL (Theological Figure):", history::archangel_michael()),
        ("MICHELANGELO BUONARROTI (Renaissance Artist):", history::michelangelo()),
    ] {
        out.push(Block::Section(heading.into()));
        out.push(Block::line(format!("Name: {}", figure.name)));
        out.push(Block::line(format!("Time Period: {}", figure.time_period)));
        out.push(Block::line(format!("Description: {}", figure.description)));
        out.push(Block::line(format!("Significance: {}", figure.significance)));
        out.push(Block::Blank);
    }

    out.push(Block::Text(history::naming_relationship().into()));
    out.push(Block::Blank);

    out.push(Block::Section("ANCIENT TEXTUAL REFERENCES TO ARCHANGEL MICHAEL:".into()));
    for reference in history::ancient_references() {
        out.push(Block::bullet(2, reference));
    }
    out.push(Block::Blank);

    out.push(Block::Section("MICHELANGELO'S WORKS FEATURING ANGELS:".into()));
    for work in history::michelangelo_angel_works() {
        out.push(Block::bullet(2, work));
    }
    out.push(Block::Blank);

    out.push(Block::Rule);
    for line in history::summary() {
        out.push(Block::line(line));
    }
    out.push(Block::Rule);
    out
}

fn categorical_blocks() -> Vec<Block> {
    let mut out = vec![Block::Banner(Topic::Categorical.title().to_string())];

    let (maitreya, messiah) = categorical::duality();
    concept_blocks(&mut out, "PUSHFORWARD EXAMPLE (Maitreya):", &maitreya);
    concept_blocks(&mut out, "PULLBACK EXAMPLE (Messiah):", &messiah);

    out.push(Block::Text(categorical::explain_correspondence().into()));
    out.push(Block::Blank);

    out.push(Block::Section("FUNCTORIAL OPERATIONS:".into()));
    out.push(Block::line("Pushforward (Maitreya - Future Projection):"));
    let push = categorical::enlightenment_pushforward();
    for state in categorical::SPIRITUAL_STATES {
        out.push(Block::indented(2, push.apply(state.to_string())));
    }
    out.push(Block::Blank);

    out.push(Block::line("Pullback (Messiah - Prophetic Fulfillment):"));
    let pull = categorical::prophecy_pullback();
    for event in categorical::CURRENT_EVENTS {
        out.push(Block::indented(2, pull.apply(event.to_string())));
    }
    out.push(Block::Blank);
    out.push(Block::Rule);
    out.push(Block::Blank);

    out.push(Block::Banner("CATEGORICAL THEOLOGY: Identity Functor".into()));
    let (shen, michael) = categorical::warrior_correspondence();
    let identity = categorical::warrior_identity();
    let shen = identity.apply(shen);
    concept_blocks(&mut out, "WARRIOR DEITY (二郎神 - Erlang Shen):", &shen);
    concept_blocks(&mut out, "WARRIOR DEITY (Archangel Michael):", &michael);

    out.push(Block::Text(categorical::explain_warrior_correspondence().into()));
    out.push(Block::Blank);
    out.push(Block::Rule);
    out
}

fn defect_blocks() -> Vec<Block> {
    let mut out = vec![Block::Banner(Topic::Defects.title().to_string())];

    for (i, defect) in defects::all_defects().iter().enumerate() {
        out.push(Block::Section(format!(
            "{}. {} ({}D Defect)",
            i + 1,
            defect.name.to_uppercase(),
            defect.dimension.value()
        )));
        out.push(Block::line(format!("Theological Concept: {}", defect.theological_concept)));
        out.push(Block::line(format!(
            "Symmetry Broken: {}",
            defect.symmetry_broken.description()
        )));
        out.push(Block::line(format!("Stability: {}", defect.stability)));
        out.push(Block::line(format!(
            "Homotopy Group: {}",
            defects::homotopy_group(defect)
        )));
        out.push(Block::Blank);
        out.push(Block::line("Properties:"));
        for prop in &defect.properties {
            out.push(Block::bullet(2, prop.as_str()));
        }
        out.push(Block::Blank);
    }

    out.push(Block::Text(defects::explain_framework().into()));
    out.push(Block::Blank);

    out.push(Block::Banner("SYMMETRY BREAKING CASCADE".into()));
    for line in defects::symmetry_breaking_cascade() {
        out.push(Block::line(line));
    }
    out.push(Block::Blank);
    out.push(Block::Rule);
    out
}

fn divine_name_blocks() -> Vec<Block> {
    let mut out = vec![Block::Banner(Topic::DivineName.title().to_string())];

    let transformed = divine_name::name_transformation().apply(divine_name::ORIGINAL_FORM);
    out.push(Block::line(format!("Original:    {}", divine_name::ORIGINAL_FORM)));
    out.push(Block::line(format!("Transformed: {}", transformed)));
    out.push(Block::Blank);

    out.push(Block::Section("ANALYSIS".into()));
    for (layer, term, function) in divine_name::analysis() {
        out.push(Block::bullet(0, divine_name::analysis_label(layer, term, function)));
    }
    out.push(Block::Blank);
    out.push(Block::Rule);
    out
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn texts(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Banner(s) | Block::Section(s) | Block::Text(s) => Some(s.clone()),
                Block::Line { text, .. } | Block::Bullet { text, .. } => Some(text.clone()),
                Block::Blank | Block::Rule => None,
            })
            .collect()
    }

    #[test]
    fn test_every_topic_opens_with_banner_and_closes_with_rule() {
        for topic in Topic::ALL {
            let b = blocks(topic);
            assert_eq!(b.first(), Some(&Block::Banner(topic.title().to_string())));
            assert_eq!(b.last(), Some(&Block::Rule));
            assert_eq!(b, blocks(topic));
        }
    }

    #[test]
    fn test_categorical_shows_transformations() {
        let t = texts(&blocks(Topic::Categorical));
        assert!(t.contains(&"wisdom → future_enlightenment (via Maitreya's teaching)".to_string()));
        assert!(t.contains(&"restoration ← ancient_prophecy (fulfilled by Messiah)".to_string()));
        assert!(t.contains(&"Maitreya (Buddhism): forward".to_string()));
    }

    #[test]
    fn test_defects_list_homotopy() {
        let t = texts(&blocks(Topic::Defects));
        assert!(t.contains(&"1. MONOPOLE (0D Defect)".to_string()));
        assert!(t.contains(&"4. TEXTURE (3D Defect)".to_string()));
        assert!(t
            .iter()
            .any(|s| s == "Homotopy Group: π₁(S¹) = ℤ (winding number quantized)"));
    }

    #[test]
    fn test_michael_roles_rendered() {
        let t = texts(&blocks(Topic::Michael));
        assert!(t.contains(&"Psychopomp (Catholic/Orthodox)".to_string()));
        assert!(t.contains(&"Artistic Form: Holding scales weighing souls".to_string()));
    }

    #[test]
    fn test_divine_name_analysis() {
        let t = texts(&blocks(Topic::DivineName));
        assert!(t.contains(&"Transformed: yahweh leo leohim".to_string()));
        assert!(t.contains(&"Ego: leo (Mediating Function)".to_string()));
    }
}
