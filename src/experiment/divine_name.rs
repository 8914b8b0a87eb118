// =============================================================================
// DIVINE NAME — Bascule forme originale / forme transformée
// =============================================================================
//
//   Space  → bascule entre "yawhel elo elohim" et "yahweh leo leohim"
//   Escape → sortie
//
// L'analyse Surmoi / Moi / Ça n'apparaît qu'avec la forme transformée.
//
// =============================================================================

use super::{Control, Element, Experiment, Key};
use crate::content::divine_name::{analysis, analysis_label, name_transformation, ORIGINAL_FORM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivineNameExperiment {
    showing_original: bool,
}

impl DivineNameExperiment {
    pub fn new() -> Self {
        DivineNameExperiment {
            showing_original: true,
        }
    }

    pub fn showing_original(&self) -> bool {
        self.showing_original
    }
}

impl Default for DivineNameExperiment {
    fn default() -> Self {
        Self::new()
    }
}

impl Experiment for DivineNameExperiment {
    fn name(&self) -> &'static str {
        "divine-name"
    }

    fn title(&self) -> &'static str {
        "Divine Name Transformation\nId-Ego-Superego Framework"
    }

    fn instruction(&self) -> &'static str {
        "Press SPACE to see transformation, ESC to exit"
    }

    fn accepts(&self, key: Key) -> bool {
        matches!(key, Key::Space | Key::Escape)
    }

    fn handle(&mut self, key: Key) -> Control {
        match key {
            Key::Escape => Control::Exit,
            Key::Space => {
                self.showing_original = !self.showing_original;
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    fn view(&self, _time: f64) -> Vec<Element> {
        if self.showing_original {
            return vec![Element::new(ORIGINAL_FORM)];
        }
        let mut elements = vec![Element::new(name_transformation().apply(ORIGINAL_FORM))];
        elements.extend(
            analysis()
                .into_iter()
                .map(|(layer, term, function)| Element::new(analysis_label(layer, term, function))),
        );
        elements
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::divine_name::TRANSFORMED_FORM;

    #[test]
    fn test_starts_on_original() {
        let exp = DivineNameExperiment::new();
        let frame = exp.frame(0.0);
        assert!(frame.contains(ORIGINAL_FORM));
        // le titre mentionne déjà "Superego" : on cherche les libellés d'analyse
        assert!(!frame.contains("Superego: "));
        assert_eq!(exp.view(0.0), vec![Element::new(ORIGINAL_FORM)]);
    }

    #[test]
    fn test_space_toggles() {
        let mut exp = DivineNameExperiment::new();
        assert_eq!(exp.handle(Key::Space), Control::Continue);
        let frame = exp.frame(0.0);
        assert!(frame.contains(TRANSFORMED_FORM));
        assert!(frame.contains("Superego: yahweh (Divine Authority)"));
        assert!(frame.contains("Id: leohim (Primal Forces)"));

        exp.handle(Key::Space);
        assert!(exp.showing_original());
    }

    #[test]
    fn test_escape_exits() {
        let mut exp = DivineNameExperiment::new();
        assert_eq!(exp.handle(Key::Escape), Control::Exit);
    }
}
