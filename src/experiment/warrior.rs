// =============================================================================
// WARRIOR — 二郎神 (Erlang Shen) ↔ Archange Michel, foncteur identité
// =============================================================================
//
//   Space  → affiche / masque l'explication détaillée
//   Left   → focus sur Erlang Shen (Michel atténué à 0.3) ; à nouveau → aucun
//   Right  → focus sur Michel (Erlang Shen atténué à 0.3) ; à nouveau → aucun
//   Escape → sortie
//
// Contrairement à push-pull, les deux côtés restent TOUJOURS dessinés :
// le focus ne joue que sur l'opacité.
//
// =============================================================================

use super::{Control, Element, Experiment, Key};
use crate::content::categorical;

/// Opacité du côté qui n'a pas le focus
pub const DIMMED: f64 = 0.3;

const ERLANG_PROPS: [&str; 5] = [
    "Three-eyed warrior god",
    "Defeats demons",
    "Controls floods",
    "Celestial hound companion",
    "Maintains cosmic order",
];

const MICHAEL_PROPS: [&str; 5] = [
    "Chief of heavenly armies",
    "Defeats Satan and demons",
    "Warrior angel protector",
    "Defender of divine order",
    "Guardian of the faithful",
];

const DETAILED_EXPLANATION: &str = "\
Categorical Correspondence:

1. Warrior Archetype: Both are divine warriors
2. Protective Function: Both defend against evil
3. Active Intervention: Both engage in cosmic battles
4. Maintaining Order: Both uphold divine/cosmic law

The identity functor preserves essential properties
across different cultural contexts.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ErlangShen,
    Michael,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarriorExperiment {
    showing_details: bool,
    focus: Option<Focus>,
}

impl WarriorExperiment {
    pub fn new() -> Self {
        WarriorExperiment {
            showing_details: false,
            focus: None,
        }
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// (opacité gauche, opacité droite)
    pub fn opacities(&self) -> (f64, f64) {
        match self.focus {
            None => (1.0, 1.0),
            Some(Focus::ErlangShen) => (1.0, DIMMED),
            Some(Focus::Michael) => (DIMMED, 1.0),
        }
    }

    fn toggle(&mut self, side: Focus) {
        self.focus = if self.focus != Some(side) { Some(side) } else { None };
    }

    fn side(name: &str, tradition: &str, props: &[&str], opacity: f64) -> Vec<Element> {
        let mut side = vec![
            Element::with_opacity(name, opacity),
            Element::with_opacity(tradition, opacity),
        ];
        side.extend(
            props
                .iter()
                .map(|p| Element::with_opacity(format!("• {}", p), opacity)),
        );
        side
    }
}

impl Default for WarriorExperiment {
    fn default() -> Self {
        Self::new()
    }
}

impl Experiment for WarriorExperiment {
    fn name(&self) -> &'static str {
        "warrior"
    }

    fn title(&self) -> &'static str {
        "Warrior Deity Correspondence\n二郎神 ↔ Archangel Michael\nIdentity Functor"
    }

    fn instruction(&self) -> &'static str {
        "Press SPACE for detailed view | LEFT/RIGHT to focus | ESC to exit"
    }

    fn accepts(&self, key: Key) -> bool {
        matches!(key, Key::Space | Key::Escape | Key::Left | Key::Right)
    }

    fn handle(&mut self, key: Key) -> Control {
        match key {
            Key::Escape => return Control::Exit,
            Key::Space => self.showing_details = !self.showing_details,
            Key::Left => self.toggle(Focus::ErlangShen),
            Key::Right => self.toggle(Focus::Michael),
            Key::Digit(_) => {}
        }
        Control::Continue
    }

    fn view(&self, _time: f64) -> Vec<Element> {
        let (shen, michael) = categorical::warrior_correspondence();
        let (left, right) = self.opacities();

        let mut elements = Self::side(&shen.name, &shen.tradition, &ERLANG_PROPS, left);
        elements.extend(Self::side(&michael.name, &michael.tradition, &MICHAEL_PROPS, right));
        elements.push(Element::new("↔"));
        elements.push(Element::new("Identity Functor\n(Structure Preservation)"));
        if self.showing_details {
            elements.push(Element::new(DETAILED_EXPLANATION));
        }
        elements
    }
}
