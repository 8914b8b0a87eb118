// =============================================================================
// PUSH-PULL — Pushforward (Maitreya) à gauche, Pullback (Messie) à droite
// =============================================================================
//
//   Space  → bascule vue principale / vue détaillée
//   Left   → focus gauche ; Left à nouveau → les deux côtés
//   Right  → focus droit  ; Right à nouveau → les deux côtés
//   Escape → sortie
//
// Les flèches pulsent en opposition de phase :
//   p(t)        = (sin 2t + 1) / 2
//   forward(t)  = 0.5 + 0.5·p(t)
//   backward(t) = 0.5 + 0.5·(1 − p(t))
//
// =============================================================================

use super::{Control, Element, Experiment, Key};
use crate::core::direction::{Backward, Direction, Forward};

/// Côté(s) mis en avant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSide {
    Both,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPullExperiment {
    showing_detailed: bool,
    focus: FocusSide,
}

/// Oscillation entre 0 et 1.
pub fn pulse(time: f64) -> f64 {
    ((time * 2.0).sin() + 1.0) / 2.0
}

const DETAILED_VIEW: &str = "\
TEMPORAL MEDIATION

Maitreya (Pushforward):
Current practice → Future enlightenment
Covariant with time's arrow

Messiah (Pullback):
Current redemption ← Ancient promise
Contravariant validation

Together: Complete eschatological framework";

impl PushPullExperiment {
    pub fn new() -> Self {
        PushPullExperiment {
            showing_detailed: false,
            focus: FocusSide::Both,
        }
    }

    pub fn focus(&self) -> FocusSide {
        self.focus
    }

    pub fn showing_detailed(&self) -> bool {
        self.showing_detailed
    }

    fn arrow<D: Direction>() -> String {
        [D::ARROW; 3].join(" ")
    }

    fn pushforward_side(&self, p: f64) -> Vec<Element> {
        let mut side = vec![
            Element::new("PUSHFORWARD (Covariant)"),
            Element::new("Maitreya"),
            Element::new("Future Buddha\nPresent → Future\nForward projection"),
            Element::with_opacity(Self::arrow::<Forward>(), 0.5 + 0.5 * p),
            Element::new(
                "• Covariant functor\n• Preserves direction\n• Hope for future\n• Dharma teaching ahead",
            ),
        ];
        if self.focus == FocusSide::Left {
            side.push(Element::new("( focus: pushforward )"));
        }
        side
    }

    fn pullback_side(&self, p: f64) -> Vec<Element> {
        let mut side = vec![
            Element::new("PULLBACK (Contravariant)"),
            Element::new("Messiah"),
            Element::new("Prophetic Fulfillment\nFuture ← Past\nBackward reference"),
            Element::with_opacity(Self::arrow::<Backward>(), 0.5 + 0.5 * (1.0 - p)),
            Element::new(
                "• Contravariant functor\n• Reverses direction\n• Ancient covenant\n• Prophecy fulfilled",
            ),
        ];
        if self.focus == FocusSide::Right {
            side.push(Element::new("( focus: pullback )"));
        }
        side
    }
}

impl Default for PushPullExperiment {
    fn default() -> Self {
        Self::new()
    }
}

impl Experiment for PushPullExperiment {
    fn name(&self) -> &'static str {
        "push-pull"
    }

    fn title(&self) -> &'static str {
        "Categorical Theology\nPushforward ↔ Pullback :: Maitreya ↔ Messiah"
    }

    fn instruction(&self) -> &'static str {
        "Press SPACE to toggle views | LEFT/RIGHT arrows to switch focus | ESC to exit"
    }

    fn accepts(&self, key: Key) -> bool {
        matches!(key, Key::Space | Key::Escape | Key::Left | Key::Right)
    }

    fn handle(&mut self, key: Key) -> Control {
        match key {
            Key::Escape => return Control::Exit,
            Key::Space => self.showing_detailed = !self.showing_detailed,
            Key::Left => {
                self.focus = if self.focus != FocusSide::Left {
                    FocusSide::Left
                } else {
                    FocusSide::Both
                }
            }
            Key::Right => {
                self.focus = if self.focus != FocusSide::Right {
                    FocusSide::Right
                } else {
                    FocusSide::Both
                }
            }
            Key::Digit(_) => {}
        }
        Control::Continue
    }

    fn view(&self, time: f64) -> Vec<Element> {
        if self.showing_detailed {
            return vec![Element::new(DETAILED_VIEW)];
        }

        let p = pulse(time);
        let mut elements = Vec::new();
        if matches!(self.focus, FocusSide::Left | FocusSide::Both) {
            elements.extend(self.pushforward_side(p));
        }
        if matches!(self.focus, FocusSide::Right | FocusSide::Both) {
            elements.extend(self.pullback_side(p));
        }
        if self.focus == FocusSide::Both {
            elements.push(Element::new("↔ CATEGORICAL DUALITY ↔"));
        }
        elements
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_shows_both_sides() {
        let frame = PushPullExperiment::new().frame(0.0);
        assert!(frame.contains("PUSHFORWARD"));
        assert!(frame.contains("PULLBACK"));
        assert!(frame.contains("CATEGORICAL DUALITY"));
        assert!(!frame.contains("focus:"));
    }

    #[test]
    fn test_focus_toggles_back_to_both() {
        let mut exp = PushPullExperiment::new();
        exp.handle(Key::Left);
        assert_eq!(exp.focus(), FocusSide::Left);
        let frame = exp.frame(0.0);
        assert!(frame.contains("PUSHFORWARD"));
        assert!(!frame.contains("PULLBACK"));
        assert!(!frame.contains("CATEGORICAL DUALITY"));
        assert!(frame.contains("( focus: pushforward )"));

        exp.handle(Key::Left);
        assert_eq!(exp.focus(), FocusSide::Both);

        exp.handle(Key::Left);
        exp.handle(Key::Right);
        assert_eq!(exp.focus(), FocusSide::Right);
        assert!(exp.frame(0.0).contains("( focus: pullback )"));
    }

    #[test]
    fn test_detailed_view_replaces_main_view() {
        let mut exp = PushPullExperiment::new();
        exp.handle(Key::Space);
        assert!(exp.showing_detailed());
        let frame = exp.frame(0.0);
        assert!(frame.contains("TEMPORAL MEDIATION"));
        assert!(!frame.contains("PUSHFORWARD"));
    }

    #[test]
    fn test_arrows_pulse_in_opposition() {
        let exp = PushPullExperiment::new();
        for t in [0.0, 0.4, 1.3, 2.7] {
            let frame = exp.frame(t);
            let fwd = frame.find("→ → →").unwrap().opacity;
            let bwd = frame.find("← ← ←").unwrap().opacity;
            assert!((fwd + bwd - 1.5).abs() < 1e-9);
        }
        assert!((pulse(0.0) - 0.5).abs() < 1e-12);
    }
}
