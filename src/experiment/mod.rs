// =============================================================================
// EXPERIMENT — Les vues interactives, sans fenêtre
// =============================================================================
//
// Chaque expérience est une petite MACHINE À ÉTATS pilotée au clavier :
//
//   touche ──handle──▶ nouvel état ──frame──▶ liste d'éléments à afficher
//
// Aucune fenêtre, aucune boucle de rendu : l'appelant fournit les touches
// (et l'instant t pour les animations) et récupère une Frame textuelle.
//
// Dans une même trame, plusieurs touches peuvent être pressées : seule la
// plus prioritaire est traitée (Escape > Space > Left / chiffres > Right).
//
// =============================================================================

pub mod divine_name;
pub mod push_pull;
pub mod warrior;
pub mod defects;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub use defects::DefectExperiment;
pub use divine_name::DivineNameExperiment;
pub use push_pull::PushPullExperiment;
pub use warrior::WarriorExperiment;

/// Une touche reconnue par les expériences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Left,
    Right,
    Escape,
    Digit(u8),
}

impl Key {
    /// Rang dans la chaîne de priorité (plus petit = traité d'abord)
    fn priority(&self) -> u8 {
        match self {
            Key::Escape => 0,
            Key::Space => 1,
            Key::Left | Key::Digit(_) => 2,
            Key::Right => 3,
        }
    }

    /// Découpe une liste "space,left right" en touches.
    pub fn parse_list(input: &str) -> Result<Vec<Key>> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "space" => Ok(Key::Space),
            "left" => Ok(Key::Left),
            "right" => Ok(Key::Right),
            "escape" | "esc" => Ok(Key::Escape),
            d if d.len() == 1 && d.as_bytes()[0].is_ascii_digit() && d != "0" => {
                Ok(Key::Digit(d.as_bytes()[0] - b'0'))
            }
            _ => Err(Error::UnknownKey(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Space => write!(f, "space"),
            Key::Left => write!(f, "left"),
            Key::Right => write!(f, "right"),
            Key::Escape => write!(f, "escape"),
            Key::Digit(d) => write!(f, "{}", d),
        }
    }
}

/// Ce que la boucle appelante doit faire après une touche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Un élément affiché, avec son opacité (0.0 à 1.0).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub text: String,
    pub opacity: f64,
}

impl Element {
    pub fn new(text: impl Into<String>) -> Self {
        Element {
            text: text.into(),
            opacity: 1.0,
        }
    }

    pub fn with_opacity(text: impl Into<String>, opacity: f64) -> Self {
        Element {
            text: text.into(),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    pub fn is_dimmed(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Une image de l'expérience : les éléments dans l'ordre de dessin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub elements: Vec<Element>,
}

impl Frame {
    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Vrai si un élément contient ce texte
    pub fn contains(&self, needle: &str) -> bool {
        self.elements.iter().any(|e| e.text.contains(needle))
    }

    /// L'élément qui contient ce texte, s'il existe
    pub fn find(&self, needle: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.text.contains(needle))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            for line in element.text.lines() {
                if element.is_dimmed() {
                    writeln!(f, "[{:.1}] {}", element.opacity, line)?;
                } else {
                    writeln!(f, "{}", line)?;
                }
            }
        }
        Ok(())
    }
}

/// Une expérience interactive.
///
/// PHILOSOPHIE : `handle` est la seule façon de changer l'état,
/// `frame` est pure.
pub trait Experiment {
    /// Identifiant court ("push-pull", ...)
    fn name(&self) -> &'static str;

    /// Titre affiché en haut de chaque image
    fn title(&self) -> &'static str;

    /// Ligne d'aide affichée en bas
    fn instruction(&self) -> &'static str;

    /// Les touches que l'expérience écoute
    fn accepts(&self, key: Key) -> bool;

    /// Applique une touche à l'état.
    fn handle(&mut self, key: Key) -> Control;

    /// Les éléments propres à la vue courante, à l'instant `time` (secondes).
    fn view(&self, time: f64) -> Vec<Element>;

    /// Image complète : titre, aide, puis la vue.
    fn frame(&self, time: f64) -> Frame {
        let mut frame = Frame::default();
        frame
            .push(Element::new(self.title()))
            .push(Element::new(self.instruction()));
        frame.elements.extend(self.view(time));
        frame
    }

    /// Traite les touches pressées pendant UNE trame : seule la plus
    /// prioritaire parmi celles écoutées est appliquée.
    fn step(&mut self, pressed: &[Key]) -> Control {
        let chosen = pressed
            .iter()
            .copied()
            .filter(|k| self.accepts(*k))
            .min_by_key(Key::priority);
        match chosen {
            Some(key) => {
                tracing::trace!(experiment = self.name(), %key, "key handled");
                self.handle(key)
            }
            None => Control::Continue,
        }
    }
}

/// Noms acceptés par `by_name`.
pub const EXPERIMENTS: [&str; 4] = ["divine-name", "push-pull", "warrior", "defects"];

/// Construit une expérience à partir de son nom.
pub fn by_name(name: &str) -> Result<Box<dyn Experiment>> {
    match name.trim().to_lowercase().replace('_', "-").as_str() {
        "divine-name" => Ok(Box::new(DivineNameExperiment::new())),
        "push-pull" | "pushforward-pullback" => Ok(Box::new(PushPullExperiment::new())),
        "warrior" => Ok(Box::new(WarriorExperiment::new())),
        "defects" => Ok(Box::new(DefectExperiment::new())),
        _ => Err(Error::UnknownExperiment(name.to_string())),
    }
}

/// Rejoue une suite de touches, une par trame, jusqu'à Escape.
///
/// Retourne le nombre de touches effectivement consommées.
pub fn replay(experiment: &mut dyn Experiment, keys: &[Key]) -> usize {
    for (i, key) in keys.iter().enumerate() {
        if experiment.step(std::slice::from_ref(key)) == Control::Exit {
            tracing::debug!(experiment = experiment.name(), consumed = i + 1, "exit requested");
            return i + 1;
        }
    }
    keys.len()
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(
            Key::parse_list("space, left right,esc 3").unwrap(),
            vec![Key::Space, Key::Left, Key::Right, Key::Escape, Key::Digit(3)]
        );
        assert!(Key::parse_list("").unwrap().is_empty());
        assert!(matches!(
            Key::parse_list("space,enter"),
            Err(Error::UnknownKey(ref k)) if k == "enter"
        ));
        assert!("0".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_display_round_trip() {
        for key in [Key::Space, Key::Left, Key::Right, Key::Escape, Key::Digit(4)] {
            assert_eq!(key.to_string().parse::<Key>().unwrap(), key);
        }
    }

    #[test]
    fn test_by_name() {
        for name in EXPERIMENTS {
            assert_eq!(by_name(name).unwrap().name(), name);
        }
        assert!(matches!(
            by_name("seraphim"),
            Err(Error::UnknownExperiment(_))
        ));
    }

    #[test]
    fn test_step_prefers_escape() {
        let mut exp = PushPullExperiment::new();
        assert_eq!(exp.step(&[Key::Left, Key::Escape, Key::Space]), Control::Exit);
    }

    #[test]
    fn test_step_ignores_unaccepted_keys() {
        let mut exp = DivineNameExperiment::new();
        let before = exp.frame(0.0);
        assert_eq!(exp.step(&[Key::Left, Key::Digit(2)]), Control::Continue);
        assert_eq!(exp.frame(0.0), before);
    }

    #[test]
    fn test_replay_stops_at_escape() {
        let mut exp = by_name("warrior").unwrap();
        let keys = [Key::Space, Key::Escape, Key::Left];
        assert_eq!(replay(exp.as_mut(), &keys), 2);
    }

    #[test]
    fn test_frame_display_marks_dimmed() {
        let mut frame = Frame::default();
        frame
            .push(Element::new("bright"))
            .push(Element::with_opacity("faint", 0.3));
        assert_eq!(frame.to_string(), "bright\n[0.3] faint\n");
    }
}
