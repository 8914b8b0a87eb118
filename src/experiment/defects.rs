// =============================================================================
// DEFECTS — Parcours des quatre défauts topologiques
// =============================================================================
//
//   Space  → vue d'ensemble
//   1..4   → monopole, vortex, mur de domaine, texture
//   Escape → sortie
//
// Chaque vue est construite à partir du registre content::defects, plus une
// petite figure (anneaux, circulation, deux phases, gradient). Les trois
// premières pulsent avec le temps t fourni par l'appelant.
//
// =============================================================================

use std::f64::consts::PI;

use super::push_pull::pulse;
use super::{Control, Element, Experiment, Key};
use crate::content::defects::{self as registry, DefectDimension, TopologicalDefect};

const OVERVIEW: &str = "\
TOPOLOGICAL DEFECTS: Stable structures from symmetry breaking

1 - MONOPOLE (0D): The Incarnation
     Point singularity where infinite meets finite

2 - VORTEX (1D): Prophetic Lineage
     Linear axis through time with spiritual circulation

3 - DOMAIN WALL (2D): Denominational Boundaries
     Surface separating theological phases

4 - TEXTURE (3D): Doctrinal Interpretation
     Volume-filling hermeneutical landscape";

/// La vue courante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectView {
    Overview,
    Defect(DefectDimension),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectExperiment {
    view: DefectView,
}

impl DefectExperiment {
    pub fn new() -> Self {
        DefectExperiment {
            view: DefectView::Overview,
        }
    }

    pub fn current_view(&self) -> DefectView {
        self.view
    }

    fn defect_for(dimension: DefectDimension) -> TopologicalDefect {
        match dimension {
            DefectDimension::Point => registry::monopole(),
            DefectDimension::Line => registry::vortex(),
            DefectDimension::Surface => registry::domain_wall(),
            DefectDimension::Volume => registry::texture(),
        }
    }

    fn kind(dimension: DefectDimension) -> &'static str {
        match dimension {
            DefectDimension::Point => "Point",
            DefectDimension::Line => "Line",
            DefectDimension::Surface => "Surface",
            DefectDimension::Volume => "Volume",
        }
    }

    fn describe(defect: &TopologicalDefect) -> String {
        let mut desc = format!(
            "Symmetry Broken: {}\nHomotopy: {}\n",
            defect.symmetry_broken.description(),
            registry::homotopy_group(defect)
        );
        for prop in &defect.properties {
            desc.push_str(&format!("\n• {}", prop));
        }
        desc
    }
}

impl Default for DefectExperiment {
    fn default() -> Self {
        Self::new()
    }
}

/// Intensité du gradient de texture sur une grille 7×7 (i, j ∈ [-3, 3]).
pub fn texture_intensity(i: i32, j: i32) -> f64 {
    let (x, y) = (i as f64 / 3.0, j as f64 / 3.0);
    0.3 + 0.7 * (1.0 - (x * x + y * y).sqrt() / 2f64.sqrt())
}

/// Opacité de l'anneau `i` du monopole (0 = le plus proche du centre).
pub fn ring_opacity(i: usize, time: f64) -> f64 {
    (1.0 - i as f64 * 0.2) * (0.5 + 0.5 * pulse(time))
}

/// Opacité de la flèche `i` du vortex : une onde qui tourne autour de l'axe.
/// Peut être négative, l'Element la ramène à 0.
pub fn arrow_opacity(i: usize, time: f64) -> f64 {
    0.3 + 0.7 * (time * 2.0 + i as f64 * PI / 4.0).sin()
}

/// Opacité du mur de domaine.
pub fn wall_opacity(time: f64) -> f64 {
    0.5 + 0.5 * pulse(time)
}

/// Une flèche tous les 45°, dans le sens de la circulation.
const VORTEX_ARROWS: [&str; 8] = ["→", "↗", "↑", "↖", "←", "↙", "↓", "↘"];

const RINGS: usize = 4;

fn texture_grid() -> String {
    const SHADES: [char; 4] = ['░', '▒', '▓', '█'];
    (-3..=3)
        .rev()
        .map(|j| {
            (-3..=3)
                .map(|i| {
                    let level = ((texture_intensity(i, j) - 0.3) / 0.7 * 3.0).round();
                    SHADES[level.clamp(0.0, 3.0) as usize]
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// La figure d'un défaut à l'instant `time`.
///
/// Monopole, vortex et mur pulsent ; la texture est statique.
fn figure(dimension: DefectDimension, time: f64) -> Vec<Element> {
    match dimension {
        DefectDimension::Point => {
            let mut elements = vec![Element::new("•")];
            elements.extend((0..RINGS).map(|i| {
                let ring = format!("({})", " ".repeat(2 * i + 1));
                Element::with_opacity(ring, ring_opacity(i, time))
            }));
            elements
        }
        DefectDimension::Line => {
            let mut elements = vec![Element::new("│")];
            elements.extend(VORTEX_ARROWS.iter().enumerate().map(|(i, arrow)| {
                Element::with_opacity(*arrow, arrow_opacity(i, time))
            }));
            elements
        }
        DefectDimension::Surface => vec![
            Element::new("Phase A"),
            Element::with_opacity("┃", wall_opacity(time)),
            Element::new("Phase B"),
        ],
        DefectDimension::Volume => vec![Element::new(texture_grid())],
    }
}

impl Experiment for DefectExperiment {
    fn name(&self) -> &'static str {
        "defects"
    }

    fn title(&self) -> &'static str {
        "Topological Defects in Theological Framework\nSymmetry Breaking and Divine Structures"
    }

    fn instruction(&self) -> &'static str {
        "Press 1-4 for defect types | SPACE for overview | ESC to exit"
    }

    fn accepts(&self, key: Key) -> bool {
        matches!(key, Key::Space | Key::Escape | Key::Digit(1..=4))
    }

    fn handle(&mut self, key: Key) -> Control {
        self.view = match key {
            Key::Escape => return Control::Exit,
            Key::Space => DefectView::Overview,
            Key::Digit(1) => DefectView::Defect(DefectDimension::Point),
            Key::Digit(2) => DefectView::Defect(DefectDimension::Line),
            Key::Digit(3) => DefectView::Defect(DefectDimension::Surface),
            Key::Digit(4) => DefectView::Defect(DefectDimension::Volume),
            _ => self.view,
        };
        Control::Continue
    }

    fn view(&self, time: f64) -> Vec<Element> {
        let dimension = match self.view {
            DefectView::Overview => return vec![Element::new(OVERVIEW)],
            DefectView::Defect(d) => d,
        };
        let defect = Self::defect_for(dimension);
        let mut elements = vec![
            Element::new(format!(
                "{} ({}D {} Defect)",
                defect.name.to_uppercase(),
                dimension.value(),
                Self::kind(dimension)
            )),
            Element::new(defect.theological_concept.clone()),
            Element::new(Self::describe(&defect)),
        ];
        elements.extend(figure(dimension, time));
        elements
    }
}
