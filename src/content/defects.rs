// =============================================================================
// DEFECTS — Défauts topologiques et brisures de symétrie théologiques
// =============================================================================
//
// En physique, un défaut topologique apparaît quand une symétrie est brisée
// et que différentes régions tombent dans différents états fondamentaux.
// Il est STABLE : aucune déformation continue ne peut le faire disparaître.
//
// Classification par dimension (dans un espace 3D) :
//
//   dim │ défaut         │ homotopie   │ analogie théologique
//   ────┼────────────────┼─────────────┼──────────────────────────────
//    0  │ Monopole       │ π₂(S²) = ℤ  │ l'Incarnation
//    1  │ Vortex/Corde   │ π₁(S¹) = ℤ  │ la lignée prophétique
//    2  │ Mur de domaine │ π₀          │ les frontières confessionnelles
//    3  │ Texture        │ π₃(S³) = ℤ  │ l'espace d'interprétation doctrinale
//
// =============================================================================

use std::fmt;

/// Dimension d'un défaut topologique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DefectDimension {
    /// Monopole (défaut 0D)
    Point = 0,
    /// Vortex / corde (défaut 1D)
    Line = 1,
    /// Mur de domaine (défaut 2D)
    Surface = 2,
    /// Texture (défaut 3D)
    Volume = 3,
}

impl DefectDimension {
    /// La dimension numérique (0 à 3)
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Nom en majuscules ("POINT", "LINE"...)
    pub fn label(&self) -> &'static str {
        match self {
            DefectDimension::Point => "POINT",
            DefectDimension::Line => "LINE",
            DefectDimension::Surface => "SURFACE",
            DefectDimension::Volume => "VOLUME",
        }
    }
}

/// La symétrie théologique brisée par un défaut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetryBreaking {
    DivineUnity,
    TemporalContinuity,
    Denominational,
    Doctrinal,
}

impl SymmetryBreaking {
    pub fn description(&self) -> &'static str {
        match self {
            SymmetryBreaking::DivineUnity => "Breaking of absolute divine unity",
            SymmetryBreaking::TemporalContinuity => "Breaking of eternal present",
            SymmetryBreaking::Denominational => "Breaking of universal church",
            SymmetryBreaking::Doctrinal => "Breaking of unified interpretation",
        }
    }
}

/// Un défaut topologique avec son interprétation théologique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalDefect {
    pub name: String,
    pub dimension: DefectDimension,
    pub symmetry_broken: SymmetryBreaking,
    pub theological_concept: String,
    pub properties: Vec<String>,
    pub stability: String,
}

impl TopologicalDefect {
    fn new(
        name: &str,
        dimension: DefectDimension,
        symmetry_broken: SymmetryBreaking,
        theological_concept: &str,
        properties: &[&str],
        stability: &str,
    ) -> Self {
        TopologicalDefect {
            name: name.to_string(),
            dimension,
            symmetry_broken,
            theological_concept: theological_concept.to_string(),
            properties: properties.iter().map(|p| p.to_string()).collect(),
            stability: stability.to_string(),
        }
    }
}

impl fmt::Display for TopologicalDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.name,
            self.dimension.label(),
            self.theological_concept
        )
    }
}

/// Monopole (0D) : l'Incarnation, l'infini concentré en un point.
pub fn monopole() -> TopologicalDefect {
    TopologicalDefect::new(
        "Monopole",
        DefectDimension::Point,
        SymmetryBreaking::DivineUnity,
        "The Incarnation",
        &[
            "Point-like manifestation of the infinite",
            "Breaks transcendence-immanence symmetry",
            "Stable singularity in spacetime",
            "Divine concentrated at a point",
            "Cannot be removed by continuous transformation",
        ],
        "Topologically protected - stable configuration",
    )
}

/// Vortex (1D) : la lignée prophétique à travers l'histoire.
pub fn vortex() -> TopologicalDefect {
    TopologicalDefect::new(
        "Vortex/String",
        DefectDimension::Line,
        SymmetryBreaking::TemporalContinuity,
        "Prophetic Lineage",
        &[
            "One-dimensional line through time",
            "Spiritual circulation around axis",
            "Connects past and future",
            "Winding number represents tradition depth",
            "Cannot be unwound continuously",
        ],
        "Protected by winding number (homotopy group)",
    )
}

/// Mur de domaine (2D) : la frontière entre confessions.
pub fn domain_wall() -> TopologicalDefect {
    TopologicalDefect::new(
        "Domain Wall",
        DefectDimension::Surface,
        SymmetryBreaking::Denominational,
        "Denominational Boundaries",
        &[
            "Surface separating different traditions",
            "Marks theological phase transition",
            "Energy barrier to cross denominations",
            "Can merge or annihilate with antiwall",
            "Represents historical schisms",
        ],
        "Semi-stable - can evolve or annihilate",
    )
}

/// Texture (3D) : le paysage herméneutique.
pub fn texture() -> TopologicalDefect {
    TopologicalDefect::new(
        "Texture",
        DefectDimension::Volume,
        SymmetryBreaking::Doctrinal,
        "Doctrinal Interpretation Space",
        &[
            "Volume-filling configuration",
            "Gradual variation across space",
            "Represents hermeneutical complexity",
            "No sharp boundaries",
            "Maps out interpretation landscape",
        ],
        "Metastable - can decay to vacuum",
    )
}

/// Les quatre défauts, par dimension croissante.
pub fn all_defects() -> Vec<TopologicalDefect> {
    vec![monopole(), vortex(), domain_wall(), texture()]
}

/// Le groupe d'homotopie qui classe ce défaut.
///
/// Total sur l'énumération fermée : plus de cas "Unknown".
pub fn homotopy_group(defect: &TopologicalDefect) -> &'static str {
    match defect.dimension {
        DefectDimension::Point => "π₂(S²) = ℤ (monopole charge quantized)",
        DefectDimension::Line => "π₁(S¹) = ℤ (winding number quantized)",
        DefectDimension::Surface => "π₀(discrete) (distinguishes phases)",
        DefectDimension::Volume => "π₃(S³) = ℤ (texture can be classified)",
    }
}

pub fn explain_framework() -> &'static str {
    "\
TOPOLOGICAL DEFECTS IN THEOLOGICAL FRAMEWORK

In physics, topological defects arise when a system undergoes symmetry
breaking and settles into different ground states in different regions.
These defects are stable because they cannot be removed by continuous
transformations - they are \"protected\" by topology.

THEOLOGICAL ANALOGY:
==================

The breaking of divine symmetries creates stable theological structures
that persist through history. Just as physical defects are classified by
their dimensionality, theological defects can be understood as:

1. MONOPOLE (0D) - The Incarnation
   • Divine infinity concentrated at a spacetime point
   • Breaks the symmetry of pure transcendence
   • Topologically stable - cannot be continuously removed

2. VORTEX/STRING (1D) - Prophetic Lineage
   • One-dimensional line through history
   • Spiritual circulation around the prophetic axis
   • Protected by \"winding number\" of tradition

3. DOMAIN WALL (2D) - Denominational Boundaries
   • Surface separating different theological phases
   • Energy cost to crossing traditions
   • Can merge (ecumenism) or persist (schism)

4. TEXTURE (3D) - Doctrinal Interpretation Space
   • Volume-filling configuration of meanings
   • Gradual variation in understanding
   • Maps the hermeneutical landscape

SYMMETRY BREAKING:
==================

Each defect corresponds to breaking a different theological symmetry:

• Divine Unity → Incarnation (monopole)
• Eternal Present → Historical Revelation (vortex)
• Universal Church → Denominations (domain wall)
• Unified Interpretation → Pluralistic Theology (texture)

TOPOLOGICAL STABILITY:
=====================

These structures persist not by force but by topology. They cannot be
removed by gradual change - only by radical discontinuity. This explains
why theological structures are so persistent across history.

Just as physical defects store energy and information about symmetry
breaking, theological defects preserve the memory of how the infinite
breaks into the finite, the eternal into the temporal, and the one
into the many."
}

/// La cascade de brisures de symétrie, ligne par ligne.
pub fn symmetry_breaking_cascade() -> Vec<&'static str> {
    vec![
        "Divine Perfection (Perfect Symmetry)",
        "           ↓",
        "     [Symmetry Breaking]",
        "           ↓",
        "  ┌────────┴────────┐",
        "  ↓                 ↓",
        "Monopole         Vortex",
        "(Incarnation)    (Lineage)",
        "  ↓                 ↓",
        "  └────────┬────────┘",
        "           ↓",
        "    Domain Walls",
        "   (Denominations)",
        "           ↓",
        "      Textures",
        "  (Interpretations)",
    ]
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_defects_ordered_by_dimension() {
        let defects = all_defects();
        assert_eq!(defects.len(), 4);
        let dims: Vec<u8> = defects.iter().map(|d| d.dimension.value()).collect();
        assert_eq!(dims, vec![0, 1, 2, 3]);
        assert_eq!(defects, all_defects());
    }

    #[test]
    fn test_each_defect_breaks_a_distinct_symmetry() {
        let broken: HashSet<_> = all_defects().iter().map(|d| d.symmetry_broken).collect();
        assert_eq!(broken.len(), 4);
    }

    #[test]
    fn test_homotopy_groups() {
        assert!(homotopy_group(&monopole()).starts_with("π₂"));
        assert!(homotopy_group(&vortex()).starts_with("π₁"));
        assert!(homotopy_group(&domain_wall()).starts_with("π₀"));
        assert!(homotopy_group(&texture()).starts_with("π₃"));
    }

    #[test]
    fn test_display() {
        assert_eq!(monopole().to_string(), "Monopole (POINT): The Incarnation");
        assert_eq!(
            domain_wall().to_string(),
            "Domain Wall (SURFACE): Denominational Boundaries"
        );
    }

    #[test]
    fn test_framework_texts() {
        assert!(explain_framework().contains("TOPOLOGICAL STABILITY"));
        assert_eq!(symmetry_breaking_cascade().len(), 16);
        assert_eq!(
            SymmetryBreaking::Doctrinal.description(),
            "Breaking of unified interpretation"
        );
    }
}
