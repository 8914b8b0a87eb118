// =============================================================================
// RENDER — Traduction des registres en texte affichable
// =============================================================================
//
// Deux étapes, comme un petit compilateur :
//
//   Topic ──topics::blocks──▶ Vec<Block> ──Renderer──▶ String
//
// Les blocs ne connaissent pas le format final. Grâce au trait Renderer,
// le même document s'affiche :
//   - en texte brut (PlainRenderer), comme les démonstrations console
//   - en Markdown (MarkdownRenderer)
//
// Le contenu (module content) ne connaît JAMAIS les renderers.
//
// Largeur des séparateurs : celle de la démonstration (Topic::rule_width),
// sauf si la configuration en impose une. Avec ascii_only, la sortie finale
// passe par to_ascii.
//
// =============================================================================

pub mod topics;
pub mod plain;
pub mod markdown;

use std::str::FromStr;

use crate::config::RenderConfig;
use crate::content::catalog::Topic;

pub use markdown::MarkdownRenderer;
pub use plain::PlainRenderer;

/// Un bloc de document, indépendant du format de sortie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Grand titre encadré
    Banner(String),
    /// Titre de section souligné
    Section(String),
    /// Texte littéral multi-lignes, restitué tel quel
    Text(String),
    /// Une ligne, éventuellement indentée
    Line { indent: usize, text: String },
    /// Un élément de liste à puce
    Bullet { indent: usize, text: String },
    /// Ligne vide
    Blank,
    /// Séparateur de fin
    Rule,
}

impl Block {
    pub fn line(text: impl Into<String>) -> Self {
        Block::Line { indent: 0, text: text.into() }
    }

    pub fn indented(indent: usize, text: impl Into<String>) -> Self {
        Block::Line { indent, text: text.into() }
    }

    pub fn bullet(indent: usize, text: impl Into<String>) -> Self {
        Block::Bullet { indent, text: text.into() }
    }
}

/// Largeur des séparateurs hors démonstration.
pub const DEFAULT_WIDTH: usize = 80;

/// Trait commun à tous les formats de sortie.
pub trait Renderer {
    /// Produit le texte final d'une suite de blocs, séparateurs de `width`
    /// colonnes si la configuration n'impose pas la sienne.
    fn render_width(&self, blocks: &[Block], width: usize) -> String;

    fn render(&self, blocks: &[Block]) -> String {
        self.render_width(blocks, DEFAULT_WIDTH)
    }

    /// Nom du format
    fn name(&self) -> &str;
}

/// Format de sortie choisi par l'utilisateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Plain,
    Markdown,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Format::Plain),
            "markdown" | "md" => Ok(Format::Markdown),
            other => Err(format!("unknown format '{}' (expected plain or markdown)", other)),
        }
    }
}

/// Construit le renderer d'un format.
pub fn renderer(format: Format, config: &RenderConfig) -> Box<dyn Renderer> {
    match format {
        Format::Plain => Box::new(PlainRenderer::new(config.clone())),
        Format::Markdown => Box::new(MarkdownRenderer::new(config.clone())),
    }
}

/// Raccourci : rend une démonstration complète.
pub fn render_topic(topic: Topic, renderer: &dyn Renderer) -> String {
    let blocks = topics::blocks(topic);
    tracing::debug!(%topic, renderer = renderer.name(), blocks = blocks.len(), "rendering topic");
    renderer.render_width(&blocks, topic.rule_width())
}

/// Ramène un texte à l'ASCII : les symboles connus sont translittérés,
/// les autres deviennent `?`.
pub fn to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        let folded = match c {
            '•' => "*",
            '→' => "->",
            '←' => "<-",
            '↑' => "^",
            '↓' => "v",
            '↗' | '↙' => "/",
            '↖' | '↘' => "\\",
            '─' | '━' => "-",
            '│' | '┃' => "|",
            '┌' | '┐' | '└' | '┘' | '┬' | '┴' | '┼' | '├' | '┤' => "+",
            '═' => "=",
            'π' => "pi",
            'ℤ' => "Z",
            'Σ' => "Sigma",
            'Δ' => "Delta",
            '∘' => "o",
            '↦' => "|->",
            '₀' | '⁰' => "0",
            '₁' | '¹' => "1",
            '₂' | '²' => "2",
            '₃' | '³' => "3",
            '–' | '—' => "-",
            '\u{2018}' | '\u{2019}' => "'",
            '\u{201C}' | '\u{201D}' => "\"",
            '…' => "...",
            '×' => "x",
            '░' => ".",
            '▒' => ":",
            '▓' => "#",
            '█' => "@",
            _ => "?",
        };
        out.push_str(folded);
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("plain".parse::<Format>().unwrap(), Format::Plain);
        assert_eq!("MD".parse::<Format>().unwrap(), Format::Markdown);
        assert!("html".parse::<Format>().is_err());
    }

    #[test]
    fn test_render_topic_is_deterministic() {
        let r = renderer(Format::Plain, &RenderConfig::default());
        for topic in Topic::ALL {
            let a = render_topic(topic, r.as_ref());
            assert!(!a.is_empty());
            assert_eq!(a, render_topic(topic, r.as_ref()));
        }
    }

    #[test]
    fn test_renderer_names() {
        let config = RenderConfig::default();
        assert_eq!(renderer(Format::Plain, &config).name(), "plain");
        assert_eq!(renderer(Format::Markdown, &config).name(), "markdown");
    }

    #[test]
    fn test_to_ascii() {
        assert_eq!(to_ascii("π₂(S²) = ℤ"), "pi2(S2) = Z");
        assert_eq!(to_ascii("wisdom → future"), "wisdom -> future");
        assert_eq!(to_ascii("二郎神 Erlang"), "??? Erlang");
        assert_eq!(to_ascii("plain"), "plain");
    }

    #[test]
    fn test_ascii_only_covers_every_topic() {
        let config = RenderConfig {
            ascii_only: true,
            ..RenderConfig::default()
        };
        for format in [Format::Plain, Format::Markdown] {
            let r = renderer(format, &config);
            for topic in Topic::ALL {
                let out = render_topic(topic, r.as_ref());
                assert!(out.is_ascii(), "{} / {}", topic, r.name());
            }
        }
    }

    #[test]
    fn test_rule_width_follows_topic() {
        let r = renderer(Format::Plain, &RenderConfig::default());
        let categorical = render_topic(Topic::Categorical, r.as_ref());
        assert!(categorical.starts_with(&format!("{}\n", "=".repeat(70))));
        let defects = render_topic(Topic::Defects, r.as_ref());
        assert!(defects.starts_with(&format!("{}\n", "=".repeat(80))));

        let fixed = renderer(
            Format::Plain,
            &RenderConfig {
                width: Some(50),
                ..RenderConfig::default()
            },
        );
        let out = render_topic(Topic::Categorical, fixed.as_ref());
        assert!(out.starts_with(&format!("{}\n", "=".repeat(50))));
    }
}
