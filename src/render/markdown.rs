// =============================================================================
// MARKDOWN — Rendu Markdown
// =============================================================================
//
//   Banner  → "# titre"
//   Section → "## titre" (sans le ":" final)
//   Text    → bloc de code ```text (les littéraux sont pré-formatés)
//   Bullet  → "- texte", imbriqué selon l'indentation
//
// Avec ascii_only, toute la sortie passe par to_ascii.
//
// =============================================================================

use super::{to_ascii, Block, Renderer};
use crate::config::RenderConfig;

/// Renderer Markdown
pub struct MarkdownRenderer {
    config: RenderConfig,
}

impl MarkdownRenderer {
    pub fn new(config: RenderConfig) -> Self {
        MarkdownRenderer { config }
    }
}

impl Renderer for MarkdownRenderer {
    // Pas de séparateurs dessinés : la largeur est ignorée.
    fn render_width(&self, blocks: &[Block], _width: usize) -> String {
        let mut out = String::new();
        for block in blocks {
            match block {
                Block::Banner(title) => out.push_str(&format!("# {}\n\n", title)),
                Block::Section(title) => {
                    out.push_str(&format!("## {}\n\n", title.trim_end_matches(':')))
                }
                Block::Text(text) => out.push_str(&format!("```text\n{}\n```\n", text)),
                Block::Line { indent, text } => {
                    let prefix = if *indent > 0 { "> " } else { "" };
                    out.push_str(&format!("{}{}  \n", prefix, text));
                }
                Block::Bullet { indent, text } => {
                    let nesting = "  ".repeat(indent / 2);
                    let marker = if self.config.ascii_only { "*" } else { "-" };
                    out.push_str(&format!("{}{} {}\n", nesting, marker, text));
                }
                Block::Blank => out.push('\n'),
                Block::Rule => out.push_str("\n---\n"),
            }
        }
        if self.config.ascii_only {
            to_ascii(&out)
        } else {
            out
        }
    }

    fn name(&self) -> &str {
        "markdown"
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        let r = MarkdownRenderer::new(RenderConfig::default());
        let out = r.render(&[
            Block::Banner("CATEGORICAL THEOLOGY".into()),
            Block::Section("PULLBACK EXAMPLE (Messiah):".into()),
        ]);
        assert_eq!(out, "# CATEGORICAL THEOLOGY\n\n## PULLBACK EXAMPLE (Messiah)\n\n");
    }

    #[test]
    fn test_text_is_fenced() {
        let r = MarkdownRenderer::new(RenderConfig::default());
        let out = r.render(&[Block::Text("π₂(S²) = ℤ".into())]);
        assert_eq!(out, "```text\nπ₂(S²) = ℤ\n```\n");
    }

    #[test]
    fn test_bullets_nest() {
        let r = MarkdownRenderer::new(RenderConfig::default());
        let out = r.render(&[Block::bullet(0, "a"), Block::bullet(2, "b")]);
        assert_eq!(out, "- a\n  - b\n");
    }
}
