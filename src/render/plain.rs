// =============================================================================
// PLAIN — Rendu texte brut (console)
// =============================================================================
//
//   Banner  → ==== / titre / ====
//   Section → titre / ----
//   Bullet  → "  • texte"
//
// Avec ascii_only, les puces "•" des textes littéraux prennent la puce
// configurée, puis toute la sortie passe par to_ascii.
//
// =============================================================================

use super::{to_ascii, Block, Renderer};
use crate::config::RenderConfig;

/// Renderer texte brut
pub struct PlainRenderer {
    config: RenderConfig,
}

impl PlainRenderer {
    pub fn new(config: RenderConfig) -> Self {
        PlainRenderer { config }
    }

    fn rule(c: char, width: usize) -> String {
        c.to_string().repeat(width)
    }

    fn text(&self, s: &str) -> String {
        if self.config.ascii_only {
            s.replace('•', self.config.bullet())
        } else {
            s.to_string()
        }
    }
}

impl Renderer for PlainRenderer {
    fn render_width(&self, blocks: &[Block], width: usize) -> String {
        let width = self.config.width.unwrap_or(width);
        let mut out = String::new();
        for block in blocks {
            match block {
                Block::Banner(title) => {
                    out.push_str(&Self::rule('=', width));
                    out.push('\n');
                    out.push_str(title);
                    out.push('\n');
                    out.push_str(&Self::rule('=', width));
                    out.push_str("\n\n");
                }
                Block::Section(title) => {
                    out.push_str(title);
                    out.push('\n');
                    out.push_str(&Self::rule('-', width));
                    out.push('\n');
                }
                Block::Text(text) => {
                    out.push_str(&self.text(text));
                    out.push('\n');
                }
                Block::Line { indent, text } => {
                    out.push_str(&" ".repeat(*indent));
                    out.push_str(&self.text(text));
                    out.push('\n');
                }
                Block::Bullet { indent, text } => {
                    out.push_str(&" ".repeat(*indent));
                    out.push_str(self.config.bullet());
                    out.push(' ');
                    out.push_str(text);
                    out.push('\n');
                }
                Block::Blank => out.push('\n'),
                Block::Rule => {
                    out.push_str(&Self::rule('=', width));
                    out.push('\n');
                }
            }
        }
        if self.config.ascii_only {
            to_ascii(&out)
        } else {
            out
        }
    }

    fn name(&self) -> &str {
        "plain"
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> RenderConfig {
        RenderConfig {
            width: Some(4),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_banner_and_section() {
        let r = PlainRenderer::new(narrow());
        let out = r.render(&[Block::Banner("T".into()), Block::Section("S".into())]);
        assert_eq!(out, "====\nT\n====\n\nS\n----\n");
    }

    #[test]
    fn test_bullets_and_lines() {
        let r = PlainRenderer::new(narrow());
        let out = r.render(&[
            Block::line("Properties:"),
            Block::bullet(2, "Future Buddha"),
            Block::Blank,
            Block::Rule,
        ]);
        assert_eq!(out, "Properties:\n  • Future Buddha\n\n====\n");
    }

    #[test]
    fn test_ascii_only() {
        let r = PlainRenderer::new(RenderConfig {
            ascii_only: true,
            ..narrow()
        });
        let out = r.render(&[Block::Text("• one\n• two".into()), Block::bullet(0, "three")]);
        assert_eq!(out, "* one\n* two\n* three\n");
        assert!(out.is_ascii());
    }
}
