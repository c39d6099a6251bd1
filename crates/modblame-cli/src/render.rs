//! Mermaid flowchart output.
//!
//! ```text
//! graph LR;
//!     n0["example.com/app"];
//!     n1["golang.org/x/text@v0.3.7"];
//!     n0 --> n1;
//! ```
//!
//! Nodes are declared in [`EmissionOrder`], each followed by its incoming
//! edges. Node ids are short positional names assigned on first mention, so
//! module paths never need escaping outside of labels.

use std::io::{self, Write};

use modblame_graph::EmissionOrder;
use rustc_hash::FxHashMap;

use crate::cli::Direction;

/// Writes an [`EmissionOrder`] as a Mermaid flowchart.
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidRenderer {
    direction: Direction,
}

impl MermaidRenderer {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn render<W: Write>(&self, order: &EmissionOrder<String>, out: &mut W) -> io::Result<()> {
        let mut ids = NodeIds::default();

        writeln!(out, "graph {};", self.direction.as_mermaid())?;
        for node in order.nodes() {
            let id = ids.get(node);
            writeln!(out, "    {id}[\"{}\"];", escape_label(node))?;
            for from in order.incoming(node) {
                writeln!(out, "    {} --> {id};", ids.get(&from))?;
            }
        }
        Ok(())
    }

    /// Render into a string.
    pub fn render_to_string(&self, order: &EmissionOrder<String>) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.render(order, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[derive(Default)]
struct NodeIds {
    ids: FxHashMap<String, usize>,
}

impl NodeIds {
    fn get(&mut self, node: &str) -> String {
        let next = self.ids.len();
        let id = *self.ids.entry(node.to_string()).or_insert(next);
        format!("n{id}")
    }
}

fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use modblame_graph::Graph;

    fn order(edges: &[(&str, &str)]) -> EmissionOrder<String> {
        let graph: Graph<String> = edges
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        EmissionOrder::from_graph(graph)
    }

    #[test]
    fn test_render_chain() {
        let out = MermaidRenderer::new(Direction::Lr).render_to_string(&order(&[("a", "b"), ("b", "c")]));
        assert_eq!(
            out,
            "graph LR;\n    n0[\"a\"];\n    n1[\"b\"];\n    n0 --> n1;\n    n2[\"c\"];\n    n1 --> n2;\n"
        );
    }

    #[test]
    fn test_render_diamond() {
        let out = MermaidRenderer::new(Direction::Td)
            .render_to_string(&order(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]));
        assert_eq!(
            out,
            "graph TD;\n    n0[\"a\"];\n    n1[\"b\"];\n    n0 --> n1;\n    n2[\"c\"];\n    n0 --> n2;\n    n3[\"d\"];\n    n1 --> n3;\n    n2 --> n3;\n"
        );
    }

    #[test]
    fn test_render_empty_graph() {
        let out = MermaidRenderer::default().render_to_string(&order(&[]));
        assert_eq!(out, "graph LR;\n");
    }

    #[test]
    fn test_every_edge_rendered_once() {
        let edges = [("a", "b"), ("b", "c"), ("c", "a"), ("c", "c"), ("d", "a")];
        let out = MermaidRenderer::default().render_to_string(&order(&edges));
        assert_eq!(out.matches(" --> ").count(), edges.len());
        assert_eq!(out.matches("[\"").count(), 4);
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("plain"), "plain");
        assert_eq!(escape_label("say \"hi\""), "say #quot;hi#quot;");
    }
}
