use std::fmt::Write;

use super::{Block, Document, KeyValue};

/// Render a document tree to deterministic plain text.
///
/// Intended for previews and tests; the block and section order of the tree
/// is preserved exactly. Bold styling is a renderer concern and is not
/// marked in the text output.
pub fn render_text(document: &Document) -> String {
    let mut out = String::new();

    for block in &document.blocks {
        match block {
            Block::Heading(text) => {
                let _ = writeln!(out, "{text}");
            }
            Block::KeyValues { title, pairs } => {
                if let Some(title) = title {
                    let _ = writeln!(out, "{title}");
                }
                for pair in pairs {
                    let _ = writeln!(out, "{}", format_pair(pair));
                }
            }
            Block::Table { columns, rows } => {
                let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
                let _ = writeln!(out, "{}", headers.join(" | "));
                for row in rows {
                    let _ = writeln!(out, "{}", row.join(" | "));
                }
            }
            Block::Totals(lines) => {
                for line in lines {
                    let _ = writeln!(out, "{}: {}", line.label, line.amount);
                }
            }
            Block::Text(text) => {
                let _ = writeln!(out, "{text}");
            }
        }
        out.push('\n');
    }

    // single trailing newline
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn format_pair(pair: &KeyValue) -> String {
    if pair.label.is_empty() {
        pair.value.clone()
    } else {
        format!("{}: {}", pair.label, pair.value)
    }
}
