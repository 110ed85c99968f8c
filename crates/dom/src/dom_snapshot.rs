use crate::{Document, ElementData, NodeId, NodeKind};
use std::fmt::{self, Write};

/// Line-oriented dump of a subtree used by widget fixtures.
/// Not a stable format.
///
/// One line per node, two spaces of indent per level. Elements render as
/// `<name attr="v" bare style=[k: v]>`, text as a quoted escaped string.
#[derive(Clone, Copy, Debug)]
pub struct DomSnapshotOptions {
    /// Skip `style=[]` on elements without inline style.
    pub ignore_empty_style: bool,
    /// Drop inline style entirely.
    pub ignore_style: bool,
    /// Append `#id` after the tag name.
    pub include_ids: bool,
    /// Sort attributes by name instead of insertion order.
    pub sort_attributes: bool,
}

impl Default for DomSnapshotOptions {
    fn default() -> Self {
        Self {
            ignore_empty_style: true,
            ignore_style: false,
            include_ids: false,
            sort_attributes: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(doc: &Document, root: NodeId, options: DomSnapshotOptions) -> Self {
        let writer = SnapshotWriter { doc, options };
        Self {
            lines: writer.lines(root),
        }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.lines.iter();
        if let Some(first) = lines.next() {
            f.write_str(first)?;
        }
        for line in lines {
            f.write_char('\n')?;
            f.write_str(line)?;
        }
        Ok(())
    }
}

struct SnapshotWriter<'a> {
    doc: &'a Document,
    options: DomSnapshotOptions,
}

impl SnapshotWriter<'_> {
    fn lines(&self, root: NodeId) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let mut line = "  ".repeat(depth);
            self.node(&mut line, id);
            out.push(line);
            stack.extend(self.doc.children(id).iter().rev().map(|&c| (c, depth + 1)));
        }
        out
    }

    fn node(&self, out: &mut String, id: NodeId) {
        match self.doc.kind(id) {
            None => out.push_str("<missing>"),
            Some(NodeKind::Document) => out.push_str("#document"),
            Some(NodeKind::Text(text)) => quoted(out, text),
            Some(NodeKind::Element(element)) => self.element(out, id, element),
        }
    }

    fn element(&self, out: &mut String, id: NodeId, element: &ElementData) {
        out.push('<');
        out.push_str(&element.name);
        if self.options.include_ids {
            let _ = write!(out, "#{}", id.0);
        }

        let mut attributes: Vec<&(String, Option<String>)> = element.attributes.iter().collect();
        if self.options.sort_attributes {
            attributes.sort_by(|a, b| a.0.cmp(&b.0));
        }
        for (name, value) in attributes {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push('=');
                quoted(out, value);
            }
        }

        let show_style = !self.options.ignore_style
            && !(self.options.ignore_empty_style && element.style.is_empty());
        if show_style {
            out.push_str(" style=[");
            let declarations: Vec<String> = element
                .style
                .iter()
                .map(|(property, value)| {
                    let mut decl = format!("{property}: ");
                    escape_into(&mut decl, value);
                    decl
                })
                .collect();
            out.push_str(&declarations.join("; "));
            out.push(']');
        }
        out.push('>');
    }
}

fn quoted(out: &mut String, value: &str) {
    out.push('"');
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii() => out.push(c),
            c => {
                let _ = write!(out, "\\u{{{:X}}}", u32::from(c));
            }
        }
    }
}
