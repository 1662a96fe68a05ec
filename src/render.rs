use std::io::Write;

use crate::{HtmlElement, NodeKind};

impl std::fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.0.borrow();
        match &data.kind {
            NodeKind::Text => write!(f, "{}", data.content.get()),
            NodeKind::Tag { name, void: true } => {
                write!(f, "<{}{} />", name, data.attrs.render())
            }
            NodeKind::Tag { name, void: false } => {
                write!(f, "<{}{}>", name, data.attrs.render())?;
                let mut first = true;
                for (_, child) in &data.children {
                    if !first {
                        write!(f, "{}", data.child_delimiter)?;
                    }
                    first = false;
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", name)
            }
        }
    }
}

impl HtmlElement {
    /// Serializes the subtree depth-first. Void tags close themselves and
    /// ignore any children added to them; text leaves come out verbatim.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Every child rendered and joined with this element's delimiter.
    pub fn render_children(&self) -> String {
        let (pairs, delimiter) = {
            let data = self.0.borrow();
            (data.children.clone(), data.child_delimiter.clone())
        };
        pairs
            .iter()
            .map(|(_, child)| child.render())
            .collect::<Vec<_>>()
            .join(&delimiter)
    }

    pub fn render_attributes(&self) -> String {
        self.0.borrow().attrs.render()
    }

    /// Writes the rendered subtree into the given writer.
    pub fn write_to(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }
}
