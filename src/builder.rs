use std::cell::RefCell;
use std::rc::Rc;

use crate::{AttrInput, HtmlElement, NodeData, NodeKind, VOID_ELEMENTS};

impl HtmlElement {
    /// Builds a tag element from a declaration string, which may carry
    /// angle brackets and inline attributes: `"<div class='x'>"`,
    /// `"div class='x'"` and a bare `"div"` all work.
    pub fn new(decl: &str) -> Self {
        let (name, inline) = crate::from_str::split_tag(decl);
        let void = VOID_ELEMENTS.contains(name.as_str());
        let node = HtmlElement(Rc::new(RefCell::new(NodeData {
            kind: NodeKind::Tag { name, void },
            ..Default::default()
        })));
        if let Some(inline) = inline {
            node.add_attributes(inline.as_str());
        }
        node
    }

    /// Explicit attributes are applied before the declaration's inline
    /// remainder.
    pub fn with_attrs(decl: &str, attributes: impl Into<AttrInput>) -> Self {
        let (name, inline) = crate::from_str::split_tag(decl);
        let void = VOID_ELEMENTS.contains(name.as_str());
        let node = HtmlElement(Rc::new(RefCell::new(NodeData {
            kind: NodeKind::Tag { name, void },
            ..Default::default()
        })));
        node.add_attributes(attributes);
        if let Some(inline) = inline {
            node.add_attributes(inline.as_str());
        }
        node
    }

    pub fn text(content: impl ToString) -> Self {
        let node = HtmlElement(Rc::new(RefCell::new(NodeData::default())));
        node.set_inner_html(&content.to_string());
        node
    }

    pub fn text_with_alias(content: impl ToString, alias: &str) -> Self {
        let node = Self::text(content);
        node.set_alias(alias);
        node
    }

    pub fn set_inner_html(&self, value: &str) -> &Self {
        self.0.borrow_mut().content.set(value);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(self, child: impl Into<crate::Child>) -> Self {
        self.add_child(child, None);
        self
    }

    pub fn with_aliased_child(self, child: impl Into<crate::Child>, alias: &str) -> Self {
        self.add_child(child, Some(alias));
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.add_child(text, None);
        self
    }

    pub fn with_alias(self, alias: &str) -> Self {
        self.set_alias(alias);
        self
    }

    pub fn with_delimiter(self, delimiter: &str) -> Self {
        self.set_child_delimiter(delimiter);
        self
    }
}
