use std::rc::Rc;

use crate::{Attributes, HtmlElement, NodeKind};

impl HtmlElement {
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).map(str::to_string)
    }

    pub fn attributes(&self) -> Attributes {
        self.0.borrow().attrs.clone()
    }

    pub fn get_child(&self, alias: &str) -> Option<HtmlElement> {
        self.0
            .borrow()
            .children
            .iter()
            .find(|(registered, _)| registered.as_deref() == Some(alias))
            .map(|(_, child)| child.clone())
    }

    pub fn last_child(&self) -> Option<HtmlElement> {
        self.0
            .borrow()
            .children
            .last()
            .map(|(_, child)| child.clone())
    }

    // Every call restarts from the first child.
    pub fn children(&self) -> impl Iterator<Item = HtmlElement> {
        self.0
            .borrow()
            .children
            .iter()
            .map(|(_, child)| child.clone())
            .collect::<Vec<_>>()
            .into_iter()
    }

    pub fn child_pairs(&self) -> Vec<(Option<String>, HtmlElement)> {
        self.0.borrow().children.clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().children.is_empty()
    }

    pub fn alias(&self) -> Option<String> {
        self.0.borrow().alias.clone()
    }

    pub fn parent(&self) -> Option<HtmlElement> {
        self.0.borrow().parent.upgrade().map(HtmlElement)
    }

    pub fn tag_name(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Tag { name, .. } => Some(name.clone()),
            NodeKind::Text => None,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Tag { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Text)
    }

    pub fn is_void(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Tag { void: true, .. })
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().content.get().to_string()
    }

    pub fn same_node(&self, other: &HtmlElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
