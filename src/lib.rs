//! Object model for building and serializing HTML element trees.
//!
//! A tree is built from [`HtmlElement`] handles (tag elements and text
//! leaves), each owning an ordered [`Attributes`] store. Children are kept
//! in insertion order and may be registered under an alias for later
//! lookup, replacement or removal. Rendering walks the tree depth-first
//! and produces the serialized markup string.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

mod attributes;
mod builder;
mod class;
mod from_str;
mod getters;
mod render;
mod style;
mod tree;

pub use tree::Child;

lazy_static::lazy_static! {
    /// Tags that cannot hold content and serialize self-closed.
    static ref VOID_ELEMENTS: HashSet<&'static str> = HashSet::from([
        "img", "hr", "br", "input", "meta", "area", "embed", "keygen",
        "link", "param", "frame",
    ]);
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Ordered attribute mapping with unique, lowercased names.
#[derive(Default, Debug, Clone)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

/// One value of a structured attribute entry. Lists flatten recursively:
/// nested lists join their parts with `;`, the top-level value tail of an
/// entry concatenates without a separator.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Text(String),
    List(Vec<AttrValue>),
}

/// Attribute input accepted by bulk ingestion: structured key/value pairs
/// or a raw string in the `key="value"` micro-syntax.
#[derive(Debug, Clone)]
pub enum AttrInput {
    Pairs(Vec<(String, Vec<AttrValue>)>),
    Raw(String),
}

/// Mutating view over the `style` attribute of an [`Attributes`] store.
pub struct StyleView<'a> {
    attrs: &'a mut Attributes,
}

/// Mutating view over the `class` attribute of an [`Attributes`] store.
pub struct ClassView<'a> {
    attrs: &'a mut Attributes,
}

#[derive(Default, Debug, Clone)]
struct Content(String);

impl Content {
    fn set(&mut self, value: &str) {
        self.0 = value.to_string();
    }

    fn get(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Tag { name: String, void: bool },
    Text,
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    attrs: Attributes,
    content: Content,
    alias: Option<String>,
    children: Vec<(Option<String>, HtmlElement)>,
    parent: Weak<RefCell<NodeData>>,
    child_delimiter: String,
}

impl Default for NodeData {
    fn default() -> Self {
        Self {
            kind: NodeKind::Text,
            attrs: Attributes::default(),
            content: Content::default(),
            alias: None,
            children: Vec::new(),
            parent: Weak::new(),
            child_delimiter: "\n".to_string(),
        }
    }
}

/// Handle to one node of an element tree. Cloning the handle aliases the
/// same node; the tree owns its children, a child only points back at its
/// parent weakly.
#[derive(Debug, Clone)]
pub struct HtmlElement(Rc<RefCell<NodeData>>);
