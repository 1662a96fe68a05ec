use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::HtmlElement;

/// Child material accepted by the tree layer: an existing node handle or
/// raw text to wrap into a text leaf.
pub enum Child {
    Node(HtmlElement),
    Raw(String),
}

impl From<HtmlElement> for Child {
    fn from(node: HtmlElement) -> Self {
        Child::Node(node)
    }
}

impl From<&HtmlElement> for Child {
    fn from(node: &HtmlElement) -> Self {
        Child::Node(node.clone())
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Raw(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Raw(text)
    }
}

/// An alias is usable as a lookup key only when it is a non-empty string.
fn valid_alias(alias: Option<&str>) -> bool {
    alias.is_some_and(|alias| !alias.is_empty())
}

impl HtmlElement {
    pub fn set_parent(&self, parent: Option<&HtmlElement>) -> &Self {
        self.0.borrow_mut().parent = match parent {
            Some(parent) => Rc::downgrade(&parent.0),
            None => Weak::new(),
        };
        self.after_parent_set();
        self
    }

    /// Reaction point for node kinds that need to adjust after being
    /// re-parented. Neither kind currently does.
    fn after_parent_set(&self) {}

    /// Adds `sibling` after the current element, through the parent. A
    /// detached element has nowhere to append to, so this is a no-op.
    pub fn append(&self, sibling: impl Into<Child>, alias: Option<&str>) -> &Self {
        if let Some(parent) = self.parent() {
            parent.add_child(sibling, alias);
        }
        self
    }

    pub fn add_child(&self, child: impl Into<Child>, alias: Option<&str>) -> &Self {
        self.insert_child(child, alias, false, false)
    }

    /// Adds a child at the stack end, or replaces the current one when an
    /// existing child is registered under the same alias. With `merge` the
    /// existing child first absorbs the new one; with `inherit` the stored
    /// child is layered with this element's attributes and children.
    pub fn insert_child(
        &self,
        child: impl Into<Child>,
        alias: Option<&str>,
        merge: bool,
        inherit: bool,
    ) -> &Self {
        let (child, alias) = resolve_child(child.into(), alias);
        child.set_parent(Some(self));

        if valid_alias(alias.as_deref()) {
            let key = alias.unwrap_or_default();
            let existing_at = self
                .0
                .borrow()
                .children
                .iter()
                .position(|(registered, _)| registered.as_deref() == Some(key.as_str()));

            let stored = match existing_at {
                Some(index) if merge => {
                    let existing = self.0.borrow().children[index].1.clone();
                    existing.merge(&child);
                    existing
                }
                _ => child,
            };
            let stored = if inherit { self.inherit(&stored) } else { stored };

            let mut data = self.0.borrow_mut();
            match existing_at {
                Some(index) => data.children[index] = (Some(key), stored),
                None => data.children.push((Some(key), stored)),
            }
        } else {
            self.0.borrow_mut().children.push((alias, child));
        }
        self
    }

    /// Drops every child registered under the alias and detaches it.
    /// Children without that alias are untouched; a missing alias is not
    /// an error.
    pub fn remove_child(&self, alias: &str) -> &Self {
        let mut removed = Vec::new();
        {
            let mut data = self.0.borrow_mut();
            data.children.retain(|(registered, child)| {
                if registered.as_deref() == Some(alias) {
                    removed.push(child.clone());
                    false
                } else {
                    true
                }
            });
        }
        for child in removed {
            child.set_parent(None);
        }
        self
    }

    /// Clears the child list and re-adds every pair through
    /// [`HtmlElement::add_child`]. Pairs without a supplied alias defer to
    /// the child's own stored alias.
    pub fn set_children(&self, children: Vec<(Option<String>, HtmlElement)>) -> &Self {
        self.0.borrow_mut().children.clear();
        for (alias, child) in children {
            self.add_child(child, alias.as_deref());
        }
        self
    }

    /// Replaces this element's children and attributes wholesale with the
    /// other element's. The child list is taken over as handles, not as a
    /// deep tree copy.
    pub fn merge(&self, other: &HtmlElement) -> &Self {
        let (pairs, attrs) = {
            let data = other.0.borrow();
            (data.children.clone(), data.attrs.clone())
        };
        self.set_children(pairs);
        self.0.borrow_mut().attrs = attrs;
        self
    }

    /// Returns a shallow copy of `child` layered with this element's
    /// attributes (merged additively) and this element's children
    /// (replacing the copy's own). Neither `child` nor `self` is mutated.
    pub fn inherit(&self, child: &HtmlElement) -> HtmlElement {
        let copy = HtmlElement(Rc::new(RefCell::new(child.0.borrow().clone())));
        {
            let parent_attrs = self.attributes();
            let mut data = copy.0.borrow_mut();
            for attr in parent_attrs.entries() {
                data.attrs.set(&attr.name, &attr.value);
            }
        }
        copy.set_children(self.child_pairs());
        copy
    }

    pub fn set_alias(&self, alias: &str) -> &Self {
        self.0.borrow_mut().alias = Some(alias.to_string());
        self
    }

    /// Join string placed between rendered children. Defaults to a
    /// newline.
    pub fn set_child_delimiter(&self, delimiter: &str) -> &Self {
        self.0.borrow_mut().child_delimiter = delimiter.to_string();
        self
    }
}

fn resolve_child(child: Child, alias: Option<&str>) -> (HtmlElement, Option<String>) {
    match child {
        Child::Node(node) => {
            let alias = if valid_alias(alias) {
                alias.map(str::to_string)
            } else {
                node.alias()
            };
            (node, alias)
        }
        Child::Raw(text) => {
            let alias = alias
                .filter(|alias| !alias.is_empty())
                .map(str::to_string);
            let node = HtmlElement::text(text);
            if let Some(alias) = &alias {
                node.set_alias(alias);
            }
            (node, alias)
        }
    }
}
