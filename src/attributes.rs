use crate::{AttrInput, AttrValue, Attribute, Attributes, HtmlElement};

impl Attributes {
    /// Lookup by name. Names are stored lowercased, so the query is folded
    /// the same way.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Upsert. An existing entry keeps its position, a new one is appended.
    pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
        let name = name.to_lowercase();
        let value = value.to_lowercase();
        match self.entries.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.entries.push(Attribute { name, value }),
        }
        self
    }

    pub fn remove(&mut self, name: &str) -> &mut Self {
        let name = name.to_lowercase();
        self.entries.retain(|attr| attr.name != name);
        self
    }

    /// Replaces the whole store with the given input.
    pub fn set_all(&mut self, input: impl Into<AttrInput>) -> &mut Self {
        self.entries.clear();
        self.add(input)
    }

    /// Merges the given input into the store, entry by entry.
    pub fn add(&mut self, input: impl Into<AttrInput>) -> &mut Self {
        for (name, value) in input.into().into_pairs() {
            self.set(&name, &value);
        }
        self
    }

    /// Serializes as ` key="value"` per entry, in store order. An empty
    /// store renders as the empty string.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .fold(String::new(), |out, attr| out + &format!(" {}", attr))
    }

    /// Same serialization over an explicitly supplied input, run through
    /// the regular parse step first. The store itself is not consulted and
    /// duplicate keys in the input are kept as given.
    pub fn render_from(input: impl Into<AttrInput>) -> String {
        input
            .into()
            .into_pairs()
            .iter()
            .fold(String::new(), |out, (name, value)| {
                out + &format!(" {}=\"{}\"", name, value)
            })
    }

    pub fn entries(&self) -> &[Attribute] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

impl AttrValue {
    /// Deep-flattens into one string. Nested lists join their parts with
    /// `;`; the top-level tail of an entry concatenates its values without
    /// a separator (see [`AttrInput::into_pairs`]).
    pub fn flattened(&self) -> String {
        match self {
            AttrValue::Text(text) => text.clone(),
            AttrValue::List(items) => items
                .iter()
                .map(AttrValue::flattened)
                .collect::<Vec<_>>()
                .join(";"),
        }
    }

    fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Text(text) => !text.is_empty() && text != "0",
            AttrValue::List(items) => !items.is_empty(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::Text(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::Text(text)
    }
}

impl AttrInput {
    /// Canonicalizes into lowercased `(name, value)` pairs. Structured
    /// entries with a falsy key or value tail are dropped silently; raw
    /// strings that match no attribute run yield an empty list, not an
    /// error.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        match self {
            AttrInput::Pairs(pairs) => pairs
                .into_iter()
                .filter_map(|(key, tail)| {
                    if !is_truthy_key(&key) || !tail.iter().any(AttrValue::is_truthy) {
                        log::debug!("discarding falsy attribute entry {:?}", key);
                        return None;
                    }
                    let value = tail
                        .iter()
                        .map(AttrValue::flattened)
                        .collect::<Vec<_>>()
                        .concat();
                    Some((key.to_lowercase(), value.to_lowercase()))
                })
                .collect(),
            AttrInput::Raw(text) => match crate::from_str::scan(&text) {
                Ok(found) => found
                    .into_iter()
                    .map(|attr| (attr.name.to_lowercase(), attr.value.to_lowercase()))
                    .collect(),
                Err(err) => {
                    log::debug!("discarding unparsable attribute string: {:?}", err);
                    Vec::new()
                }
            },
        }
    }
}

fn is_truthy_key(key: &str) -> bool {
    !key.is_empty() && key != "0"
}

impl From<&str> for AttrInput {
    fn from(text: &str) -> Self {
        AttrInput::Raw(text.to_string())
    }
}

impl From<String> for AttrInput {
    fn from(text: String) -> Self {
        AttrInput::Raw(text)
    }
}

impl From<Vec<(String, Vec<AttrValue>)>> for AttrInput {
    fn from(pairs: Vec<(String, Vec<AttrValue>)>) -> Self {
        AttrInput::Pairs(pairs)
    }
}

impl From<Vec<(&str, AttrValue)>> for AttrInput {
    fn from(pairs: Vec<(&str, AttrValue)>) -> Self {
        AttrInput::Pairs(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), vec![value]))
                .collect(),
        )
    }
}

impl From<Vec<(&str, &str)>> for AttrInput {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        AttrInput::Pairs(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), vec![AttrValue::from(value)]))
                .collect(),
        )
    }
}

impl HtmlElement {
    pub fn set_attribute(&self, name: &str, value: &str) -> &Self {
        self.0.borrow_mut().attrs.set(name, value);
        self
    }

    pub fn remove_attribute(&self, name: &str) -> &Self {
        self.0.borrow_mut().attrs.remove(name);
        self
    }

    /// Merges the input into this element's attributes.
    pub fn add_attributes(&self, input: impl Into<AttrInput>) -> &Self {
        self.0.borrow_mut().attrs.add(input);
        self
    }

    /// Replaces this element's attributes with the input, leaving nothing
    /// from the previous ones.
    pub fn set_attributes(&self, input: impl Into<AttrInput>) -> &Self {
        self.0.borrow_mut().attrs.set_all(input);
        self
    }
}
