use crate::{Attributes, ClassView, HtmlElement};

impl Attributes {
    /// View over the `class` attribute of this store, treated as a list of
    /// space-delimited tokens.
    pub fn classes(&mut self) -> ClassView<'_> {
        ClassView { attrs: self }
    }
}

impl ClassView<'_> {
    /// Appends the token unless it is already present. A missing or empty
    /// `class` attribute is set to the token directly.
    pub fn add(&mut self, name: &str) -> &mut Self {
        let name = name.to_lowercase();
        let current = self.attrs.get("class").map(str::to_string);
        match current.as_deref() {
            Some(current) if !current.is_empty() => {
                let mut entries: Vec<&str> = current.split(' ').collect();
                if !entries.contains(&name.as_str()) {
                    entries.push(name.as_str());
                    let joined = entries.join(" ");
                    self.attrs.set("class", &joined);
                }
            }
            _ => {
                self.attrs.set("class", &name);
            }
        }
        self
    }

    pub fn remove(&mut self, name: &str) -> &mut Self {
        let name = name.to_lowercase();
        let current = self.attrs.get("class").map(str::to_string);
        if let Some(current) = current.filter(|value| !value.is_empty()) {
            let left: Vec<&str> = current
                .split(' ')
                .filter(|entry| *entry != name)
                .collect();
            let joined = left.join(" ");
            self.attrs.set("class", &joined);
        }
        self
    }
}

impl HtmlElement {
    pub fn add_class(&self, name: &str) -> &Self {
        self.0.borrow_mut().attrs.classes().add(name);
        self
    }

    pub fn remove_class(&self, name: &str) -> &Self {
        self.0.borrow_mut().attrs.classes().remove(name);
        self
    }
}
