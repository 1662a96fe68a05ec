use crate::{Attributes, HtmlElement, StyleView};

impl Attributes {
    /// View over the `style` attribute of this store. Declarations are
    /// re-parsed from the live attribute value on every call, so outside
    /// writes through [`Attributes::set`] are always reflected.
    pub fn style(&mut self) -> StyleView<'_> {
        StyleView { attrs: self }
    }
}

impl StyleView<'_> {
    /// Upsert by property name, last write wins, position preserved.
    pub fn add(&mut self, property: &str, value: &str) -> &mut Self {
        let property = property.to_lowercase();
        let mut declarations = self.declarations();
        match declarations.iter_mut().find(|(prop, _)| *prop == property) {
            Some((_, current)) => *current = value.to_string(),
            None => declarations.push((property, value.to_string())),
        }
        self.store(declarations)
    }

    pub fn get(&self, property: &str) -> Option<String> {
        let property = property.to_lowercase();
        self.declarations()
            .into_iter()
            .find(|(prop, _)| *prop == property)
            .map(|(_, value)| value)
    }

    /// Drops the property. Removing the last declaration leaves an empty
    /// `style=""` in place rather than unsetting the attribute.
    pub fn remove(&mut self, property: &str) -> &mut Self {
        let property = property.to_lowercase();
        let declarations = self
            .declarations()
            .into_iter()
            .filter(|(prop, _)| *prop != property)
            .collect();
        self.store(declarations)
    }

    fn declarations(&self) -> Vec<(String, String)> {
        let Some(style) = self.attrs.get("style") else {
            return Vec::new();
        };
        style
            .split(';')
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.split_once(':'))
            .map(|(prop, value)| (prop.to_string(), value.to_string()))
            .collect()
    }

    fn store(&mut self, declarations: Vec<(String, String)>) -> &mut Self {
        let style = declarations
            .iter()
            .fold(String::new(), |out, (prop, value)| {
                out + &format!("{}:{};", prop, value)
            });
        self.attrs.set("style", &style);
        self
    }
}

impl HtmlElement {
    pub fn add_css(&self, property: &str, value: &str) -> &Self {
        self.0.borrow_mut().attrs.style().add(property, value);
        self
    }

    pub fn get_css(&self, property: &str) -> Option<String> {
        self.0.borrow_mut().attrs.style().get(property)
    }

    pub fn remove_css(&self, property: &str) -> &Self {
        self.0.borrow_mut().attrs.style().remove(property);
        self
    }
}
