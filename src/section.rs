/// A `name = value` assignment and the line it was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: String,
    line_number: usize,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, line_number: usize) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line_number,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always present; a missing value is the empty string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 1-based source line, for diagnostics.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// A `[name]` or `[name = value]` header followed by its properties, in source order.
///
/// The section with an empty name is the root section: the properties that came before the first
/// header. It has no header of its own, so its line number is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    value: String,
    line_number: usize,
    properties: Vec<Property>,
}

impl Section {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, line_number: usize) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line_number,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `value` part of `[name = value]`, or the empty string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// First property called `name`. Later duplicates are kept in [`Self::properties`] but are
    /// not reachable from here.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.property(name).map(Property::value)
    }

    #[must_use]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub(crate) fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub(crate) fn extend<I>(&mut self, properties: I)
    where
        I: IntoIterator<Item = Property>,
    {
        self.properties.extend(properties);
    }
}
