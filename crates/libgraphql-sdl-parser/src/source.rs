/// A named buffer of SDL text.
///
/// The name is only used for diagnostics (typically a file path, but any
/// label works). Each parse pass consumes exactly one `Source`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    name: String,
    body: String,
}

impl Source {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Returns the diagnostic name of this source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the SDL text of this source.
    pub fn body(&self) -> &str {
        &self.body
    }
}
