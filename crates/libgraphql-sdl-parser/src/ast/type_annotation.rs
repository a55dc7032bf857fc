use std::fmt;

/// Whether a [`TypeAnnotation`] level carries a trailing `!`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Nullability {
    NonNull,
    Nullable,
}

/// A type reference such as `String`, `[ID!]` or `[[Int!]!]!`.
///
/// Rather than a separate `NonNull` wrapper variant (which would allow
/// meaningless `NonNull(NonNull(..))` nesting), each level carries its own
/// [`Nullability`]. Names are not resolved against known types at parse
/// time.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        element_type: Box<TypeAnnotation>,
        nullability: Nullability,
    },
    Named {
        name: String,
        nullability: Nullability,
    },
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullability: Nullability) -> Self {
        TypeAnnotation::Named {
            name: name.into(),
            nullability,
        }
    }

    pub fn list(element_type: TypeAnnotation, nullability: Nullability) -> Self {
        TypeAnnotation::List {
            element_type: Box::new(element_type),
            nullability,
        }
    }

    pub fn nullability(&self) -> Nullability {
        match self {
            TypeAnnotation::List { nullability, .. }
            | TypeAnnotation::Named { nullability, .. } => *nullability,
        }
    }

    pub fn is_non_null(&self) -> bool {
        self.nullability() == Nullability::NonNull
    }

    /// The name at the core of this annotation, with every list wrapper
    /// peeled off (`[[Int!]]!` -> `Int`).
    pub fn innermost_type_name(&self) -> &str {
        let mut current = self;
        loop {
            match current {
                TypeAnnotation::List { element_type, .. } => current = element_type,
                TypeAnnotation::Named { name, .. } => return name,
            }
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeAnnotation::List { element_type, .. } => write!(f, "[{element_type}]")?,
            TypeAnnotation::Named { name, .. } => f.write_str(name)?,
        }
        if self.is_non_null() {
            f.write_str("!")?;
        }
        Ok(())
    }
}
