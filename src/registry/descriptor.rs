//! Callable descriptors and parameter type tags.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Declared type of a constructor or method parameter.
///
/// Matching only looks at arity; the tag matters once raw argument text is
/// converted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TypeTag {
    #[default]
    String,
    Number,
    /// An object of the named registered type.
    Reference(SmolStr),
}

impl TypeTag {
    /// Create a reference tag for `type_name`.
    pub fn reference(type_name: impl Into<SmolStr>) -> Self {
        TypeTag::Reference(type_name.into())
    }

    /// Name shown in `<TypeName>` placeholders.
    pub fn display_name(&self) -> &str {
        match self {
            TypeTag::String => "String",
            TypeTag::Number => "Number",
            TypeTag::Reference(name) => name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TypeTag {
    type Err = Infallible;

    /// Parse a parameter type as written in a descriptor table.
    ///
    /// Anything that is not a string or numeric type name is a reference.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.trim() {
            "" | "String" | "string" | "str" => TypeTag::String,
            "Number" | "number" | "int" | "long" | "float" | "double" => TypeTag::Number,
            other => TypeTag::Reference(SmolStr::new(other)),
        };
        Ok(tag)
    }
}

/// Immutable record of a constructor or method.
///
/// Constructors have an empty `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallableDescriptor {
    owner: SmolStr,
    name: SmolStr,
    parameters: Vec<TypeTag>,
}

impl CallableDescriptor {
    /// Describe a constructor of `owner`.
    pub fn constructor(owner: impl Into<SmolStr>, parameters: Vec<TypeTag>) -> Self {
        Self {
            owner: owner.into(),
            name: SmolStr::default(),
            parameters,
        }
    }

    /// Describe a method `name` of `owner`.
    pub fn method(
        owner: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        parameters: Vec<TypeTag>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            parameters,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[TypeTag] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_constructor(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for CallableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.owner)?;
        if !self.is_constructor() {
            write!(f, ".{}", self.name)?;
        }
        f.write_str("(")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}
