//! Member records: fields, constructors, properties, methods, enum members,
//! and events, plus the modifier bit-set they all carry.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::statements::Statement;

bitflags! {
    /// Declaration modifiers as recorded by the extractor.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const INTERNAL = 1 << 1;
        const PROTECTED = 1 << 2;
        const PRIVATE = 1 << 3;
        const STATIC = 1 << 4;
        const ABSTRACT = 1 << 5;
        const VIRTUAL = 1 << 6;
        const OVERRIDE = 1 << 7;
        const SEALED = 1 << 8;
        const READONLY = 1 << 9;
        const CONST = 1 << 10;
        const ASYNC = 1 << 11;
        const PARTIAL = 1 << 12;
    }
}

impl Modifiers {
    pub fn is_public(self) -> bool {
        self.contains(Modifiers::PUBLIC)
    }

    pub fn is_internal(self) -> bool {
        self.contains(Modifiers::INTERNAL)
    }

    pub fn is_protected(self) -> bool {
        self.contains(Modifiers::PROTECTED)
    }

    pub fn is_private(self) -> bool {
        self.contains(Modifiers::PRIVATE)
    }

    pub fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }
}

/// Access to the modifier set of a declaration.
///
/// Implemented by every member record and by [`TypeInfo`](super::TypeInfo);
/// inheritance propagation filters on it.
pub trait HasModifiers {
    fn modifiers(&self) -> Modifiers;
}

/// A callable member with a recorded body.
///
/// Methods and constructors both expose this capability; invocation
/// resolution treats them uniformly.
pub trait MethodBody {
    fn name(&self) -> &str;
    fn parameters(&self) -> &[Param];
    fn statements(&self) -> &[Statement];
}

/// A single parameter of a method or constructor signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub type_name: String,
    pub name: String,
    #[serde(default)]
    pub has_default_value: bool,
}

impl Param {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            has_default_value: false,
        }
    }

    /// A parameter that carries a default value and may be omitted at a
    /// call site.
    pub fn optional(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            has_default_value: true,
            ..Self::new(type_name, name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Field {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers: Modifiers::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<Param>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl Constructor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::default(),
            parameters: Vec::new(),
            statements: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Property {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers: Modifiers::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub return_type: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<Param>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl Method {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            modifiers: Modifiers::default(),
            parameters: Vec::new(),
            statements: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            modifiers: Modifiers::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Event {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers: Modifiers::default(),
        }
    }
}

macro_rules! impl_has_modifiers {
    ($($member:ty),+ $(,)?) => {
        $(
            impl HasModifiers for $member {
                fn modifiers(&self) -> Modifiers {
                    self.modifiers
                }
            }
        )+
    };
}

impl_has_modifiers!(Field, Constructor, Property, Method, EnumMember, Event);

impl MethodBody for Method {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &[Param] {
        &self.parameters
    }

    fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl MethodBody for Constructor {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &[Param] {
        &self.parameters
    }

    fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_predicates_reflect_flags() {
        let modifiers = Modifiers::PUBLIC | Modifiers::STATIC;

        assert!(modifiers.is_public());
        assert!(modifiers.is_static());
        assert!(!modifiers.is_private());
        assert!(!modifiers.is_protected());
        assert!(!modifiers.is_internal());
    }

    #[test]
    fn members_compare_structurally() {
        let mut first = Field::new("int", "count");
        let second = Field::new("int", "count");
        assert_eq!(first, second);

        first.modifiers = Modifiers::PRIVATE;
        assert_ne!(first, second);
    }
}
