//! Statement trees as recorded in method and constructor bodies.

use serde::{Deserialize, Serialize};

/// A single statement in a body.
///
/// The variants are closed on purpose: the tracer matches exhaustively, so
/// recognizing a new statement kind is a compile-time decision instead of a
/// silent default arm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    Invocation(Invocation),
    Switch(Switch),
    If(If),
    /// Any statement kind without structure the tracer cares about
    /// (returns, assignments, loops, ...), kept as opaque text.
    Other(String),
}

/// A call site: the type it targets, the member name, and the arguments it
/// supplies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub containing_type: String,
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl Invocation {
    pub fn new(containing_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            containing_type: containing_type.into(),
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// The argument types, in call order.
    pub fn argument_types(&self) -> impl Iterator<Item = &str> {
        self.arguments.iter().map(|argument| argument.type_name.as_str())
    }
}

/// An argument supplied at a call site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub type_name: String,
    pub name: String,
}

impl Argument {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    pub expression: String,
    #[serde(default)]
    pub sections: Vec<SwitchSection>,
}

impl Switch {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            sections: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSection {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct If {
    #[serde(default)]
    pub sections: Vec<IfSection>,
}

impl If {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One branch of an if/else-if/else chain. A bare `else` carries no
/// condition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfSection {
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl IfSection {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: Some(condition.into()),
            statements: Vec::new(),
        }
    }
}
