//! The extracted code model: type records, their members, and the statement
//! trees inside method bodies.
//!
//! The model is produced once by an external extractor and handed over as
//! data; every record derives serde traits so that boundary stays a plain
//! data exchange. Records reference each other only by fully-qualified name,
//! never by pointer, because the model is usually partial: library and
//! framework types are referenced without being part of the model.

mod members;
mod statements;

pub use members::{
    Constructor, EnumMember, Event, Field, HasModifiers, Method, MethodBody, Modifiers, Param,
    Property,
};
pub use statements::{Argument, If, IfSection, Invocation, Statement, Switch, SwitchSection};

use serde::{Deserialize, Serialize};

/// The kind of a type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

/// One type in the model, identified by its fully-qualified name.
///
/// `base_types` holds the directly declared bases as recorded by the
/// extractor; after [`flatten_base_types`](crate::inherit::flatten_base_types)
/// has run it holds the transitive ancestor closure, nearest influence
/// first, without duplicates. The member collections are likewise extended
/// in place by [`propagate_members`](crate::inherit::propagate_members).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub kind: TypeKind,
    pub full_name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub base_types: Vec<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub enum_members: Vec<EnumMember>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl TypeInfo {
    pub fn new(kind: TypeKind, full_name: impl Into<String>) -> Self {
        Self {
            kind,
            full_name: full_name.into(),
            modifiers: Modifiers::default(),
            base_types: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            enum_members: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Every member of this type that carries a body, constructors first,
    /// then methods.
    pub fn method_bodies(&self) -> impl Iterator<Item = &dyn MethodBody> + '_ {
        self.constructors
            .iter()
            .map(|constructor| constructor as &dyn MethodBody)
            .chain(self.methods.iter().map(|method| method as &dyn MethodBody))
    }
}

impl HasModifiers for TypeInfo {
    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
