//! Call graph tracing and inheritance resolution for extracted code models.
//!
//! `tracemap` consumes an in-memory model of a codebase — types, members,
//! and method bodies as statement trees, produced by an external extractor
//! — and answers two questions about it:
//!
//! - what is the full transitive set of invocations and statements that
//!   execute as a consequence of calling a method
//!   ([`InvocationTracer`]), and
//! - what does a type look like once its inheritance chain is flattened
//!   ([`inherit::resolve_inheritance`]).
//!
//! The model may be partial: references to types outside the model (library
//! and framework code) are expected and degrade to empty results rather
//! than errors.
//!
//! ```
//! use tracemap::{
//!     Invocation, InvocationTracer, Method, Statement, TypeInfo, TypeKind, TypeRegistry,
//! };
//!
//! let mut caller = TypeInfo::new(TypeKind::Class, "App.Controller");
//! let mut handle = Method::new("void", "Handle");
//! handle
//!     .statements
//!     .push(Statement::Invocation(Invocation::new("App.Service", "Run")));
//! caller.methods.push(handle);
//!
//! let mut service = TypeInfo::new(TypeKind::Class, "App.Service");
//! service.methods.push(Method::new("void", "Run"));
//!
//! let registry: TypeRegistry = vec![caller, service].into();
//! let tracer = InvocationTracer::new(&registry);
//!
//! let chain = tracer.invocation_consequences(&Invocation::new("App.Controller", "Handle"));
//! assert_eq!(chain.len(), 2);
//! ```

pub mod errors;
pub mod inherit;
pub mod model;
pub mod registry;
pub mod resolve;

// Re-export commonly used types
pub use crate::errors::ModelError;
pub use crate::inherit::{flatten_base_types, propagate_members, resolve_inheritance};
pub use crate::model::{
    Argument, Constructor, EnumMember, Event, Field, HasModifiers, If, IfSection, Invocation,
    Method, MethodBody, Modifiers, Param, Property, Statement, Switch, SwitchSection, TypeInfo,
    TypeKind,
};
pub use crate::registry::TypeRegistry;
pub use crate::resolve::InvocationTracer;
