// Shared fixture builders for tracemap integration tests
#![allow(dead_code)]

use tracemap::{Invocation, Method, Statement, TypeInfo, TypeKind, TypeRegistry};

/// A class with no members.
pub fn class(full_name: &str) -> TypeInfo {
    TypeInfo::new(TypeKind::Class, full_name)
}

/// A class exposing a single parameterless void method with the given body.
pub fn class_with_method(full_name: &str, method_name: &str, body: Vec<Statement>) -> TypeInfo {
    let mut type_info = class(full_name);
    let mut method = Method::new("void", method_name);
    method.statements = body;
    type_info.methods.push(method);
    type_info
}

/// An argumentless call site.
pub fn invoke(containing_type: &str, name: &str) -> Invocation {
    Invocation::new(containing_type, name)
}

/// The invocation statement form of [`invoke`].
pub fn invoke_statement(containing_type: &str, name: &str) -> Statement {
    Statement::Invocation(invoke(containing_type, name))
}

/// A registry over the given types.
pub fn registry(types: Vec<TypeInfo>) -> TypeRegistry {
    types.into()
}
