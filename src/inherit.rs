//! Inheritance projection: base-type flattening and member propagation.
//!
//! Both passes mutate the registry's records in place and are the only
//! mutation the model sees after extraction. Their order is a contract:
//! flattening must run before propagation, otherwise a type only receives
//! members from its direct parents instead of its full ancestor chain.
//! [`resolve_inheritance`] encodes that ordering; the individual passes
//! stay public for callers that only need one of the two views. Each pass
//! appends-if-absent, so re-running a pass against its own output is a
//! no-op.

use log::debug;

use crate::model::HasModifiers;
use crate::registry::TypeRegistry;

/// Run both projection passes in their required order.
pub fn resolve_inheritance(registry: &mut TypeRegistry) {
    flatten_base_types(registry);
    propagate_members(registry);
}

/// Extend every type's `base_types` with its transitive ancestors.
///
/// Each list is processed as a worklist: entries appended while earlier
/// entries are handled get visited too. Ancestors of nearer bases are
/// appended before those of more distant ones, and no name is ever
/// duplicated. A base that is not part of the model stays in the list as
/// an opaque leaf and contributes no further ancestors.
pub fn flatten_base_types(registry: &mut TypeRegistry) {
    for index in 0..registry.types.len() {
        let mut bases = std::mem::take(&mut registry.types[index].base_types);

        let mut next = 0;
        while next < bases.len() {
            let name = bases[next].clone();
            collect_ancestors(registry, &name, &mut bases);
            next += 1;
        }

        debug!(
            "flattened {}: {} base type(s)",
            registry.types[index].full_name,
            bases.len()
        );

        registry.types[index].base_types = bases;
    }
}

fn collect_ancestors(registry: &TypeRegistry, type_name: &str, bases: &mut Vec<String>) {
    let Some(base_type) = registry.try_find_exact(type_name) else {
        return;
    };

    for ancestor in &base_type.base_types {
        if !bases.iter().any(|known| known == ancestor) {
            bases.push(ancestor.clone());
        }
        collect_ancestors(registry, ancestor, bases);
    }
}

/// Copy non-private members from every base type into its derived types.
///
/// Members already structurally present in the derived type are left
/// alone: first declared wins, whether declared on the type itself or
/// copied from an earlier base in the list. Overriding and hiding are not
/// modeled, so a same-named base member with a different signature is
/// still copied.
pub fn propagate_members(registry: &mut TypeRegistry) {
    for index in 0..registry.types.len() {
        let base_names = registry.types[index].base_types.clone();

        for base_name in &base_names {
            let Some(base_type) = registry.try_find_exact(base_name).cloned() else {
                continue;
            };

            let derived = &mut registry.types[index];
            inherit_members(&mut derived.fields, &base_type.fields);
            inherit_members(&mut derived.constructors, &base_type.constructors);
            inherit_members(&mut derived.properties, &base_type.properties);
            inherit_members(&mut derived.methods, &base_type.methods);
            inherit_members(&mut derived.enum_members, &base_type.enum_members);
            inherit_members(&mut derived.events, &base_type.events);
        }
    }
}

fn inherit_members<M>(derived: &mut Vec<M>, base: &[M])
where
    M: HasModifiers + Clone + PartialEq,
{
    for member in base {
        if member.modifiers().is_private() {
            continue;
        }
        if !derived.contains(member) {
            derived.push(member.clone());
        }
    }
}
