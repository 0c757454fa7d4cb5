//! Recursive call-consequence tracing over the registry.

use log::debug;

use crate::model::{If, IfSection, Invocation, MethodBody, Statement, Switch, SwitchSection};
use crate::registry::TypeRegistry;

/// Read-only query engine answering "what executes as a consequence of this
/// invocation?".
///
/// Unknown containing types and unmatched names degrade to empty results,
/// never errors: call sites into library code are expected and simply end
/// a branch of the trace.
///
/// The default tracer performs no cycle detection. A model in which a
/// method transitively invokes itself recurses without bound, exactly like
/// the behavior it reproduces. [`with_cycle_guard`](Self::with_cycle_guard)
/// opts into truncation; see its documentation for how that changes the
/// output.
pub struct InvocationTracer<'a> {
    registry: &'a TypeRegistry,
    guard_cycles: bool,
}

/// Identity of a call site on the active resolution path.
#[derive(Clone, PartialEq, Eq)]
struct CallKey {
    containing_type: String,
    name: String,
    argument_types: Vec<String>,
}

impl CallKey {
    fn of(invocation: &Invocation) -> Self {
        Self {
            containing_type: invocation.containing_type.clone(),
            name: invocation.name.clone(),
            argument_types: invocation.argument_types().map(str::to_string).collect(),
        }
    }
}

impl<'a> InvocationTracer<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            guard_cycles: false,
        }
    }

    /// A tracer that truncates cyclic call chains.
    ///
    /// An invocation whose (containing type, name, argument types) is
    /// already on the active resolution path is emitted once more as a leaf
    /// and not expanded further: a self-recursive `A` traces to `[A, A]`,
    /// and a mutual cycle between `A` and `B` to `[A, B, A]`. Repeats that
    /// are *not* on the active path (diamond shapes) are still expanded
    /// every time they are reached. Guarded output is therefore a
    /// truncation of the unguarded sequence, not a reordering of it.
    pub fn with_cycle_guard(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            guard_cycles: true,
        }
    }

    /// Every body-bearing member the invocation could statically target.
    ///
    /// All matching overloads are returned; ambiguity is deliberately left
    /// to the consumer, which needs every plausible target.
    pub fn invoked_methods(&self, invocation: &Invocation) -> Vec<&'a dyn MethodBody> {
        let Some(target_type) = self.registry.try_find_exact(&invocation.containing_type) else {
            return Vec::new();
        };

        let targets: Vec<_> = target_type
            .method_bodies()
            .filter(|candidate| invocation.matches_method(*candidate))
            .collect();

        debug!(
            "resolved {} target(s) for {}.{}",
            targets.len(),
            invocation.containing_type,
            invocation.name
        );

        targets
    }

    /// The transitive invocation chain reachable from `invocation`,
    /// depth-first and pre-order: the root always comes first, and each
    /// resolved target's nested invocations follow in body order.
    ///
    /// An invocation that resolves to nothing is a leaf, so the result for
    /// an unknown method is exactly the root invocation.
    pub fn invocation_consequences(&self, invocation: &Invocation) -> Vec<Invocation> {
        self.invocation_consequences_inner(invocation, &mut Vec::new())
    }

    fn invocation_consequences_inner(
        &self,
        invocation: &Invocation,
        path: &mut Vec<CallKey>,
    ) -> Vec<Invocation> {
        let mut consequences = vec![invocation.clone()];

        if self.guard_cycles {
            let key = CallKey::of(invocation);
            if path.contains(&key) {
                return consequences;
            }
            path.push(key);
        }

        for target in self.invoked_methods(invocation) {
            for statement in target.statements() {
                if let Statement::Invocation(nested) = statement {
                    consequences.extend(self.invocation_consequences_inner(nested, path));
                }
            }
        }

        if self.guard_cycles {
            path.pop();
        }

        consequences
    }

    /// Like [`invocation_consequences`](Self::invocation_consequences), but
    /// walks *all* statements of each resolved target's body through the
    /// expander, preserving switch/if structure. The root invocation is
    /// always the first element.
    pub fn statement_consequences(&self, invocation: &Invocation) -> Vec<Statement> {
        self.statement_consequences_inner(invocation, &mut Vec::new())
    }

    fn statement_consequences_inner(
        &self,
        invocation: &Invocation,
        path: &mut Vec<CallKey>,
    ) -> Vec<Statement> {
        let mut consequences = vec![Statement::Invocation(invocation.clone())];

        if self.guard_cycles {
            let key = CallKey::of(invocation);
            if path.contains(&key) {
                return consequences;
            }
            path.push(key);
        }

        for target in self.invoked_methods(invocation) {
            for statement in target.statements() {
                consequences.extend(self.expand_statement_inner(statement, path));
            }
        }

        if self.guard_cycles {
            path.pop();
        }

        consequences
    }

    /// Structurally expand one statement.
    ///
    /// Invocations are inlined into their full statement consequences.
    /// Switches and ifs are rebuilt with every section kept (labels and
    /// conditions verbatim) and the section bodies expanded, so a switch or
    /// if with zero sections expands to a single empty node of the same
    /// kind, not to nothing.
    pub fn expand_statement(&self, statement: &Statement) -> Vec<Statement> {
        self.expand_statement_inner(statement, &mut Vec::new())
    }

    fn expand_statement_inner(
        &self,
        statement: &Statement,
        path: &mut Vec<CallKey>,
    ) -> Vec<Statement> {
        match statement {
            Statement::Invocation(invocation) => {
                self.statement_consequences_inner(invocation, path)
            }

            Statement::Switch(source) => {
                let mut expanded = Switch::new(source.expression.clone());
                for section in &source.sections {
                    expanded.sections.push(SwitchSection {
                        labels: section.labels.clone(),
                        statements: self.expand_section_statements(&section.statements, path),
                    });
                }
                vec![Statement::Switch(expanded)]
            }

            Statement::If(source) => {
                let mut expanded = If::new();
                for section in &source.sections {
                    expanded.sections.push(IfSection {
                        condition: section.condition.clone(),
                        statements: self.expand_section_statements(&section.statements, path),
                    });
                }
                vec![Statement::If(expanded)]
            }

            // Opaque statements carry nothing the trace can follow.
            Statement::Other(_) => Vec::new(),
        }
    }

    // Opaque statements survive as leaves inside a rebuilt section; at the
    // root of an expansion they produce nothing.
    fn expand_section_statements(
        &self,
        statements: &[Statement],
        path: &mut Vec<CallKey>,
    ) -> Vec<Statement> {
        let mut expanded = Vec::new();
        for statement in statements {
            match statement {
                Statement::Other(_) => expanded.push(statement.clone()),
                traversable => expanded.extend(self.expand_statement_inner(traversable, path)),
            }
        }
        expanded
    }
}
