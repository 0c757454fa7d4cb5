//! Overload matching between a call site and a candidate signature.

use crate::model::{Invocation, MethodBody, Param};

impl Invocation {
    /// Whether this call site could statically target `method`.
    ///
    /// Names compare ordinally and types compare as raw strings: no
    /// implicit conversions, no generic substitution, no normalization of
    /// generic-argument spelling. Several overloads of one name may match
    /// the same call; resolution keeps all of them.
    pub fn matches_method(&self, method: &dyn MethodBody) -> bool {
        self.name == method.name() && self.matches_parameters(method)
    }

    /// Whether the supplied argument types are compatible with the
    /// candidate's parameter list.
    ///
    /// With no default-valued parameters the full type sequences must be
    /// equal. As soon as any parameter carries a default, only the first N
    /// parameter types (N = supplied argument count) are compared, so
    /// trailing defaulted parameters may be omitted at the call site.
    pub fn matches_parameters(&self, method: &dyn MethodBody) -> bool {
        let parameters = method.parameters();

        if self.arguments.is_empty() {
            return parameters.is_empty();
        }

        if self.arguments.len() > parameters.len() {
            return false;
        }

        let optional_count = parameters
            .iter()
            .filter(|parameter| parameter.has_default_value)
            .count();

        if optional_count == 0 {
            return parameters.len() == self.arguments.len() && self.types_match(parameters);
        }

        self.types_match(&parameters[..self.arguments.len()])
    }

    fn types_match(&self, parameters: &[Param]) -> bool {
        parameters
            .iter()
            .map(|parameter| parameter.type_name.as_str())
            .eq(self.argument_types())
    }
}
