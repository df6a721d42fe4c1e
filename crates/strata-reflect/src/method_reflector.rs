//! Method reflection over user objects

use strata_convert::object::is_visible;
use strata_convert::{ObjectRef, Value};
use strata_errors::ApplicationResult;

/// Case-insensitive method lookup and invocation on [`ObjectRef`]s
#[derive(Debug, Clone, Copy)]
pub struct MethodReflector;

impl MethodReflector {
    fn resolve_name(obj: &ObjectRef, name: &str) -> Option<String> {
        if !is_visible(name) {
            return None;
        }
        let wanted = name.to_lowercase();
        obj.read()
            .method_names()
            .into_iter()
            .find(|candidate| is_visible(candidate) && candidate.to_lowercase() == wanted)
    }

    /// Check whether the object exposes a method
    #[inline]
    #[must_use]
    pub fn has_method(obj: &ObjectRef, name: &str) -> bool {
        Self::resolve_name(obj, name).is_some()
    }

    /// Invoke a method with positional arguments
    ///
    /// Returns `Ok(None)` when no such method exists.
    ///
    /// # Errors
    ///
    /// Whatever error the method itself returns, unchanged.
    pub fn invoke_method(obj: &ObjectRef, name: &str, args: &[Value]) -> ApplicationResult<Option<Value>> {
        let Some(exact) = Self::resolve_name(obj, name) else {
            return Ok(None);
        };
        obj.write().invoke_method(&exact, args).transpose()
    }

    /// Visible method names
    #[must_use]
    pub fn get_method_names(obj: &ObjectRef) -> Vec<String> {
        obj.read()
            .method_names()
            .into_iter()
            .filter(|name| is_visible(name))
            .collect()
    }
}
