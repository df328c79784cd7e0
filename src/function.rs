//! Function record — one handler plus its trigger and bindings
//!
//! A [`Function`] aggregates everything declared for one handler: at most one
//! trigger and any number of additional bindings, in declaration order. The
//! record serializes to the descriptor the host runtime reads to wire the
//! handler up.

use crate::binding::Binding;
use crate::error::{BindlineError, Result};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Placeholder recorded when no script file is configured.
pub const PLACEHOLDER_SCRIPT_FILE: &str = "dummy";

/// Opaque identity of the user code a [`Function`] wraps.
///
/// The host runtime resolves and invokes the actual callable; this layer
/// records identity only. Handler names are the merge key for declarations,
/// so they must be unique within one application script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Handler {
    name: String,
}

impl Handler {
    /// Create a handler identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Handler name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this handler can be the target of a declaration.
    pub(crate) fn is_valid_target(&self) -> bool {
        !self.name.is_empty()
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A declared function: one handler, at most one trigger, and the ordered
/// bindings attached to it.
#[derive(Debug, Clone)]
pub struct Function {
    handler: Handler,
    script_file: String,
    /// Position of the trigger within `bindings`, once attached.
    trigger: Option<usize>,
    /// Combined sequence in declaration order; the trigger sits at the
    /// position it was attached, not at a forced index.
    bindings: Vec<Binding>,
}

impl Function {
    /// Create a record for `handler` with the placeholder script file.
    pub fn new(handler: Handler) -> Self {
        Self {
            handler,
            script_file: PLACEHOLDER_SCRIPT_FILE.to_string(),
            trigger: None,
            bindings: Vec::new(),
        }
    }

    /// Set the script file recorded in the descriptor.
    pub fn with_script_file(mut self, script_file: impl Into<String>) -> Self {
        self.script_file = script_file.into();
        self
    }

    /// Append a non-trigger binding.
    ///
    /// Duplicate parameter names are not rejected; the host sees every
    /// occurrence in declaration order.
    pub fn add_binding(&mut self, binding: impl Into<Binding>) {
        self.bindings.push(binding.into());
    }

    /// Attach the trigger and append it to the combined sequence.
    ///
    /// Fails if the trigger slot is already occupied, or if `trigger` is not
    /// a trigger variant.
    pub fn add_trigger(&mut self, trigger: impl Into<Binding>) -> Result<()> {
        let trigger = trigger.into();
        if !trigger.is_trigger() {
            return Err(BindlineError::NotATrigger(trigger.binding_type()));
        }
        if self.trigger.is_some() {
            return Err(BindlineError::DuplicateTrigger {
                function: self.handler.name().to_string(),
                rejected: trigger.binding_type(),
            });
        }
        self.trigger = Some(self.bindings.len());
        self.bindings.push(trigger);
        Ok(())
    }

    /// The attached trigger, if any.
    pub fn get_trigger(&self) -> Option<&Binding> {
        self.trigger.and_then(|slot| self.bindings.get(slot))
    }

    /// All bindings in declaration order, trigger included.
    pub fn get_bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// The handler this record wraps.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Script file recorded in the descriptor.
    pub fn script_file(&self) -> &str {
        &self.script_file
    }

    /// Ordered descriptor mapping: script file plus every binding's dict
    /// representation in declaration order.
    pub fn get_dict_repr(&self) -> Map<String, Value> {
        let mut repr = Map::new();
        repr.insert(
            "scriptFile".to_string(),
            self.script_file.as_str().into(),
        );
        let bindings: Vec<Value> = self
            .bindings
            .iter()
            .map(|b| Value::Object(b.get_dict_repr()))
            .collect();
        repr.insert("bindings".to_string(), Value::Array(bindings));
        repr
    }

    /// Descriptor JSON text, key order exactly as inserted.
    pub fn get_function_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.get_dict_repr())?)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.get_dict_repr()))
    }
}

impl Serialize for Function {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get_dict_repr().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{BlobInput, EventHubTrigger, Http, HttpTrigger};
    use crate::options::DataType;

    fn test_function() -> Function {
        Function::new(Handler::new("process_order"))
    }

    #[test]
    fn test_new_uses_placeholder_script_file() {
        let func = test_function();
        assert_eq!(func.script_file(), "dummy");
        assert!(func.get_trigger().is_none());
        assert!(func.get_bindings().is_empty());
    }

    #[test]
    fn test_trigger_slot_set_once() {
        let mut func = test_function();
        func.add_trigger(HttpTrigger::new("req")).unwrap();
        assert!(func.get_trigger().is_some());

        let err = func.add_trigger(EventHubTrigger::new("event", "conn"));
        assert!(matches!(err, Err(BindlineError::DuplicateTrigger { .. })));
        // The rejected trigger must not leak into the sequence.
        assert_eq!(func.get_bindings().len(), 1);
    }

    #[test]
    fn test_non_trigger_rejected_by_add_trigger() {
        let mut func = test_function();
        let err = func.add_trigger(Http::new("res"));
        assert!(matches!(err, Err(BindlineError::NotATrigger("http"))));
        assert!(func.get_trigger().is_none());
    }

    #[test]
    fn test_trigger_keeps_declaration_position() {
        let mut func = test_function();
        func.add_binding(Http::new("res"));
        func.add_binding(BlobInput::new("doc", "conn", "docs/{id}", DataType::String));
        func.add_trigger(HttpTrigger::new("req")).unwrap();

        let bindings = func.get_bindings();
        assert_eq!(bindings.len(), 3);
        assert_eq!(bindings[2].binding_type(), "httpTrigger");
        assert_eq!(func.get_trigger().map(|t| t.name()), Some("req"));
    }

    #[test]
    fn test_duplicate_binding_names_allowed() {
        let mut func = test_function();
        func.add_binding(Http::new("res"));
        func.add_binding(Http::new("res"));
        assert_eq!(func.get_bindings().len(), 2);
    }

    #[test]
    fn test_dict_repr_shape() {
        let mut func = test_function();
        func.add_trigger(HttpTrigger::new("req")).unwrap();

        let repr = func.get_dict_repr();
        let keys: Vec<&str> = repr.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["scriptFile", "bindings"]);
        assert_eq!(repr["scriptFile"], "dummy");
        assert_eq!(repr["bindings"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_display_matches_function_json() {
        let mut func = test_function().with_script_file("orders.rs");
        func.add_trigger(EventHubTrigger::new("event", "myconn"))
            .unwrap();
        assert_eq!(func.to_string(), func.get_function_json().unwrap());
    }
}
