//! Function registry — accumulates declarations into exportable records
//!
//! [`FunctionApp`] is created once per application script. During the
//! declaration phase it grows one [`Function`] record per handler as trigger
//! and binding declarations are applied; afterwards the list is read-only and
//! each record exports its descriptor.
//!
//! Declarations for the same handler merge onto one record keyed by handler
//! identity, so a binding declared before its trigger (or the other way
//! around) lands on the same record, and declarations for different handlers
//! may interleave freely.

use crate::binding::{Binding, BlobOutput, HttpTrigger};
use crate::error::{BindlineError, Result};
use crate::function::{Function, Handler, PLACEHOLDER_SCRIPT_FILE};
use std::collections::HashMap;
use tracing::{debug, info};

/// Registry of declared functions for one application script.
pub struct FunctionApp {
    /// Script file recorded in every descriptor this app exports.
    script_file: String,
    /// Records in first-declaration order.
    functions: Vec<Function>,
    /// Handler identity → slot in `functions`.
    slots: HashMap<Handler, usize>,
}

impl FunctionApp {
    /// Create an app with the placeholder script file.
    pub fn new() -> Self {
        Self {
            script_file: PLACEHOLDER_SCRIPT_FILE.to_string(),
            functions: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Set the script file recorded in every exported descriptor.
    pub fn with_script_file(mut self, script_file: impl Into<String>) -> Self {
        self.script_file = script_file.into();
        self
    }

    /// Attach `trigger` to the function wrapping `handler`, creating the
    /// record if this is the handler's first declaration.
    pub fn on_trigger(&mut self, handler: &Handler, trigger: impl Into<Binding>) -> Result<()> {
        let trigger = trigger.into();
        // Checked before `entry` so a rejected declaration never leaves an
        // empty record behind.
        if !trigger.is_trigger() {
            return Err(BindlineError::NotATrigger(trigger.binding_type()));
        }
        let binding_type = trigger.binding_type();
        self.entry(handler)?.add_trigger(trigger)?;
        info!(
            function = handler.name(),
            trigger = binding_type,
            "attached trigger"
        );
        Ok(())
    }

    /// Attach a non-trigger `binding` to the function wrapping `handler`,
    /// creating the record if this is the handler's first declaration.
    pub fn binding(&mut self, handler: &Handler, binding: impl Into<Binding>) -> Result<()> {
        let binding = binding.into();
        let binding_type = binding.binding_type();
        self.entry(handler)?.add_binding(binding);
        debug!(
            function = handler.name(),
            binding = binding_type,
            "attached binding"
        );
        Ok(())
    }

    /// Declare an HTTP route trigger for `handler`. Sugar over
    /// [`on_trigger`](Self::on_trigger).
    pub fn route(&mut self, handler: &Handler, trigger: HttpTrigger) -> Result<()> {
        self.on_trigger(handler, trigger)
    }

    /// Declare a blob output binding for `handler`. Sugar over
    /// [`binding`](Self::binding).
    pub fn blob_output(&mut self, handler: &Handler, output: BlobOutput) -> Result<()> {
        self.binding(handler, output)
    }

    /// Accumulated records in first-declaration order, independent of how
    /// many bindings each accumulated afterwards.
    pub fn get_functions(&self) -> &[Function] {
        &self.functions
    }

    /// Script file applied to records this app creates.
    pub fn script_file(&self) -> &str {
        &self.script_file
    }

    /// The in-progress record for `handler`, created on first use.
    fn entry(&mut self, handler: &Handler) -> Result<&mut Function> {
        if !handler.is_valid_target() {
            return Err(BindlineError::InvalidDecorationTarget(
                handler.name().to_string(),
            ));
        }
        let slot = match self.slots.get(handler) {
            Some(&slot) => slot,
            None => {
                let slot = self.functions.len();
                self.functions.push(
                    Function::new(handler.clone()).with_script_file(self.script_file.clone()),
                );
                self.slots.insert(handler.clone(), slot);
                debug!(function = handler.name(), "created function record");
                slot
            }
        };
        Ok(&mut self.functions[slot])
    }
}

impl Default for FunctionApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{EventHubTrigger, Http};

    #[test]
    fn test_trigger_creates_record() {
        let mut app = FunctionApp::new();
        let handler = Handler::new("hello");
        app.on_trigger(&handler, HttpTrigger::new("req")).unwrap();

        let functions = app.get_functions();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].handler().name(), "hello");
        assert!(functions[0].get_trigger().is_some());
    }

    #[test]
    fn test_binding_then_trigger_merges_onto_one_record() {
        let mut app = FunctionApp::new();
        let handler = Handler::new("hello");
        app.binding(&handler, Http::new("res")).unwrap();
        app.on_trigger(&handler, HttpTrigger::new("req")).unwrap();

        let functions = app.get_functions();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].get_bindings().len(), 2);
    }

    #[test]
    fn test_duplicate_trigger_surfaces_error() {
        let mut app = FunctionApp::new();
        let handler = Handler::new("hello");
        app.on_trigger(&handler, HttpTrigger::new("req")).unwrap();

        let err = app.on_trigger(&handler, EventHubTrigger::new("event", "conn"));
        assert!(matches!(err, Err(BindlineError::DuplicateTrigger { .. })));
    }

    #[test]
    fn test_interleaved_handlers_land_on_their_own_records() {
        let mut app = FunctionApp::new();
        let first = Handler::new("first");
        let second = Handler::new("second");

        app.binding(&first, Http::new("res")).unwrap();
        app.on_trigger(&second, EventHubTrigger::new("event", "conn"))
            .unwrap();
        app.on_trigger(&first, HttpTrigger::new("req")).unwrap();

        let functions = app.get_functions();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].handler().name(), "first");
        assert_eq!(functions[1].handler().name(), "second");
        assert_eq!(functions[0].get_bindings().len(), 2);
        assert_eq!(functions[1].get_bindings().len(), 1);
    }

    #[test]
    fn test_empty_handler_is_invalid_target() {
        let mut app = FunctionApp::new();
        let handler = Handler::new("");
        let err = app.binding(&handler, Http::new("res"));
        assert!(matches!(
            err,
            Err(BindlineError::InvalidDecorationTarget(_))
        ));
        assert!(app.get_functions().is_empty());
    }

    #[test]
    fn test_script_file_applies_to_created_records() {
        let mut app = FunctionApp::new().with_script_file("orders.rs");
        let handler = Handler::new("hello");
        app.on_trigger(&handler, HttpTrigger::new("req")).unwrap();
        assert_eq!(app.get_functions()[0].script_file(), "orders.rs");
    }

    #[test]
    fn test_sugar_declarations() {
        use crate::options::DataType;

        let mut app = FunctionApp::new();
        let handler = Handler::new("archive");
        app.route(&handler, HttpTrigger::new("req")).unwrap();
        app.blob_output(
            &handler,
            BlobOutput::new("out", "conn", "archive/{rand-guid}", DataType::Binary),
        )
        .unwrap();

        let functions = app.get_functions();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].get_bindings().len(), 2);
    }
}
