//! Binding variants — triggers and input/output bindings
//!
//! A [`Binding`] is one trigger or data connection declared for a function.
//! The set of variants is closed; each variant carries its own fields, a
//! type-level wire tag, and a direction fixed by its category (triggers and
//! input bindings flow in, output bindings flow out).
//!
//! Every variant produces a canonical ordered mapping via
//! [`Binding::get_dict_repr`]. Key order is part of the wire contract the
//! host runtime consumes, so representations are built explicitly rather
//! than derived.

use crate::options::{AuthLevel, BindingDirection, DataType, HttpMethod};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// HTTP request trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTrigger {
    /// Parameter name the request is bound to.
    pub name: String,
    /// Accepted methods (None = host default, all methods).
    pub methods: Option<Vec<HttpMethod>>,
    /// Authorization level required to invoke the route.
    pub auth_level: AuthLevel,
    /// Route prefix the host serves this function under. Not part of the
    /// exported descriptor.
    pub route: String,
}

impl HttpTrigger {
    /// Wire tag for this variant.
    pub const BINDING_TYPE: &'static str = "httpTrigger";

    /// Create a trigger bound to `name` with anonymous auth and the default
    /// `/api` route.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: None,
            auth_level: AuthLevel::Anonymous,
            route: "/api".to_string(),
        }
    }

    /// Restrict the accepted methods. Order is preserved in the descriptor.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = HttpMethod>) -> Self {
        self.methods = Some(methods.into_iter().collect());
        self
    }

    /// Set the authorization level.
    pub fn with_auth_level(mut self, auth_level: AuthLevel) -> Self {
        self.auth_level = auth_level;
        self
    }

    /// Set the route prefix.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }
}

/// HTTP response output binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Http {
    /// Parameter name the response is bound to.
    pub name: String,
}

impl Http {
    /// Wire tag for this variant.
    pub const BINDING_TYPE: &'static str = "http";

    /// Create an output binding for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Blob read binding — the payload at `path` is handed to the function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobInput {
    /// Parameter name the blob is bound to.
    pub name: String,
    /// Name of the connection setting the host resolves.
    pub connection: String,
    /// Blob path within the storage account.
    pub path: String,
    /// Payload representation.
    pub data_type: DataType,
}

impl BlobInput {
    /// Wire tag for this variant.
    pub const BINDING_TYPE: &'static str = "blob";

    /// Create an input binding for `name`.
    pub fn new(
        name: impl Into<String>,
        connection: impl Into<String>,
        path: impl Into<String>,
        data_type: DataType,
    ) -> Self {
        Self {
            name: name.into(),
            connection: connection.into(),
            path: path.into(),
            data_type,
        }
    }
}

/// Blob write binding — the function's output is written to `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobOutput {
    /// Parameter name the blob is bound to.
    pub name: String,
    /// Name of the connection setting the host resolves.
    pub connection: String,
    /// Blob path within the storage account.
    pub path: String,
    /// Payload representation.
    pub data_type: DataType,
}

impl BlobOutput {
    /// Wire tag for this variant.
    pub const BINDING_TYPE: &'static str = "blob";

    /// Create an output binding for `name`.
    pub fn new(
        name: impl Into<String>,
        connection: impl Into<String>,
        path: impl Into<String>,
        data_type: DataType,
    ) -> Self {
        Self {
            name: name.into(),
            connection: connection.into(),
            path: path.into(),
            data_type,
        }
    }
}

/// Trigger on blob creation or update at `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobTrigger {
    /// Parameter name the blob is bound to.
    pub name: String,
    /// Name of the connection setting the host resolves.
    pub connection: String,
    /// Blob path within the storage account.
    pub path: String,
    /// Payload representation.
    pub data_type: DataType,
}

impl BlobTrigger {
    /// Wire tag for this variant.
    pub const BINDING_TYPE: &'static str = "blobTrigger";

    /// Create a trigger for `name`.
    pub fn new(
        name: impl Into<String>,
        connection: impl Into<String>,
        path: impl Into<String>,
        data_type: DataType,
    ) -> Self {
        Self {
            name: name.into(),
            connection: connection.into(),
            path: path.into(),
            data_type,
        }
    }
}

/// Trigger on messages arriving at an event hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHubTrigger {
    /// Parameter name the event is bound to.
    pub name: String,
    /// Name of the connection setting the host resolves.
    pub connection: String,
}

impl EventHubTrigger {
    /// Wire tag for this variant.
    pub const BINDING_TYPE: &'static str = "EventHubTrigger";

    /// Create a trigger for `name`.
    pub fn new(name: impl Into<String>, connection: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection: connection.into(),
        }
    }
}

/// A single trigger or binding declared for a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// HTTP request trigger.
    HttpTrigger(HttpTrigger),
    /// HTTP response output.
    Http(Http),
    /// Blob read binding.
    BlobInput(BlobInput),
    /// Blob write binding.
    BlobOutput(BlobOutput),
    /// Trigger on blob creation or update.
    BlobTrigger(BlobTrigger),
    /// Trigger on event hub messages.
    EventHubTrigger(EventHubTrigger),
}

impl Binding {
    /// Wire tag identifying the variant. Type-level: identical for every
    /// instance of a given variant.
    pub fn binding_type(&self) -> &'static str {
        match self {
            Binding::HttpTrigger(_) => HttpTrigger::BINDING_TYPE,
            Binding::Http(_) => Http::BINDING_TYPE,
            Binding::BlobInput(_) => BlobInput::BINDING_TYPE,
            Binding::BlobOutput(_) => BlobOutput::BINDING_TYPE,
            Binding::BlobTrigger(_) => BlobTrigger::BINDING_TYPE,
            Binding::EventHubTrigger(_) => EventHubTrigger::BINDING_TYPE,
        }
    }

    /// Parameter name this binding is attached to.
    pub fn name(&self) -> &str {
        match self {
            Binding::HttpTrigger(t) => &t.name,
            Binding::Http(b) => &b.name,
            Binding::BlobInput(b) => &b.name,
            Binding::BlobOutput(b) => &b.name,
            Binding::BlobTrigger(t) => &t.name,
            Binding::EventHubTrigger(t) => &t.name,
        }
    }

    /// Data flow direction, fixed by the variant's category.
    pub fn direction(&self) -> BindingDirection {
        match self {
            Binding::HttpTrigger(_)
            | Binding::BlobInput(_)
            | Binding::BlobTrigger(_)
            | Binding::EventHubTrigger(_) => BindingDirection::In,
            Binding::Http(_) | Binding::BlobOutput(_) => BindingDirection::Out,
        }
    }

    /// Whether this variant is a trigger. A function holds at most one.
    pub fn is_trigger(&self) -> bool {
        matches!(
            self,
            Binding::HttpTrigger(_) | Binding::BlobTrigger(_) | Binding::EventHubTrigger(_)
        )
    }

    /// Canonical ordered mapping for the exported descriptor.
    ///
    /// Key order is fixed per variant and preserved through serialization.
    pub fn get_dict_repr(&self) -> Map<String, Value> {
        let mut repr = Map::new();
        match self {
            Binding::HttpTrigger(t) => {
                repr.insert("authLevel".to_string(), t.auth_level.as_str().into());
                repr.insert("type".to_string(), self.binding_type().into());
                repr.insert("direction".to_string(), self.direction().as_str().into());
                repr.insert("name".to_string(), t.name.as_str().into());
                if let Some(methods) = &t.methods {
                    let methods: Vec<Value> =
                        methods.iter().map(|m| m.as_str().into()).collect();
                    repr.insert("methods".to_string(), Value::Array(methods));
                }
            }
            Binding::Http(b) => {
                repr.insert("type".to_string(), self.binding_type().into());
                repr.insert("direction".to_string(), self.direction().as_str().into());
                repr.insert("name".to_string(), b.name.as_str().into());
            }
            Binding::BlobInput(b) => {
                self.blob_repr(&mut repr, &b.name, b.data_type, &b.path, &b.connection);
            }
            Binding::BlobOutput(b) => {
                self.blob_repr(&mut repr, &b.name, b.data_type, &b.path, &b.connection);
            }
            Binding::BlobTrigger(t) => {
                self.blob_repr(&mut repr, &t.name, t.data_type, &t.path, &t.connection);
            }
            // Event hub descriptors carry only the connection and name; the
            // host resolves the hub from the connection setting. This shape
            // is inconsistent with every other variant but is what deployed
            // consumers read, so it is preserved as-is.
            Binding::EventHubTrigger(t) => {
                repr.insert("connection".to_string(), t.connection.as_str().into());
                repr.insert("name".to_string(), t.name.as_str().into());
            }
        }
        repr
    }

    /// Shared layout for the three blob variants.
    fn blob_repr(
        &self,
        repr: &mut Map<String, Value>,
        name: &str,
        data_type: DataType,
        path: &str,
        connection: &str,
    ) {
        repr.insert("type".to_string(), self.binding_type().into());
        repr.insert("direction".to_string(), self.direction().as_str().into());
        repr.insert("name".to_string(), name.into());
        repr.insert("dataType".to_string(), data_type.as_str().into());
        repr.insert("path".to_string(), path.into());
        repr.insert("connection".to_string(), connection.into());
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.get_dict_repr()))
    }
}

impl Serialize for Binding {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get_dict_repr().serialize(serializer)
    }
}

impl From<HttpTrigger> for Binding {
    fn from(value: HttpTrigger) -> Self {
        Binding::HttpTrigger(value)
    }
}

impl From<Http> for Binding {
    fn from(value: Http) -> Self {
        Binding::Http(value)
    }
}

impl From<BlobInput> for Binding {
    fn from(value: BlobInput) -> Self {
        Binding::BlobInput(value)
    }
}

impl From<BlobOutput> for Binding {
    fn from(value: BlobOutput) -> Self {
        Binding::BlobOutput(value)
    }
}

impl From<BlobTrigger> for Binding {
    fn from(value: BlobTrigger) -> Self {
        Binding::BlobTrigger(value)
    }
}

impl From<EventHubTrigger> for Binding {
    fn from(value: EventHubTrigger) -> Self {
        Binding::EventHubTrigger(value)
    }
}
