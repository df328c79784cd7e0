//! Enumerated binding options
//!
//! Closed sets of string-valued options used in trigger and binding
//! declarations. Each value stringifies to exactly the literal the host
//! runtime expects in the exported descriptor; case is preserved as declared,
//! not normalized. The enums are write-only: nothing in this crate parses
//! them back from strings.

use serde::Serialize;
use std::fmt;

/// Data flow direction of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BindingDirection {
    /// Data flows into the function.
    #[serde(rename = "in")]
    In,
    /// Data flows out of the function.
    #[serde(rename = "out")]
    Out,
}

impl BindingDirection {
    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingDirection::In => "in",
            BindingDirection::Out => "out",
        }
    }
}

impl fmt::Display for BindingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP method accepted by an HTTP trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PATCH")]
    Patch,
    #[serde(rename = "PUT")]
    Put,
}

impl HttpMethod {
    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization level required to invoke an HTTP-triggered function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AuthLevel {
    /// A function-specific key is required.
    #[serde(rename = "function")]
    Function,
    /// No key is required.
    #[default]
    #[serde(rename = "anonymous")]
    Anonymous,
    /// The host's master key is required.
    #[serde(rename = "admin")]
    Admin,
}

impl AuthLevel {
    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthLevel::Function => "function",
            AuthLevel::Anonymous => "anonymous",
            AuthLevel::Admin => "admin",
        }
    }
}

impl fmt::Display for AuthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload representation for blob bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    /// Decoded text.
    #[serde(rename = "string")]
    String,
    /// Raw bytes.
    #[serde(rename = "binary")]
    Binary,
    /// Streamed bytes.
    #[serde(rename = "stream")]
    Stream,
}

impl DataType {
    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Binary => "binary",
            DataType::Stream => "stream",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
