#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # Bindline
//!
//! Bindline is a declarative metadata layer for serverless functions:
//! handlers are annotated with triggers and bindings (HTTP, Blob, EventHub),
//! and the layer accumulates those declarations into serializable
//! descriptors — one `function.json`-equivalent per handler — consumed by an
//! external host runtime.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ Declarations │────▶│ FunctionApp   │────▶│ Descriptors    │
//! │ (per handler)│     │ (registry)    │     │ (function.json)│
//! └──────────────┘     └──────────────┘     └────────────────┘
//!                            │
//!                      ┌─────┴─────┐
//!                      │ Function  │
//!                      │ records   │
//!                      └───────────┘
//! ```
//!
//! Bindline never executes anything: the host runtime reads the exported
//! descriptors and invokes the handlers itself. The only state is the
//! in-memory registry, written during the declaration phase and read-only
//! afterwards.
//!
//! # Library Usage
//!
//! ```
//! use bindline::{FunctionApp, Handler, Http, HttpMethod, HttpTrigger};
//!
//! fn main() -> bindline::Result<()> {
//!     let mut app = FunctionApp::new().with_script_file("orders.rs");
//!     let handler = Handler::new("process_order");
//!
//!     // Declarations for one handler merge in any order.
//!     app.binding(&handler, Http::new("res"))?;
//!     app.on_trigger(
//!         &handler,
//!         HttpTrigger::new("req").with_methods([HttpMethod::Get, HttpMethod::Post]),
//!     )?;
//!
//!     for function in app.get_functions() {
//!         println!("{}", function.get_function_json()?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`options`] — enumerated option types that serialize to fixed literals
//! - [`binding`] — the closed set of trigger and binding variants
//! - [`function`] — per-handler records and descriptor export
//! - [`app`] — the registry accumulating declarations per script
//! - [`error`] — crate error type and `Result` alias

pub mod app;
pub mod binding;
pub mod error;
pub mod function;
pub mod options;

pub use app::FunctionApp;
pub use binding::{Binding, BlobInput, BlobOutput, BlobTrigger, EventHubTrigger, Http, HttpTrigger};
pub use error::{BindlineError, Result};
pub use function::{Function, Handler};
pub use options::{AuthLevel, BindingDirection, DataType, HttpMethod};
