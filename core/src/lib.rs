//! Domain core for the docket service: the in-memory todo store and the
//! document upload pipeline.
//!
//! # Overview
//! - `TodoStore` owns the ordered todo collection behind a single lock and is
//!   shared by cloning.
//! - `form` binds dotted form fields onto a `DocumentRecord`; `validate`
//!   rejects records with missing fields.
//! - `render` lays a validated record out on one Letter page and writes it
//!   as a PDF.
//!
//! # Design
//! - No HTTP or async runtime types appear here; the server crate adapts
//!   these operations to requests.
//! - The store and the renderer are independent of each other.

pub mod error;
pub mod form;
pub mod render;
pub mod store;
pub mod types;
mod validate;

pub use error::{RenderError, StoreError, ValidationError};
pub use form::bind_document;
pub use render::DocumentRenderer;
pub use store::TodoStore;
pub use types::{CompanyInfo, DocumentRecord, TodoRecord};
