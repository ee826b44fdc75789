//! Domain records for the todo collection and the document upload.
//!
//! # Design
//! `TodoRecord` is the wire type as well as the stored type: its JSON field
//! names (`id`, `created`, `item`, `completed`) are a stable contract, so the
//! serde attributes here are the single source of truth for them.
//!
//! `DocumentRecord` never crosses the wire as JSON. It is bound from form
//! fields (see `form`), checked by `validate`, then handed to the renderer.
//! Its `Display` impl is the plain-text dump returned by the upload endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single task entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: String,
    pub created: String,
    pub item: String,
    pub completed: bool,
}

impl TodoRecord {
    pub fn new(id: &str, created: &str, item: &str, completed: bool) -> Self {
        Self {
            id: id.to_string(),
            created: created.to_string(),
            item: item.to_string(),
            completed,
        }
    }
}

/// Header and issuing-company block of a business document.
///
/// An `id` of zero and empty strings mean "not provided"; `validate` rejects
/// them before the record reaches the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: i64,
    pub kind: String,
    pub company: CompanyInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: String,
    pub address1: String,
    pub address2: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl fmt::Display for DocumentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Id:{} Type:{} Company:{}}}",
            self.id, self.kind, self.company
        )
    }
}

impl fmt::Display for CompanyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Name:{} Address1:{} Address2:{} Phone:{} Email:{} Website:{}}}",
            self.name, self.address1, self.address2, self.phone, self.email, self.website
        )
    }
}
