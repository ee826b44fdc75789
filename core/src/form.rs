//! Schema-driven binding of dotted form fields onto a `DocumentRecord`.
//!
//! Each known field path maps to exactly one attribute. Unknown names are
//! ignored, missing names leave the attribute at its zero value so the
//! validator can report them by path.

use crate::error::ValidationError;
use crate::types::DocumentRecord;

pub const DOCUMENT_ID: &str = "Document.Id";
pub const DOCUMENT_TYPE: &str = "Document.Type";
pub const COMPANY_NAME: &str = "Document.Company.Name";
pub const COMPANY_ADDRESS1: &str = "Document.Company.Address1";
pub const COMPANY_ADDRESS2: &str = "Document.Company.Address2";
pub const COMPANY_PHONE: &str = "Document.Company.Phone";
pub const COMPANY_EMAIL: &str = "Document.Company.Email";
pub const COMPANY_WEBSITE: &str = "Document.Company.Website";

impl DocumentRecord {
    /// Bind `(name, value)` pairs. A repeated name overwrites earlier values.
    ///
    /// Only conversion failures are reported here; use `bind_document` to
    /// also enforce required fields.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = DocumentRecord::default();
        for (name, value) in fields {
            record.bind_field(name.as_ref(), value.into())?;
        }
        Ok(record)
    }

    fn bind_field(&mut self, name: &str, value: String) -> Result<(), ValidationError> {
        if name == DOCUMENT_ID {
            let value = value.trim();
            // An unfilled input stays at zero and is reported as missing.
            if value.is_empty() {
                self.id = 0;
                return Ok(());
            }
            self.id = value
                .parse()
                .map_err(|err: std::num::ParseIntError| ValidationError::InvalidField {
                    path: DOCUMENT_ID,
                    reason: err.to_string(),
                })?;
            return Ok(());
        }
        let slot = match name {
            DOCUMENT_TYPE => &mut self.kind,
            COMPANY_NAME => &mut self.company.name,
            COMPANY_ADDRESS1 => &mut self.company.address1,
            COMPANY_ADDRESS2 => &mut self.company.address2,
            COMPANY_PHONE => &mut self.company.phone,
            COMPANY_EMAIL => &mut self.company.email,
            COMPANY_WEBSITE => &mut self.company.website,
            _ => return Ok(()),
        };
        *slot = value;
        Ok(())
    }
}

/// Bind form fields and reject the result unless every required field is set.
pub fn bind_document<I, K, V>(fields: I) -> Result<DocumentRecord, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let record = DocumentRecord::from_fields(fields)?;
    record.validate()?;
    Ok(record)
}
