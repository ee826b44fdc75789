//! Required-field checks for `DocumentRecord`.

use crate::error::ValidationError;
use crate::form::{
    COMPANY_ADDRESS1, COMPANY_ADDRESS2, COMPANY_EMAIL, COMPANY_NAME, COMPANY_PHONE,
    COMPANY_WEBSITE, DOCUMENT_ID, DOCUMENT_TYPE,
};
use crate::types::DocumentRecord;

impl DocumentRecord {
    /// Check that the id is non-zero and every text field is non-empty.
    ///
    /// All failing paths are collected, in declaration order, into a single
    /// `ValidationError::MissingFields`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let company = &self.company;
        let text_fields = [
            (DOCUMENT_TYPE, &self.kind),
            (COMPANY_NAME, &company.name),
            (COMPANY_ADDRESS1, &company.address1),
            (COMPANY_ADDRESS2, &company.address2),
            (COMPANY_PHONE, &company.phone),
            (COMPANY_EMAIL, &company.email),
            (COMPANY_WEBSITE, &company.website),
        ];

        let mut missing = Vec::new();
        if self.id == 0 {
            missing.push(DOCUMENT_ID);
        }
        missing.extend(
            text_fields
                .iter()
                .filter(|(_, value)| value.is_empty())
                .map(|(path, _)| *path),
        );

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompanyInfo;

    fn complete() -> DocumentRecord {
        DocumentRecord {
            id: 7,
            kind: "Invoice".to_string(),
            company: CompanyInfo {
                name: "Acme".to_string(),
                address1: "1 Main St".to_string(),
                address2: "Springfield".to_string(),
                phone: "555-0100".to_string(),
                email: "billing@acme.test".to_string(),
                website: "acme.test".to_string(),
            },
        }
    }

    #[test]
    fn fully_populated_record_is_valid() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn empty_phone_is_named() {
        let mut record = complete();
        record.company.phone.clear();
        assert_eq!(
            record.validate(),
            Err(ValidationError::MissingFields(vec![COMPANY_PHONE]))
        );
    }

    #[test]
    fn zero_id_counts_as_missing() {
        let mut record = complete();
        record.id = 0;
        assert_eq!(
            record.validate(),
            Err(ValidationError::MissingFields(vec![DOCUMENT_ID]))
        );
    }

    #[test]
    fn negative_id_is_accepted() {
        let mut record = complete();
        record.id = -3;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn empty_record_names_every_field_in_order() {
        let err = DocumentRecord::default().validate().unwrap_err();
        assert_eq!(
            err.paths(),
            vec![
                DOCUMENT_ID,
                DOCUMENT_TYPE,
                COMPANY_NAME,
                COMPANY_ADDRESS1,
                COMPANY_ADDRESS2,
                COMPANY_PHONE,
                COMPANY_EMAIL,
                COMPANY_WEBSITE,
            ]
        );
    }

    #[test]
    fn whitespace_is_a_value() {
        let mut record = complete();
        record.company.website = " ".to_string();
        assert!(record.validate().is_ok());
    }
}
