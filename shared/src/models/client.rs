//! Client Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validate::{DOCUMENT_ID_RE, INN_RE};

/// Client entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    /// Taxpayer number, 14 digits
    #[validate(regex(path = *INN_RE))]
    pub inn: String,
    /// Identity document: two uppercase letters + 7 digits
    #[validate(regex(path = *DOCUMENT_ID_RE))]
    pub document_id: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Client {
        Client {
            id: Some(7),
            name: "Aibek".into(),
            surname: "Toktogulov".into(),
            patronymic: "Bakytovich".into(),
            inn: "12345678901234".into(),
            document_id: "AN1234567".into(),
            phone: Some("+996700123456".into()),
            address: None,
            is_active: true,
        }
    }

    #[test]
    fn wire_form_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("documentId").is_some());
        assert!(json.get("isActive").is_some());
        assert!(json.get("document_id").is_none());
    }

    #[test]
    fn id_is_omitted_when_unassigned() {
        let mut client = sample();
        client.id = None;
        let json = serde_json::to_value(client).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn validation_rejects_bad_inn() {
        let mut client = sample();
        assert!(client.validate().is_ok());
        client.inn = "123".into();
        assert!(client.validate().is_err());
    }
}
