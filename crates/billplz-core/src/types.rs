//! Billplz entity types
//!
//! This module contains the request and response structures exchanged with
//! the Billplz API. Fields are optional on the Rust side because the API
//! omits empty values in responses and ignores absent values in requests;
//! every field serializes under the exact wire name the API documents.

use serde::{Deserialize, Serialize};

/// A collection, a named bucket that holds many bills.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_payment: Option<SplitPayment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response body for a page of collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectionIndexResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<serde_json::Number>,
}

/// An open collection, a reusable one-off payment form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpenCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_1_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_2_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_amount: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_quantity: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_button: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_payment: Option<SplitPayment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response body for a page of open collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpenCollectionIndexResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub open_collections: Vec<OpenCollection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<serde_json::Number>,
}

/// Logo image URLs attached to a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Logo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Photo image URLs attached to an open collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retina_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Split payment configuration for a collection or open collection.
///
/// Routes a fixed and/or percentage cut of every payment to a second
/// Billplz account identified by email.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SplitPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_cut: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_cut: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_header: Option<bool>,
}

/// A single payable bill belonging to a collection.
///
/// Amounts are in the smallest currency unit (sen).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_1_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_2_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A bank account submitted to or returned by the bank verification service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "id_no", skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,

    #[serde(rename = "acc_no", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,

    #[serde(rename = "reject_desc", skip_serializing_if = "Option::is_none")]
    pub reject_description: Option<String>,
}

/// Response body for a bank account registration check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BankAccountCheckResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response body for a bank account listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BankAccountList {
    #[serde(
        rename = "bank_verification_services",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub bank_accounts: Vec<BankAccount>,
}

/// A payment transaction made against a bill.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_channel: Option<String>,
}

/// Response body for a page of a bill's transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BillTransactions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<serde_json::Number>,
}

/// A payment method that can be enabled on a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Request and response body for payment method updates and listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethodList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_methods: Vec<PaymentMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bill_serialization_roundtrip() {
        let bill = Bill {
            id: Some("8X0Iyzaw".to_string()),
            collection_id: Some("inbmmepb".to_string()),
            paid: Some(false),
            state: Some("due".to_string()),
            amount: Some(200),
            due_at: Some("2020-12-31".to_string()),
            email: Some("api@billplz.com".to_string()),
            mobile: Some("60123456789".to_string()),
            name: Some("Michael".to_string()),
            callback_url: Some("http://example.com/webhook/".to_string()),
            description: Some("Maecenas eu placerat ante.".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&bill).unwrap();
        let parsed: Bill = serde_json::from_str(&json).unwrap();
        assert_eq!(bill, parsed);
    }

    #[test]
    fn test_collection_serialization_roundtrip() {
        let collection = Collection {
            id: Some("inbmmepb".to_string()),
            title: Some("My First API Collection".to_string()),
            logo: Some(Logo {
                thumb_url: Some("https://sample.net/thumb.png".to_string()),
                avatar_url: Some("https://sample.net/avatar.png".to_string()),
            }),
            split_payment: Some(SplitPayment {
                email: Some("verified@account.com".to_string()),
                fixed_cut: Some(100),
                variable_cut: None,
                split_header: Some(true),
            }),
            status: Some("active".to_string()),
        };

        let json = serde_json::to_string(&collection).unwrap();
        let parsed: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(collection, parsed);
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let bill = Bill {
            collection_id: Some("inbmmepb".to_string()),
            amount: Some(200),
            ..Default::default()
        };

        let value = serde_json::to_value(&bill).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("collection_id"));
        assert!(object.contains_key("amount"));
        assert!(!object.contains_key("paid"));
        assert!(!object.contains_key("callback_url"));
    }

    #[test]
    fn test_bank_account_wire_names() {
        let account = BankAccount {
            name: Some("Insan Jaya".to_string()),
            id_number: Some("91234567890".to_string()),
            account_number: Some("999988887777".to_string()),
            code: Some("MBBEMYKL".to_string()),
            reject_description: Some("name mismatch".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&account).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("id_no"));
        assert!(object.contains_key("acc_no"));
        assert!(object.contains_key("reject_desc"));
        assert!(!object.contains_key("id_number"));
    }

    #[test]
    fn test_unknown_response_fields_are_ignored() {
        let json = r#"{"id":"8X0Iyzaw","state":"paid","unexpected":{"nested":true}}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.id.as_deref(), Some("8X0Iyzaw"));
        assert_eq!(bill.state.as_deref(), Some("paid"));
    }

    #[test]
    fn test_index_result_page_accepts_number() {
        let json = r#"{"collections":[{"id":"inbmmepb"}],"page":3}"#;
        let result: CollectionIndexResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.collections.len(), 1);
        assert_eq!(result.page, Some(serde_json::Number::from(3)));
    }

    #[test]
    fn test_empty_list_stays_absent() {
        let result = PaymentMethodList::default();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, "{}");

        let parsed: PaymentMethodList = serde_json::from_str("{}").unwrap();
        assert!(parsed.payment_methods.is_empty());
    }
}
