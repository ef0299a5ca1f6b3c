//! JSON wire-format tests for billplz-core

use billplz_core::*;
use pretty_assertions::assert_eq;

#[test]
fn test_open_collection_roundtrip() {
    let open_collection = OpenCollection {
        id: Some("3c7a7f00".to_string()),
        title: Some("Donation Drive".to_string()),
        description: Some("Help us reach our goal".to_string()),
        amount: Some(5000),
        fixed_amount: Some(true),
        tax: Some(6),
        payment_button: Some("pay".to_string()),
        photo: Some(Photo {
            retina_url: Some("https://sample.net/retina.png".to_string()),
            avatar_url: Some("https://sample.net/avatar.png".to_string()),
        }),
        url: Some("https://www.billplz.com/3c7a7f00".to_string()),
        status: Some("active".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_string(&open_collection).unwrap();
    let parsed: OpenCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(open_collection, parsed);
}

#[test]
fn test_bill_transactions_decodes_page_and_list() {
    let json = r#"{
        "bill_id": "8X0Iyzaw",
        "transactions": [
            {"id": "60793", "status": "completed", "payment_channel": "FPX"},
            {"id": "60794", "status": "failed"}
        ],
        "page": 1
    }"#;

    let transactions: BillTransactions = serde_json::from_str(json).unwrap();
    assert_eq!(transactions.bill_id.as_deref(), Some("8X0Iyzaw"));
    assert_eq!(transactions.transactions.len(), 2);
    assert_eq!(
        transactions.transactions[0].payment_channel.as_deref(),
        Some("FPX")
    );
    assert_eq!(transactions.page, Some(serde_json::Number::from(1)));
}

#[test]
fn test_bank_account_list_wire_name() {
    let json = r#"{
        "bank_verification_services": [
            {"name": "Insan Jaya", "id_no": "91234567890", "acc_no": "999988887777",
             "code": "MBBEMYKL", "status": "verified"}
        ]
    }"#;

    let list: BankAccountList = serde_json::from_str(json).unwrap();
    assert_eq!(list.bank_accounts.len(), 1);
    assert_eq!(list.bank_accounts[0].code.as_deref(), Some("MBBEMYKL"));
    assert_eq!(list.bank_accounts[0].status.as_deref(), Some("verified"));
}

#[test]
fn test_split_payment_absent_fields_stay_absent() {
    let split_payment = SplitPayment {
        email: Some("verified@account.com".to_string()),
        fixed_cut: Some(100),
        ..Default::default()
    };

    let value = serde_json::to_value(&split_payment).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(!object.contains_key("variable_cut"));
    assert!(!object.contains_key("split_header"));
}

#[test]
fn test_payment_method_list_roundtrip() {
    let list = PaymentMethodList {
        payment_methods: vec![
            PaymentMethod {
                code: Some("fpx".to_string()),
                name: Some("FPX".to_string()),
                active: Some(true),
            },
            PaymentMethod {
                code: Some("paypal".to_string()),
                name: Some("PayPal".to_string()),
                active: Some(false),
            },
        ],
    };

    let json = serde_json::to_string(&list).unwrap();
    let parsed: PaymentMethodList = serde_json::from_str(&json).unwrap();
    assert_eq!(list, parsed);
}
