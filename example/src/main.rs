// example/src/main.rs
//
// Exercises the models generated from schemas/cents.schema. Regenerate with:
//   centavo generate --input example/schemas --output example/src/generated \
//     --base-namespace crate.generated

#[allow(dead_code)]
mod generated;

use chrono::NaiveDate;
use generated::budget::model::requests::TransactionRequest;
use generated::budget::model::{Kind, Transaction, Type, Vendor};

fn main() -> Result<(), serde_json::Error> {
    let vendor = Vendor {
        id: 1,
        name: "Corner Coffee".to_string(),
        link: Some("https://cornercoffee.example".to_string()),
        created_at: None,
        updated_at: None,
    };

    let transaction = Transaction {
        id: 42,
        date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        amount: 475,
        r#type: Type::Expense,
        description: "flat white".to_string(),
        notes: None,
        tags: Vec::new(),
        category: None,
        vendor: Some(vendor),
        account: None,
        created_at: None,
        updated_at: None,
    };

    // Nullable fields serialize as absent, not null.
    println!("{}", serde_json::to_string_pretty(&transaction)?);

    // Round-trip a create payload the way the web client sends it.
    let payload = r#"{
        "date": "2025-06-01",
        "amount": 475,
        "type": "EXPENSE",
        "description": "flat white",
        "tagsIds": [3, 7],
        "categoryId": 2
    }"#;
    let request: TransactionRequest = serde_json::from_str(payload)?;
    println!(
        "parsed request: {} ({:?}, {} tags)",
        request.description,
        request.r#type,
        request.tags_ids.len()
    );

    println!("default account kind: {:?}", Kind::default());

    Ok(())
}
