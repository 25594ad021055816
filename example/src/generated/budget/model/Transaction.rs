// @generated by centavo. Do not edit by hand.
// Module: crate::generated::budget::model

use chrono::NaiveDate;
use chrono::{DateTime, Utc};
use crate::generated::budget::model::Account;
use crate::generated::budget::model::Category;
use crate::generated::budget::model::Tag;
use crate::generated::budget::model::Vendor;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Type {
    #[default]
    #[serde(rename = "EXPENSE")]
    Expense,
    #[serde(rename = "INCOME")]
    Income,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: i64,
    pub r#type: Type,
    pub description: String,
    pub notes: Option<String>,
    pub tags: Vec<Tag>,
    pub category: Option<Category>,
    pub vendor: Option<Vendor>,
    pub account: Option<Account>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
