// @generated by centavo. Do not edit by hand.
// Module: crate::generated::budget::model::requests

use chrono::NaiveDate;
use crate::generated::budget::model::Type;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub date: NaiveDate,
    pub amount: i64,
    pub r#type: Type,
    pub description: String,
    pub notes: Option<String>,
    pub tags_ids: Vec<i64>,
    pub category_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub account_id: Option<i64>,
}
