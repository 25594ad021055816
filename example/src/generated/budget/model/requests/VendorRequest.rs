// @generated by centavo. Do not edit by hand.
// Module: crate::generated::budget::model::requests

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRequest {
    pub name: String,
    pub link: Option<String>,
}
