#[path = "AccountRequest.rs"]
mod account_request;
#[path = "CategoryRequest.rs"]
mod category_request;
#[path = "TagRequest.rs"]
mod tag_request;
#[path = "TransactionRequest.rs"]
mod transaction_request;
#[path = "VendorRequest.rs"]
mod vendor_request;

pub use account_request::*;
pub use category_request::*;
pub use tag_request::*;
pub use transaction_request::*;
pub use vendor_request::*;
