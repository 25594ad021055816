// Hand-maintained wiring for the generated model files. The generator emits
// one `<EntityName>.rs` per entity; this module re-exports them all at the
// package path the generated imports expect.

#[path = "Account.rs"]
mod account;
#[path = "Category.rs"]
mod category;
#[path = "Tag.rs"]
mod tag;
#[path = "Transaction.rs"]
mod transaction;
#[path = "Vendor.rs"]
mod vendor;

pub use account::*;
pub use category::*;
pub use tag::*;
pub use transaction::*;
pub use vendor::*;

pub mod requests;
