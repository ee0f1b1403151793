//! Request and response models for the Square API.
//!
//! Every model is an immutable value with a fluent builder. Optional
//! fields left unset are omitted from serialized output; required fields
//! must be present in response payloads or deserialization fails.

mod address;
mod cash_drawer;
mod catalog;
mod error;
mod inventory;
mod invoice;
mod loyalty;
mod money;
mod order;
mod patch;
mod subscription;
mod team;
mod transaction;

pub use address::*;
pub use cash_drawer::*;
pub use catalog::*;
pub use error::*;
pub use inventory::*;
pub use invoice::*;
pub use loyalty::*;
pub use money::*;
pub use order::*;
pub use patch::*;
pub use subscription::*;
pub use team::*;
pub use transaction::*;
