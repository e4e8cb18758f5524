//! Common identifier and amount primitives for the ledger simulator.

mod amount;
mod id;
mod macros;
mod schema;

pub use amount::Amount;
pub use id::{Address, AppId, AssetId};
pub use schema::StateSchema;
