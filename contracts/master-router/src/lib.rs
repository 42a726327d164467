//! Omnichain MasterRouter Contract
//!
//! The only contract on a chain that talks to the transport endpoint.
//!
//! - `execute/outbound` - `Send`: authorize, price, collect payment and hand
//!   the encoded operation to the endpoint
//! - `execute/inbound` - `Receive`: authenticate the origin, guard against
//!   replays and route the operation to the Router for its protocol
//! - `execute/admin` - peers, routers, fee settings and pause switch
//!
//! Chain and token membership live in the Registry; gas prices live in the
//! PriceFeed. Both are read through their public queries.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
