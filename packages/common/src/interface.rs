//! Message shapes of the external collaborators.
//!
//! The routers only ever talk to the transport endpoint and the token
//! factory through these messages; neither contract lives in this repo.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use crate::operation::DeployParams;

/// Transport endpoint execute interface
#[cw_serde]
pub enum EndpointExecuteMsg {
    /// Carry `payload` to the router at `remote_router` on `dst_chain_id`
    Send {
        dst_chain_id: u64,
        /// 32-byte canonical address of the remote MasterRouter
        remote_router: Binary,
        payload: Binary,
    },
}

/// Token factory execute interface
#[cw_serde]
pub enum FactoryExecuteMsg {
    /// Instantiate a new token program from remote construction parameters
    DeployToken {
        src_chain_id: u64,
        /// 32-byte canonical address of the remote deployer
        deployer: Binary,
        params: DeployParams,
    },
}
