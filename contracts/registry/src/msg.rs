//! Message types for the Registry contract

use common::Role;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial holder of the admin role
    pub admin: String,
    /// Chain id of the chain this registry is deployed on
    pub local_chain_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Chain settings supplied alongside a chain id in `SetChainInfo`
#[cw_serde]
pub struct ChainInfoMsg {
    /// 32-byte canonical address of the remote MasterRouter
    pub remote_router: Binary,
    pub native_decimals: u8,
    pub is_active: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Create or overwrite chain records
    ///
    /// Authorization: Admin only
    SetChainInfo {
        chain_ids: Vec<u64>,
        configs: Vec<ChainInfoMsg>,
    },

    /// Toggle a chain without touching the rest of its record
    ///
    /// Authorization: Admin only
    SetChainActive { chain_id: u64, is_active: bool },

    /// Register a token program on a chain
    ///
    /// Authorization: Admin or Factory
    RegisterToken { chain_id: u64, token: String },

    /// Remove a token registration
    ///
    /// Authorization: Admin or Approver
    DeregisterToken { chain_id: u64, token: String },

    /// Authorize a sender on a remote chain for inbound delivery.
    /// `local_token` binds a remote token program to its counterpart here;
    /// `privileged` admits every operation kind.
    ///
    /// Authorization: Admin only
    SetRemoteOrigin {
        chain_id: u64,
        origin: Binary,
        local_token: Option<String>,
        privileged: bool,
    },

    /// Authorization: Admin or Approver
    RemoveRemoteOrigin { chain_id: u64, origin: Binary },

    /// Authorization: Admin only
    GrantRole { role: Role, account: String },

    /// Authorization: Admin only
    RevokeRole { role: Role, account: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// `None` when the chain was never configured
    #[returns(Option<ChainResponse>)]
    Chain { chain_id: u64 },

    #[returns(ChainsResponse)]
    Chains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(IsChainActiveResponse)]
    IsChainActive { chain_id: u64 },

    #[returns(Option<TokenResponse>)]
    Token { chain_id: u64, token: String },

    #[returns(TokensResponse)]
    Tokens {
        chain_id: u64,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(IsTokenRegisteredResponse)]
    IsTokenRegistered { chain_id: u64, token: String },

    /// `None` when the origin is not authorized
    #[returns(Option<RemoteOriginResponse>)]
    RemoteOrigin { chain_id: u64, origin: Binary },

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },

    #[returns(RoleMembersResponse)]
    RoleMembers { role: Role },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub local_chain_id: u64,
    pub chain_count: u32,
}

#[cw_serde]
pub struct ChainResponse {
    pub chain_id: u64,
    pub remote_router: Binary,
    pub native_decimals: u8,
    pub is_active: bool,
}

#[cw_serde]
pub struct ChainsResponse {
    pub chains: Vec<ChainResponse>,
}

#[cw_serde]
pub struct IsChainActiveResponse {
    pub chain_id: u64,
    pub is_active: bool,
}

#[cw_serde]
pub struct TokenResponse {
    pub chain_id: u64,
    pub token: String,
    pub registered_by: Addr,
    pub registered_at: Timestamp,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}

#[cw_serde]
pub struct IsTokenRegisteredResponse {
    pub registered: bool,
}

#[cw_serde]
pub struct RemoteOriginResponse {
    pub chain_id: u64,
    pub origin: Binary,
    pub local_token: Option<String>,
    pub privileged: bool,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<Addr>,
}
