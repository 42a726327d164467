//! Role-Based Access Control
//!
//! Every router contract owns exactly one role table, stored under the same
//! namespace in its own storage. A contract never writes another contract's
//! table; cross-contract checks go through the owner's `HasRole` query.
//!
//! ## Roles
//!
//! | Role       | Typical holder                                   |
//! |------------|--------------------------------------------------|
//! | `Admin`    | Governance multisig; grants and revokes roles    |
//! | `Approver` | Registry curator allowed to deregister tokens    |
//! | `Factory`  | Token factory registering its own deployments    |
//! | `Router`   | Contracts allowed to originate outbound messages |
//! | `Provider` | Off-chain oracle pushing gas prices              |

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Event, Order, StdError, StdResult, Storage};
use cw_storage_plus::Map;
use thiserror::Error;

/// Capability tag bound to a principal
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Role {
    Admin,
    Approver,
    Factory,
    Router,
    Provider,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Approver => "approver",
            Role::Factory => "factory",
            Role::Router => "router",
            Role::Provider => "provider",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: missing role {role}")]
    MissingRole { role: Role },

    #[error("Cannot revoke the last admin")]
    LastAdmin,
}

// ============================================================================
// Storage
// ============================================================================

/// Role membership
/// Key: (role name, account), Value: always true while granted
pub const ROLES: Map<(&str, &Addr), bool> = Map::new("roles");

// ============================================================================
// Checks
// ============================================================================

pub fn has_role(storage: &dyn Storage, role: Role, account: &Addr) -> StdResult<bool> {
    Ok(ROLES
        .may_load(storage, (role.as_str(), account))?
        .unwrap_or(false))
}

pub fn ensure_role(storage: &dyn Storage, role: Role, account: &Addr) -> Result<(), AccessError> {
    if has_role(storage, role, account)? {
        return Ok(());
    }
    Err(AccessError::MissingRole { role })
}

/// Passes if the account holds at least one of `roles`. The first role is
/// reported on failure.
pub fn ensure_any_role(
    storage: &dyn Storage,
    roles: &[Role],
    account: &Addr,
) -> Result<(), AccessError> {
    for role in roles {
        if has_role(storage, *role, account)? {
            return Ok(());
        }
    }
    Err(AccessError::MissingRole {
        role: roles.first().copied().unwrap_or(Role::Admin),
    })
}

pub fn count_members(storage: &dyn Storage, role: Role) -> usize {
    ROLES
        .prefix(role.as_str())
        .keys(storage, None, None, Order::Ascending)
        .count()
}

pub fn members(storage: &dyn Storage, role: Role) -> StdResult<Vec<Addr>> {
    ROLES
        .prefix(role.as_str())
        .keys(storage, None, None, Order::Ascending)
        .collect()
}

// ============================================================================
// Mutations
// ============================================================================

/// Grant without an authorization check. Used at instantiation.
pub fn grant_role(storage: &mut dyn Storage, role: Role, account: &Addr) -> StdResult<()> {
    ROLES.save(storage, (role.as_str(), account), &true)
}

/// Admin-gated grant. Returns the `role_changed` event to attach.
pub fn grant_role_checked(
    storage: &mut dyn Storage,
    api: &dyn Api,
    sender: &Addr,
    role: Role,
    account: &str,
) -> Result<Event, AccessError> {
    ensure_role(storage, Role::Admin, sender)?;
    let account = api.addr_validate(account)?;
    grant_role(storage, role, &account)?;
    Ok(role_changed_event(role, &account, sender, true))
}

/// Admin-gated revoke. The last remaining admin can never be removed.
pub fn revoke_role_checked(
    storage: &mut dyn Storage,
    api: &dyn Api,
    sender: &Addr,
    role: Role,
    account: &str,
) -> Result<Event, AccessError> {
    ensure_role(storage, Role::Admin, sender)?;
    let account = api.addr_validate(account)?;

    if role == Role::Admin
        && has_role(storage, Role::Admin, &account)?
        && count_members(storage, Role::Admin) <= 1
    {
        return Err(AccessError::LastAdmin);
    }

    ROLES.remove(storage, (role.as_str(), &account));
    Ok(role_changed_event(role, &account, sender, false))
}

pub fn role_changed_event(role: Role, account: &Addr, sender: &Addr, granted: bool) -> Event {
    Event::new("role_changed")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account)
        .add_attribute("sender", sender)
        .add_attribute("granted", granted.to_string())
}
