//! Query handlers for the Router contract.

use common::{access, Role};
use cosmwasm_std::{Deps, StdResult};

use crate::msg::{ConfigResponse, HasRoleResponse};
use crate::state::{GasLimits, Stats, CONFIG, GAS_LIMITS, STATS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        master_router: config.master_router,
        factory: config.factory,
    })
}

pub fn query_gas_limits(deps: Deps) -> StdResult<GasLimits> {
    GAS_LIMITS.load(deps.storage)
}

pub fn query_stats(deps: Deps) -> StdResult<Stats> {
    STATS.load(deps.storage)
}

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let has_role = match deps.api.addr_validate(&account) {
        Ok(addr) => access::has_role(deps.storage, role, &addr)?,
        Err(_) => false,
    };
    Ok(HasRoleResponse { has_role })
}
