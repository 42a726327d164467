//! Omnichain DeploymentRouter - Entry Points

use common::{access, Role};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deploy, execute_grant_role, execute_revoke_role, execute_set_dst_deploy_config,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_available_chains, query_config, query_dst_deploy_config, query_estimate_deploy_fee,
    query_has_role,
};
use crate::state::{Config, AVAILABLE_CHAINS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.payment_denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "payment denom is empty".to_string(),
        });
    }

    let admin = deps.api.addr_validate(&msg.admin)?;
    let config = Config {
        master_router: deps.api.addr_validate(&msg.master_router)?,
        price_feed: deps.api.addr_validate(&msg.price_feed)?,
        payment_denom: msg.payment_denom,
        protocol_id: msg.protocol_id,
    };
    CONFIG.save(deps.storage, &config)?;
    AVAILABLE_CHAINS.save(deps.storage, &0)?;
    access::grant_role(deps.storage, Role::Admin, &admin)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("master_router", config.master_router))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetDstDeployConfig { chain_ids, configs } => {
            execute_set_dst_deploy_config(deps, info, chain_ids, configs)
        }
        ExecuteMsg::Deploy {
            dst_chain_ids,
            params,
        } => execute_deploy(deps, info, dst_chain_ids, params),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::DstDeployConfig { chain_id } => {
            to_json_binary(&query_dst_deploy_config(deps, chain_id)?)
        }
        QueryMsg::AvailableChains { start_after, limit } => {
            to_json_binary(&query_available_chains(deps, start_after, limit)?)
        }
        QueryMsg::EstimateDeployFee { dst_chain_ids } => {
            to_json_binary(&query_estimate_deploy_fee(deps, dst_chain_ids)?)
        }
        QueryMsg::HasRole { role, account } => to_json_binary(&query_has_role(deps, role, account)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{AvailableChainsResponse, DstDeployConfig};
    use common::DeployParams;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coins, from_json, Uint128};

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                master_router: "master".to_string(),
                price_feed: "pricefeed".to_string(),
                payment_denom: "uatom".to_string(),
                protocol_id: 1,
            },
        )
        .unwrap();
    }

    fn set_configs(deps: DepsMut, chain_ids: Vec<u64>, enabled: bool) {
        let configs = chain_ids
            .iter()
            .map(|_| DstDeployConfig {
                deploy_gas_limit: 2_000_000,
                enabled,
            })
            .collect();
        execute(
            deps,
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetDstDeployConfig { chain_ids, configs },
        )
        .unwrap();
    }

    fn available(deps: Deps) -> AvailableChainsResponse {
        from_json(
            query(
                deps,
                mock_env(),
                QueryMsg::AvailableChains {
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_available_chain_count_tracks_toggles() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        set_configs(deps.as_mut(), vec![137, 56, 10], true);
        assert_eq!(available(deps.as_ref()).count, 3);

        // Re-enabling is not double counted
        set_configs(deps.as_mut(), vec![137], true);
        assert_eq!(available(deps.as_ref()).count, 3);

        set_configs(deps.as_mut(), vec![56], false);
        let res = available(deps.as_ref());
        assert_eq!(res.count, 2);
        assert_eq!(res.chain_ids, vec![10, 137]);
    }

    #[test]
    fn test_set_config_validation() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetDstDeployConfig {
                chain_ids: vec![137, 56],
                configs: vec![DstDeployConfig {
                    deploy_gas_limit: 1,
                    enabled: true,
                }],
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::ArityMismatch { left: 2, right: 1 });

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetDstDeployConfig {
                chain_ids: vec![137],
                configs: vec![DstDeployConfig {
                    deploy_gas_limit: 0,
                    enabled: true,
                }],
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("deploy gas limit"));

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("intruder", &[]),
            ExecuteMsg::SetDstDeployConfig {
                chain_ids: vec![],
                configs: vec![],
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
        assert_eq!(available(deps.as_ref()).count, 0);
    }

    #[test]
    fn test_deploy_to_disabled_chain_rejected() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        set_configs(deps.as_mut(), vec![137], false);

        let params = DeployParams {
            name: "Omni".to_string(),
            symbol: "OMNI".to_string(),
            decimals: 6,
            initial_supply: Uint128::zero(),
            owner: "owner".to_string(),
        };
        for chain_id in [137, 56] {
            let err = execute(
                deps.as_mut(),
                mock_env(),
                mock_info("user", &coins(1, "uatom")),
                ExecuteMsg::Deploy {
                    dst_chain_ids: vec![chain_id],
                    params: params.clone(),
                },
            )
            .unwrap_err();
            assert_eq!(err, ContractError::ChainUnavailable { chain_id });
        }

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user", &[]),
            ExecuteMsg::Deploy {
                dst_chain_ids: vec![137],
                params: DeployParams {
                    symbol: " ".to_string(),
                    ..params
                },
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidParams { .. }));
    }
}
