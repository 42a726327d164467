//! Omnichain PriceFeed - Entry Points

use common::{access, Role, MAX_NATIVE_DECIMALS};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_grant_role, execute_revoke_role, execute_set_chain_info, execute_set_prices,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_chain_info, query_config, query_dst_gas_price, query_estimate_fee, query_has_role,
    query_price_group,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.native_decimals > MAX_NATIVE_DECIMALS {
        return Err(ContractError::InvalidConfig {
            reason: format!(
                "native decimals {} exceed {}",
                msg.native_decimals, MAX_NATIVE_DECIMALS
            ),
        });
    }

    let admin = deps.api.addr_validate(&msg.admin)?;
    access::grant_role(deps.storage, Role::Admin, &admin)?;
    for provider in &msg.providers {
        let provider = deps.api.addr_validate(provider)?;
        access::grant_role(deps.storage, Role::Provider, &provider)?;
    }

    CONFIG.save(
        deps.storage,
        &Config {
            native_decimals: msg.native_decimals,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("native_decimals", msg.native_decimals.to_string())
        .add_attribute("provider_count", msg.providers.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetChainInfo { chain_ids, infos } => {
            execute_set_chain_info(deps, info, chain_ids, infos)
        }
        ExecuteMsg::SetPrices {
            group_ids,
            price_words,
        } => execute_set_prices(deps, env, info, group_ids, price_words),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ChainInfo { chain_id } => to_json_binary(&query_chain_info(deps, chain_id)?),
        QueryMsg::PriceGroup { group_id } => to_json_binary(&query_price_group(deps, group_id)?),
        QueryMsg::DstGasPriceAtSrcNative { dst_chain_id } => {
            to_json_binary(&query_dst_gas_price(deps, dst_chain_id)?)
        }
        QueryMsg::EstimateFee {
            dst_chain_id,
            gas_limit,
        } => to_json_binary(&query_estimate_fee(deps, dst_chain_id, gas_limit)?),
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
    use crate::msg::FeeQuote;
    use crate::pricing::pack_prices;
    use crate::state::ChainPriceInfo;
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::Uint128;

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                native_decimals: 18,
                providers: vec!["oracle".to_string()],
            },
        )
        .unwrap();
    }

    #[test]
    fn test_instantiate_rejects_high_decimals() {
        let mut deps = mock_dependencies();
        let err = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                native_decimals: 19,
                providers: vec![],
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidConfig { .. }));
    }

    #[test]
    fn test_estimate_fee_is_deterministic() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetChainInfo {
                chain_ids: vec![137],
                infos: vec![ChainPriceInfo {
                    group_id: 0,
                    slot: 2,
                    native_decimals: 18,
                }],
            },
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("oracle", &[]),
            ExecuteMsg::SetPrices {
                group_ids: vec![0],
                price_words: vec![pack_prices([0, 0, 25_000_000_000, 0])],
            },
        )
        .unwrap();

        let msg = QueryMsg::EstimateFee {
            dst_chain_id: 137,
            gas_limit: 100_000,
        };
        let first: FeeQuote = from_json(query(deps.as_ref(), mock_env(), msg.clone()).unwrap()).unwrap();
        let second: FeeQuote = from_json(query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.amount_in_src_native, Uint128::new(2_500_000_000_000_000));
        assert_eq!(
            first.dst_gas_price_in_src_native,
            Uint128::new(25_000_000_000)
        );
    }

    #[test]
    fn test_unknown_chain_query_fails() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::EstimateFee {
                dst_chain_id: 999,
                gas_limit: 1,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown chain: 999"));
    }
}
