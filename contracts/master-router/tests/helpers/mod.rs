//! Two-chain test world.
//!
//! Chains 1 and 137 live side by side in one `App`. Each has its own
//! Registry, PriceFeed, MasterRouter, Router, cw20 token and a mock
//! transport endpoint that records outbound sends. `relay` plays the
//! transport: it picks up a recorded send and delivers it to the other
//! chain's MasterRouter as that chain's endpoint.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult, Uint128, Uint256,
};
use cw20::{BalanceResponse, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;

use common::interface::EndpointExecuteMsg;
use common::{addr_to_bytes32, Operation, Role};
use master_router::msg::{ExecuteMsg, InstantiateMsg};
use price_feed::msg::ChainPriceInfo;
use registry::msg::ChainInfoMsg;

pub const ADMIN: &str = "admin";
pub const ORACLE: &str = "oracle";
pub const DAPP: &str = "dapp";
pub const COLLECTOR: &str = "collector";
pub const DENOM: &str = "uatom";

pub const CHAIN_A: u64 = 1;
pub const CHAIN_B: u64 = 137;
pub const PROTOCOL_ID: u32 = 1;

/// 25 gwei at 18 decimals
pub const GAS_PRICE: u64 = 25_000_000_000;
pub const GAS_LIMIT: u64 = 100_000;
/// `GAS_PRICE * GAS_LIMIT`
pub const FEE: u128 = 2_500_000_000_000_000;
pub const PROTOCOL_FEE_BPS: u16 = 1_000;

// ============================================================================
// Mock Endpoint
// ============================================================================

#[cw_serde]
pub struct SentMessage {
    pub nonce: u64,
    pub from: Addr,
    pub dst_chain_id: u64,
    pub remote_router: Binary,
    pub payload: Binary,
}

const SENT: Item<Vec<SentMessage>> = Item::new("sent");

fn endpoint_instantiate(deps: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
    SENT.save(deps.storage, &vec![])?;
    Ok(Response::new())
}

fn endpoint_execute(
    deps: DepsMut,
    _: Env,
    info: MessageInfo,
    msg: EndpointExecuteMsg,
) -> StdResult<Response> {
    let EndpointExecuteMsg::Send {
        dst_chain_id,
        remote_router,
        payload,
    } = msg;
    SENT.update(deps.storage, |mut sent| -> StdResult<_> {
        sent.push(SentMessage {
            nonce: sent.len() as u64,
            from: info.sender,
            dst_chain_id,
            remote_router,
            payload,
        });
        Ok(sent)
    })?;
    Ok(Response::new())
}

fn endpoint_query(deps: Deps, _: Env, _: Empty) -> StdResult<Binary> {
    to_json_binary(&SENT.load(deps.storage)?)
}

// ============================================================================
// Contracts
// ============================================================================

fn contract_registry() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        registry::contract::execute,
        registry::contract::instantiate,
        registry::contract::query,
    ))
}

fn contract_price_feed() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        price_feed::contract::execute,
        price_feed::contract::instantiate,
        price_feed::contract::query,
    ))
}

fn contract_master_router() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            master_router::contract::execute,
            master_router::contract::instantiate,
            master_router::contract::query,
        )
        .with_reply(master_router::contract::reply),
    )
}

fn contract_router() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            router::contract::execute,
            router::contract::instantiate,
            router::contract::query,
        )
        .with_reply(router::contract::reply),
    )
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

fn contract_endpoint() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        endpoint_execute,
        endpoint_instantiate,
        endpoint_query,
    ))
}

// ============================================================================
// World
// ============================================================================

struct CodeIds {
    registry: u64,
    price_feed: u64,
    master_router: u64,
    router: u64,
    cw20: u64,
    endpoint: u64,
}

pub struct Chain {
    pub id: u64,
    pub registry: Addr,
    pub price_feed: Addr,
    pub master: Addr,
    pub router: Addr,
    pub endpoint: Addr,
    pub token: Addr,
}

pub struct World {
    pub app: App,
    pub a: Chain,
    pub b: Chain,
}

fn deploy_chain(app: &mut App, codes: &CodeIds, chain_id: u64) -> Chain {
    let admin = Addr::unchecked(ADMIN);
    let label = |name: &str| format!("{name}-{chain_id}");

    let endpoint = app
        .instantiate_contract(codes.endpoint, admin.clone(), &Empty {}, &[], label("endpoint"), None)
        .unwrap();

    let registry = app
        .instantiate_contract(
            codes.registry,
            admin.clone(),
            &registry::msg::InstantiateMsg {
                admin: ADMIN.to_string(),
                local_chain_id: chain_id,
            },
            &[],
            label("registry"),
            None,
        )
        .unwrap();

    let price_feed = app
        .instantiate_contract(
            codes.price_feed,
            admin.clone(),
            &price_feed::msg::InstantiateMsg {
                admin: ADMIN.to_string(),
                native_decimals: 18,
                providers: vec![ORACLE.to_string()],
            },
            &[],
            label("price-feed"),
            None,
        )
        .unwrap();

    let master = app
        .instantiate_contract(
            codes.master_router,
            admin.clone(),
            &InstantiateMsg {
                admin: ADMIN.to_string(),
                chain_id,
                registry: registry.to_string(),
                price_feed: price_feed.to_string(),
                endpoint: endpoint.to_string(),
                fee_collector: COLLECTOR.to_string(),
                fee_denom: DENOM.to_string(),
                protocol_fee_bps: PROTOCOL_FEE_BPS,
            },
            &[],
            label("master-router"),
            None,
        )
        .unwrap();

    let router = app
        .instantiate_contract(
            codes.router,
            admin.clone(),
            &router::msg::InstantiateMsg {
                admin: ADMIN.to_string(),
                master_router: master.to_string(),
                factory: None,
                gas_limits: router::msg::GasLimits {
                    store_gas_limit: 200_000,
                    update_gas_limit: 300_000,
                    payment_transfer_gas_limit: 100_000,
                    deploy_gas_limit: 2_000_000,
                },
            },
            &[],
            label("router"),
            None,
        )
        .unwrap();

    let token = app
        .instantiate_contract(
            codes.cw20,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Omni Token".to_string(),
                symbol: "OMNI".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: Some(MinterResponse {
                    minter: router.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            label("token"),
            None,
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        master.clone(),
        &ExecuteMsg::SetRouters {
            protocol_ids: vec![PROTOCOL_ID],
            routers: vec![router.to_string()],
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        admin.clone(),
        registry.clone(),
        &registry::msg::ExecuteMsg::RegisterToken {
            chain_id,
            token: token.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin,
        registry.clone(),
        &registry::msg::ExecuteMsg::GrantRole {
            role: Role::Router,
            account: DAPP.to_string(),
        },
        &[],
    )
    .unwrap();

    Chain {
        id: chain_id,
        registry,
        price_feed,
        master,
        router,
        endpoint,
        token,
    }
}

/// Point `local` at `remote`: registry peer, remote origins and a priced
/// gas lane. `DAPP` is privileged; the remote token may only act on its
/// local counterpart.
fn link(app: &mut App, local: &Chain, remote: &Chain) {
    let admin = Addr::unchecked(ADMIN);
    let peer = addr_to_bytes32(app.api(), &remote.master).unwrap();
    let dapp = addr_to_bytes32(app.api(), &Addr::unchecked(DAPP)).unwrap();
    let remote_token = addr_to_bytes32(app.api(), &remote.token).unwrap();

    app.execute_contract(
        admin.clone(),
        local.registry.clone(),
        &registry::msg::ExecuteMsg::SetChainInfo {
            chain_ids: vec![remote.id],
            configs: vec![ChainInfoMsg {
                remote_router: Binary::from(peer.to_vec()),
                native_decimals: 18,
                is_active: true,
            }],
        },
        &[],
    )
    .unwrap();

    for (origin, local_token, privileged) in [
        (dapp, None, true),
        (remote_token, Some(local.token.to_string()), false),
    ] {
        app.execute_contract(
            admin.clone(),
            local.registry.clone(),
            &registry::msg::ExecuteMsg::SetRemoteOrigin {
                chain_id: remote.id,
                origin: Binary::from(origin.to_vec()),
                local_token,
                privileged,
            },
            &[],
        )
        .unwrap();
    }

    app.execute_contract(
        admin,
        local.price_feed.clone(),
        &price_feed::msg::ExecuteMsg::SetChainInfo {
            chain_ids: vec![remote.id],
            infos: vec![ChainPriceInfo {
                group_id: 0,
                slot: 0,
                native_decimals: 18,
            }],
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        Addr::unchecked(ORACLE),
        local.price_feed.clone(),
        &price_feed::msg::ExecuteMsg::SetPrices {
            group_ids: vec![0],
            price_words: vec![Uint256::from(GAS_PRICE)],
        },
        &[],
    )
    .unwrap();
}

pub fn setup() -> World {
    let mut app = App::default();

    app.init_modules(|router, _, storage| {
        for account in [ADMIN, DAPP] {
            router
                .bank
                .init_balance(
                    storage,
                    &Addr::unchecked(account),
                    coins(1_000_000_000_000_000_000, DENOM),
                )
                .unwrap();
        }
    });

    let codes = CodeIds {
        registry: app.store_code(contract_registry()),
        price_feed: app.store_code(contract_price_feed()),
        master_router: app.store_code(contract_master_router()),
        router: app.store_code(contract_router()),
        cw20: app.store_code(contract_cw20()),
        endpoint: app.store_code(contract_endpoint()),
    };

    let a = deploy_chain(&mut app, &codes, CHAIN_A);
    let b = deploy_chain(&mut app, &codes, CHAIN_B);
    link(&mut app, &a, &b);
    link(&mut app, &b, &a);

    World { app, a, b }
}

// ============================================================================
// Actions
// ============================================================================

impl World {
    /// `Send` from chain A to chain B paying `funds`
    pub fn send(
        &mut self,
        sender: &str,
        operation: Operation,
        funds: &[Coin],
    ) -> Result<AppResponse, String> {
        self.app
            .execute_contract(
                Addr::unchecked(sender),
                self.a.master.clone(),
                &ExecuteMsg::Send {
                    dst_chain_id: CHAIN_B,
                    protocol_id: PROTOCOL_ID,
                    operation,
                    gas_limit_hint: GAS_LIMIT,
                },
                funds,
            )
            .map_err(|e| e.root_cause().to_string())
    }

    pub fn sent(&self, chain: &Chain) -> Vec<SentMessage> {
        self.app
            .wrap()
            .query_wasm_smart(&chain.endpoint, &Empty {})
            .unwrap()
    }

    /// Deliver a raw message to chain B as its endpoint
    pub fn deliver(
        &mut self,
        src_sender: Binary,
        nonce: u64,
        payload: Binary,
    ) -> Result<AppResponse, String> {
        let endpoint = self.b.endpoint.clone();
        let master = self.b.master.clone();
        self.app
            .execute_contract(
                endpoint,
                master,
                &ExecuteMsg::Receive {
                    src_chain_id: CHAIN_A,
                    src_sender,
                    nonce,
                    payload,
                },
                &[],
            )
            .map_err(|e| e.root_cause().to_string())
    }

    /// Relay the `index`-th message chain A's endpoint recorded
    pub fn relay(&mut self, index: usize) -> Result<AppResponse, String> {
        let msg = self.sent(&self.a)[index].clone();
        let src_sender = Binary::from(addr_to_bytes32(self.app.api(), &msg.from).unwrap().to_vec());
        self.deliver(src_sender, msg.nonce, msg.payload)
    }

    /// Move `amount` of the fee denom from `ADMIN` to `account`
    pub fn fund(&mut self, account: &str, amount: u128) {
        self.app
            .send_tokens(Addr::unchecked(ADMIN), Addr::unchecked(account), &coins(amount, DENOM))
            .unwrap();
    }

    pub fn token_balance(&self, token: &Addr, account: &str) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn bank_balance(&self, account: &str) -> Uint128 {
        self.app.wrap().query_balance(account, DENOM).unwrap().amount
    }
}

pub fn fee_coins(amount: u128) -> Vec<Coin> {
    coins(amount, DENOM)
}

pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
