//! Integration tests for the PriceFeed contract.

use cosmwasm_std::{Addr, Empty, Uint128, Uint256};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use common::Role;
use price_feed::msg::{
    ChainPriceInfo, ExecuteMsg, FeeQuote, GasPriceResponse, HasRoleResponse, InstantiateMsg,
    PriceGroupResponse, QueryMsg,
};
use price_feed::pricing::pack_prices;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_price_feed() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        price_feed::contract::execute,
        price_feed::contract::instantiate,
        price_feed::contract::query,
    );
    Box::new(contract)
}

fn setup(native_decimals: u8) -> (App, Addr) {
    let mut app = App::default();
    let admin = Addr::unchecked("admin");

    let code_id = app.store_code(contract_price_feed());
    let feed = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                native_decimals,
                providers: vec!["oracle".to_string()],
            },
            &[],
            "price-feed",
            None,
        )
        .unwrap();

    // 137 and 56 share group 0; 10 uses a 6-decimal native token
    app.execute_contract(
        admin,
        feed.clone(),
        &ExecuteMsg::SetChainInfo {
            chain_ids: vec![137, 56, 10],
            infos: vec![
                ChainPriceInfo {
                    group_id: 0,
                    slot: 0,
                    native_decimals: 18,
                },
                ChainPriceInfo {
                    group_id: 0,
                    slot: 1,
                    native_decimals: 18,
                },
                ChainPriceInfo {
                    group_id: 1,
                    slot: 3,
                    native_decimals: 6,
                },
            ],
        },
        &[],
    )
    .unwrap();

    (app, feed)
}

fn set_prices(app: &mut App, feed: &Addr, group_ids: Vec<u64>, words: Vec<Uint256>) {
    app.execute_contract(
        Addr::unchecked("oracle"),
        feed.clone(),
        &ExecuteMsg::SetPrices {
            group_ids,
            price_words: words,
        },
        &[],
    )
    .unwrap();
}

fn estimate(app: &App, feed: &Addr, dst_chain_id: u64, gas_limit: u64) -> FeeQuote {
    app.wrap()
        .query_wasm_smart(
            feed,
            &QueryMsg::EstimateFee {
                dst_chain_id,
                gas_limit,
            },
        )
        .unwrap()
}

// ============================================================================
// Prices
// ============================================================================

#[test]
fn test_scenario_fee() {
    let (mut app, feed) = setup(18);
    set_prices(
        &mut app,
        &feed,
        vec![0],
        vec![pack_prices([25_000_000_000, 5_000_000_000, 0, 0])],
    );

    let quote = estimate(&app, &feed, 137, 100_000);
    assert_eq!(quote.amount_in_src_native, Uint128::new(2_500_000_000_000_000));

    let quote = estimate(&app, &feed, 56, 100_000);
    assert_eq!(quote.amount_in_src_native, Uint128::new(500_000_000_000_000));
}

#[test]
fn test_set_prices_replaces_whole_word() {
    let (mut app, feed) = setup(18);
    set_prices(&mut app, &feed, vec![0], vec![pack_prices([1, 2, 3, 4])]);
    set_prices(&mut app, &feed, vec![0], vec![pack_prices([9, 0, 0, 0])]);

    let group: PriceGroupResponse = app
        .wrap()
        .query_wasm_smart(&feed, &QueryMsg::PriceGroup { group_id: 0 })
        .unwrap();
    assert_eq!(group.prices, vec![9, 0, 0, 0]);
    assert!(group.updated_at.is_some());

    let quote = estimate(&app, &feed, 56, 1_000);
    assert_eq!(quote.amount_in_src_native, Uint128::zero());
}

#[test]
fn test_unset_group_yields_zero_fee() {
    let (app, feed) = setup(18);
    let quote = estimate(&app, &feed, 10, 500_000);
    assert_eq!(quote.amount_in_src_native, Uint128::zero());
}

#[test]
fn test_rescale_to_local_decimals() {
    // Local chain has 6 decimals; destination price is 7 units of a 6-decimal token
    let (mut app, feed) = setup(6);
    set_prices(&mut app, &feed, vec![1], vec![pack_prices([0, 0, 0, 7])]);

    let price: GasPriceResponse = app
        .wrap()
        .query_wasm_smart(&feed, &QueryMsg::DstGasPriceAtSrcNative { dst_chain_id: 10 })
        .unwrap();
    assert_eq!(price.price, Uint128::new(7));

    // 1 wei of an 18-decimal chain rounds up to one 6-decimal base unit
    set_prices(&mut app, &feed, vec![0], vec![pack_prices([1, 0, 0, 0])]);
    let quote = estimate(&app, &feed, 137, 10);
    assert_eq!(quote.dst_gas_price_in_src_native, Uint128::one());
    assert_eq!(quote.amount_in_src_native, Uint128::new(10));
}

#[test]
fn test_unknown_chain() {
    let (app, feed) = setup(18);
    let res: Result<FeeQuote, _> = app.wrap().query_wasm_smart(
        &feed,
        &QueryMsg::EstimateFee {
            dst_chain_id: 42,
            gas_limit: 1,
        },
    );
    assert!(res.unwrap_err().to_string().contains("Unknown chain: 42"));
}

#[test]
fn test_fee_overflow() {
    let (mut app, feed) = setup(18);
    // Lifting a 6-decimal price to 18 decimals pushes the product past u128
    set_prices(&mut app, &feed, vec![1], vec![pack_prices([0, 0, 0, u64::MAX])]);

    let res: Result<FeeQuote, _> = app.wrap().query_wasm_smart(
        &feed,
        &QueryMsg::EstimateFee {
            dst_chain_id: 10,
            gas_limit: u64::MAX,
        },
    );
    assert!(res.unwrap_err().to_string().contains("Fee overflow"));
}

// ============================================================================
// Validation & Authorization
// ============================================================================

#[test]
fn test_set_prices_requires_provider() {
    let (mut app, feed) = setup(18);

    let res = app.execute_contract(
        Addr::unchecked("admin"),
        feed.clone(),
        &ExecuteMsg::SetPrices {
            group_ids: vec![0],
            price_words: vec![pack_prices([1, 1, 1, 1])],
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));

    let group: PriceGroupResponse = app
        .wrap()
        .query_wasm_smart(&feed, &QueryMsg::PriceGroup { group_id: 0 })
        .unwrap();
    assert_eq!(group.word, Uint256::zero());
    assert!(group.updated_at.is_none());
}

#[test]
fn test_set_prices_arity_and_duplicates() {
    let (mut app, feed) = setup(18);
    let oracle = Addr::unchecked("oracle");

    let res = app.execute_contract(
        oracle.clone(),
        feed.clone(),
        &ExecuteMsg::SetPrices {
            group_ids: vec![0, 1],
            price_words: vec![Uint256::one()],
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Arity mismatch"));

    let res = app.execute_contract(
        oracle,
        feed,
        &ExecuteMsg::SetPrices {
            group_ids: vec![0, 0],
            price_words: vec![Uint256::one(), Uint256::zero()],
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("duplicate group id"));
}

#[test]
fn test_set_chain_info_validation() {
    let (mut app, feed) = setup(18);
    let admin = Addr::unchecked("admin");
    let info = |group_id, slot, native_decimals| ChainPriceInfo {
        group_id,
        slot,
        native_decimals,
    };

    let cases = vec![
        (vec![1, 2], vec![info(5, 0, 18)], "Arity mismatch"),
        (vec![1], vec![info(5, 4, 18)], "out of range"),
        (vec![1], vec![info(5, 0, 19)], "native decimals"),
        (vec![1, 1], vec![info(5, 0, 18), info(5, 1, 18)], "duplicate chain id"),
        (vec![1, 2], vec![info(5, 0, 18), info(5, 0, 18)], "assigned twice"),
    ];
    for (chain_ids, infos, expected) in cases {
        let res = app.execute_contract(
            admin.clone(),
            feed.clone(),
            &ExecuteMsg::SetChainInfo { chain_ids, infos },
            &[],
        );
        let err = res.unwrap_err().root_cause().to_string();
        assert!(err.contains(expected), "{err} should contain {expected}");
    }

    let stored: Option<ChainPriceInfo> = app
        .wrap()
        .query_wasm_smart(&feed, &QueryMsg::ChainInfo { chain_id: 1 })
        .unwrap();
    assert!(stored.is_none());
}

#[test]
fn test_provider_rotation() {
    let (mut app, feed) = setup(18);
    let admin = Addr::unchecked("admin");

    app.execute_contract(
        admin.clone(),
        feed.clone(),
        &ExecuteMsg::GrantRole {
            role: Role::Provider,
            account: "oracle2".to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin,
        feed.clone(),
        &ExecuteMsg::RevokeRole {
            role: Role::Provider,
            account: "oracle".to_string(),
        },
        &[],
    )
    .unwrap();

    let res: HasRoleResponse = app
        .wrap()
        .query_wasm_smart(
            &feed,
            &QueryMsg::HasRole {
                role: Role::Provider,
                account: "oracle".to_string(),
            },
        )
        .unwrap();
    assert!(!res.has_role);

    let res = app
        .execute_contract(
            Addr::unchecked("oracle2"),
            feed.clone(),
            &ExecuteMsg::SetPrices {
                group_ids: vec![0],
                price_words: vec![pack_prices([3, 0, 0, 0])],
            },
            &[],
        )
        .unwrap();
    assert!(res.events.iter().any(|e| e.ty == "wasm-price_updated"));
}
