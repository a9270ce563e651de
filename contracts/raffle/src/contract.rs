use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use fortuna_common::RoundPhase;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{RaffleConfig, RaffleStats, Round, CONFIG, ROUND, STATS};

const CONTRACT_NAME: &str = "crates.io:fortuna-raffle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.entry_fee.is_zero() {
        return Err(ContractError::InvalidEntryFee);
    }
    if msg.round_interval == 0 {
        return Err(ContractError::InvalidRoundInterval);
    }
    let key_hash = execute::decode_key_hash(&msg.key_hash_hex)?;

    let config = RaffleConfig {
        admin: info.sender.clone(),
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        denom: msg.denom,
        entry_fee: msg.entry_fee,
        round_interval: msg.round_interval,
        key_hash,
        subscription_id: msg.subscription_id,
        request_confirmations: msg.request_confirmations,
        callback_gas_limit: msg.callback_gas_limit,
    };
    CONFIG.save(deps.storage, &config)?;

    let round = Round {
        phase: RoundPhase::Open,
        participants: vec![],
        pool_balance: Uint128::zero(),
        started_at: env.block.time,
        recent_winner: None,
        pending_request: None,
    };
    ROUND.save(deps.storage, &round)?;

    STATS.save(
        deps.storage,
        &RaffleStats {
            next_request_id: 0,
            rounds_completed: 0,
            total_paid_out: Uint128::zero(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "raffle")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("entry_fee", config.entry_fee.to_string())
        .add_attribute("round_interval", config.round_interval.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::PerformUpkeep {} => execute::perform_upkeep(deps, env, info),
        ExecuteMsg::FulfillRandomness {
            request_id,
            random_words,
        } => execute::fulfill_randomness(deps, env, info, request_id, random_words),
        ExecuteMsg::UpdateConfig {
            admin,
            vrf_coordinator,
            key_hash_hex,
            subscription_id,
            request_confirmations,
            callback_gas_limit,
        } => execute::update_config(
            deps,
            env,
            info,
            admin,
            vrf_coordinator,
            key_hash_hex,
            subscription_id,
            request_confirmations,
            callback_gas_limit,
        ),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::EntryFee {} => query::query_entry_fee(deps),
        QueryMsg::Round {} => query::query_round(deps),
        QueryMsg::Participants {} => query::query_participants(deps),
        QueryMsg::UpkeepNeeded {} => query::query_upkeep_needed(deps, env),
        QueryMsg::Stats {} => query::query_stats(deps),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
