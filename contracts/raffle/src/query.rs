use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdResult};

use crate::msg::{
    ConfigResponse, EntryFeeResponse, ParticipantResponse, RoundResponse, UpkeepResponse,
};
use crate::state::{CONFIG, ROUND, STATS};
use crate::upkeep;

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&ConfigResponse {
        admin: config.admin.to_string(),
        vrf_coordinator: config.vrf_coordinator.to_string(),
        denom: config.denom,
        entry_fee: config.entry_fee,
        round_interval: config.round_interval,
        key_hash_hex: hex::encode(&config.key_hash),
        subscription_id: config.subscription_id,
        request_confirmations: config.request_confirmations,
        callback_gas_limit: config.callback_gas_limit,
    })
}

pub fn query_entry_fee(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&EntryFeeResponse {
        entry_fee: config.entry_fee,
        denom: config.denom,
    })
}

pub fn query_round(deps: Deps) -> StdResult<Binary> {
    let round = ROUND.load(deps.storage)?;
    to_json_binary(&RoundResponse {
        phase: round.phase,
        participants: round.participants.len() as u64,
        pool_balance: round.pool_balance,
        started_at: round.started_at,
        recent_winner: round.recent_winner.map(|a| a.to_string()),
        pending_request: round.pending_request,
    })
}

pub fn query_participants(deps: Deps) -> StdResult<Binary> {
    let round = ROUND.load(deps.storage)?;
    let participants: Vec<ParticipantResponse> = round
        .participants
        .into_iter()
        .map(|p| ParticipantResponse {
            address: p.address.to_string(),
            stake: p.stake,
        })
        .collect();
    to_json_binary(&participants)
}

pub fn query_upkeep_needed(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    let eligibility = upkeep::evaluate(&config, &round, env.block.time);
    to_json_binary(&UpkeepResponse {
        upkeep_needed: eligibility.upkeep_needed(),
        interval_elapsed: eligibility.interval_elapsed,
        phase: round.phase,
        pool_balance: round.pool_balance,
        participants: round.participants.len() as u64,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<Binary> {
    let stats = STATS.load(deps.storage)?;
    to_json_binary(&stats)
}
