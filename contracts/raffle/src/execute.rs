use cosmwasm_std::{
    coins, to_json_binary, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use fortuna_common::{winner_index, RoundPhase};

use crate::error::ContractError;
use crate::msg::CoordinatorExecuteMsg;
use crate::state::{Participant, CONFIG, NUM_WORDS, ROUND, STATS};

/// Decode and length-check a hex key hash (32 bytes = 64 hex chars).
pub fn decode_key_hash(key_hash_hex: &str) -> Result<Vec<u8>, ContractError> {
    let key_hash = hex::decode(key_hash_hex).map_err(|_| ContractError::InvalidHex {
        field: "key_hash_hex".to_string(),
    })?;
    if key_hash.len() != 32 {
        return Err(ContractError::InvalidKeyHashLength {
            got: key_hash.len(),
        });
    }
    Ok(key_hash)
}

/// Join the current round. Identity is the sender, stake is the attached
/// funds. All checks precede any write.
pub fn enter(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Validate funds: exactly one coin, the configured denom, non-zero
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != config.denom {
        return Err(ContractError::WrongDenom {
            expected: config.denom.clone(),
            denom: sent.denom.clone(),
        });
    }
    let stake = sent.amount;
    if stake.is_zero() {
        return Err(ContractError::NoFundsSent);
    }
    if stake < config.entry_fee {
        return Err(ContractError::InsufficientStake {
            sent: stake,
            entry_fee: config.entry_fee,
        });
    }

    let mut round = ROUND.load(deps.storage)?;
    if round.phase != RoundPhase::Open {
        return Err(ContractError::RoundNotOpen {
            phase: round.phase.as_str().to_string(),
        });
    }

    round.participants.push(Participant {
        address: info.sender.clone(),
        stake,
    });
    round.pool_balance += stake;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("participant", info.sender.to_string())
        .add_attribute("stake", stake.to_string())
        .add_event(
            Event::new("fortuna_entered_round")
                .add_attribute("participant", info.sender.to_string())
                .add_attribute("stake", stake.to_string())
                .add_attribute("pool_balance", round.pool_balance.to_string())
                .add_attribute("participants", round.participants.len().to_string()),
        ))
}

/// Request randomness for the draw if the round is eligible.
///
/// Permissionless: the upkeep agent is untrusted, so eligibility is
/// re-validated here. On success the round flips to `AwaitingRandomness`
/// before the request message is emitted; if the coordinator rejects the
/// request the whole transaction reverts, undoing the flip.
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    let eligibility = crate::upkeep::evaluate(&config, &round, env.block.time);
    if !eligibility.upkeep_needed() {
        return Err(ContractError::UpkeepNotNeeded {
            phase: round.phase.as_str().to_string(),
            pool_balance: round.pool_balance,
            participants: round.participants.len() as u64,
        });
    }

    let mut stats = STATS.load(deps.storage)?;
    let request_id = stats.next_request_id;
    stats.next_request_id += 1;
    STATS.save(deps.storage, &stats)?;

    // The phase flip is the concurrency guard: entries and further upkeep
    // calls are rejected until the fulfillment resolves this request.
    round.phase = RoundPhase::AwaitingRandomness;
    round.pending_request = Some(request_id);
    ROUND.save(deps.storage, &round)?;

    let request_msg = WasmMsg::Execute {
        contract_addr: config.vrf_coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomness {
            request_id,
            key_hash_hex: hex::encode(&config.key_hash),
            subscription_id: config.subscription_id,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(request_msg)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("fortuna_randomness_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("pool_balance", round.pool_balance.to_string())
                .add_attribute("participants", round.participants.len().to_string()),
        ))
}

/// Deliver the random words for the outstanding request and settle the
/// round: pick the winner, reset the round, pay out the pool.
///
/// Storage is fully reset before the bank send is emitted. A failing send
/// aborts the transaction and undoes the reset, so the round either pays
/// out and reopens, or stays wedged in `AwaitingRandomness` untouched.
pub fn fulfill_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.vrf_coordinator {
        return Err(ContractError::Unauthorized {
            reason: "only the vrf coordinator can fulfill randomness".to_string(),
        });
    }

    let mut round = ROUND.load(deps.storage)?;
    if round.phase != RoundPhase::AwaitingRandomness {
        return Err(ContractError::UnexpectedFulfillment {
            phase: round.phase.as_str().to_string(),
        });
    }
    let expected = round
        .pending_request
        .ok_or(ContractError::UnexpectedFulfillment {
            phase: round.phase.as_str().to_string(),
        })?;
    if request_id != expected {
        return Err(ContractError::RequestMismatch {
            expected,
            got: request_id,
        });
    }

    // One word requested; the first delivered word is the draw, extras
    // are ignored.
    let word_hex = random_words.first().ok_or(ContractError::MissingRandomness)?;
    let word = hex::decode(word_hex).map_err(|_| ContractError::InvalidHex {
        field: "random_words".to_string(),
    })?;
    if word.len() < 16 {
        return Err(ContractError::InvalidRandomness { length: word.len() });
    }

    if round.participants.is_empty() {
        // Cannot happen: the round had participants at request time and
        // entry is blocked while awaiting randomness. Checked, not assumed.
        return Err(ContractError::EmptyRound);
    }
    let index = winner_index(&word, round.participants.len())
        .ok_or(ContractError::InvalidRandomness { length: word.len() })?;
    let winner = round.participants[index].address.clone();
    let prize = round.pool_balance;

    // Check the contract can actually pay before touching any state, so a
    // known shortfall leaves storage byte-identical to pre-call.
    let available = deps
        .querier
        .query_balance(env.contract.address.clone(), &config.denom)?
        .amount;
    if available < prize {
        return Err(ContractError::PayoutTransferFailed {
            needed: prize,
            available,
        });
    }

    // Effects before interaction: the round is fully reset and persisted
    // before the prize transfer is emitted.
    let participant_count = round.participants.len() as u64;
    round.recent_winner = Some(winner.clone());
    round.phase = RoundPhase::Open;
    round.participants.clear();
    round.pool_balance = Uint128::zero();
    round.started_at = env.block.time;
    round.pending_request = None;
    ROUND.save(deps.storage, &round)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.rounds_completed += 1;
    stats.total_paid_out += prize;
    STATS.save(deps.storage, &stats)?;

    let payout_msg = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(prize.u128(), &config.denom),
    };

    Ok(Response::new()
        .add_message(payout_msg)
        .add_attribute("action", "fulfill_randomness")
        .add_attribute("winner", winner.to_string())
        .add_attribute("amount", prize.to_string())
        .add_event(
            Event::new("fortuna_winner_paid")
                .add_attribute("winner", winner.to_string())
                .add_attribute("amount", prize.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("randomness", word_hex.clone())
                .add_attribute("participants", participant_count.to_string()),
        ))
}

/// Rotate operational VRF parameters. Admin only. Entry fee, interval,
/// and denom are not updatable.
#[allow(clippy::too_many_arguments)]
pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: Option<String>,
    vrf_coordinator: Option<String>,
    key_hash_hex: Option<String>,
    subscription_id: Option<u64>,
    request_confirmations: Option<u16>,
    callback_gas_limit: Option<u32>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update config".to_string(),
        });
    }

    if let Some(admin) = admin {
        config.admin = deps.api.addr_validate(&admin)?;
    }
    if let Some(coordinator) = vrf_coordinator {
        config.vrf_coordinator = deps.api.addr_validate(&coordinator)?;
    }
    if let Some(key_hash_hex) = key_hash_hex {
        config.key_hash = decode_key_hash(&key_hash_hex)?;
    }
    if let Some(subscription_id) = subscription_id {
        config.subscription_id = subscription_id;
    }
    if let Some(request_confirmations) = request_confirmations {
        config.request_confirmations = request_confirmations;
    }
    if let Some(callback_gas_limit) = callback_gas_limit {
        config.callback_gas_limit = callback_gas_limit;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("admin", config.admin.to_string()))
}
