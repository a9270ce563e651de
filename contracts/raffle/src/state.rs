use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::Item;
use fortuna_common::RoundPhase;

pub const CONFIG: Item<RaffleConfig> = Item::new("config");
pub const ROUND: Item<Round> = Item::new("round");
pub const STATS: Item<RaffleStats> = Item::new("stats");

/// Each request asks the coordinator for exactly one random word.
pub const NUM_WORDS: u32 = 1;

#[cw_serde]
pub struct RaffleConfig {
    pub admin: Addr,
    /// The only address allowed to deliver randomness fulfillments.
    pub vrf_coordinator: Addr,
    /// Native denom entries are paid in and the prize is paid out in.
    pub denom: String,
    /// Minimum stake to join a round. Immutable after instantiate.
    pub entry_fee: Uint128,
    /// Seconds a round must run before a draw can be requested. Immutable.
    pub round_interval: u64,
    /// 32-byte key hash selecting the coordinator gas lane.
    pub key_hash: Vec<u8>,
    /// Funding account at the coordinator.
    pub subscription_id: u64,
    /// Block confirmations the coordinator waits before responding.
    pub request_confirmations: u16,
    /// Gas budget for the fulfillment callback.
    pub callback_gas_limit: u32,
}

#[cw_serde]
pub struct Participant {
    pub address: Addr,
    pub stake: Uint128,
}

/// The singleton round. Reset on every payout, never destroyed.
#[cw_serde]
pub struct Round {
    pub phase: RoundPhase,
    /// Insertion order is the draw order; one address may hold several slots.
    pub participants: Vec<Participant>,
    /// Sum of participant stakes while `Open`.
    pub pool_balance: Uint128,
    pub started_at: Timestamp,
    pub recent_winner: Option<Addr>,
    /// Request handle while `AwaitingRandomness`. At most one in flight.
    pub pending_request: Option<u64>,
}

/// Monotonic aggregates surviving round resets. Not per-round history.
#[cw_serde]
pub struct RaffleStats {
    pub next_request_id: u64,
    pub rounds_completed: u64,
    pub total_paid_out: Uint128,
}
