use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};
use fortuna_common::RoundPhase;

use crate::state::RaffleStats;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the VRF coordinator that will deliver fulfillments.
    pub vrf_coordinator: String,
    /// Native denom for entries and the prize.
    pub denom: String,
    pub entry_fee: Uint128,
    pub round_interval: u64,
    /// Hex-encoded 32-byte key hash (64 hex chars).
    pub key_hash_hex: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Join the current round. Send the stake (>= entry fee) in info.funds.
    Enter {},
    /// Request randomness for the draw if the round is eligible.
    /// Permissionless; eligibility is re-validated on-chain.
    PerformUpkeep {},
    /// Deliver the random words for an outstanding request.
    /// Coordinator only.
    FulfillRandomness {
        request_id: u64,
        /// Hex-encoded random words; exactly one is requested, the first
        /// is consumed.
        random_words: Vec<String>,
    },
    /// Rotate operational VRF parameters. Admin only.
    /// Entry fee, interval, and denom are deliberately not updatable.
    UpdateConfig {
        admin: Option<String>,
        vrf_coordinator: Option<String>,
        key_hash_hex: Option<String>,
        subscription_id: Option<u64>,
        request_confirmations: Option<u16>,
        callback_gas_limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

/// Message sent to the VRF coordinator to request randomness.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomness {
        /// Handle the coordinator echoes back in the fulfillment.
        request_id: u64,
        key_hash_hex: String,
        subscription_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(EntryFeeResponse)]
    EntryFee {},
    #[returns(RoundResponse)]
    Round {},
    #[returns(Vec<ParticipantResponse>)]
    Participants {},
    #[returns(UpkeepResponse)]
    UpkeepNeeded {},
    #[returns(RaffleStats)]
    Stats {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: String,
    pub vrf_coordinator: String,
    pub denom: String,
    pub entry_fee: Uint128,
    pub round_interval: u64,
    pub key_hash_hex: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
}

#[cw_serde]
pub struct EntryFeeResponse {
    pub entry_fee: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct RoundResponse {
    pub phase: RoundPhase,
    pub participants: u64,
    pub pool_balance: Uint128,
    pub started_at: Timestamp,
    pub recent_winner: Option<String>,
    pub pending_request: Option<u64>,
}

#[cw_serde]
pub struct ParticipantResponse {
    pub address: String,
    pub stake: Uint128,
}

/// The eligibility check exposed for the upkeep agent. Pure; safe to poll
/// at any time.
#[cw_serde]
pub struct UpkeepResponse {
    pub upkeep_needed: bool,
    pub interval_elapsed: bool,
    pub phase: RoundPhase,
    pub pool_balance: Uint128,
    pub participants: u64,
}
