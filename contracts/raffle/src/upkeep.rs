use cosmwasm_std::Timestamp;
use fortuna_common::RoundPhase;

use crate::state::{RaffleConfig, Round};

/// Result of evaluating the draw conditions at a point in time.
pub struct Eligibility {
    pub interval_elapsed: bool,
    pub round_open: bool,
    pub pool_funded: bool,
    pub has_participants: bool,
}

impl Eligibility {
    pub fn upkeep_needed(&self) -> bool {
        self.interval_elapsed && self.round_open && self.pool_funded && self.has_participants
    }
}

/// Decide whether a randomness request may be issued. Pure: no storage,
/// no mutation, safe to evaluate at any time.
pub fn evaluate(config: &RaffleConfig, round: &Round, now: Timestamp) -> Eligibility {
    Eligibility {
        interval_elapsed: now >= round.started_at.plus_seconds(config.round_interval),
        round_open: round.phase == RoundPhase::Open,
        pool_funded: !round.pool_balance.is_zero(),
        has_participants: !round.participants.is_empty(),
    }
}
