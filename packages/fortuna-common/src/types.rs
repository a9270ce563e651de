use cosmwasm_schema::cw_serde;

/// The lifecycle phase of the current raffle round.
///
/// `Open` accepts entries; `AwaitingRandomness` means a randomness request
/// is outstanding at the coordinator and entries are rejected until the
/// fulfillment callback resolves the round.
#[cw_serde]
#[derive(Copy)]
pub enum RoundPhase {
    Open,
    AwaitingRandomness,
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Open => "open",
            RoundPhase::AwaitingRandomness => "awaiting_randomness",
        }
    }
}
