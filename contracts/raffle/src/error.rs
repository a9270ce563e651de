use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("entry fee must be greater than zero")]
    InvalidEntryFee,

    #[error("round interval must be greater than zero")]
    InvalidRoundInterval,

    #[error("key hash must be 32 bytes, got {got}")]
    InvalidKeyHashLength { got: usize },

    #[error("invalid hex in {field}")]
    InvalidHex { field: String },

    #[error("no funds sent with entry")]
    NoFundsSent,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must send {expected} denom, got {denom}")]
    WrongDenom { expected: String, denom: String },

    #[error("stake {sent} is below entry fee {entry_fee}")]
    InsufficientStake { sent: Uint128, entry_fee: Uint128 },

    #[error("round is not open for entries (phase: {phase})")]
    RoundNotOpen { phase: String },

    #[error(
        "upkeep not needed (phase: {phase}, pool: {pool_balance}, participants: {participants})"
    )]
    UpkeepNotNeeded {
        phase: String,
        pool_balance: Uint128,
        participants: u64,
    },

    #[error("no fulfillment expected (phase: {phase})")]
    UnexpectedFulfillment { phase: String },

    #[error("request id mismatch: expected {expected}, got {got}")]
    RequestMismatch { expected: u64, got: u64 },

    #[error("fulfillment carried no random words")]
    MissingRandomness,

    #[error("random word too short: {length} bytes, need at least 16")]
    InvalidRandomness { length: usize },

    #[error("round has no participants")]
    EmptyRound,

    #[error("payout transfer failed: need {needed}, contract holds {available}")]
    PayoutTransferFailed {
        needed: Uint128,
        available: Uint128,
    },
}
