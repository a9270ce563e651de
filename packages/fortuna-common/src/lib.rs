pub mod draw;
pub mod types;

pub use draw::winner_index;
pub use types::RoundPhase;
