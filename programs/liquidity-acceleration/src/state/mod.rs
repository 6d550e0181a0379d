pub mod protocol_state;
pub mod trader_stats;
pub mod stake_position;

pub use protocol_state::*;
pub use trader_stats::*;
pub use stake_position::*;
