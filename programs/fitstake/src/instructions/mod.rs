pub mod close_contest;
pub mod create_contest;
pub mod distribute_rewards;
pub mod get_contest_info;
pub mod join_contest;

pub use close_contest::*;
pub use create_contest::*;
pub use distribute_rewards::*;
pub use get_contest_info::*;
pub use join_contest::*;
