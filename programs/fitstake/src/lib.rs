use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;

use state::ContestInfo;

declare_id!("Ek9ZiW7dKNbXJDXVnZqWb5vi19gbws97DJNKcUTV2nsK");

#[program]
pub mod fitstake {
    use super::*;

    /// Create a staked contest. The organizer's counter hands out the
    /// contest id and the contest account is initialized at the address
    /// derived from (owner, id).
    pub fn create_contest(
        ctx: Context<CreateContest>,
        name: String,
        stake_amount: u64,
        start_time: i64,
        end_time: i64,
        max_participants: u16,
        min_participants: u16,
    ) -> Result<()> {
        create_contest::handler(
            ctx,
            name,
            stake_amount,
            start_time,
            end_time,
            max_participants,
            min_participants,
        )
    }

    /// Join an open contest by escrowing its fixed stake.
    pub fn join_contest(ctx: Context<JoinContest>) -> Result<()> {
        join_contest::handler(ctx)
    }

    /// End the join window early without paying out (owner only).
    pub fn close_contest(ctx: Context<CloseContest>) -> Result<()> {
        close_contest::handler(ctx)
    }

    /// Pay the escrowed pool to three ranked winners (owner only). Terminal:
    /// a contest distributes exactly once.
    pub fn distribute_rewards(
        ctx: Context<DistributeRewards>,
        winner1: Pubkey,
        winner2: Pubkey,
        winner3: Pubkey,
    ) -> Result<()> {
        distribute_rewards::handler(ctx, winner1, winner2, winner3)
    }

    /// Read-only snapshot of a contest.
    pub fn get_contest_info(ctx: Context<GetContestInfo>) -> Result<ContestInfo> {
        get_contest_info::handler(ctx)
    }
}
