use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::pda::CONTEST_SEED;
use crate::state::{Contest, ContestStatus};

#[derive(Accounts)]
pub struct CloseContest<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [
            CONTEST_SEED,
            contest.owner.as_ref(),
            contest.contest_id.to_le_bytes().as_ref()
        ],
        bump = contest.bump,
        constraint = contest.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub contest: Account<'info, Contest>,
}

#[event]
pub struct ContestClosed {
    pub contest: Pubkey,
    pub owner: Pubkey,
    pub participant_count: u16,
    pub timestamp: i64,
}

/// Ends the join window early without distributing. The escrow stays locked
/// until `distribute_rewards`, which remains valid from the Closed state.
pub fn handler(ctx: Context<CloseContest>) -> Result<()> {
    let contest = &mut ctx.accounts.contest;

    require!(contest.is_open(), ErrorCode::ContestClosed);

    contest.status = ContestStatus::Closed;

    emit!(ContestClosed {
        contest: contest.key(),
        owner: contest.owner,
        participant_count: contest.participant_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Contest {} closed", contest.contest_id);

    Ok(())
}
