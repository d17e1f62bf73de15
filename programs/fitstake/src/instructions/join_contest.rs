use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::ErrorCode;
use crate::pda::{CONTEST_SEED, PARTICIPANT_SEED};
use crate::state::{Contest, ParticipantEntry};

#[derive(Accounts)]
pub struct JoinContest<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,
    #[account(
        mut,
        seeds = [
            CONTEST_SEED,
            contest.owner.as_ref(),
            contest.contest_id.to_le_bytes().as_ref()
        ],
        bump = contest.bump
    )]
    pub contest: Account<'info, Contest>,
    /// Derived from (contest, participant), so a repeat join by the same
    /// identity collides on this address and the whole transaction fails.
    /// That collision is the double-join guard; there is no separate check.
    #[account(
        init,
        payer = participant,
        space = ParticipantEntry::SPACE,
        seeds = [
            PARTICIPANT_SEED,
            contest.key().as_ref(),
            participant.key().as_ref()
        ],
        bump
    )]
    pub entry: Account<'info, ParticipantEntry>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct ParticipantJoined {
    pub contest: Pubkey,
    pub participant: Pubkey,
    pub stake_locked: u64,
    pub participant_count: u16,
    pub total_pool: u64,
    pub timestamp: i64,
}

pub fn handler(ctx: Context<JoinContest>) -> Result<()> {
    let contest = &mut ctx.accounts.contest;
    let participant = ctx.accounts.participant.key();
    let now = Clock::get()?.unix_timestamp;

    require!(contest.is_open(), ErrorCode::ContestClosed);
    require!(!contest.has_ended(now), ErrorCode::ContestEnded);
    require!(!contest.is_full(), ErrorCode::ContestFull);

    // Escrow the stake on the contest account itself.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.participant.to_account_info(),
                to: contest.to_account_info(),
            },
        ),
        contest.stake_amount,
    )?;

    contest.participant_count = contest
        .participant_count
        .checked_add(1)
        .ok_or(ErrorCode::Overflow)?;
    contest.total_pool = contest
        .total_pool
        .checked_add(contest.stake_amount)
        .ok_or(ErrorCode::Overflow)?;

    let entry = &mut ctx.accounts.entry;
    entry.contest = contest.key();
    entry.participant = participant;
    entry.stake_locked = contest.stake_amount;
    entry.joined_at = now;
    entry.bump = ctx.bumps.entry;

    emit!(ParticipantJoined {
        contest: contest.key(),
        participant,
        stake_locked: contest.stake_amount,
        participant_count: contest.participant_count,
        total_pool: contest.total_pool,
        timestamp: now,
    });

    msg!(
        "Participant {} joined contest {} ({}/{})",
        participant,
        contest.contest_id,
        contest.participant_count,
        contest.max_participants
    );

    Ok(())
}
