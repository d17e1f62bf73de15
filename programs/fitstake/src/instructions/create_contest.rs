use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::pda::{CONTEST_COUNTER_SEED, CONTEST_SEED};
use crate::state::{Contest, ContestCounter, ContestStatus};

#[derive(Accounts)]
pub struct CreateContest<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    /// Lazily created on the owner's first contest. The contest seeds below
    /// read `count` in the same atomic instruction that increments it, so two
    /// racing creations by one owner serialize here and take distinct ids.
    #[account(
        init_if_needed,
        payer = owner,
        space = ContestCounter::SPACE,
        seeds = [CONTEST_COUNTER_SEED, owner.key().as_ref()],
        bump
    )]
    pub contest_counter: Account<'info, ContestCounter>,
    #[account(
        init,
        payer = owner,
        space = Contest::SPACE,
        seeds = [
            CONTEST_SEED,
            owner.key().as_ref(),
            contest_counter.count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub contest: Account<'info, Contest>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct ContestCreated {
    pub contest: Pubkey,
    pub contest_id: u64,
    pub owner: Pubkey,
    pub name: String,
    pub stake_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub max_participants: u16,
    pub min_participants: u16,
    pub timestamp: i64,
}

pub fn handler(
    ctx: Context<CreateContest>,
    name: String,
    stake_amount: u64,
    start_time: i64,
    end_time: i64,
    max_participants: u16,
    min_participants: u16,
) -> Result<()> {
    Contest::validate_config(
        &name,
        stake_amount,
        start_time,
        end_time,
        max_participants,
        min_participants,
    )?;

    let counter = &mut ctx.accounts.contest_counter;
    let contest_id = counter.count;
    counter.owner = ctx.accounts.owner.key();
    counter.bump = ctx.bumps.contest_counter;
    counter.count = contest_id.checked_add(1).ok_or(ErrorCode::Overflow)?;

    let contest = &mut ctx.accounts.contest;
    contest.owner = ctx.accounts.owner.key();
    contest.contest_id = contest_id;
    contest.name = name;
    contest.stake_amount = stake_amount;
    contest.start_time = start_time;
    contest.end_time = end_time;
    contest.max_participants = max_participants;
    contest.min_participants = min_participants;
    contest.participant_count = 0;
    contest.total_pool = 0;
    contest.status = ContestStatus::Open;
    contest.bump = ctx.bumps.contest;

    emit!(ContestCreated {
        contest: contest.key(),
        contest_id,
        owner: contest.owner,
        name: contest.name.clone(),
        stake_amount,
        start_time,
        end_time,
        max_participants,
        min_participants,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Contest {} created by {}", contest_id, contest.owner);

    Ok(())
}
