use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::pda::{CONTEST_SEED, PARTICIPANT_SEED};
use crate::state::{Contest, ContestStatus, ParticipantEntry};

/// Pool share per placement (first, second, third) in basis points. The
/// integer-division remainder goes back to the organizer.
pub const PAYOUT_SPLIT_BPS: [u64; 3] = [5_000, 3_000, 2_000];
const BPS_DENOM: u64 = 10_000;

#[derive(Accounts)]
pub struct DistributeRewards<'info> {
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
    #[account(mut)]
    pub winner1_account: SystemAccount<'info>,
    #[account(mut)]
    pub winner2_account: SystemAccount<'info>,
    #[account(mut)]
    pub winner3_account: SystemAccount<'info>,
    /// Each winner must hold an entry record for this contest; an address
    /// that never joined fails validation here and nothing is transferred.
    #[account(
        seeds = [
            PARTICIPANT_SEED,
            contest.key().as_ref(),
            winner1_account.key().as_ref()
        ],
        bump = winner1_entry.bump
    )]
    pub winner1_entry: Account<'info, ParticipantEntry>,
    #[account(
        seeds = [
            PARTICIPANT_SEED,
            contest.key().as_ref(),
            winner2_account.key().as_ref()
        ],
        bump = winner2_entry.bump
    )]
    pub winner2_entry: Account<'info, ParticipantEntry>,
    #[account(
        seeds = [
            PARTICIPANT_SEED,
            contest.key().as_ref(),
            winner3_account.key().as_ref()
        ],
        bump = winner3_entry.bump
    )]
    pub winner3_entry: Account<'info, ParticipantEntry>,
    /// Receives the rounding remainder of the split.
    #[account(
        mut,
        constraint = owner_account.key() == contest.owner @ ErrorCode::Unauthorized
    )]
    pub owner_account: SystemAccount<'info>,
}

#[event]
pub struct RewardsDistributed {
    pub contest: Pubkey,
    pub winner1: Pubkey,
    pub winner2: Pubkey,
    pub winner3: Pubkey,
    pub payouts: [u64; 3],
    pub remainder: u64,
    pub total_pool: u64,
    pub timestamp: i64,
}

pub fn handler(
    ctx: Context<DistributeRewards>,
    winner1: Pubkey,
    winner2: Pubkey,
    winner3: Pubkey,
) -> Result<()> {
    let contest = &mut ctx.accounts.contest;

    // A distributed contest has an empty pool; the status check is what
    // makes the payout one-shot.
    require!(
        contest.status != ContestStatus::Distributed,
        ErrorCode::AlreadyDistributed
    );

    let now = Clock::get()?.unix_timestamp;
    require!(contest.can_distribute(now), ErrorCode::DistributionNotReady);

    // The supplied ranking must match the accounts the entries were
    // validated against.
    verify_ranking(
        &[winner1, winner2, winner3],
        &[
            ctx.accounts.winner1_account.key(),
            ctx.accounts.winner2_account.key(),
            ctx.accounts.winner3_account.key(),
        ],
    )?;

    let pool = contest.total_pool;
    require!(pool > 0, ErrorCode::InsufficientPool);

    let (payouts, remainder) = split_pool(pool)?;

    // The contest account carries data, so funds leave it by direct lamport
    // debit rather than a system-program transfer. The rent-exempt minimum
    // paid at creation is untouched because only the tracked pool moves.
    let contest_info = contest.to_account_info();
    let recipients = [
        (ctx.accounts.winner1_account.to_account_info(), payouts[0]),
        (ctx.accounts.winner2_account.to_account_info(), payouts[1]),
        (ctx.accounts.winner3_account.to_account_info(), payouts[2]),
        (ctx.accounts.owner_account.to_account_info(), remainder),
    ];
    for (recipient, amount) in recipients {
        if amount == 0 {
            continue;
        }
        **contest_info.try_borrow_mut_lamports()? -= amount;
        **recipient.try_borrow_mut_lamports()? += amount;
    }

    contest.status = ContestStatus::Distributed;
    contest.total_pool = 0;

    emit!(RewardsDistributed {
        contest: contest.key(),
        winner1,
        winner2,
        winner3,
        payouts,
        remainder,
        total_pool: pool,
        timestamp: now,
    });

    msg!(
        "Contest {} distributed {} lamports to {} / {} / {}",
        contest.contest_id,
        pool,
        winner1,
        winner2,
        winner3
    );

    Ok(())
}

/// The ranked winner arguments must line up position by position with the
/// accounts whose entry records were validated.
fn verify_ranking(winners: &[Pubkey; 3], accounts: &[Pubkey; 3]) -> Result<()> {
    require!(winners == accounts, ErrorCode::WinnerMismatch);
    Ok(())
}

/// Split the pool by `PAYOUT_SPLIT_BPS`, widened to u128 for the multiply.
/// Returns the three payouts and the rounding remainder; the four amounts
/// always sum to `pool` exactly.
fn split_pool(pool: u64) -> Result<([u64; 3], u64)> {
    let mut payouts = [0u64; 3];
    let mut distributed: u64 = 0;
    for (slot, bps) in payouts.iter_mut().zip(PAYOUT_SPLIT_BPS) {
        let amount = (pool as u128)
            .checked_mul(bps as u128)
            .ok_or(ErrorCode::Overflow)?
            / BPS_DENOM as u128;
        *slot = amount as u64;
        distributed = distributed.checked_add(*slot).ok_or(ErrorCode::Overflow)?;
    }
    let remainder = pool.checked_sub(distributed).ok_or(ErrorCode::Overflow)?;
    Ok((payouts, remainder))
}
