use anchor_lang::prelude::*;

use crate::state::{Contest, ContestInfo};

#[derive(Accounts)]
pub struct GetContestInfo<'info> {
    pub contest: Account<'info, Contest>,
}

pub fn handler(ctx: Context<GetContestInfo>) -> Result<ContestInfo> {
    let contest = &ctx.accounts.contest;

    Ok(ContestInfo {
        owner: contest.owner,
        contest_id: contest.contest_id,
        name: contest.name.clone(),
        stake_amount: contest.stake_amount,
        start_time: contest.start_time,
        end_time: contest.end_time,
        max_participants: contest.max_participants,
        min_participants: contest.min_participants,
        participant_count: contest.participant_count,
        total_pool: contest.total_pool,
        status: contest.status,
    })
}
