use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const MAX_NAME_LEN: usize = 64;

/// One contest per (owner, contest_id).
/// Seeds: ["contest", owner, contest_id.to_le_bytes()]
///
/// The account itself is the escrow: stakes accumulate as lamports on top of
/// its rent-exempt minimum, and `total_pool` tracks the escrowed amount.
/// Never closed; after distribution it remains as the audit record.
#[account]
pub struct Contest {
    pub owner: Pubkey,
    pub contest_id: u64,
    pub name: String,
    pub stake_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub max_participants: u16,
    pub min_participants: u16,
    pub participant_count: u16,
    pub total_pool: u64,
    pub status: ContestStatus,
    pub bump: u8,
}

impl Contest {
    pub const SPACE: usize = 8  // discriminator
        + 32 // owner
        + 8  // contest_id
        + 4 + MAX_NAME_LEN // name
        + 8  // stake_amount
        + 8  // start_time
        + 8  // end_time
        + 2  // max_participants
        + 2  // min_participants
        + 2  // participant_count
        + 8  // total_pool
        + 1  // status
        + 1; // bump

    /// Checks a contest configuration before any state is written. Creation
    /// fails as a whole on the first violated bound.
    pub fn validate_config(
        name: &str,
        stake_amount: u64,
        start_time: i64,
        end_time: i64,
        max_participants: u16,
        min_participants: u16,
    ) -> Result<()> {
        require!(stake_amount > 0, ErrorCode::InvalidStakeAmount);
        require!(start_time < end_time, ErrorCode::InvalidTimeWindow);
        require!(
            min_participants > 0 && min_participants <= max_participants,
            ErrorCode::InvalidParticipantBounds
        );
        require!(name.len() <= MAX_NAME_LEN, ErrorCode::NameTooLong);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.status == ContestStatus::Open
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.end_time
    }

    pub fn is_full(&self) -> bool {
        self.participant_count >= self.max_participants
    }

    pub fn quorum_met(&self) -> bool {
        self.participant_count >= self.min_participants
    }

    /// Distribution trigger: the join window has elapsed, or the organizer
    /// ends early once the minimum field size has been reached.
    pub fn can_distribute(&self, now: i64) -> bool {
        now >= self.end_time || self.quorum_met()
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContestStatus {
    Open,
    Closed,
    Distributed,
}

/// Read-only snapshot returned by the `get_contest_info` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ContestInfo {
    pub owner: Pubkey,
    pub contest_id: u64,
    pub name: String,
    pub stake_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub max_participants: u16,
    pub min_participants: u16,
    pub participant_count: u16,
    pub total_pool: u64,
    pub status: ContestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(count: u16, min: u16, max: u16, end_time: i64) -> Contest {
        Contest {
            owner: Pubkey::new_unique(),
            contest_id: 0,
            name: "test".to_string(),
            stake_amount: 100_000_000,
            start_time: 1_000,
            end_time,
            max_participants: max,
            min_participants: min,
            participant_count: count,
            total_pool: count as u64 * 100_000_000,
            status: ContestStatus::Open,
            bump: 255,
        }
    }

    fn valid_config(stake: u64, start: i64, end: i64, max: u16, min: u16) -> Result<()> {
        Contest::validate_config("Morning Run Club", stake, start, end, max, min)
    }

    #[test]
    fn config_accepts_spec_bounds() {
        assert!(valid_config(1, 0, 1, 1, 1).is_ok());
        assert!(valid_config(100_000_000, 1_000, 2_000, 10, 2).is_ok());
        let name = "n".repeat(MAX_NAME_LEN);
        assert!(Contest::validate_config(&name, 1, 0, 1, 1, 1).is_ok());
    }

    #[test]
    fn config_rejects_zero_stake() {
        assert_eq!(
            valid_config(0, 1_000, 2_000, 10, 2),
            Err(ErrorCode::InvalidStakeAmount.into())
        );
    }

    #[test]
    fn config_rejects_inverted_or_empty_time_window() {
        assert_eq!(
            valid_config(1, 2_000, 1_000, 10, 2),
            Err(ErrorCode::InvalidTimeWindow.into())
        );
        assert_eq!(
            valid_config(1, 2_000, 2_000, 10, 2),
            Err(ErrorCode::InvalidTimeWindow.into())
        );
    }

    #[test]
    fn config_rejects_inconsistent_participant_bounds() {
        assert_eq!(
            valid_config(1, 1_000, 2_000, 10, 0),
            Err(ErrorCode::InvalidParticipantBounds.into())
        );
        assert_eq!(
            valid_config(1, 1_000, 2_000, 2, 3),
            Err(ErrorCode::InvalidParticipantBounds.into())
        );
    }

    #[test]
    fn config_rejects_oversized_name() {
        let name = "n".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            Contest::validate_config(&name, 1, 0, 1, 1, 1),
            Err(ErrorCode::NameTooLong.into())
        );
    }

    #[test]
    fn join_window_tracks_status_and_time() {
        let mut c = contest(1, 2, 10, 2_000);
        assert!(c.is_open() && !c.has_ended(1_999));
        assert!(c.has_ended(2_000)); // entry closes exactly at end_time

        c.status = ContestStatus::Closed;
        assert!(!c.is_open());
        c.status = ContestStatus::Distributed;
        assert!(!c.is_open());
    }

    #[test]
    fn full_only_at_max() {
        assert!(!contest(0, 2, 10, 2_000).is_full());
        assert!(!contest(9, 2, 10, 2_000).is_full());
        assert!(contest(10, 2, 10, 2_000).is_full());
    }

    #[test]
    fn distribution_requires_time_or_quorum() {
        let c = contest(1, 2, 10, 2_000);
        assert!(!c.can_distribute(1_500)); // before end, below quorum
        assert!(c.can_distribute(2_000)); // end reached
        assert!(contest(2, 2, 10, 2_000).can_distribute(1_500)); // quorum met early
    }

    #[test]
    fn space_matches_field_layout() {
        // 8 disc + 32 + 8 + (4 + 64) + 8 + 8 + 8 + 2 + 2 + 2 + 8 + 1 + 1
        assert_eq!(Contest::SPACE, 156);
    }
}
