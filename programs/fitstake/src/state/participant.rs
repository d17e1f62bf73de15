use anchor_lang::prelude::*;

/// Proof that a participant joined a contest and escrowed its stake.
/// Seeds: ["participant", contest, participant]
///
/// Created exactly once at join and immutable afterwards. A second join by
/// the same identity derives the same address and fails account creation,
/// which is the double-join guard. Distribution requires this account as the
/// winner's membership proof.
#[account]
pub struct ParticipantEntry {
    pub contest: Pubkey,
    pub participant: Pubkey,
    pub stake_locked: u64,
    pub joined_at: i64,
    pub bump: u8,
}

impl ParticipantEntry {
    pub const SPACE: usize = 8  // discriminator
        + 32 // contest
        + 32 // participant
        + 8  // stake_locked
        + 8  // joined_at
        + 1; // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_matches_field_layout() {
        // 8 disc + 32 + 32 + 8 + 8 + 1
        assert_eq!(ParticipantEntry::SPACE, 89);
    }
}
