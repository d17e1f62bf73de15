use anchor_lang::prelude::*;

/// Per-organizer sequence counter.
/// Seeds: ["contest_counter", owner]
///
/// Lazily created on the owner's first contest. `count` is the id the next
/// contest will take; racing creations by the same owner serialize on this
/// account, so contest addresses never collide.
#[account]
pub struct ContestCounter {
    pub owner: Pubkey,
    pub count: u64,
    pub bump: u8,
}

impl ContestCounter {
    pub const SPACE: usize = 8  // discriminator
        + 32 // owner
        + 8  // count
        + 1; // bump
}
