use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Stake amount must be greater than zero")]
    InvalidStakeAmount,
    #[msg("Start time must be before end time")]
    InvalidTimeWindow,
    #[msg("Participant bounds must satisfy 0 < min <= max")]
    InvalidParticipantBounds,
    #[msg("Contest name exceeds the maximum length")]
    NameTooLong,
    #[msg("Contest is not open for joining")]
    ContestClosed,
    #[msg("Contest entry window has ended")]
    ContestEnded,
    #[msg("Contest is full")]
    ContestFull,
    #[msg("Unauthorized access")]
    Unauthorized,
    #[msg("Rewards have already been distributed")]
    AlreadyDistributed,
    #[msg("Contest has not ended and minimum participation is not met")]
    DistributionNotReady,
    #[msg("Winner arguments do not match the supplied winner accounts")]
    WinnerMismatch,
    #[msg("Insufficient pool balance")]
    InsufficientPool,
    #[msg("Arithmetic overflow")]
    Overflow,
}
