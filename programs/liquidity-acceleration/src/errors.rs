use anchor_lang::prelude::*;

#[error_code]
pub enum LatError {
    // ============================================================
    // SETUP ERRORS
    // ============================================================

    #[msg("Protocol state is already initialized")]
    AlreadyInitialized,

    #[msg("Invalid reward configuration")]
    InvalidConfig,

    #[msg("Protocol is currently paused")]
    ProtocolPaused,

    // ============================================================
    // REQUEST ERRORS
    // ============================================================

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Signer does not own this record")]
    Unauthorized,

    #[msg("Token account mint does not match the LAT mint")]
    InvalidMint,

    // ============================================================
    // CLAIM ERRORS
    // ============================================================

    #[msg("No pending rewards to claim")]
    NothingToClaim,

    // ============================================================
    // STAKE ERRORS
    // ============================================================

    #[msg("Stake is still inside its vesting lock")]
    StillVesting,

    #[msg("Withdrawal amount exceeds staked amount")]
    InsufficientStake,

    #[msg("Staking vault does not hold enough tokens")]
    InsufficientVaultBalance,

    // ============================================================
    // ARITHMETIC ERRORS
    // ============================================================

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
