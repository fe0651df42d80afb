//! Rewards module - live workout sessions and the token economy
//!
//! Re-exports only. All logic in submodules.

mod session;
mod wallet;

pub use session::{
    SessionSummary, SessionUpdate, WorkoutSession, DEFAULT_TARGET_REPS, MAX_REPORTED_FPS,
    MAX_TARGET_REPS, TOKENS_PER_REP,
};
pub use wallet::{Platform, ShopOffer, TimeCredits, TokenWallet, WalletError, SHOP_OFFERS};
