//! Token wallet - earned tokens and purchased app time
//!
//! Tokens come from workout reps and are spent on minutes of access to a
//! social app. The wallet only lives in memory; it is serializable so the
//! host app can store it wherever it keeps settings.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::session::SessionSummary;

/// Apps whose access time can be bought
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Instagram,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Tiktok, Platform::Instagram, Platform::Youtube];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable block of app time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShopOffer {
    pub platform: Platform,
    pub title: &'static str,
    pub token_cost: u32,
    pub minutes: u32,
}

pub const SHOP_OFFERS: [ShopOffer; 3] = [
    ShopOffer {
        platform: Platform::Tiktok,
        title: "TikTok 10 min",
        token_cost: 50,
        minutes: 10,
    },
    ShopOffer {
        platform: Platform::Instagram,
        title: "Instagram 10 min",
        token_cost: 50,
        minutes: 10,
    },
    ShopOffer {
        platform: Platform::Youtube,
        title: "YouTube 10 min",
        token_cost: 50,
        minutes: 10,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("offer must cost tokens and grant minutes (cost {cost}, minutes {minutes})")]
    InvalidOffer { cost: u32, minutes: u32 },

    #[error("not enough tokens: need {needed}, have {available}")]
    InsufficientTokens { needed: u32, available: u32 },
}

/// Minutes of access bought per platform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeCredits {
    pub tiktok: u32,
    pub instagram: u32,
    pub youtube: u32,
}

impl TimeCredits {
    pub fn get(&self, platform: Platform) -> u32 {
        match platform {
            Platform::Tiktok => self.tiktok,
            Platform::Instagram => self.instagram,
            Platform::Youtube => self.youtube,
        }
    }

    fn slot_mut(&mut self, platform: Platform) -> &mut u32 {
        match platform {
            Platform::Tiktok => &mut self.tiktok,
            Platform::Instagram => &mut self.instagram,
            Platform::Youtube => &mut self.youtube,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenWallet {
    tokens: u32,
    #[serde(default)]
    time_credits: TimeCredits,
}

impl TokenWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> u32 {
        self.tokens
    }

    pub fn time_credits(&self) -> &TimeCredits {
        &self.time_credits
    }

    pub fn minutes(&self, platform: Platform) -> u32 {
        self.time_credits.get(platform)
    }

    /// Credit tokens; zero is a no-op
    pub fn add_tokens(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.tokens = self.tokens.saturating_add(amount);
    }

    /// Pay out a finished workout
    pub fn credit_session(&mut self, summary: &SessionSummary) {
        self.add_tokens(summary.tokens_earned);
    }

    /// Trade tokens for minutes on a platform
    ///
    /// Leaves the wallet untouched on error.
    pub fn spend_for_credit(
        &mut self,
        platform: Platform,
        cost: u32,
        minutes: u32,
    ) -> Result<(), WalletError> {
        if cost == 0 || minutes == 0 {
            return Err(WalletError::InvalidOffer { cost, minutes });
        }
        if self.tokens < cost {
            return Err(WalletError::InsufficientTokens {
                needed: cost,
                available: self.tokens,
            });
        }

        self.tokens -= cost;
        let slot = self.time_credits.slot_mut(platform);
        *slot = slot.saturating_add(minutes);

        tracing::info!(%platform, cost, minutes, balance = self.tokens, "time credit purchased");
        Ok(())
    }

    pub fn buy(&mut self, offer: &ShopOffer) -> Result<(), WalletError> {
        self.spend_for_credit(offer.platform, offer.token_cost, offer.minutes)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
