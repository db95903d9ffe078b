use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const FOLLOW_BONUS_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    LinkedIn,
    Instagram,
}

impl SocialPlatform {
    pub const fn label(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Instagram => "Instagram",
        }
    }
}

/// Tracks which platforms a member followed so each one pays out once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialFollowLedger {
    followed: BTreeSet<SocialPlatform>,
}

impl SocialFollowLedger {
    /// Record a follow, returning the bonus earned; repeats earn nothing.
    pub fn record_follow(&mut self, platform: SocialPlatform) -> u32 {
        if self.followed.insert(platform) {
            FOLLOW_BONUS_POINTS
        } else {
            0
        }
    }

    pub fn has_followed(&self, platform: SocialPlatform) -> bool {
        self.followed.contains(&platform)
    }

    /// Value to report as `rewards.socialMediaBonus`.
    pub fn bonus_total(&self) -> u32 {
        self.followed.len() as u32 * FOLLOW_BONUS_POINTS
    }
}
