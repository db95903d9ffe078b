//! Membership rewards for job-seekers and employers.
//!
//! Each summary runs three pure stages over a profile snapshot: the completeness scorer
//! counts populated checklist fields, the points aggregator turns completeness and activity
//! counters into a balance (unless the backend supplied one), and the tier classifier maps
//! the balance plus profile attributes onto Blue, Silver, Gold or Platinum. Nothing is cached;
//! callers re-run the engine on every fetch.

pub mod checklist;
pub mod completeness;
pub mod config;
pub mod domain;
mod lenient;
pub mod points;
pub mod redemption;
pub mod router;
pub mod social;
pub mod summary;
pub mod tiers;

#[cfg(test)]
mod tests;

pub use checklist::{
    ChecklistDefinition, ChecklistField, ChecklistGroup, CompanyField, JobSeekerChecklist,
    ProfileField,
};
pub use completeness::{CompletenessScore, GroupCompletion};
pub use config::RewardsConfig;
pub use domain::{
    Audience, CompanyProfile, Education, JobPreferences, JobSeekerProfile,
    ProfessionalExperience, RewardCounters, SocialLinks,
};
pub use points::{PointsComponent, PointsComponentKind, PointsOutcome, PointsSource};
pub use redemption::{RedemptionError, RedemptionQuote, RedemptionRequest};
pub use router::rewards_router;
pub use social::{SocialFollowLedger, SocialPlatform};
pub use summary::{RewardsEngine, RewardsSummary};
pub use tiers::{EmployerTierRule, Tier, TierDescriptor, TierProgress};
