use serde::{Deserialize, Serialize};
use tracing::debug;

use super::checklist::{ChecklistDefinition, CompanyField, ProfileField};
use super::completeness::{self, CompletenessScore, GroupCompletion};
use super::config::RewardsConfig;
use super::domain::{Audience, CompanyProfile, JobSeekerProfile};
use super::points::{self, PointsComponent, PointsOutcome, PointsSource};
use super::tiers::{self, Tier};

/// Stateless engine running completeness, points and tier stages over a profile snapshot.
#[derive(Debug, Clone)]
pub struct RewardsEngine {
    config: RewardsConfig,
    job_seeker_checklist: ChecklistDefinition<ProfileField>,
    employer_checklist: ChecklistDefinition<CompanyField>,
}

impl Default for RewardsEngine {
    fn default() -> Self {
        Self::new(RewardsConfig::default())
    }
}

impl RewardsEngine {
    pub fn new(config: RewardsConfig) -> Self {
        let job_seeker_checklist = ChecklistDefinition::for_variant(config.job_seeker_checklist);
        Self {
            config,
            job_seeker_checklist,
            employer_checklist: ChecklistDefinition::employer(),
        }
    }

    pub fn config(&self) -> &RewardsConfig {
        &self.config
    }

    pub fn job_seeker_checklist(&self) -> &ChecklistDefinition<ProfileField> {
        &self.job_seeker_checklist
    }

    pub fn employer_checklist(&self) -> &ChecklistDefinition<CompanyField> {
        &self.employer_checklist
    }

    pub fn score_job_seeker(&self, profile: &JobSeekerProfile) -> CompletenessScore {
        completeness::score(profile, &self.job_seeker_checklist)
    }

    pub fn score_employer(&self, company: &CompanyProfile) -> CompletenessScore {
        completeness::score(company, &self.employer_checklist)
    }

    pub fn job_seeker_points(&self, profile: &JobSeekerProfile) -> PointsSource {
        let completeness = self.score_job_seeker(profile);
        points::job_seeker_points(profile, &completeness, &self.config).source
    }

    pub fn employer_points(&self, company: &CompanyProfile) -> PointsSource {
        let completeness = self.score_employer(company);
        points::employer_points(company, &completeness).source
    }

    pub fn classify_job_seeker(&self, profile: &JobSeekerProfile, points: u32) -> Tier {
        tiers::classify_job_seeker(profile, points, &self.config)
    }

    pub fn classify_employer(&self, company: &CompanyProfile, points: u32) -> Tier {
        tiers::classify_employer(company, points, &self.config)
    }

    pub fn job_seeker_summary(&self, profile: &JobSeekerProfile) -> RewardsSummary {
        let completeness = self.score_job_seeker(profile);
        let outcome = points::job_seeker_points(profile, &completeness, &self.config);
        let tier = self.classify_job_seeker(profile, outcome.points());
        RewardsSummary::assemble(Audience::JobSeeker, completeness, outcome, tier)
    }

    pub fn employer_summary(&self, company: &CompanyProfile) -> RewardsSummary {
        let completeness = self.score_employer(company);
        let outcome = points::employer_points(company, &completeness);
        let tier = self.classify_employer(company, outcome.points());
        RewardsSummary::assemble(Audience::Employer, completeness, outcome, tier)
    }
}

/// Output contract consumed by the dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsSummary {
    pub audience: Audience,
    pub completed_count: u32,
    pub total_fields: u32,
    pub percentage: u8,
    pub points: u32,
    pub points_source: String,
    pub tier: Tier,
    pub next_tier: Option<Tier>,
    pub progress_to_next_tier_percent: u8,
    pub points_to_next_tier: Option<u32>,
    pub referral_points: u32,
    pub activity_points: u32,
    pub groups: Vec<GroupCompletion>,
    pub missing_fields: Vec<String>,
    pub components: Vec<PointsComponent>,
}

impl RewardsSummary {
    fn assemble(
        audience: Audience,
        completeness: CompletenessScore,
        outcome: PointsOutcome,
        tier: Tier,
    ) -> Self {
        let points = outcome.points();
        let progress = tiers::progress(audience, tier, points);

        debug!(
            audience = audience.label(),
            percentage = completeness.percentage,
            points,
            source = outcome.source.label(),
            tier = tier.label(),
            "rewards summary computed"
        );

        Self {
            audience,
            completed_count: completeness.completed_count,
            total_fields: completeness.total_fields,
            percentage: completeness.percentage,
            points,
            points_source: outcome.source.label().to_string(),
            tier,
            next_tier: progress.next,
            progress_to_next_tier_percent: progress.percent,
            points_to_next_tier: progress.points_to_next,
            referral_points: outcome.referral_points,
            activity_points: outcome.activity_points(),
            groups: completeness.groups,
            missing_fields: completeness.missing_fields,
            components: outcome.components,
        }
    }
}
