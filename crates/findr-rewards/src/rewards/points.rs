use serde::{Deserialize, Serialize};
use tracing::debug;

use super::completeness::CompletenessScore;
use super::config::RewardsConfig;
use super::domain::{CompanyProfile, JobSeekerProfile};

pub const JOB_SEEKER_BASE_POINTS: u32 = 50;
pub const POINTS_PER_COMPLETION_PERCENT: u32 = 2;

pub const EMPLOYER_BASE_POINTS: u32 = 50;
pub const POINTS_PER_COMPANY_FIELD: u32 = 25;
pub const POINTS_PER_POSTED_JOB: u32 = 30;
pub const POINTS_PER_HIRE: u32 = 50;
pub const POINTS_PER_REFERRAL: u32 = 50;
pub const POINTS_PER_PREMIUM_SERVICE: u32 = 20;

/// Where a point balance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsSource {
    /// Supplied by the backend and used as-is.
    Authoritative(u32),
    /// Recomputed locally from completeness and activity counters.
    Computed(u32),
}

impl PointsSource {
    pub const fn points(self) -> u32 {
        match self {
            PointsSource::Authoritative(points) | PointsSource::Computed(points) => points,
        }
    }

    pub const fn is_authoritative(self) -> bool {
        matches!(self, PointsSource::Authoritative(_))
    }

    pub const fn label(self) -> &'static str {
        match self {
            PointsSource::Authoritative(_) => "authoritative",
            PointsSource::Computed(_) => "computed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsComponentKind {
    Authoritative,
    ProfileCompletion,
    Activity,
    Referral,
    Deduction,
    PostedJobs,
    Hires,
    Referrals,
    PremiumServices,
}

/// Single line of a points breakdown so dashboards can show how a balance was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsComponent {
    pub kind: PointsComponentKind,
    pub points: i64,
    pub notes: String,
}

/// Final balance plus the breakdown that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsOutcome {
    pub source: PointsSource,
    pub components: Vec<PointsComponent>,
    /// Part of the balance attributed to referrals; never larger than the balance.
    pub referral_points: u32,
}

impl PointsOutcome {
    pub fn points(&self) -> u32 {
        self.source.points()
    }

    pub fn activity_points(&self) -> u32 {
        self.points().saturating_sub(self.referral_points)
    }
}

pub fn job_seeker_points(
    profile: &JobSeekerProfile,
    completeness: &CompletenessScore,
    config: &RewardsConfig,
) -> PointsOutcome {
    let deduction = u64::try_from(profile.deducted_points.max(0)).unwrap_or(0);
    let referral = profile.referral_points();

    if let Some(authoritative) = profile.authoritative_points() {
        let mut components = vec![PointsComponent {
            kind: PointsComponentKind::Authoritative,
            points: i64::from(authoritative),
            notes: "balance supplied by profile service".to_string(),
        }];

        let balance = if config.net_authoritative_deductions && deduction > 0 {
            components.push(deduction_component(deduction));
            clamp_balance(u64::from(authoritative).saturating_sub(deduction))
        } else {
            authoritative
        };

        debug!(points = balance, "using authoritative job-seeker balance");
        return PointsOutcome {
            source: PointsSource::Authoritative(balance),
            components,
            referral_points: referral.min(balance),
        };
    }

    let base = JOB_SEEKER_BASE_POINTS
        + u32::from(completeness.percentage) * POINTS_PER_COMPLETION_PERCENT;
    let rewards = &profile.rewards;
    let activity = u64::from(rewards.apply_for_jobs)
        + u64::from(rewards.rm_service)
        + u64::from(rewards.social_media_bonus);

    let mut components = vec![
        PointsComponent {
            kind: PointsComponentKind::ProfileCompletion,
            points: i64::from(base),
            notes: format!(
                "{JOB_SEEKER_BASE_POINTS} base + {}% profile completion x {POINTS_PER_COMPLETION_PERCENT}",
                completeness.percentage
            ),
        },
        PointsComponent {
            kind: PointsComponentKind::Activity,
            points: activity as i64,
            notes: format!(
                "applications {}, RM service {}, social media {}",
                rewards.apply_for_jobs, rewards.rm_service, rewards.social_media_bonus
            ),
        },
    ];

    if referral > 0 {
        components.push(PointsComponent {
            kind: PointsComponentKind::Referral,
            points: i64::from(referral),
            notes: "referral reward points".to_string(),
        });
    }

    let raw_total = u64::from(base) + activity + u64::from(referral);
    if deduction > 0 {
        components.push(deduction_component(deduction));
    }
    let available = clamp_balance(raw_total.saturating_sub(deduction));

    debug!(raw_total, deduction, available, "computed job-seeker balance");
    PointsOutcome {
        source: PointsSource::Computed(available),
        components,
        referral_points: referral.min(available),
    }
}

pub fn employer_points(
    company: &CompanyProfile,
    completeness: &CompletenessScore,
) -> PointsOutcome {
    if let Some(authoritative) = company.points {
        debug!(points = authoritative, "using authoritative employer balance");
        return PointsOutcome {
            source: PointsSource::Authoritative(authoritative),
            components: vec![PointsComponent {
                kind: PointsComponentKind::Authoritative,
                points: i64::from(authoritative),
                notes: "balance supplied by employer profile service".to_string(),
            }],
            referral_points: 0,
        };
    }

    let posted_jobs = company.posted_jobs_total();
    let hires = company.hires_total();
    let referrals = company.referrals_total();
    let premium_services = company.premium_services_total();

    let lines = [
        (
            PointsComponentKind::ProfileCompletion,
            u64::from(EMPLOYER_BASE_POINTS)
                + u64::from(completeness.completed_count) * u64::from(POINTS_PER_COMPANY_FIELD),
            format!(
                "{EMPLOYER_BASE_POINTS} base + {} company field(s) x {POINTS_PER_COMPANY_FIELD}",
                completeness.completed_count
            ),
        ),
        (
            PointsComponentKind::PostedJobs,
            u64::from(posted_jobs) * u64::from(POINTS_PER_POSTED_JOB),
            format!("{posted_jobs} posted job(s) x {POINTS_PER_POSTED_JOB}"),
        ),
        (
            PointsComponentKind::Hires,
            u64::from(hires) * u64::from(POINTS_PER_HIRE),
            format!("{hires} hire(s) x {POINTS_PER_HIRE}"),
        ),
        (
            PointsComponentKind::Referrals,
            u64::from(referrals) * u64::from(POINTS_PER_REFERRAL),
            format!("{referrals} referral(s) x {POINTS_PER_REFERRAL}"),
        ),
        (
            PointsComponentKind::PremiumServices,
            u64::from(premium_services) * u64::from(POINTS_PER_PREMIUM_SERVICE),
            format!("{premium_services} premium service(s) x {POINTS_PER_PREMIUM_SERVICE}"),
        ),
    ];

    let mut total: u64 = 0;
    let mut components = Vec::with_capacity(lines.len());
    for (kind, points, notes) in lines {
        total = total.saturating_add(points);
        if points > 0 {
            components.push(PointsComponent {
                kind,
                points: points as i64,
                notes,
            });
        }
    }

    let referral_points = clamp_balance(u64::from(referrals) * u64::from(POINTS_PER_REFERRAL));
    let total = clamp_balance(total);

    debug!(points = total, "computed employer balance");
    PointsOutcome {
        source: PointsSource::Computed(total),
        components,
        referral_points,
    }
}

fn deduction_component(deduction: u64) -> PointsComponent {
    PointsComponent {
        kind: PointsComponentKind::Deduction,
        points: -(deduction.min(i64::MAX as u64) as i64),
        notes: format!("{deduction} point(s) deducted by an administrator"),
    }
}

fn clamp_balance(points: u64) -> u32 {
    u32::try_from(points).unwrap_or(u32::MAX)
}
