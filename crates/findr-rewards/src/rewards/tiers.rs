use serde::{Deserialize, Serialize};

use super::completeness::rounded_percent;
use super::config::RewardsConfig;
use super::domain::{Audience, CompanyProfile, JobSeekerProfile};

/// Balance at which any member is promoted to Platinum.
pub const PLATINUM_POINTS: u32 = 500;
pub const GOLD_EXPERIENCE_YEARS: u32 = 10;
pub const SILVER_EXPERIENCE_YEARS: u32 = 5;

/// Ordered membership tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Blue,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Blue, Tier::Silver, Tier::Gold, Tier::Platinum];

    pub const fn label(self) -> &'static str {
        match self {
            Tier::Blue => "Blue",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }

    /// Minimum balance shown for the tier on the rewards pages; drives progress bars.
    pub const fn min_points(self) -> u32 {
        match self {
            Tier::Blue => 0,
            Tier::Silver => 150,
            Tier::Gold => 250,
            Tier::Platinum => 350,
        }
    }

    /// Tier minimum for one audience. Job seekers only reach Platinum through the
    /// `PLATINUM_POINTS` balance, so that is their Platinum floor.
    pub const fn min_points_for(self, audience: Audience) -> u32 {
        match (audience, self) {
            (Audience::JobSeeker, Tier::Platinum) => PLATINUM_POINTS,
            _ => self.min_points(),
        }
    }

    pub const fn next(self) -> Option<Tier> {
        match self {
            Tier::Blue => Some(Tier::Silver),
            Tier::Silver => Some(Tier::Gold),
            Tier::Gold => Some(Tier::Platinum),
            Tier::Platinum => None,
        }
    }

    pub const fn title(self, audience: Audience) -> &'static str {
        match (audience, self) {
            (Audience::JobSeeker, Tier::Blue) => "0-4 Years Experience",
            (Audience::JobSeeker, Tier::Silver) => ">=5 Years Experience + Emirates ID",
            (Audience::JobSeeker, Tier::Gold) => "Emirati National or >=10 Years Experience",
            (Audience::JobSeeker, Tier::Platinum) => "500+ Points",
            (Audience::Employer, Tier::Blue) => "Starter Tier",
            (Audience::Employer, Tier::Silver) => "Growing Tier",
            (Audience::Employer, Tier::Gold) => "Advanced Tier",
            (Audience::Employer, Tier::Platinum) => "Elite Tier",
        }
    }

    pub const fn employee_band(self) -> &'static str {
        match self {
            Tier::Blue => "0-100",
            Tier::Silver => "101-500",
            Tier::Gold => "501-1000",
            Tier::Platinum => "1000+",
        }
    }
}

/// Canonical employer decision table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerTierRule {
    /// Head-count bands decide, points only unlock Platinum.
    #[default]
    TeamSize,
    /// Points thresholds decide, head-count can lift a company one band.
    Points,
}

impl EmployerTierRule {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "team_size" | "teamsize" | "size" => Some(Self::TeamSize),
            "points" => Some(Self::Points),
            _ => None,
        }
    }
}

/// Job-seeker decision table, first match wins:
///
/// | condition                                   | tier     |
/// |---------------------------------------------|----------|
/// | points >= 500                               | Platinum |
/// | local national, or experience >= 10 years   | Gold     |
/// | experience >= 5 years and national ID held  | Silver   |
/// | experience <= 4 years                       | Blue     |
/// | otherwise (5-9 years, no national ID)       | Silver   |
pub fn classify_job_seeker(profile: &JobSeekerProfile, points: u32, config: &RewardsConfig) -> Tier {
    let years = profile.years_of_experience();

    if points >= PLATINUM_POINTS {
        Tier::Platinum
    } else if config.is_local_national(profile.nationality.as_deref())
        || years >= GOLD_EXPERIENCE_YEARS
    {
        Tier::Gold
    } else if years >= SILVER_EXPERIENCE_YEARS && profile.has_national_id() {
        Tier::Silver
    } else if years < SILVER_EXPERIENCE_YEARS {
        Tier::Blue
    } else {
        Tier::Silver
    }
}

pub fn classify_employer(company: &CompanyProfile, points: u32, config: &RewardsConfig) -> Tier {
    let team_size = company.team_size_floor();
    let top_company = config.is_top_company(company.company_name.as_deref());

    match config.employer_tier_rule {
        EmployerTierRule::TeamSize => team_size_tier(team_size, top_company, points),
        EmployerTierRule::Points => points_tier(team_size, points),
    }
}

/// Team-size decision table, first match wins:
///
/// | condition                          | tier     |
/// |------------------------------------|----------|
/// | points >= 500                      | Platinum |
/// | team size <= 100                   | Blue     |
/// | team size 101-500                  | Silver   |
/// | team size 501-1000, or top company | Gold     |
/// | team size > 1000 and points >= 350 | Platinum |
/// | team size > 1000                   | Gold     |
fn team_size_tier(team_size: u32, top_company: bool, points: u32) -> Tier {
    if points >= PLATINUM_POINTS {
        Tier::Platinum
    } else if team_size <= 100 {
        Tier::Blue
    } else if team_size <= 500 {
        Tier::Silver
    } else if team_size <= 1000 || top_company {
        Tier::Gold
    } else if points >= Tier::Platinum.min_points() {
        Tier::Platinum
    } else {
        Tier::Gold
    }
}

/// Points decision table, first match wins:
///
/// | condition                            | tier     |
/// |--------------------------------------|----------|
/// | points >= 350                        | Platinum |
/// | points >= 250 or team size >= 500    | Gold     |
/// | points >= 150 or team size >= 100    | Silver   |
/// | otherwise                            | Blue     |
fn points_tier(team_size: u32, points: u32) -> Tier {
    if points >= Tier::Platinum.min_points() {
        Tier::Platinum
    } else if points >= Tier::Gold.min_points() || team_size >= 500 {
        Tier::Gold
    } else if points >= Tier::Silver.min_points() || team_size >= 100 {
        Tier::Silver
    } else {
        Tier::Blue
    }
}

/// Position within the current tier relative to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierProgress {
    pub current: Tier,
    pub next: Option<Tier>,
    pub percent: u8,
    /// Points still needed to reach the next tier's minimum.
    pub points_to_next: Option<u32>,
}

pub fn progress(audience: Audience, current: Tier, points: u32) -> TierProgress {
    let Some(next) = current.next() else {
        return TierProgress {
            current,
            next: None,
            percent: 100,
            points_to_next: None,
        };
    };

    let floor = current.min_points_for(audience);
    let target = next.min_points_for(audience);
    let percent = rounded_percent(
        u64::from(points.saturating_sub(floor)),
        u64::from(target - floor),
    );

    TierProgress {
        current,
        next: Some(next),
        percent,
        points_to_next: Some(target.saturating_sub(points)),
    }
}

/// Display row for the membership tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDescriptor {
    pub tier: Tier,
    pub title: String,
    pub min_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<String>,
}

pub fn catalogue(audience: Audience) -> Vec<TierDescriptor> {
    Tier::ALL
        .iter()
        .map(|tier| TierDescriptor {
            tier: *tier,
            title: tier.title(audience).to_string(),
            min_points: tier.min_points_for(audience),
            employees: match audience {
                Audience::Employer => Some(tier.employee_band().to_string()),
                Audience::JobSeeker => None,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_size_bands_are_total() {
        let cases = [
            (0, false, 0, Tier::Blue),
            (100, false, 499, Tier::Blue),
            (101, false, 0, Tier::Silver),
            (500, false, 0, Tier::Silver),
            (501, false, 0, Tier::Gold),
            (1000, false, 0, Tier::Gold),
            (1001, false, 349, Tier::Gold),
            (1001, false, 350, Tier::Platinum),
            (5000, true, 0, Tier::Gold),
            (50, true, 0, Tier::Blue),
            (50, false, 500, Tier::Platinum),
        ];
        for (team_size, top, points, expected) in cases {
            assert_eq!(
                team_size_tier(team_size, top, points),
                expected,
                "team_size={team_size} top={top} points={points}"
            );
        }
    }

    #[test]
    fn points_rule_lets_head_count_lift_a_band() {
        assert_eq!(points_tier(0, 0), Tier::Blue);
        assert_eq!(points_tier(100, 0), Tier::Silver);
        assert_eq!(points_tier(0, 150), Tier::Silver);
        assert_eq!(points_tier(500, 0), Tier::Gold);
        assert_eq!(points_tier(0, 310), Tier::Gold);
        assert_eq!(points_tier(0, 350), Tier::Platinum);
    }

    #[test]
    fn progress_clamps_below_tier_floor() {
        let progress = progress(Audience::Employer, Tier::Gold, 100);
        assert_eq!(progress.percent, 0);
        assert_eq!(progress.next, Some(Tier::Platinum));
        assert_eq!(progress.points_to_next, Some(250));
    }

    #[test]
    fn progress_tops_out_at_platinum() {
        let progress = progress(Audience::JobSeeker, Tier::Platinum, 20);
        assert_eq!(progress.percent, 100);
        assert_eq!(progress.next, None);
    }

    #[test]
    fn progress_interpolates_between_minimums() {
        assert_eq!(progress(Audience::JobSeeker, Tier::Blue, 75).percent, 50);
        assert_eq!(progress(Audience::Employer, Tier::Silver, 200).percent, 50);
        assert_eq!(progress(Audience::JobSeeker, Tier::Blue, 430).percent, 100);
    }

    #[test]
    fn job_seeker_platinum_progress_targets_promotion_balance() {
        let gold = progress(Audience::JobSeeker, Tier::Gold, 400);
        assert_eq!(gold.percent, 60);
        assert_eq!(gold.points_to_next, Some(100));

        let employer = progress(Audience::Employer, Tier::Gold, 400);
        assert_eq!(employer.percent, 100);
        assert_eq!(employer.points_to_next, Some(0));
    }

    #[test]
    fn job_seeker_catalogue_lists_promotion_balance_for_platinum() {
        assert_eq!(catalogue(Audience::JobSeeker)[3].min_points, PLATINUM_POINTS);
        assert_eq!(catalogue(Audience::Employer)[3].min_points, 350);
    }

    #[test]
    fn rule_names_parse_loosely() {
        assert_eq!(EmployerTierRule::parse("team-size"), Some(EmployerTierRule::TeamSize));
        assert_eq!(EmployerTierRule::parse(" POINTS "), Some(EmployerTierRule::Points));
        assert_eq!(EmployerTierRule::parse("revenue"), None);
    }
}
