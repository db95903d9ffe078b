use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Which side of the marketplace a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    JobSeeker,
    Employer,
}

impl Audience {
    pub const fn label(self) -> &'static str {
        match self {
            Audience::JobSeeker => "jobseeker",
            Audience::Employer => "employer",
        }
    }
}

/// Job-seeker profile snapshot as returned by the profile details endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerProfile {
    #[serde(default, deserialize_with = "lenient::text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub professional_summary: Option<String>,
    /// National identity card number (Emirates ID).
    #[serde(default, deserialize_with = "lenient::text")]
    pub emirate_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub passport_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub employment_visa: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub professional_experience: Vec<ProfessionalExperience>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub certifications: Vec<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub job_preferences: JobPreferences,
    #[serde(default, deserialize_with = "lenient::record")]
    pub social_links: SocialLinks,
    #[serde(default, deserialize_with = "lenient::record")]
    pub rewards: RewardCounters,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub referral_reward_points: Option<u32>,
    #[serde(default, deserialize_with = "lenient::signed")]
    pub deducted_points: i64,
    /// Backend-computed balance; wins over local recomputation when present.
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub points: Option<u32>,
}

impl JobSeekerProfile {
    /// Decode a snapshot, falling back to an empty profile when the payload is not an object.
    pub fn from_json_value(value: Value) -> Self {
        match lenient::unwrap_envelope(value) {
            object @ Value::Object(_) => serde_json::from_value(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_json_value(value))
    }

    pub fn current_experience(&self) -> Option<&ProfessionalExperience> {
        self.professional_experience.first()
    }

    pub fn highest_education(&self) -> Option<&Education> {
        self.education.first()
    }

    /// Years of experience on the current role record; unparseable values count as zero.
    pub fn years_of_experience(&self) -> u32 {
        self.current_experience()
            .and_then(|experience| experience.years_of_experience.as_deref())
            .and_then(lenient::leading_number)
            .unwrap_or(0)
    }

    pub fn has_national_id(&self) -> bool {
        self.emirate_id.is_some()
    }

    /// Authoritative balance, preferring the top-level field over `rewards.totalPoints`.
    pub fn authoritative_points(&self) -> Option<u32> {
        self.points.or(self.rewards.total_points)
    }

    /// Referral bonus, preferring `referralRewardPoints` over `rewards.referFriend`.
    pub fn referral_points(&self) -> u32 {
        self.referral_reward_points
            .unwrap_or(self.rewards.refer_friend)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalExperience {
    #[serde(default, deserialize_with = "lenient::text")]
    pub current_role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub years_of_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "lenient::text")]
    pub highest_degree: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub year_of_graduation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub grade_cgpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferences {
    #[serde(default, deserialize_with = "lenient::entries")]
    pub preferred_job_type: Vec<String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub resume_and_docs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, rename = "linkedIn", deserialize_with = "lenient::text")]
    pub linked_in: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub instagram: Option<String>,
    #[serde(default, rename = "twitterX", deserialize_with = "lenient::text")]
    pub twitter_x: Option<String>,
}

/// Activity counters accrued by the backend for a job-seeker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardCounters {
    #[serde(default, deserialize_with = "lenient::count")]
    pub apply_for_jobs: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub rm_service: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub social_media_bonus: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub refer_friend: u32,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub total_points: Option<u32>,
}

/// Employer company profile snapshot.
///
/// Activity counters arrive either as arrays (`postedJobs: [..]`) or as plain integers
/// (`postedJobsCount: 2`); both spellings are kept and the larger one is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub team_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub founded_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub about: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub posted_jobs: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub posted_jobs_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub hires: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub hires_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub referrals: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub referrals_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub premium_services: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub premium_services_count: u32,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub points: Option<u32>,
}

impl CompanyProfile {
    pub fn from_json_value(value: Value) -> Self {
        match lenient::unwrap_envelope(value) {
            object @ Value::Object(_) => serde_json::from_value(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_json_value(value))
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.company_email.as_deref().or(self.email.as_deref())
    }

    pub fn about_text(&self) -> Option<&str> {
        self.description.as_deref().or(self.about.as_deref())
    }

    /// Lower bound of the declared head-count band; `"101-500"` reads as 101.
    pub fn team_size_floor(&self) -> u32 {
        self.team_size
            .as_deref()
            .and_then(lenient::leading_number)
            .unwrap_or(0)
    }

    pub fn posted_jobs_total(&self) -> u32 {
        self.posted_jobs.max(self.posted_jobs_count)
    }

    pub fn hires_total(&self) -> u32 {
        self.hires.max(self.hires_count)
    }

    pub fn referrals_total(&self) -> u32 {
        self.referrals.max(self.referrals_count)
    }

    pub fn premium_services_total(&self) -> u32 {
        self.premium_services.max(self.premium_services_count)
    }
}
