use serde::{Deserialize, Serialize};

use super::checklist::JobSeekerChecklist;
use super::tiers::EmployerTierRule;

/// Companies that qualify for the Gold band regardless of declared head-count.
pub const DEFAULT_TOP_COMPANIES: &[&str] = &[
    "Tech Solutions LLC",
    "Emirates Group",
    "Dubai Holdings",
    "Emaar Properties",
    "Majid Al Futtaim",
    "Etisalat",
    "DP World",
    "Mashreq Bank",
    "Al-Futtaim Group",
    "Jumeirah Group",
];

/// Rule knobs for the points and tier engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsConfig {
    pub employer_tier_rule: EmployerTierRule,
    pub job_seeker_checklist: JobSeekerChecklist,
    /// Subtract `deductedPoints` from backend-supplied balances as well as computed ones.
    pub net_authoritative_deductions: bool,
    /// Lower-case fragments of a nationality that count as local national status.
    pub local_nationality_markers: Vec<String>,
    pub top_companies: Vec<String>,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            employer_tier_rule: EmployerTierRule::TeamSize,
            job_seeker_checklist: JobSeekerChecklist::Standard,
            net_authoritative_deductions: false,
            local_nationality_markers: vec!["emirati".to_string()],
            top_companies: DEFAULT_TOP_COMPANIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl RewardsConfig {
    pub fn is_local_national(&self, nationality: Option<&str>) -> bool {
        let Some(nationality) = nationality else {
            return false;
        };
        let nationality = nationality.to_lowercase();
        self.local_nationality_markers
            .iter()
            .filter(|marker| !marker.trim().is_empty())
            .any(|marker| nationality.contains(&marker.trim().to_lowercase()))
    }

    pub fn is_top_company(&self, company_name: Option<&str>) -> bool {
        let Some(name) = company_name.map(str::trim).filter(|name| !name.is_empty()) else {
            return false;
        };
        self.top_companies
            .iter()
            .any(|company| company.trim().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nationality_match_is_case_insensitive_substring() {
        let config = RewardsConfig::default();
        assert!(config.is_local_national(Some("UAE / Emirati")));
        assert!(!config.is_local_national(Some("Indian")));
        assert!(!config.is_local_national(None));
    }

    #[test]
    fn top_company_lookup_ignores_case_and_padding() {
        let config = RewardsConfig::default();
        assert!(config.is_top_company(Some("  dp world ")));
        assert!(!config.is_top_company(Some("DP World Logistics")));
        assert!(!config.is_top_company(Some("")));
    }
}
