use axum::response::Response;
use serde_json::{json, Value};

use crate::rewards::domain::{CompanyProfile, JobSeekerProfile};
use crate::rewards::{RewardsConfig, RewardsEngine};

pub(super) fn engine() -> RewardsEngine {
    RewardsEngine::new(RewardsConfig::default())
}

/// Every field of the 24-field checklist populated, three years of experience, not a local
/// national, no rewards and no deductions.
pub(super) fn complete_profile_json() -> Value {
    json!({
        "fullName": "Priya Raman",
        "email": "priya@example.com",
        "phoneNumber": "+971500000001",
        "location": "Dubai",
        "dateOfBirth": "1994-03-12",
        "nationality": "Indian",
        "professionalSummary": "Backend engineer focused on payments.",
        "emirateId": "784-1994-1234567-1",
        "passportNumber": "N1234567",
        "professionalExperience": [{
            "currentRole": "Software Engineer",
            "company": "Careem",
            "yearsOfExperience": "3",
            "industry": "Technology"
        }],
        "education": [{
            "highestDegree": "BSc Computer Science",
            "institution": "Anna University",
            "yearOfGraduation": 2016,
            "gradeCgpa": "8.4"
        }],
        "skills": ["Rust", "PostgreSQL"],
        "certifications": ["AWS SAA"],
        "jobPreferences": {
            "preferredJobType": ["Full-time"],
            "resumeAndDocs": [{ "name": "cv.pdf", "url": "https://files.example.com/cv.pdf" }]
        },
        "socialLinks": {
            "linkedIn": "https://linkedin.com/in/priya",
            "instagram": "@priya",
            "twitterX": "@priya_dev"
        }
    })
}

pub(super) fn complete_profile() -> JobSeekerProfile {
    JobSeekerProfile::from_json_value(complete_profile_json())
}

/// Exactly 12 of 24 checklist fields populated (50%).
pub(super) fn half_profile_json() -> Value {
    json!({
        "fullName": "Omar Haddad",
        "email": "omar@example.com",
        "phoneNumber": "+971500000002",
        "location": "Sharjah",
        "dateOfBirth": "1990-07-01",
        "nationality": "Jordanian",
        "professionalSummary": "Operations lead.",
        "passportNumber": "J7654321",
        "professionalExperience": [{
            "currentRole": "Operations Lead",
            "company": "Aramex",
            "yearsOfExperience": 6,
            "industry": "Logistics"
        }]
    })
}

pub(super) fn job_seeker(value: Value) -> JobSeekerProfile {
    JobSeekerProfile::from_json_value(value)
}

pub(super) fn company(value: Value) -> CompanyProfile {
    CompanyProfile::from_json_value(value)
}

pub(super) fn complete_company_json(team_size: &str) -> Value {
    json!({
        "companyName": "Gulf Freight",
        "companyEmail": "talent@gulffreight.ae",
        "phoneNumber": "+97143000000",
        "website": "https://gulffreight.ae",
        "industry": "Logistics",
        "teamSize": team_size,
        "foundedYear": "2009",
        "description": "Regional freight forwarder."
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
