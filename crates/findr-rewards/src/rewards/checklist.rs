use serde::{Deserialize, Serialize};

use super::domain::{CompanyProfile, JobSeekerProfile};

/// A single checklist entry that can be evaluated against a profile record.
pub trait ChecklistField: Copy {
    type Record;

    /// Stable camelCase key matching the backend field name.
    fn key(self) -> &'static str;

    fn is_completed(self, record: &Self::Record) -> bool;
}

/// Named group of checklist fields, e.g. "Personal Info".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistGroup<F> {
    pub name: &'static str,
    pub fields: Vec<F>,
}

/// Fixed, enumerable field checklist shared by every completeness computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistDefinition<F> {
    pub name: &'static str,
    pub groups: Vec<ChecklistGroup<F>>,
}

impl<F: ChecklistField> ChecklistDefinition<F> {
    pub fn total_fields(&self) -> usize {
        self.groups.iter().map(|group| group.fields.len()).sum()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.fields.iter().copied())
    }
}

/// Selects which job-seeker checklist the engine scores against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSeekerChecklist {
    /// 24 fields, as used by the rewards dashboard.
    #[default]
    Standard,
    /// 25 fields, adding the employment visa.
    Extended,
}

impl JobSeekerChecklist {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" | "default" => Some(Self::Standard),
            "extended" | "visa" => Some(Self::Extended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FullName,
    Email,
    PhoneNumber,
    Location,
    DateOfBirth,
    Nationality,
    ProfessionalSummary,
    EmirateId,
    PassportNumber,
    EmploymentVisa,
    CurrentRole,
    Company,
    YearsOfExperience,
    Industry,
    HighestDegree,
    Institution,
    YearOfGraduation,
    GradeCgpa,
    Skills,
    PreferredJobType,
    Certifications,
    ResumeAndDocs,
    LinkedIn,
    Instagram,
    TwitterX,
}

impl ChecklistField for ProfileField {
    type Record = JobSeekerProfile;

    fn key(self) -> &'static str {
        match self {
            ProfileField::FullName => "fullName",
            ProfileField::Email => "email",
            ProfileField::PhoneNumber => "phoneNumber",
            ProfileField::Location => "location",
            ProfileField::DateOfBirth => "dateOfBirth",
            ProfileField::Nationality => "nationality",
            ProfileField::ProfessionalSummary => "professionalSummary",
            ProfileField::EmirateId => "emirateId",
            ProfileField::PassportNumber => "passportNumber",
            ProfileField::EmploymentVisa => "employmentVisa",
            ProfileField::CurrentRole => "currentRole",
            ProfileField::Company => "company",
            ProfileField::YearsOfExperience => "yearsOfExperience",
            ProfileField::Industry => "industry",
            ProfileField::HighestDegree => "highestDegree",
            ProfileField::Institution => "institution",
            ProfileField::YearOfGraduation => "yearOfGraduation",
            ProfileField::GradeCgpa => "gradeCgpa",
            ProfileField::Skills => "skills",
            ProfileField::PreferredJobType => "preferredJobType",
            ProfileField::Certifications => "certifications",
            ProfileField::ResumeAndDocs => "resumeAndDocs",
            ProfileField::LinkedIn => "linkedIn",
            ProfileField::Instagram => "instagram",
            ProfileField::TwitterX => "twitterX",
        }
    }

    fn is_completed(self, profile: &JobSeekerProfile) -> bool {
        let experience = profile.current_experience();
        let education = profile.highest_education();

        match self {
            ProfileField::FullName => filled(&profile.full_name),
            ProfileField::Email => filled(&profile.email),
            ProfileField::PhoneNumber => filled(&profile.phone_number),
            ProfileField::Location => filled(&profile.location),
            ProfileField::DateOfBirth => filled(&profile.date_of_birth),
            ProfileField::Nationality => filled(&profile.nationality),
            ProfileField::ProfessionalSummary => filled(&profile.professional_summary),
            ProfileField::EmirateId => filled(&profile.emirate_id),
            ProfileField::PassportNumber => filled(&profile.passport_number),
            ProfileField::EmploymentVisa => filled(&profile.employment_visa),
            ProfileField::CurrentRole => experience.is_some_and(|exp| filled(&exp.current_role)),
            ProfileField::Company => experience.is_some_and(|exp| filled(&exp.company)),
            ProfileField::YearsOfExperience => {
                experience.is_some_and(|exp| filled(&exp.years_of_experience))
            }
            ProfileField::Industry => experience.is_some_and(|exp| filled(&exp.industry)),
            ProfileField::HighestDegree => education.is_some_and(|edu| filled(&edu.highest_degree)),
            ProfileField::Institution => education.is_some_and(|edu| filled(&edu.institution)),
            ProfileField::YearOfGraduation => {
                education.is_some_and(|edu| filled(&edu.year_of_graduation))
            }
            ProfileField::GradeCgpa => education.is_some_and(|edu| filled(&edu.grade_cgpa)),
            ProfileField::Skills => !profile.skills.is_empty(),
            ProfileField::PreferredJobType => !profile.job_preferences.preferred_job_type.is_empty(),
            ProfileField::Certifications => !profile.certifications.is_empty(),
            ProfileField::ResumeAndDocs => !profile.job_preferences.resume_and_docs.is_empty(),
            ProfileField::LinkedIn => filled(&profile.social_links.linked_in),
            ProfileField::Instagram => filled(&profile.social_links.instagram),
            ProfileField::TwitterX => filled(&profile.social_links.twitter_x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompanyField {
    CompanyName,
    CompanyEmail,
    PhoneNumber,
    Website,
    Industry,
    TeamSize,
    FoundedYear,
    Description,
}

impl ChecklistField for CompanyField {
    type Record = CompanyProfile;

    fn key(self) -> &'static str {
        match self {
            CompanyField::CompanyName => "companyName",
            CompanyField::CompanyEmail => "companyEmail",
            CompanyField::PhoneNumber => "phoneNumber",
            CompanyField::Website => "website",
            CompanyField::Industry => "industry",
            CompanyField::TeamSize => "teamSize",
            CompanyField::FoundedYear => "foundedYear",
            CompanyField::Description => "description",
        }
    }

    fn is_completed(self, company: &CompanyProfile) -> bool {
        match self {
            CompanyField::CompanyName => filled(&company.company_name),
            CompanyField::CompanyEmail => company.contact_email().is_some(),
            CompanyField::PhoneNumber => filled(&company.phone_number),
            CompanyField::Website => filled(&company.website),
            CompanyField::Industry => filled(&company.industry),
            CompanyField::TeamSize => filled(&company.team_size),
            CompanyField::FoundedYear => filled(&company.founded_year),
            CompanyField::Description => company.about_text().is_some(),
        }
    }
}

fn filled(value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty())
}

impl ChecklistDefinition<ProfileField> {
    pub fn job_seeker() -> Self {
        Self {
            name: "jobseeker-standard",
            groups: vec![
                ChecklistGroup {
                    name: "Personal Info",
                    fields: vec![
                        ProfileField::FullName,
                        ProfileField::Email,
                        ProfileField::PhoneNumber,
                        ProfileField::Location,
                        ProfileField::DateOfBirth,
                        ProfileField::Nationality,
                        ProfileField::ProfessionalSummary,
                        ProfileField::EmirateId,
                        ProfileField::PassportNumber,
                    ],
                },
                experience_group(),
                education_group(),
                ChecklistGroup {
                    name: "Skills, Preferences & Resume",
                    fields: vec![
                        ProfileField::Skills,
                        ProfileField::PreferredJobType,
                        ProfileField::Certifications,
                        ProfileField::ResumeAndDocs,
                    ],
                },
                ChecklistGroup {
                    name: "Social Links",
                    fields: vec![
                        ProfileField::LinkedIn,
                        ProfileField::Instagram,
                        ProfileField::TwitterX,
                    ],
                },
            ],
        }
    }

    /// The checkout variant, which also counts the employment visa.
    pub fn job_seeker_extended() -> Self {
        let mut checklist = Self::job_seeker();
        checklist.name = "jobseeker-extended";
        if let Some(personal) = checklist.groups.first_mut() {
            personal.fields.push(ProfileField::EmploymentVisa);
        }
        checklist
    }

    pub fn for_variant(variant: JobSeekerChecklist) -> Self {
        match variant {
            JobSeekerChecklist::Standard => Self::job_seeker(),
            JobSeekerChecklist::Extended => Self::job_seeker_extended(),
        }
    }
}

fn experience_group() -> ChecklistGroup<ProfileField> {
    ChecklistGroup {
        name: "Experience",
        fields: vec![
            ProfileField::CurrentRole,
            ProfileField::Company,
            ProfileField::YearsOfExperience,
            ProfileField::Industry,
        ],
    }
}

fn education_group() -> ChecklistGroup<ProfileField> {
    ChecklistGroup {
        name: "Education",
        fields: vec![
            ProfileField::HighestDegree,
            ProfileField::Institution,
            ProfileField::YearOfGraduation,
            ProfileField::GradeCgpa,
        ],
    }
}

impl ChecklistDefinition<CompanyField> {
    pub fn employer() -> Self {
        Self {
            name: "employer-company",
            groups: vec![ChecklistGroup {
                name: "Company Profile",
                fields: vec![
                    CompanyField::CompanyName,
                    CompanyField::CompanyEmail,
                    CompanyField::PhoneNumber,
                    CompanyField::Website,
                    CompanyField::Industry,
                    CompanyField::TeamSize,
                    CompanyField::FoundedYear,
                    CompanyField::Description,
                ],
            }],
        }
    }
}
