use serde::{Deserialize, Serialize};

use super::checklist::{ChecklistDefinition, ChecklistField};

/// Completed/total counts for one checklist group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCompletion {
    pub group: String,
    pub completed: u32,
    pub total: u32,
}

/// Fraction of the checklist populated on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessScore {
    pub completed_count: u32,
    pub total_fields: u32,
    /// `completed_count / total_fields` as a whole percentage, rounded half-up.
    pub percentage: u8,
    pub groups: Vec<GroupCompletion>,
    pub missing_fields: Vec<String>,
}

impl CompletenessScore {
    pub fn fraction(&self) -> f64 {
        if self.total_fields == 0 {
            0.0
        } else {
            f64::from(self.completed_count) / f64::from(self.total_fields)
        }
    }
}

pub fn score<F: ChecklistField>(
    record: &F::Record,
    checklist: &ChecklistDefinition<F>,
) -> CompletenessScore {
    let mut groups = Vec::with_capacity(checklist.groups.len());
    let mut missing_fields = Vec::new();
    let mut completed_count: u32 = 0;
    let mut total_fields: u32 = 0;

    for group in &checklist.groups {
        let mut completed: u32 = 0;
        for field in group.fields.iter().copied() {
            if field.is_completed(record) {
                completed += 1;
            } else {
                missing_fields.push(field.key().to_string());
            }
        }
        let total = group.fields.len() as u32;

        completed_count += completed;
        total_fields += total;
        groups.push(GroupCompletion {
            group: group.name.to_string(),
            completed,
            total,
        });
    }

    CompletenessScore {
        completed_count,
        total_fields,
        percentage: rounded_percent(u64::from(completed_count), u64::from(total_fields)),
        groups,
        missing_fields,
    }
}

/// `part / whole * 100`, rounded half-up and clamped to 0..=100. An empty whole is 0%.
pub(crate) fn rounded_percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let scaled = (part.saturating_mul(200) + whole) / whole.saturating_mul(2);
    scaled.min(100) as u8
}
