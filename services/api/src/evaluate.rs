use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use findr_rewards::config::AppConfig;
use findr_rewards::error::AppError;
use findr_rewards::rewards::redemption::quote;
use findr_rewards::rewards::{CompanyProfile, JobSeekerProfile, RewardsEngine, RewardsSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AudienceArg {
    Jobseeker,
    Employer,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Which rule set to apply
    #[arg(value_enum)]
    pub(crate) audience: AudienceArg,
    /// Path to the profile snapshot (raw record or `{ "success", "data" }` envelope)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print the summary as JSON instead of a readable report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Points currently available to the member
    #[arg(long)]
    pub(crate) available: u32,
    /// Points the member wants to redeem
    #[arg(long, default_value_t = 0)]
    pub(crate) requested: u32,
    /// Checkout subtotal in whole currency units
    #[arg(long)]
    pub(crate) subtotal: u32,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = RewardsEngine::new(config.rewards);
    let raw = fs::read_to_string(&args.profile)?;
    let summary = summarize(&engine, args.audience, &raw)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_summary(&summary);
    }
    Ok(())
}

pub(crate) fn summarize(
    engine: &RewardsEngine,
    audience: AudienceArg,
    raw: &str,
) -> Result<RewardsSummary, AppError> {
    let summary = match audience {
        AudienceArg::Jobseeker => engine.job_seeker_summary(&JobSeekerProfile::from_json_str(raw)?),
        AudienceArg::Employer => engine.employer_summary(&CompanyProfile::from_json_str(raw)?),
    };
    Ok(summary)
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let quote = quote(args.available, args.requested, args.subtotal)?;

    println!("Points redemption quote");
    println!("  Subtotal: {}", quote.subtotal);
    println!(
        "  Points applied: {} (discount {})",
        quote.points_applied, quote.discount
    );
    println!("  Total due: {}", quote.total);
    println!("  Points remaining: {}", quote.remaining_points);
    Ok(())
}

fn render_summary(summary: &RewardsSummary) {
    println!("Rewards summary ({})", summary.audience.label());
    println!(
        "  Profile completion: {}% ({} of {} fields)",
        summary.percentage, summary.completed_count, summary.total_fields
    );
    for group in &summary.groups {
        println!("    {}: {}/{}", group.group, group.completed, group.total);
    }
    if !summary.missing_fields.is_empty() {
        println!("  Missing: {}", summary.missing_fields.join(", "));
    }

    println!("  Points: {} ({})", summary.points, summary.points_source);
    for component in &summary.components {
        println!("    {:+} {}", component.points, component.notes);
    }
    println!(
        "  Referral points: {} | Activity points: {}",
        summary.referral_points, summary.activity_points
    );

    match (summary.next_tier, summary.points_to_next_tier) {
        (Some(next), Some(remaining)) => println!(
            "  Tier: {} ({}% toward {}, {} point(s) to go)",
            summary.tier.label(),
            summary.progress_to_next_tier_percent,
            next.label(),
            remaining
        ),
        _ => println!("  Tier: {} (maximum tier reached)", summary.tier.label()),
    }
}
