use crate::cli::ScoringArgs;
use crate::infra::build_service;
use clap::Args;
use intern_match::config::AppConfig;
use intern_match::error::AppError;
use intern_match::recommendations::{
    CandidateProfile, Education, ExperienceLevel, IntakeStep, ListingCatalog, MatchFactor,
    ProfileIntake, RecommendationReport, RecommendationService, RecommendationServiceError,
    Taxonomy, TOTAL_STEPS,
};
use intern_match::telemetry::{self, LogSink};
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Candidate name used in the report headline
    #[arg(long)]
    pub(crate) name: Option<String>,
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Highest completed education level (10th, 12th, diploma, graduation, postgraduation)
    #[arg(long, value_parser = crate::infra::parse_education)]
    pub(crate) education: Option<Education>,
    #[arg(long)]
    pub(crate) state: Option<String>,
    #[arg(long)]
    pub(crate) district: Option<String>,
    /// Skill the candidate has; repeat for several
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Preferred sector; repeat for several
    #[arg(long = "sector")]
    pub(crate) sectors: Vec<String>,
    /// Prior experience (none, basic, some, experienced)
    #[arg(long, value_parser = crate::infra::parse_experience)]
    pub(crate) experience: Option<ExperienceLevel>,
    /// Refuse to rank unless every intake step is complete
    #[arg(long)]
    pub(crate) require_complete: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) scoring: ScoringArgs,
}

impl RecommendArgs {
    fn profile(&self) -> CandidateProfile {
        CandidateProfile {
            name: self.name.clone().unwrap_or_default(),
            age: self.age.clone().unwrap_or_default(),
            education: self.education,
            state: self.state.clone().unwrap_or_default(),
            district: self.district.clone().unwrap_or_default(),
            skills: self.skills.clone(),
            sectors: self.sectors.clone(),
            experience: self.experience,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Show the skills, sectors, and states offered during intake instead of listings
    #[arg(long)]
    pub(crate) taxonomy: bool,
    /// Print as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// CSV export of listings to show instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<std::path::PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) scoring: ScoringArgs,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let service = prepare_service(args.scoring.clone())?;
    let profile = args.profile();

    let report = if args.require_complete {
        match service.submit(profile) {
            Ok(report) => report,
            Err(RecommendationServiceError::Intake(err)) => return Err(AppError::from(err)),
        }
    } else {
        service.recommend(&profile)
    };

    if args.json {
        print_json(&report)
    } else {
        render_report(&report);
        Ok(())
    }
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;

    if args.taxonomy {
        let taxonomy = Taxonomy::standard();
        if args.json {
            return print_json(&taxonomy);
        }
        render_taxonomy(&taxonomy);
        return Ok(());
    }

    let catalog_csv = args.catalog_csv.or(config.recommendations.catalog_csv);
    let catalog = crate::infra::load_catalog(catalog_csv.as_ref())?;
    if args.json {
        return print_json(catalog.listings());
    }
    render_catalog(&catalog);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = prepare_service(args.scoring)?;

    println!("Internship recommendation demo");
    println!(
        "- Catalog: {} listings | returning top {}",
        service.catalog().len(),
        service.engine().config().recommendation_limit
    );

    let mut intake = ProfileIntake::new();
    print_step(&intake);
    intake.set_name("Asha Patil");
    if let Err(err) = intake.advance() {
        println!("  Blocked: {err}");
    }
    intake.set_age("21");
    intake.set_education(Education::Graduation);
    advance_demo_step(&mut intake)?;

    intake.set_state("Maharashtra");
    intake.set_district("Pune");
    advance_demo_step(&mut intake)?;

    intake.select_skill("Digital Marketing", true);
    intake.select_skill("Computer Basics", true);
    intake.set_experience(ExperienceLevel::NoExperience);
    advance_demo_step(&mut intake)?;

    intake.select_sector("Information Technology", true);
    let profile = intake.complete()?;
    println!(
        "  Submitted profile: {} | {} | {}, {}",
        profile.name,
        profile.education.map(Education::label).unwrap_or("-"),
        profile.district,
        profile.state
    );

    println!();
    render_report(&service.recommend(&profile));
    Ok(())
}

fn prepare_service(scoring: ScoringArgs) -> Result<RecommendationService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;

    let recommendations = scoring.into_overrides().apply(&config.recommendations);
    build_service(&recommendations)
}

fn advance_demo_step(intake: &mut ProfileIntake) -> Result<IntakeStep, AppError> {
    let step = intake.advance()?;
    print_step(intake);
    Ok(step)
}

fn print_step(intake: &ProfileIntake) {
    let step = intake.current_step();
    println!(
        "\nStep {} of {}: {} ({}%)",
        step.number(),
        TOTAL_STEPS,
        step.title(),
        intake.progress_percent()
    );
    println!("  {}", step.prompt());
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}

pub(crate) fn render_report(report: &RecommendationReport) {
    println!("{}", report.headline());
    println!("{}", report.summary());
    println!(
        "Generated {} from {} listings",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.catalog_size
    );

    for entry in &report.recommendations {
        let listing = &entry.scored.listing;
        println!(
            "\n{:>2}. {} @ {} ({}% {})",
            entry.rank, listing.title, listing.company, entry.scored.match_score, entry.match_label
        );
        println!(
            "    {}{} | {} | {} | {}",
            listing.location,
            if listing.is_remote { " (remote)" } else { "" },
            listing.sector,
            listing.duration,
            listing.stipend
        );
        if !listing.required_skills.is_empty() {
            println!("    Skills: {}", listing.required_skills.join(", "));
        }
        println!(
            "    Breakdown: sector {} | skills {:.1} | education {} | location {} | bonus {}",
            entry.scored.points_for(MatchFactor::Sector),
            entry.scored.points_for(MatchFactor::Skills),
            entry.scored.points_for(MatchFactor::Education),
            entry.scored.points_for(MatchFactor::Location),
            entry.scored.points_for(MatchFactor::ExperienceBonus)
        );
    }
}

fn render_catalog(catalog: &ListingCatalog) {
    println!("Listing catalog ({} listings)", catalog.len());
    for listing in catalog.listings() {
        let education: Vec<&str> = listing
            .education_levels
            .iter()
            .map(|level| level.code())
            .collect();
        println!(
            "- [{}] {} @ {} | {}{} | {}",
            listing.id,
            listing.title,
            listing.company,
            listing.location,
            if listing.is_remote { " (remote)" } else { "" },
            listing.sector
        );
        println!(
            "    skills: {} | education: {}",
            listing.required_skills.join(", "),
            education.join(", ")
        );
    }
}

fn render_taxonomy(taxonomy: &Taxonomy) {
    println!("Skill categories:");
    for category in taxonomy.skill_categories {
        println!("- {}: {}", category.name, category.skills.join(", "));
    }
    println!("\nSectors: {}", taxonomy.sectors.join(", "));
    println!("\nStates: {}", taxonomy.states.join(", "));
    println!("\nEducation levels:");
    for option in &taxonomy.education_levels {
        println!("- {} ({})", option.label, option.value);
    }
    println!("\nExperience levels:");
    for option in &taxonomy.experience_levels {
        println!("- {} ({})", option.label, option.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_args_build_profile() {
        let args = RecommendArgs {
            name: Some("Ravi Kumar".to_string()),
            education: Some(Education::Twelfth),
            state: Some("Gujarat".to_string()),
            skills: vec!["Sales".to_string()],
            sectors: vec!["Retail".to_string()],
            ..RecommendArgs::default()
        };

        let profile = args.profile();

        assert_eq!(profile.name, "Ravi Kumar");
        assert_eq!(profile.district, "");
        assert_eq!(profile.age, "");
        assert_eq!(profile.skills, vec!["Sales"]);
    }

    #[test]
    fn cli_profile_ranks_matching_listing_first() {
        let args = RecommendArgs {
            name: Some("Ravi Kumar".to_string()),
            education: Some(Education::Twelfth),
            state: Some("Gujarat".to_string()),
            skills: vec!["Sales".to_string(), "Customer Service".to_string()],
            sectors: vec!["Retail".to_string()],
            ..RecommendArgs::default()
        };

        let report = RecommendationService::standard().recommend(&args.profile());

        assert_eq!(report.recommendations[0].scored.listing.title, "Retail Sales Assistant");
        assert_eq!(report.recommendations[0].scored.match_score, 90);
    }

    #[test]
    fn incomplete_cli_profile_is_rejected_when_required() {
        let args = RecommendArgs {
            name: Some("Ravi Kumar".to_string()),
            ..RecommendArgs::default()
        };

        let result = RecommendationService::standard().submit(args.profile());

        assert!(matches!(
            result,
            Err(RecommendationServiceError::Intake(_))
        ));
    }
}
