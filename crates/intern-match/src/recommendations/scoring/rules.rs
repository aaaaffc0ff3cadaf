use super::super::domain::{CandidateProfile, ExperienceLevel, Listing};
use super::config::ScoringConfig;
use super::{MatchFactor, ScoreComponent};

pub(crate) fn score_listing(
    profile: &CandidateProfile,
    listing: &Listing,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();
    let mut running_score = 0.0;

    if profile.has_sector(&listing.sector) {
        components.push(ScoreComponent {
            factor: MatchFactor::Sector,
            points: config.sector_weight,
            notes: format!("interested in {}", listing.sector),
        });
        running_score += config.sector_weight;
    } else {
        components.push(ScoreComponent {
            factor: MatchFactor::Sector,
            points: 0.0,
            notes: format!("{} not among sector interests", listing.sector),
        });
    }

    let required = listing.required_skills.len();
    let matched = listing
        .required_skills
        .iter()
        .filter(|skill| profile.has_skill(skill))
        .count();
    let skill_points = if required == 0 {
        0.0
    } else {
        matched as f64 / required as f64 * config.skill_weight
    };
    components.push(ScoreComponent {
        factor: MatchFactor::Skills,
        points: skill_points,
        notes: if required == 0 {
            "listing names no required skills".to_string()
        } else {
            format!("{matched} of {required} required skills")
        },
    });
    running_score += skill_points;

    match profile.education {
        Some(level) if listing.accepts(level) => {
            components.push(ScoreComponent {
                factor: MatchFactor::Education,
                points: config.education_weight,
                notes: format!("{} is eligible", level.label()),
            });
            running_score += config.education_weight;
        }
        Some(level) => {
            components.push(ScoreComponent {
                factor: MatchFactor::Education,
                points: 0.0,
                notes: format!("{} is not listed as eligible", level.label()),
            });
        }
        None => {
            components.push(ScoreComponent {
                factor: MatchFactor::Education,
                points: 0.0,
                notes: "education not provided".to_string(),
            });
        }
    }

    // Plain substring containment of the state as entered, surrounding whitespace included.
    // A blank state would otherwise match everything.
    let state = profile.state.as_str();
    let same_state = !state.trim().is_empty() && listing.location.contains(state);
    if listing.is_remote || same_state {
        components.push(ScoreComponent {
            factor: MatchFactor::Location,
            points: config.location_weight,
            notes: if listing.is_remote {
                "remote friendly".to_string()
            } else {
                format!("located in {state}")
            },
        });
        running_score += config.location_weight;
    } else {
        components.push(ScoreComponent {
            factor: MatchFactor::Location,
            points: 0.0,
            notes: format!("{} is outside the preferred state", listing.location),
        });
    }

    let bonus_note = match profile.experience {
        Some(ExperienceLevel::Experienced) if running_score > config.experienced_threshold => {
            Some("experienced candidate on a strong match")
        }
        Some(ExperienceLevel::NoExperience) if running_score > config.entry_level_threshold => {
            Some("entry-level friendly match")
        }
        _ => None,
    };
    if let Some(notes) = bonus_note {
        components.push(ScoreComponent {
            factor: MatchFactor::ExperienceBonus,
            points: config.experience_bonus,
            notes: notes.to_string(),
        });
        running_score += config.experience_bonus;
    }

    (components, running_score)
}
