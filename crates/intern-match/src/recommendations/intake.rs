use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, Education, ExperienceLevel};

pub const TOTAL_STEPS: u8 = 4;

/// Ordered steps of the candidate intake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    #[default]
    PersonalInformation,
    LocationDetails,
    Skills,
    PreferredSectors,
}

impl IntakeStep {
    pub const ALL: [IntakeStep; 4] = [
        IntakeStep::PersonalInformation,
        IntakeStep::LocationDetails,
        IntakeStep::Skills,
        IntakeStep::PreferredSectors,
    ];

    pub const fn number(self) -> u8 {
        match self {
            IntakeStep::PersonalInformation => 1,
            IntakeStep::LocationDetails => 2,
            IntakeStep::Skills => 3,
            IntakeStep::PreferredSectors => 4,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            IntakeStep::PersonalInformation => "Personal Information",
            IntakeStep::LocationDetails => "Location Details",
            IntakeStep::Skills => "Your Skills",
            IntakeStep::PreferredSectors => "Preferred Sectors",
        }
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            IntakeStep::PersonalInformation => "Tell us about yourself",
            IntakeStep::LocationDetails => "Where are you located?",
            IntakeStep::Skills => "What skills do you have?",
            IntakeStep::PreferredSectors => "Which sectors interest you?",
        }
    }

    pub const fn next(self) -> Option<IntakeStep> {
        match self {
            IntakeStep::PersonalInformation => Some(IntakeStep::LocationDetails),
            IntakeStep::LocationDetails => Some(IntakeStep::Skills),
            IntakeStep::Skills => Some(IntakeStep::PreferredSectors),
            IntakeStep::PreferredSectors => None,
        }
    }

    pub const fn previous(self) -> Option<IntakeStep> {
        match self {
            IntakeStep::PersonalInformation => None,
            IntakeStep::LocationDetails => Some(IntakeStep::PersonalInformation),
            IntakeStep::Skills => Some(IntakeStep::LocationDetails),
            IntakeStep::PreferredSectors => Some(IntakeStep::Skills),
        }
    }
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Reasons the intake refuses to move forward or to complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{step} is incomplete: missing {}", .missing.join(", "))]
    IncompleteStep {
        step: IntakeStep,
        missing: Vec<&'static str>,
    },
    #[error("intake can only be submitted from the final step, currently on {current}")]
    NotAtFinalStep { current: IntakeStep },
}

/// Step-gated collector that produces a complete `CandidateProfile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileIntake {
    step: IntakeStep,
    draft: CandidateProfile,
}

impl ProfileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk a pre-filled draft through every step, as a user pressing "next" would.
    pub fn collect(draft: CandidateProfile) -> Result<CandidateProfile, IntakeError> {
        let mut intake = Self { step: IntakeStep::default(), draft };
        while intake.step.next().is_some() {
            intake.advance()?;
        }
        intake.complete()
    }

    pub fn current_step(&self) -> IntakeStep {
        self.step
    }

    pub fn draft(&self) -> &CandidateProfile {
        &self.draft
    }

    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f32 / TOTAL_STEPS as f32) * 100.0).round() as u8
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.draft.age = age.into();
    }

    pub fn set_education(&mut self, education: Education) {
        self.draft.education = Some(education);
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.draft.state = state.into();
    }

    pub fn set_district(&mut self, district: impl Into<String>) {
        self.draft.district = district.into();
    }

    pub fn set_experience(&mut self, experience: ExperienceLevel) {
        self.draft.experience = Some(experience);
    }

    /// Check or uncheck a skill. Checking an already selected skill is a no-op.
    pub fn select_skill(&mut self, skill: &str, selected: bool) {
        toggle(&mut self.draft.skills, skill, selected);
    }

    pub fn select_sector(&mut self, sector: &str, selected: bool) {
        toggle(&mut self.draft.sectors, sector, selected);
    }

    pub fn missing_fields(&self, step: IntakeStep) -> Vec<&'static str> {
        let draft = &self.draft;
        let mut missing = Vec::new();
        match step {
            IntakeStep::PersonalInformation => {
                if draft.name.trim().is_empty() {
                    missing.push("name");
                }
                if draft.age.trim().is_empty() {
                    missing.push("age");
                }
                if draft.education.is_none() {
                    missing.push("education");
                }
            }
            IntakeStep::LocationDetails => {
                if draft.state.trim().is_empty() {
                    missing.push("state");
                }
                if draft.district.trim().is_empty() {
                    missing.push("district");
                }
            }
            IntakeStep::Skills => {
                if draft.skills.is_empty() {
                    missing.push("skills");
                }
            }
            IntakeStep::PreferredSectors => {
                if draft.sectors.is_empty() {
                    missing.push("sectors");
                }
            }
        }
        missing
    }

    pub fn is_step_valid(&self, step: IntakeStep) -> bool {
        self.missing_fields(step).is_empty()
    }

    /// Move to the next step once the current one is valid. Stays put on the final step.
    pub fn advance(&mut self) -> Result<IntakeStep, IntakeError> {
        self.ensure_valid(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> IntakeStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Submit from the final step. Earlier steps are re-checked since the draft may have
    /// been edited after moving back.
    pub fn complete(self) -> Result<CandidateProfile, IntakeError> {
        if self.step.next().is_some() {
            return Err(IntakeError::NotAtFinalStep { current: self.step });
        }
        for step in IntakeStep::ALL {
            self.ensure_valid(step)?;
        }
        Ok(self.draft)
    }

    fn ensure_valid(&self, step: IntakeStep) -> Result<(), IntakeError> {
        let missing = self.missing_fields(step);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(IntakeError::IncompleteStep { step, missing })
        }
    }
}

fn toggle(values: &mut Vec<String>, value: &str, selected: bool) {
    if selected {
        if !values.iter().any(|existing| existing == value) {
            values.push(value.to_string());
        }
    } else {
        values.retain(|existing| existing != value);
    }
}
