use serde::Serialize;

use super::domain::{Education, ExperienceLevel};

/// Named group of selectable skills.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical Skills",
        skills: &[
            "Computer Basics",
            "MS Office",
            "Data Entry",
            "Digital Marketing",
            "Web Development",
            "Programming",
            "Database Management",
            "Graphic Design",
            "Video Editing",
            "Social Media Management",
        ],
    },
    SkillCategory {
        name: "Communication Skills",
        skills: &[
            "English Communication",
            "Hindi Communication",
            "Regional Languages",
            "Presentation Skills",
            "Writing Skills",
            "Public Speaking",
            "Content Creation",
            "Translation",
        ],
    },
    SkillCategory {
        name: "Business Skills",
        skills: &[
            "Sales",
            "Customer Service",
            "Marketing",
            "Accounting Basics",
            "Business Development",
            "Project Management",
            "Leadership",
            "Teamwork",
        ],
    },
    SkillCategory {
        name: "Professional Skills",
        skills: &[
            "Problem Solving",
            "Time Management",
            "Critical Thinking",
            "Analytical Skills",
            "Research Skills",
            "Documentation",
            "Quality Control",
            "Process Improvement",
        ],
    },
    SkillCategory {
        name: "Service Skills",
        skills: &[
            "Teaching",
            "Healthcare Support",
            "Counseling",
            "Community Service",
            "Event Management",
            "Tourism Guide",
            "Food Service",
            "Retail Operations",
        ],
    },
];

pub const SECTORS: &[&str] = &[
    "Information Technology",
    "Healthcare",
    "Education",
    "Finance & Banking",
    "Manufacturing",
    "Agriculture",
    "Tourism & Hospitality",
    "Retail",
    "Government",
    "NGO/Social Work",
    "Media & Communications",
    "Arts & Culture",
];

pub const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

pub fn all_skills() -> impl Iterator<Item = &'static str> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|category| category.skills.iter().copied())
}

/// Code and display label for an enumerated option.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
}

/// Every fixed option list a client needs to render the intake steps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    pub skill_categories: &'static [SkillCategory],
    pub sectors: &'static [&'static str],
    pub states: &'static [&'static str],
    pub education_levels: Vec<OptionView>,
    pub experience_levels: Vec<OptionView>,
}

impl Taxonomy {
    pub fn standard() -> Self {
        Self {
            skill_categories: SKILL_CATEGORIES,
            sectors: SECTORS,
            states: STATES,
            education_levels: Education::ALL
                .into_iter()
                .map(|level| OptionView {
                    value: level.code(),
                    label: level.label(),
                })
                .collect(),
            experience_levels: ExperienceLevel::ALL
                .into_iter()
                .map(|level| OptionView {
                    value: level.code(),
                    label: level.label(),
                })
                .collect(),
        }
    }
}
