use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{Education, Listing, ListingId};

/// Errors raised while building a catalog from external data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row} has no id")]
    MissingId { row: usize },
    #[error("duplicate listing id '{0}'")]
    DuplicateId(ListingId),
    #[error("listing '{id}' names unknown education level '{value}'")]
    UnknownEducation { id: ListingId, value: String },
}

/// Read-only set of listings the scorer ranks against.
#[derive(Debug, Clone)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    /// The built-in ten listing catalog.
    pub fn standard() -> Self {
        Self {
            listings: STANDARD_LISTINGS.iter().map(ListingSeed::to_listing).collect(),
        }
    }

    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, listing) in listings.iter().enumerate() {
            if listing.id.0.trim().is_empty() {
                return Err(CatalogError::MissingId { row: index + 1 });
            }
            if !seen.insert(listing.id.clone()) {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }

        Ok(Self { listings })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Load listings from CSV with camelCase headers. `requiredSkills` and
    /// `educationLevels` cells hold `;`-separated values.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut listings = Vec::new();
        for record in csv_reader.deserialize::<CatalogRow>() {
            listings.push(record?.into_listing()?);
        }

        Self::from_listings(listings)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for ListingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRow {
    id: String,
    title: String,
    company: String,
    location: String,
    sector: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    stipend: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    required_skills: String,
    #[serde(default)]
    education_levels: String,
    #[serde(default)]
    is_remote: String,
}

impl CatalogRow {
    fn into_listing(self) -> Result<Listing, CatalogError> {
        let id = ListingId(self.id);
        let education_levels = split_cell(&self.education_levels)
            .into_iter()
            .map(|value| {
                value
                    .parse::<Education>()
                    .map_err(|_| CatalogError::UnknownEducation {
                        id: id.clone(),
                        value,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Listing {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            sector: self.sector,
            duration: self.duration,
            stipend: self.stipend,
            description: self.description,
            required_skills: split_cell(&self.required_skills),
            education_levels,
            is_remote: parse_flag(&self.is_remote),
        })
    }
}

fn split_cell(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

struct ListingSeed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    sector: &'static str,
    duration: &'static str,
    stipend: &'static str,
    description: &'static str,
    required_skills: &'static [&'static str],
    education_levels: &'static [Education],
    is_remote: bool,
}

impl ListingSeed {
    fn to_listing(&self) -> Listing {
        Listing {
            id: ListingId(self.id.to_string()),
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            sector: self.sector.to_string(),
            duration: self.duration.to_string(),
            stipend: self.stipend.to_string(),
            description: self.description.to_string(),
            required_skills: self
                .required_skills
                .iter()
                .map(|skill| skill.to_string())
                .collect(),
            education_levels: self.education_levels.to_vec(),
            is_remote: self.is_remote,
        }
    }
}

const STANDARD_LISTINGS: &[ListingSeed] = &[
    ListingSeed {
        id: "1",
        title: "Digital Marketing Assistant",
        company: "TechStart Solutions",
        location: "Remote/Mumbai",
        sector: "Information Technology",
        duration: "3 months",
        stipend: "₹8,000/month",
        description: "Learn digital marketing strategies, social media management, and content creation.",
        required_skills: &["Digital Marketing", "Communication Skills", "Computer Basics"],
        education_levels: &[Education::Twelfth, Education::Graduation, Education::Postgraduation],
        is_remote: true,
    },
    ListingSeed {
        id: "2",
        title: "Data Entry Operator",
        company: "Government Health Department",
        location: "Delhi",
        sector: "Government",
        duration: "6 months",
        stipend: "₹12,000/month",
        description: "Digitize health records and maintain database systems for public healthcare.",
        required_skills: &["Data Entry", "MS Office", "Computer Basics"],
        education_levels: &[Education::Tenth, Education::Twelfth, Education::Diploma],
        is_remote: false,
    },
    ListingSeed {
        id: "3",
        title: "Teaching Assistant",
        company: "Rural Education Foundation",
        location: "Rajasthan",
        sector: "Education",
        duration: "4 months",
        stipend: "₹6,000/month",
        description: "Support primary education in rural schools, help with basic computer literacy.",
        required_skills: &["Teaching", "Communication Skills", "Language Skills"],
        education_levels: &[Education::Twelfth, Education::Graduation],
        is_remote: false,
    },
    ListingSeed {
        id: "4",
        title: "Customer Service Representative",
        company: "Banking Solutions Ltd",
        location: "Bangalore",
        sector: "Finance & Banking",
        duration: "3 months",
        stipend: "₹10,000/month",
        description: "Handle customer queries, assist with banking services, learn financial products.",
        required_skills: &["Customer Service", "Communication Skills", "Problem Solving"],
        education_levels: &[Education::Twelfth, Education::Graduation],
        is_remote: false,
    },
    ListingSeed {
        id: "5",
        title: "Agricultural Technology Assistant",
        company: "FarmTech Innovations",
        location: "Punjab",
        sector: "Agriculture",
        duration: "5 months",
        stipend: "₹7,500/month",
        description: "Support farmers with technology adoption, data collection, and crop monitoring.",
        required_skills: &["Data Entry", "Communication Skills", "Problem Solving"],
        education_levels: &[Education::Tenth, Education::Twelfth, Education::Diploma],
        is_remote: false,
    },
    ListingSeed {
        id: "6",
        title: "Healthcare Data Assistant",
        company: "Regional Medical College",
        location: "Kerala",
        sector: "Healthcare",
        duration: "4 months",
        stipend: "₹9,000/month",
        description: "Assist with patient data management and healthcare record digitization.",
        required_skills: &["Data Entry", "MS Office", "Customer Service"],
        education_levels: &[Education::Twelfth, Education::Diploma, Education::Graduation],
        is_remote: false,
    },
    ListingSeed {
        id: "7",
        title: "Content Writer Trainee",
        company: "Creative Media House",
        location: "Remote/Pune",
        sector: "Media & Communications",
        duration: "3 months",
        stipend: "₹8,500/month",
        description: "Create content for websites, social media, and marketing materials.",
        required_skills: &["Writing", "Communication Skills", "Digital Marketing"],
        education_levels: &[Education::Graduation, Education::Postgraduation],
        is_remote: true,
    },
    ListingSeed {
        id: "8",
        title: "Tourism Guide Assistant",
        company: "Heritage Tourism Board",
        location: "Goa",
        sector: "Tourism & Hospitality",
        duration: "6 months",
        stipend: "₹7,000/month",
        description: "Assist tourists, provide information about local culture and heritage sites.",
        required_skills: &["Communication Skills", "Language Skills", "Customer Service"],
        education_levels: &[Education::Tenth, Education::Twelfth],
        is_remote: false,
    },
    ListingSeed {
        id: "9",
        title: "Social Work Assistant",
        company: "Community Development NGO",
        location: "West Bengal",
        sector: "NGO/Social Work",
        duration: "4 months",
        stipend: "₹5,000/month",
        description: "Support community development programs and social welfare initiatives.",
        required_skills: &["Communication Skills", "Problem Solving", "Teaching"],
        education_levels: &[Education::Twelfth, Education::Graduation],
        is_remote: false,
    },
    ListingSeed {
        id: "10",
        title: "Retail Sales Assistant",
        company: "Modern Retail Chain",
        location: "Gujarat",
        sector: "Retail",
        duration: "3 months",
        stipend: "₹8,000/month",
        description: "Customer interaction, inventory management, and sales support.",
        required_skills: &["Sales", "Customer Service", "Communication Skills"],
        education_levels: &[Education::Tenth, Education::Twelfth],
        is_remote: false,
    },
];
