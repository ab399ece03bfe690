//! Categorical column types for the generated tables.
//!
//! Each enum serializes to the exact string written to CSV. Weighted columns
//! carry their relative weights next to the variant list, in the same order.

use serde::{Deserialize, Serialize};

/// Career stage of a user, ordered from least to most senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seniority {
    Student,
    Fresher,
    Junior,
    Mid,
    Senior,
    Lead,
}

impl Seniority {
    pub const ALL: [Seniority; 6] = [
        Seniority::Student,
        Seniority::Fresher,
        Seniority::Junior,
        Seniority::Mid,
        Seniority::Senior,
        Seniority::Lead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Student => "Student",
            Seniority::Fresher => "Fresher",
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
            Seniority::Lead => "Lead",
        }
    }
}

/// Department derived from a job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Data,
    Product,
    Marketing,
    /// Students and freshers not yet tied to a department.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Data => "Data",
            Department::Product => "Product",
            Department::Marketing => "Marketing",
            Department::NotApplicable => "N/A",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    #[serde(rename = "Reading/Writing")]
    ReadingWriting,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Kinesthetic,
        LearningStyle::ReadingWriting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::Kinesthetic => "Kinesthetic",
            LearningStyle::ReadingWriting => "Reading/Writing",
        }
    }
}

/// Subject area of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Data Science")]
    DataScience,
    Business,
    Marketing,
    Mathematics,
    Finance,
    #[serde(rename = "Software Engineering")]
    SoftwareEngineering,
    Design,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::DataScience,
        Domain::Business,
        Domain::Marketing,
        Domain::Mathematics,
        Domain::Finance,
        Domain::SoftwareEngineering,
        Domain::Design,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::DataScience => "Data Science",
            Domain::Business => "Business",
            Domain::Marketing => "Marketing",
            Domain::Mathematics => "Mathematics",
            Domain::Finance => "Finance",
            Domain::SoftwareEngineering => "Software Engineering",
            Domain::Design => "Design",
        }
    }
}

/// Topic tag of a content item. Sampled independently of [`Domain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subtopic {
    LinearAlgebra,
    SocialMediaAnalytics,
    MachineLearning,
    FinancialModeling,
    ProductManagement,
    Sql,
    Python,
    R,
    AgileMethodology,
}

impl Subtopic {
    pub const ALL: [Subtopic; 9] = [
        Subtopic::LinearAlgebra,
        Subtopic::SocialMediaAnalytics,
        Subtopic::MachineLearning,
        Subtopic::FinancialModeling,
        Subtopic::ProductManagement,
        Subtopic::Sql,
        Subtopic::Python,
        Subtopic::R,
        Subtopic::AgileMethodology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subtopic::LinearAlgebra => "linear-algebra",
            Subtopic::SocialMediaAnalytics => "social-media-analytics",
            Subtopic::MachineLearning => "machine-learning",
            Subtopic::FinancialModeling => "financial-modeling",
            Subtopic::ProductManagement => "product-management",
            Subtopic::Sql => "sql",
            Subtopic::Python => "python",
            Subtopic::R => "r",
            Subtopic::AgileMethodology => "agile-methodology",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub const WEIGHTS: [f64; 3] = [0.5, 0.35, 0.15];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Video,
    Article,
    #[serde(rename = "Interactive Quiz")]
    InteractiveQuiz,
    #[serde(rename = "Case Study")]
    CaseStudy,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Video,
        ContentType::Article,
        ContentType::InteractiveQuiz,
        ContentType::CaseStudy,
    ];

    pub const WEIGHTS: [f64; 4] = [0.6, 0.2, 0.1, 0.1];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "Video",
            ContentType::Article => "Article",
            ContentType::InteractiveQuiz => "Interactive Quiz",
            ContentType::CaseStudy => "Case Study",
        }
    }
}

/// Kind of interaction recorded by an engagement event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementType {
    Viewed,
    Completed,
    Shared,
    Bookmarked,
}

impl EngagementType {
    pub const ALL: [EngagementType; 4] = [
        EngagementType::Viewed,
        EngagementType::Completed,
        EngagementType::Shared,
        EngagementType::Bookmarked,
    ];

    pub const WEIGHTS: [f64; 4] = [0.7, 0.2, 0.05, 0.05];

    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementType::Viewed => "viewed",
            EngagementType::Completed => "completed",
            EngagementType::Shared => "shared",
            EngagementType::Bookmarked => "bookmarked",
        }
    }
}
