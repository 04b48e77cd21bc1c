use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum AchievementCategory {
    Academic,
    Research,
    Teaching,
    Leadership,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: String,
    #[schema(example = "Machine Learning")]
    pub name: String,
    pub level: SkillLevel,
    /// Starts at zero for a freshly added skill.
    #[schema(example = 0)]
    pub endorsements: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: String,
    #[schema(example = "Assistant Professor")]
    pub title: String,
    #[schema(example = "Sipna College of Engineering")]
    pub company: String,
    #[schema(example = "Amravati")]
    pub location: String,
    #[schema(example = "2020-06-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2023-05-31", format = "date", value_type = String, nullable = true)]
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: String,
    #[schema(example = "Ph.D. Computer Science")]
    pub degree: String,
    #[schema(example = "IIT Bombay")]
    pub institution: String,
    #[schema(example = "2018")]
    pub year: String,
    #[schema(nullable = true)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub id: String,
    #[schema(example = "Best Paper Award")]
    pub title: String,
    #[schema(example = "IEEE")]
    pub organization: String,
    #[schema(example = "2023-11-20", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub category: AchievementCategory,
    pub description: String,
}

/// Everything a user keeps on their profile page. Stored as one JSON value
/// per user in the key-value store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub bio: String,
    pub phone: String,
    pub location: String,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
}

// Input payloads. Ids and endorsement counts are always server-generated.

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSkill {
    #[schema(example = "Machine Learning")]
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateExperience {
    pub title: String,
    pub company: String,
    pub location: String,
    #[schema(example = "2020-06-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2023-05-31", format = "date", value_type = String, nullable = true)]
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEducation {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAchievement {
    pub title: String,
    pub organization: String,
    #[schema(example = "2023-11-20", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub category: AchievementCategory,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBasicInfo {
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}
