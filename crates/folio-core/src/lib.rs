pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::achievement::{Achievement, AchievementForm};
pub use models::certification::{Certification, CertificationForm};
pub use models::course::{Course, CourseForm};
pub use models::education::{Education, EducationForm};
pub use models::position::{Position, PositionForm};
pub use models::profile_record::{ProfileForm, ProfileRecord};
pub use models::project::{Project, ProjectForm};
pub use models::role::Role;
pub use models::skill_category::{Skill, SkillCategory, SkillCategoryForm};
pub use models::skill_level::SkillLevel;
pub use models::user_profile::UserProfile;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
