#![allow(dead_code)]

use chrono::{DateTime, Utc};
use folio_core::{
    AchievementForm, CertificationForm, CourseForm, EducationForm, PositionForm, ProfileForm,
    ProjectForm, Skill, SkillCategoryForm, SkillLevel,
};

/// Whole-second timestamp so stored and hydrated values compare equal.
pub fn ts(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).expect("valid test timestamp")
}

/// Creates a test ProjectForm starting at the given unix second
pub fn create_project_form(title: &str, start: i64) -> ProjectForm {
    ProjectForm {
        title: title.to_string(),
        description: "Test project description".to_string(),
        tech_stack: vec!["Rust".to_string(), "SQLite".to_string()],
        project_link: Some("https://example.com/project".to_string()),
        github_repo: Some("https://github.com/example/project".to_string()),
        start_date: ts(start),
        end_date: None,
    }
}

/// Creates a test EducationForm with sensible defaults
pub fn create_education_form(institute: &str, start_year: i32) -> EducationForm {
    EducationForm {
        institute: institute.to_string(),
        degree: "B.Tech".to_string(),
        branch: Some("Computer Science".to_string()),
        start_year,
        end_year: Some(start_year + 4),
        cgpa_or_percentage: Some("8.9".to_string()),
    }
}

/// Creates a test CourseForm with sensible defaults
pub fn create_course_form(title: &str, completed: i64) -> CourseForm {
    CourseForm {
        title: title.to_string(),
        provider: "Coursera".to_string(),
        certificate_link: None,
        completion_date: ts(completed),
    }
}

/// Creates a test AchievementForm with sensible defaults
pub fn create_achievement_form(title: &str, date: i64) -> AchievementForm {
    AchievementForm {
        title: title.to_string(),
        description: "Won first place".to_string(),
        date: ts(date),
    }
}

/// Creates a test SkillCategoryForm with one skill
pub fn create_skill_category_form(category: &str) -> SkillCategoryForm {
    SkillCategoryForm {
        category: category.to_string(),
        skills: vec![Skill {
            name: "Rust".to_string(),
            level: SkillLevel::Intermediate,
        }],
    }
}

/// Creates a test PositionForm with sensible defaults
pub fn create_position_form(title: &str, start: i64) -> PositionForm {
    PositionForm {
        title: title.to_string(),
        organization: "Robotics Club".to_string(),
        description: "Led the weekly build sessions".to_string(),
        start_date: ts(start),
        end_date: None,
    }
}

/// Creates a test CertificationForm with sensible defaults
pub fn create_certification_form(title: &str, issued: i64) -> CertificationForm {
    CertificationForm {
        title: title.to_string(),
        issuer: "AWS".to_string(),
        issue_date: ts(issued),
        certificate_link: Some("https://example.com/cert".to_string()),
    }
}

/// Creates a test ProfileForm with sensible defaults
pub fn create_profile_form(name: &str) -> ProfileForm {
    ProfileForm {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        portfolio_website: None,
        github_link: Some("https://github.com/example".to_string()),
        linkedin_link: None,
        photo_url: None,
    }
}
