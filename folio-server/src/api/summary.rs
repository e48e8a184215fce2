//! Dashboard summary handler.

use crate::api::error::Result as ApiResult;
use crate::api::extractors::auth_user::AuthUser;
use crate::state::AppState;

use folio_core::{
    Achievement, Certification, Course, Education, Position, Project, SkillCategory,
};
use folio_db::DocumentRepository;

use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub projects: usize,
    pub education: usize,
    pub courses: usize,
    pub achievements: usize,
    pub skills: usize,
    #[serde(rename = "positionsOfResponsibility")]
    pub positions_of_responsibility: usize,
    pub certifications: usize,
}

/// GET /api/v1/summary
///
/// Counts across all seven record kinds, fetched concurrently. The
/// response is all-or-nothing: any failing kind fails the summary.
pub async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SummaryResponse>> {
    let user_id = auth.user_id;
    let pool = &state.pool;

    let projects: DocumentRepository<Project> = DocumentRepository::new(pool.clone());
    let education: DocumentRepository<Education> = DocumentRepository::new(pool.clone());
    let courses: DocumentRepository<Course> = DocumentRepository::new(pool.clone());
    let achievements: DocumentRepository<Achievement> = DocumentRepository::new(pool.clone());
    let skills: DocumentRepository<SkillCategory> = DocumentRepository::new(pool.clone());
    let positions: DocumentRepository<Position> = DocumentRepository::new(pool.clone());
    let certifications: DocumentRepository<Certification> = DocumentRepository::new(pool.clone());

    let (projects, education, courses, achievements, skills, positions, certifications) = tokio::try_join!(
        projects.get_all(user_id),
        education.get_all(user_id),
        courses.get_all(user_id),
        achievements.get_all(user_id),
        skills.get_all(user_id),
        positions.get_all(user_id),
        certifications.get_all(user_id),
    )?;

    Ok(Json(SummaryResponse {
        projects: projects.len(),
        education: education.len(),
        courses: courses.len(),
        achievements: achievements.len(),
        skills: skills.len(),
        positions_of_responsibility: positions.len(),
        certifications: certifications.len(),
    }))
}
