//! [`RecordKind`] bindings for the portfolio record kinds.

use crate::collections::Collection;
use crate::repositories::record_repository::{OrderBy, RecordKind};

use folio_core::{
    Achievement, AchievementForm, Certification, CertificationForm, Course, CourseForm, Education,
    EducationForm, Position, PositionForm, Project, ProjectForm, SkillCategory, SkillCategoryForm,
};

impl RecordKind for Project {
    type Form = ProjectForm;

    const COLLECTION: Collection = Collection::Projects;
    const ORDER: OrderBy = OrderBy::desc("startDate");
}

impl RecordKind for Education {
    type Form = EducationForm;

    const COLLECTION: Collection = Collection::Education;
    const ORDER: OrderBy = OrderBy::desc("startYear");
}

impl RecordKind for Course {
    type Form = CourseForm;

    const COLLECTION: Collection = Collection::Courses;
    const ORDER: OrderBy = OrderBy::desc("completionDate");
}

impl RecordKind for Achievement {
    type Form = AchievementForm;

    const COLLECTION: Collection = Collection::Achievements;
    const ORDER: OrderBy = OrderBy::desc("date");
}

impl RecordKind for SkillCategory {
    type Form = SkillCategoryForm;

    const COLLECTION: Collection = Collection::Skills;
    const ORDER: OrderBy = OrderBy::asc("category");
}

impl RecordKind for Position {
    type Form = PositionForm;

    const COLLECTION: Collection = Collection::Positions;
    const ORDER: OrderBy = OrderBy::desc("startDate");
}

impl RecordKind for Certification {
    type Form = CertificationForm;

    const COLLECTION: Collection = Collection::Certifications;
    const ORDER: OrderBy = OrderBy::desc("issueDate");
}
