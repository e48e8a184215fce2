//! Collection names and expected document shapes.

use serde_json::{Value, json};

/// The backing collections. Names are the document wire names and must
/// not change; `positionsOfResponsibility` in particular is a legacy name
/// other deployments already share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Profiles,
    Projects,
    Education,
    Courses,
    Achievements,
    Skills,
    Positions,
    Certifications,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Profiles => "profiles",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Courses => "courses",
            Self::Achievements => "achievements",
            Self::Skills => "skills",
            Self::Positions => "positionsOfResponsibility",
            Self::Certifications => "certifications",
        }
    }

    /// Collections that get a sentinel document at bootstrap. The `users`
    /// collection is owned by the session bridge and excluded.
    pub const BOOTSTRAPPED: [Collection; 8] = [
        Self::Profiles,
        Self::Projects,
        Self::Education,
        Self::Courses,
        Self::Achievements,
        Self::Skills,
        Self::Positions,
        Self::Certifications,
    ];

    /// Fields a well-formed document in this collection is expected to
    /// carry. Used only for soft validation and sentinel shaping.
    pub fn expected_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Users => &[
                "uid",
                "externalSubjectId",
                "email",
                "name",
                "role",
                "createdAt",
                "lastLoginAt",
            ],
            Self::Profiles => &[
                "userId",
                "name",
                "email",
                "phone",
                "portfolioWebsite",
                "githubLink",
                "linkedinLink",
                "photoURL",
            ],
            Self::Projects => &[
                "userId",
                "title",
                "description",
                "techStack",
                "projectLink",
                "githubRepo",
                "startDate",
                "endDate",
            ],
            Self::Education => &[
                "userId",
                "institute",
                "degree",
                "branch",
                "startYear",
                "endYear",
                "cgpaOrPercentage",
            ],
            Self::Courses => &[
                "userId",
                "title",
                "provider",
                "certificateLink",
                "completionDate",
            ],
            Self::Achievements => &["userId", "title", "description", "date"],
            Self::Skills => &["userId", "category", "skills"],
            Self::Positions => &[
                "userId",
                "title",
                "organization",
                "description",
                "startDate",
                "endDate",
            ],
            Self::Certifications => &["userId", "title", "issuer", "issueDate", "certificateLink"],
        }
    }

    /// Empty document matching this collection's expected shape, used as
    /// the sentinel body so the collection's fields are visible in the
    /// store console before any real document exists.
    pub fn sample_body(&self) -> Value {
        let mut body = serde_json::Map::new();
        for field in self.expected_fields() {
            let value = match *field {
                "techStack" | "skills" => json!([]),
                "startYear" | "endYear" => json!(0),
                "startDate" | "endDate" | "completionDate" | "date" | "issueDate" | "createdAt"
                | "lastLoginAt" => json!(0),
                _ => json!(""),
            };
            body.insert((*field).to_string(), value);
        }
        Value::Object(body)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soft shape check: logs a warning naming any missing expected field and
/// returns false, but never blocks the write.
pub fn validate_document_shape(collection: Collection, body: &Value) -> bool {
    let Some(object) = body.as_object() else {
        log::warn!("{} document body is not an object", collection);
        return false;
    };

    let mut valid = true;
    for field in collection.expected_fields() {
        // Timestamps are stamped by the store, not the caller.
        if matches!(*field, "createdAt" | "updatedAt" | "lastLoginAt") {
            continue;
        }
        if !object.contains_key(*field) {
            log::warn!("Missing expected field '{}' in {} document", field, collection);
            valid = false;
        }
    }
    valid
}
