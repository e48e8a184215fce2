pub mod achievement;
pub mod certification;
pub mod course;
pub mod education;
pub mod position;
pub mod profile_record;
pub mod project;
pub mod role;
pub mod skill_category;
pub mod skill_level;
pub mod user_profile;
