//! Input loading
//! Handles file detection, course catalogs, skill lists, and career presets

pub mod careers;
pub mod file_detector;
pub mod manager;

pub use careers::{find_career, CareerPreset, CAREER_PRESETS};
pub use manager::{load_skills, CourseLoader};
