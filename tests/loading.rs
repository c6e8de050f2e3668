//! Integration tests for catalog and skill loading

use course_skill_matcher::input::careers::find_career;
use course_skill_matcher::input::{load_skills, CourseLoader};
use course_skill_matcher::CourseMatchError;
use std::path::Path;

#[tokio::test]
async fn test_csv_catalog_skips_malformed_rows() {
    let mut loader = CourseLoader::new();
    let courses = loader.load_courses(Path::new("tests/fixtures/courses.csv")).await.unwrap();

    let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Computer Vision", "Network Security", "Data Structures", "Machine Learning", "Game Programming"]
    );
    assert_eq!(courses[1].description, "Firewalls, intrusion detection and cryptography.");
    assert_eq!(loader.skipped(), 2);
}

#[tokio::test]
async fn test_json_catalog_skips_incomplete_entries() {
    let mut loader = CourseLoader::new();
    let courses = loader.load_courses(Path::new("tests/fixtures/courses.json")).await.unwrap();

    assert_eq!(courses.len(), 3);
    assert_eq!(courses[2].title, "Data Structures");
    assert_eq!(loader.skipped(), 1);
}

#[tokio::test]
async fn test_csv_and_json_catalogs_agree() {
    let csv = CourseLoader::new().load_courses(Path::new("tests/fixtures/courses.csv")).await.unwrap();
    let json = CourseLoader::new().load_courses(Path::new("tests/fixtures/courses.json")).await.unwrap();

    for course in &json {
        assert!(csv.contains(course));
    }
}

#[tokio::test]
async fn test_skills_file() {
    let skills = load_skills(Path::new("tests/fixtures/skills.txt")).await.unwrap();
    assert_eq!(
        skills,
        vec!["Computer Vision", "Cryptography", "Data Structures & Algorithms", "Machine Learning"]
    );
}

#[tokio::test]
async fn test_missing_skills_file() {
    let result = load_skills(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(result, Err(CourseMatchError::InvalidInput(_))));
}

#[tokio::test]
async fn test_unsupported_catalog_type() {
    let result = CourseLoader::new().load_courses(Path::new("tests/fixtures/skills.txt")).await;
    assert!(matches!(result, Err(CourseMatchError::UnsupportedFormat(_))));
}

#[test]
fn test_detailed_ai_preset() {
    let preset = find_career("ai engineer (detailed)").unwrap();
    assert_eq!(preset.skills.len(), 13);
    assert_eq!(preset.skills[0], "Python Programming");
    assert_eq!(preset.skills[12], "Model Deployment (APIs, Flask/FastAPI, Docker)");
}
