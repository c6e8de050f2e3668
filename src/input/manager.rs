//! Course catalogs and skill lists from disk

use crate::error::{CourseMatchError, Result};
use crate::input::file_detector::FileType;
use crate::processing::course::Course;
use log::{info, warn};
use serde::Deserialize;
use std::path::Path;

/// A catalog row before validation; either field may be absent
#[derive(Debug, Deserialize)]
struct CourseRecord {
    title: Option<String>,
    description: Option<String>,
}

impl CourseRecord {
    /// `None` when title or description is missing or blank
    fn into_course(self) -> Option<Course> {
        let title = self.title?.trim().to_string();
        let description = self.description?.trim().to_string();
        if title.is_empty() || description.is_empty() {
            return None;
        }
        Some(Course { title, description })
    }
}

/// Loads course catalogs from CSV or JSON files
#[derive(Debug, Default)]
pub struct CourseLoader {
    skipped: usize,
}

impl CourseLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records skipped by the most recent load
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub async fn load_courses(&mut self, path: &Path) -> Result<Vec<Course>> {
        if !path.exists() {
            return Err(CourseMatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let courses = match FileType::from_path(path) {
            FileType::Csv => {
                info!("Reading course catalog from CSV: {}", path.display());
                self.parse_csv(&content)?
            }
            FileType::Json => {
                info!("Reading course catalog from JSON: {}", path.display());
                self.parse_json(&content)?
            }
            FileType::Text | FileType::Unknown => {
                return Err(CourseMatchError::UnsupportedFormat(format!(
                    "Course catalogs must be .csv or .json: {}",
                    path.display()
                )));
            }
        };

        info!("Loaded {} courses ({} skipped)", courses.len(), self.skipped);
        Ok(courses)
    }

    /// Header row must name `title` and `description`; other columns are ignored
    pub fn parse_csv(&mut self, content: &str) -> Result<Vec<Course>> {
        self.skipped = 0;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        for required in ["title", "description"] {
            if !headers.iter().any(|h| h == required) {
                return Err(CourseMatchError::InvalidInput(format!(
                    "CSV header has no '{}' column",
                    required
                )));
            }
        }

        let mut courses = Vec::new();
        for (row, record) in reader.deserialize::<CourseRecord>().enumerate() {
            // row 1 is the header
            let line = row + 2;
            match record {
                Ok(record) => match record.into_course() {
                    Some(course) => courses.push(course),
                    None => self.skip(format!("row {}: missing title or description", line)),
                },
                Err(e) => self.skip(format!("row {}: {}", line, e)),
            }
        }

        Ok(courses)
    }

    /// Expects a top-level array of objects with `title` and `description`
    pub fn parse_json(&mut self, content: &str) -> Result<Vec<Course>> {
        self.skipped = 0;
        let values: Vec<serde_json::Value> = serde_json::from_str(content)?;

        let mut courses = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<CourseRecord>(value) {
                Ok(record) => match record.into_course() {
                    Some(course) => courses.push(course),
                    None => self.skip(format!("entry {}: missing title or description", index)),
                },
                Err(e) => self.skip(format!("entry {}: {}", index, e)),
            }
        }

        Ok(courses)
    }

    fn skip(&mut self, reason: String) {
        warn!("Skipping malformed course record, {}", reason);
        self.skipped += 1;
    }
}

/// One skill per line; blank lines and `#` comments are ignored
pub fn parse_skills(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

pub async fn load_skills(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        CourseMatchError::InvalidInput(format!("Failed to read skills file {}: {}", path.display(), e))
    })?;
    let skills = parse_skills(&content);
    info!("Loaded {} skills from {}", skills.len(), path.display());
    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_csv_skips_blank_and_missing_fields() {
        let csv = "title,description,credits\n\
                   Computer Vision,Images and video,3\n\
                   ,No title here,3\n\
                   Networks,   ,4\n\
                   Short row\n\
                   \"Algorithms, Advanced\",\"Graphs, flows\",3\n";
        let mut loader = CourseLoader::new();
        let courses = loader.parse_csv(csv).unwrap();

        assert_eq!(
            courses,
            vec![
                Course::new("Computer Vision", "Images and video"),
                Course::new("Algorithms, Advanced", "Graphs, flows"),
            ]
        );
        assert_eq!(loader.skipped(), 3);
    }

    #[test]
    fn test_csv_without_description_column_is_rejected() {
        let result = CourseLoader::new().parse_csv("title,summary\nA,B\n");
        assert!(matches!(result, Err(CourseMatchError::InvalidInput(_))));
    }

    #[test]
    fn test_json_skips_malformed_entries() {
        let json = r#"[
            {"title": "Databases", "description": "SQL and NoSQL"},
            {"title": "No description"},
            {"title": 42, "description": "wrong type"},
            {"title": "Security", "description": "Cryptography", "level": 300}
        ]"#;
        let mut loader = CourseLoader::new();
        let courses = loader.parse_json(json).unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].title, "Security");
        assert_eq!(loader.skipped(), 2);
    }

    #[test]
    fn test_json_must_be_an_array() {
        let result = CourseLoader::new().parse_json(r#"{"title": "x"}"#);
        assert!(matches!(result, Err(CourseMatchError::Serialization(_))));
    }

    #[test]
    fn test_parse_skills_ignores_comments() {
        let skills = parse_skills("# AI track\nPython Programming\n\n  Computer Vision  \n#Skip\nC#\n");
        assert_eq!(skills, vec!["Python Programming", "Computer Vision", "C#"]);
    }

    #[tokio::test]
    async fn test_load_courses_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("courses.csv");
        std::fs::write(&path, "title,description\nAI,Intro to AI\n").unwrap();

        let courses = CourseLoader::new().load_courses(&path).await.unwrap();
        assert_eq!(courses, vec![Course::new("AI", "Intro to AI")]);
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("courses.xlsx");
        std::fs::write(&path, "irrelevant").unwrap();

        let result = CourseLoader::new().load_courses(&path).await;
        assert!(matches!(result, Err(CourseMatchError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = CourseLoader::new().load_courses(Path::new("/nonexistent/courses.csv")).await;
        assert!(matches!(result, Err(CourseMatchError::InvalidInput(_))));
    }
}
