//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Csv,
    Json,
    Text,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "csv" => FileType::Csv,
            "json" => FileType::Json,
            "txt" | "text" => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_by_extension_case_insensitively() {
        assert_eq!(FileType::from_path(Path::new("courses.CSV")), FileType::Csv);
        assert_eq!(FileType::from_path(Path::new("dir/courses.json")), FileType::Json);
        assert_eq!(FileType::from_path(Path::new("skills.txt")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("courses.xlsx")), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("README")), FileType::Unknown);
    }
}
