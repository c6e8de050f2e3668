//! Output formatters for match results

use crate::config::OutputFormat;
use crate::error::{CourseMatchError, Result};
use crate::output::report::MatchSummary;
use crate::processing::course::{ConfidenceLabel, Match, SkillResult};
use colored::{Color, Colorize};
use std::path::Path;

/// Longest description shown in detailed console output
const DESCRIPTION_PREVIEW_CHARS: usize = 160;

pub trait OutputFormatter {
    fn format_results(&self, results: &[SkillResult]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Plain-text listing per skill, colored when enabled
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

/// One table per skill
pub struct MarkdownFormatter {
    include_summary: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn label_color(label: ConfidenceLabel) -> Color {
        match label {
            ConfidenceLabel::High => Color::Green,
            ConfidenceLabel::Medium => Color::Yellow,
            ConfidenceLabel::Low => Color::Red,
        }
    }

    fn format_match(&self, course: &Match, output: &mut String) {
        output.push_str(&format!("\n- {}\n", self.bold(&course.course_title)));
        output.push_str(&format!(
            "  Confidence: {}\n",
            self.colorize(&course.confidence_label.to_string(), Self::label_color(course.confidence_label))
        ));
        output.push_str(&format!("  Score: {:.3}\n", course.score));
        output.push_str(&format!(
            "  Technical Terms: {}\n",
            course.analysis.technical_terms.join(", ")
        ));
        output.push_str(&format!("  Complexity Score: {:.2}\n", course.analysis.complexity_score));
        output.push_str(&format!("  Skill Mentions: {}\n", course.analysis.skill_mentions));

        if self.detailed {
            output.push_str(&format!(
                "  Description: {}\n",
                truncate(&course.description, DESCRIPTION_PREVIEW_CHARS)
            ));
        }
    }

    fn format_summary(&self, results: &[SkillResult], output: &mut String) {
        let summary = MatchSummary::from_results(results);
        output.push_str(&format!("\n{}\n", self.colorize("Summary", Color::Cyan)));
        output.push_str(&format!(
            "  Skills: {} ({} without matches)\n",
            summary.skills, summary.skills_without_matches
        ));
        output.push_str(&format!(
            "  Matches: {} (High {}, Medium {}, Low {})\n",
            summary.total_matches, summary.high_confidence, summary.medium_confidence, summary.low_confidence
        ));

        let unmatched = MatchSummary::unmatched_skills(results);
        if !unmatched.is_empty() {
            output.push_str(&format!(
                "  {} {}\n",
                self.colorize("No matches:", Color::Yellow),
                unmatched.join(", ")
            ));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_results(&self, results: &[SkillResult]) -> Result<String> {
        let mut output = String::new();

        for result in results {
            output.push_str(&format!(
                "\n{} {}\n",
                self.colorize("Skill:", Color::Blue),
                self.bold(&result.skill)
            ));
            output.push_str("Matching Courses:\n");

            if result.matching_courses.is_empty() {
                output.push_str(&format!("  {}\n", self.colorize("(none above threshold)", Color::BrightBlack)));
            }
            for course in &result.matching_courses {
                self.format_match(course, &mut output);
            }
        }

        if self.detailed {
            self.format_summary(results, &mut output);
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, results: &[SkillResult]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(results)?)
        } else {
            Ok(serde_json::to_string(results)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_summary: bool) -> Self {
        Self { include_summary }
    }

    /// Pipes and newlines would break the table row
    fn cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\n', '\r'], " ")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_results(&self, results: &[SkillResult]) -> Result<String> {
        let mut output = String::from("# Course Matches\n\n");

        if self.include_summary {
            let summary = MatchSummary::from_results(results);
            output.push_str(&format!(
                "**Skills:** {} | **Matches:** {} | **High:** {} | **Medium:** {} | **Low:** {}\n\n",
                summary.skills,
                summary.total_matches,
                summary.high_confidence,
                summary.medium_confidence,
                summary.low_confidence
            ));
        }

        for result in results {
            output.push_str(&format!("## {}\n\n", Self::cell(&result.skill)));

            if result.matching_courses.is_empty() {
                output.push_str("_No course scored above the threshold._\n\n");
                continue;
            }

            output.push_str("| Course | Confidence | Score | Technical Terms | Complexity | Mentions |\n");
            output.push_str("|--------|------------|-------|-----------------|------------|----------|\n");
            for course in &result.matching_courses {
                output.push_str(&format!(
                    "| {} | {} | {:.3} | {} | {:.2} | {} |\n",
                    Self::cell(&course.course_title),
                    course.confidence_label,
                    course.score,
                    Self::cell(&course.analysis.technical_terms.join(", ")),
                    course.analysis.complexity_score,
                    course.analysis.skill_mentions
                ));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn generate_report(&self, results: &[SkillResult], format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        formatter.format_results(results)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content).map_err(|e| {
        CourseMatchError::OutputFormatting(format!("Failed to write {}: {}", file_path.display(), e))
    })
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(CourseMatchError::InvalidInput(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        ))),
    }
}

/// Format implied by a file extension, if any
pub fn format_for_path(path: &Path) -> Option<OutputFormat> {
    match path.extension()?.to_str()?.to_lowercase().as_str() {
        "json" => Some(OutputFormat::Json),
        "md" | "markdown" => Some(OutputFormat::Markdown),
        "txt" => Some(OutputFormat::Console),
        _ => None,
    }
}
