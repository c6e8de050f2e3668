//! Course skill matcher: rank catalog courses for career skills

use clap::Parser;
use course_skill_matcher::cli::{self, Cli, Commands, ConfigAction, ModelAction};
use course_skill_matcher::config::{Config, MatchStrategy, OutputFormat};
use course_skill_matcher::input::careers::{career_names, find_career, CAREER_PRESETS};
use course_skill_matcher::input::{load_skills, CourseLoader};
use course_skill_matcher::output::formatter::{format_for_path, parse_output_format, save_report_to_file};
use course_skill_matcher::output::{save_results, ReportGenerator};
use course_skill_matcher::processing::embedding_manager::EmbeddingModelManager;
use course_skill_matcher::{CourseMatchError, CourseSkillMatcher, Result};
use log::{error, info};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

/// Skills in the order given: file, then `--skill` flags, then the career preset
async fn collect_skills(skills_file: Option<&Path>, skill_flags: Vec<String>, career: Option<&str>) -> Result<Vec<String>> {
    if skills_file.is_none() && skill_flags.is_empty() && career.is_none() {
        return Err(CourseMatchError::InvalidInput(
            "No skills given: use --skills, --skill, or --career".to_string(),
        ));
    }

    let mut skills = Vec::new();
    if let Some(path) = skills_file {
        skills.extend(load_skills(path).await?);
    }
    skills.extend(skill_flags.into_iter().filter(|s| !s.trim().is_empty()));
    if let Some(name) = career {
        let preset = find_career(name).ok_or_else(|| {
            CourseMatchError::InvalidInput(format!(
                "Unknown career '{}'. Available: {}",
                name,
                career_names().join(", ")
            ))
        })?;
        skills.extend(preset.skill_list());
    }

    Ok(skills)
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Match {
            courses,
            skills,
            skill,
            career,
            top_n,
            threshold,
            model,
            strategy,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&courses, &["csv", "json"])
                .map_err(|e| CourseMatchError::InvalidInput(format!("Course catalog: {}", e)))?;

            if let Some(top_n) = top_n {
                config.matching.top_n = top_n;
            }
            if let Some(threshold) = threshold {
                config.matching.threshold = threshold;
            }
            if let Some(model) = model {
                config.models.embedding_model = model;
            }
            if let Some(strategy) = strategy {
                config.matching.strategy = cli::parse_strategy(&strategy).map_err(CourseMatchError::InvalidInput)?;
            }
            let output_format = match output {
                Some(format) => parse_output_format(&format)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            config.validate()?;

            let skills = collect_skills(skills.as_deref(), skill, career.as_deref()).await?;
            let mut loader = CourseLoader::new();
            let catalog = loader.load_courses(&courses).await?;

            println!("🔎 Matching {} skills against {} courses", skills.len(), catalog.len());
            if loader.skipped() > 0 {
                println!("⚠️  Skipped {} malformed course records", loader.skipped());
            }

            if config.matching.strategy == MatchStrategy::Embedding {
                // Registry models are fetched into models_dir ahead of loading
                let mut manager = EmbeddingModelManager::new(config.models_dir().clone()).await?;
                if manager.resolve_model_id(&config.models.embedding_model).is_some() {
                    manager.ensure_model_available(&config.models.embedding_model).await?;
                }
            }

            let matcher = CourseSkillMatcher::from_config(&config)?;
            info!("Matcher ready with encoder {}", matcher.encoder_name());

            let results = matcher.find_best_courses(
                &catalog,
                &skills,
                config.matching.top_n,
                config.matching.threshold,
            )?;

            let use_colors = config.output.color_output && output_format == OutputFormat::Console;
            let generator = ReportGenerator::with_options(use_colors, detailed);
            println!("{}", generator.generate_report(&results, output_format)?);

            if let Some(save_path) = save {
                let save_format = format_for_path(&save_path).unwrap_or(output_format);
                if save_format == OutputFormat::Json {
                    save_results(&results, &save_path)?;
                } else {
                    let plain = ReportGenerator::with_options(false, detailed);
                    save_report_to_file(&plain.generate_report(&results, save_format)?, &save_path)?;
                }
                println!("💾 Results saved to {}", save_path.display());
            }
        }

        Commands::Careers { show } => match show {
            Some(name) => {
                let preset = find_career(&name).ok_or_else(|| {
                    CourseMatchError::InvalidInput(format!(
                        "Unknown career '{}'. Available: {}",
                        name,
                        career_names().join(", ")
                    ))
                })?;
                println!("{}", preset.name);
                println!("{}", "-".repeat(30));
                for skill in preset.skills {
                    println!("  • {}", skill);
                }
            }
            None => {
                println!("🎓 Career presets\n");
                for preset in CAREER_PRESETS {
                    println!("  {} ({} skills)", preset.name, preset.skills.len());
                }
                println!("\n💡 Use `course-skill-matcher careers --show <name>` to list a preset's skills");
            }
        },

        Commands::Models { action } => {
            let mut manager = EmbeddingModelManager::new(config.models_dir().clone()).await?;

            match action {
                ModelAction::List => {
                    println!("🧠 Embedding models\n");
                    let downloaded = manager.list_downloaded_models();
                    for (id, info) in manager.list_available_models() {
                        let status = if downloaded.iter().any(|d| d == id) { "✅" } else { "⬇️ " };
                        println!("  {} {:<16} {} ({} MB, {} dims)", status, id, info.repo_id, info.size_mb, info.dimensions);
                    }
                    println!("\nDefault: {}", config.models.embedding_model);
                }

                ModelAction::Download { model, force } => {
                    if manager.is_model_downloaded(&model) && !force {
                        println!("✅ Model '{}' is already downloaded!", model);
                        println!("💡 Use --force to re-download");
                        return Ok(());
                    }
                    let model_path = manager.download_model(&model, force).await?;
                    println!("✅ Model '{}' downloaded successfully!", model);
                    println!("📁 Location: {}", model_path.display());
                }

                ModelAction::Info { model } => {
                    let info = manager
                        .get_model_info(&model)
                        .cloned()
                        .ok_or_else(|| CourseMatchError::ModelNotFound(model.clone()))?;
                    println!("📋 Model Information for '{}'\n", model);
                    println!("Name: {}", info.name);
                    println!("Repository: {}", info.repo_id);
                    println!("Size: {} MB", info.size_mb);
                    println!("Dimensions: {}", info.dimensions);
                    println!("Description: {}", info.description);

                    match manager.get_model_path(&model) {
                        Some(path) => println!("Status: ✅ Downloaded ({})", path.display()),
                        None => {
                            println!("Status: ⬇️  Available for download");
                            println!("\n💡 To download this model, run:");
                            println!("   course-skill-matcher models download {}", model);
                        }
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| CourseMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset to defaults at {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
