//! Resume scorer: deterministic resume quality scoring from the command line

use clap::Parser;
use log::{error, info};
use resume_scorer::analysis::profiles::{Industry, Section};
use resume_scorer::batch::BatchRunner;
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::config::{Config, OutputFormat};
use resume_scorer::error::{Result, ResumeScorerError};
use resume_scorer::input::InputManager;
use resume_scorer::output::formatter::{save_report_to_file, ReportGenerator};
use resume_scorer::output::report::ResumeReport;
use resume_scorer::progress;
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            industry,
            output,
            detailed,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let manager = InputManager::from_config(&config.batch);

            let mut record = manager.load_record(&resume)?;
            if let Some(tag) = industry {
                info!("Overriding industry tag with '{}'", tag);
                record.personal_info.industry = Some(tag);
            }

            let report = ResumeReport::build(resume.display().to_string(), &record);
            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Progress { resume } => {
            let record = InputManager::from_config(&config.batch).load_record(&resume)?;
            println!("{}", progress(&record));
        }

        Commands::Batch { dir, recursive, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let manager =
                InputManager::from_config(&config.batch).with_recursive(recursive || config.batch.recursive);

            let batch = BatchRunner::new(manager, config.batch.parallel).run(&dir)?;
            let generator = ReportGenerator::with_options(config.output.color_output, false, true, true);
            println!("{}", generator.generate_batch(&batch, format)?);
        }

        Commands::Profiles => {
            print_profiles();
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config)?;
                    println!("{}", content);
                }
                ConfigAction::Path => {
                    println!("{}", path.display());
                }
                ConfigAction::Reset => {
                    Config::default().save(Some(&path))?;
                    println!("Configuration reset to defaults at {}", path.display());
                }
                ConfigAction::Set { key, value } => {
                    let mut config = config;
                    config.set(&key, &value)?;
                    config.save(Some(&path))?;
                    println!("Set {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(value) => cli::parse_output_format(value).map_err(ResumeScorerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn print_profiles() {
    print!("{:<10}", "profile");
    for section in Section::ALL {
        print!(" {:>13}", section.key());
    }
    println!(" {:>9}", "keywords");

    for industry in Industry::ALL {
        let weights = industry.weights();
        print!("{:<10}", industry);
        for section in Section::ALL {
            print!(" {:>13}", weights.weight(section));
        }
        println!(" {:>9}", industry.keywords().len());
    }
}
