mod logging;
mod ui;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use neural_core::config::Config;
use neural_core::portfolio::PortfolioData;
use neural_core::state::UiTheme;
use tracing::info;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct RunOptions {
    config: Option<PathBuf>,
    data: Option<PathBuf>,
    theme: Option<UiTheme>,
    no_boot: bool,
    log_file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum CliCommand {
    Help,
    Version,
    PrintData,
    Run(RunOptions),
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match parse_args(env::args().skip(1).collect())? {
        CliCommand::Help => {
            print_help();
            Ok(())
        }
        CliCommand::Version => {
            println!("neural {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliCommand::PrintData => {
            let json = serde_json::to_string_pretty(&PortfolioData::builtin())?;
            println!("{json}");
            Ok(())
        }
        CliCommand::Run(options) => run_terminal(options),
    }
}

fn parse_args(args: Vec<String>) -> Result<CliCommand, Box<dyn std::error::Error>> {
    let mut options = RunOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => return Ok(CliCommand::Help),
            "--version" | "-V" | "version" => return Ok(CliCommand::Version),
            "--print-data" => return Ok(CliCommand::PrintData),
            "--no-boot" => {
                options.no_boot = true;
                i += 1;
            }
            flag @ ("--config" | "--data" | "--log-file" | "--theme") => {
                let Some(value) = args.get(i + 1) else {
                    return Err(format!("{flag} requires a value").into());
                };
                match flag {
                    "--config" => options.config = Some(PathBuf::from(value)),
                    "--data" => options.data = Some(PathBuf::from(value)),
                    "--log-file" => options.log_file = Some(PathBuf::from(value)),
                    _ => {
                        let Some(theme) = UiTheme::parse(value) else {
                            return Err(format!(
                                "unknown theme: {value} (expected matrix, cyberpunk or amber)"
                            )
                            .into());
                        };
                        options.theme = Some(theme);
                    }
                }
                i += 2;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(CliCommand::Run(options))
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("neural-portfolio")
        .join("config.toml")
}

fn run_terminal(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let log_path = options
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init_global(&log_path)?;

    let config_path = options.config.clone().unwrap_or_else(default_config_path);
    let mut config = Config::load(&config_path)?;
    if let Some(theme) = options.theme {
        config.ui.theme = theme;
    }
    if options.no_boot {
        config.ui.boot = false;
    }

    let data = match options.data.as_ref().or(config.data_path.as_ref()) {
        Some(path) => PortfolioData::from_json_file(path)?,
        None => PortfolioData::builtin(),
    };
    info!(
        config = %config_path.display(),
        projects = data.projects.len(),
        skills = data.skills.len(),
        theme = config.ui.theme.label(),
        "starting terminal"
    );

    ui::run(config, Arc::new(data))
}

fn print_help() {
    println!("neural {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  neural [--config PATH] [--data PATH] [--theme NAME] [--no-boot] [--log-file PATH]");
    println!("  neural --print-data");
    println!("  neural --help");
    println!("  neural --version");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn no_arguments_runs_with_defaults() {
        assert_eq!(
            parse_args(Vec::new()).unwrap(),
            CliCommand::Run(RunOptions::default())
        );
    }

    #[test]
    fn run_flags_are_collected() {
        let command = parse_args(args(&[
            "--data",
            "me.json",
            "--theme",
            "Amber",
            "--no-boot",
            "--config",
            "c.toml",
        ]))
        .unwrap();

        assert_eq!(
            command,
            CliCommand::Run(RunOptions {
                config: Some(PathBuf::from("c.toml")),
                data: Some(PathBuf::from("me.json")),
                theme: Some(UiTheme::Amber),
                no_boot: true,
                log_file: None,
            })
        );
    }

    #[test]
    fn informational_flags_short_circuit() {
        assert_eq!(parse_args(args(&["-V"])).unwrap(), CliCommand::Version);
        assert_eq!(
            parse_args(args(&["--no-boot", "--print-data"])).unwrap(),
            CliCommand::PrintData
        );
    }

    #[test]
    fn bad_arguments_are_errors() {
        let err = parse_args(args(&["--data"])).unwrap_err();
        assert_eq!(err.to_string(), "--data requires a value");

        let err = parse_args(args(&["--theme", "solar"])).unwrap_err();
        assert!(err.to_string().starts_with("unknown theme: solar"));

        let err = parse_args(args(&["--repo"])).unwrap_err();
        assert_eq!(err.to_string(), "unsupported argument: --repo");
    }
}
