use std::path::{Path, PathBuf};
use std::process;

use tracing::{error, info};

use crate::comparison::Comparison;
use crate::file::{load_config, RunConfig};

/// Where the plot goes when no config file is given.
pub const DEFAULT_OUTPUT: &str = "./heat_capacity.html";

/// Rows printed in the terminal summary.
const SUMMARY_ROWS: usize = 10;

#[derive(Debug, PartialEq)]
pub struct Config {
    pub config_path: Option<PathBuf>,
    pub legacy_debye: bool,
}

impl Config {
    /// Parses `args` (including the program name) without running anything.
    ///
    /// `-h` and `-v` print and exit the process.
    pub fn build(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config_path = None;
        let mut legacy_debye = false;

        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--version" | "-v" => {
                    print_version();
                    process::exit(0);
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--legacy-debye" => legacy_debye = true,
                flag if flag.starts_with('-') => {
                    return Err(format!("unknown option `{flag}`").into());
                }
                path => {
                    if config_path.is_some() {
                        return Err(
                            "too many arguments, expecting at most one config path, such as `heatcapacity files/reference.toml`"
                                .into(),
                        );
                    }
                    config_path = Some(PathBuf::from(path));
                }
            }
        }

        Ok(Config {
            config_path,
            legacy_debye,
        })
    }

    pub fn run(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
        let cli = Config::build(args)?;

        let mut run_config = match &cli.config_path {
            Some(path) => {
                let cwd = std::env::current_dir()?;
                let full_path = cwd.join(path);
                info!(path = %full_path.display(), "config path");
                load_config(&full_path)?
            }
            None => {
                info!("no config path given, using the reference configuration");
                RunConfig::default()
            }
        };
        if cli.legacy_debye {
            run_config.legacy_debye = true;
        }

        let comparison = Comparison::compute(&run_config)?;
        println!();
        print!("{}", comparison.summary(SUMMARY_ROWS));
        println!();

        let output_html_path = output_html_path(cli.config_path.as_deref());
        info!(path = %output_html_path.display(), "generating HTML plot");
        if let Err(e) = crate::plot::generate_html_plot(&comparison, &output_html_path) {
            error!("error generating HTML plot: {e}");
            return Err(e.into());
        }
        println!("Plot written to: {}", output_html_path.display());

        Ok(cli)
    }
}

/// `foo.toml` becomes `foo.html` next to it; without a config path the
/// plot goes to [`DEFAULT_OUTPUT`].
pub fn output_html_path(config_path: Option<&Path>) -> PathBuf {
    let Some(path) = config_path else {
        return PathBuf::from(DEFAULT_OUTPUT);
    };
    let output = path.with_extension("html");
    // Remove the UNC prefix on Windows if present
    let display = output.to_string_lossy();
    if cfg!(target_os = "windows") && display.starts_with(r"\\?\") {
        return PathBuf::from(&display[4..]);
    }
    output
}

pub fn print_version() {
    println!("heatcapacity {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_error(error: &str) {
    const RED: &str = "\x1b[31m";
    const RESET: &str = "\x1b[0m";
    println!("{}Problem running heatcapacity: {error}{}", RED, RESET);
}

pub fn print_help() {
    // ANSI color codes
    const BOLD: &str = "\x1b[1m";
    const CYAN: &str = "\x1b[36m";
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    println!("🧊 Heat capacity models: Dulong-Petit, Einstein and Debye{}", RESET);
    println!();
    println!("{}{}VERSION:{}", BOLD, YELLOW, RESET);
    println!("    {}{}{}", GREEN, env!("CARGO_PKG_VERSION"), RESET);
    println!();
    println!("{}{}USAGE:{}", BOLD, YELLOW, RESET);
    println!("    {} heatcapacity [CONFIG_PATH] [--legacy-debye]{}", GREEN, RESET);
    println!();
    println!("     CONFIG_PATH: optional path to a toml config file");
    println!();
    println!("     The four models are evaluated and an html plot is written next to");
    println!("     the config file, or to {} without one.", DEFAULT_OUTPUT);
    println!();
    println!("{}{}OPTIONS:{}", BOLD, YELLOW, RESET);
    println!(
        "    {}  --legacy-debye{}   Evaluate the Debye model at the first temperature only",
        GREEN, RESET
    );
    println!(
        "    {}  -v, --version{}    Print version information",
        GREEN, RESET
    );
    println!(
        "    {}  -h, --help{}       Print help information",
        GREEN, RESET
    );
    println!();
    println!("{}{}EXAMPLES:{}", BOLD, YELLOW, RESET);
    println!("    {} # Reference run (DT = ET = 105 K, 1 K to 500 K){}", CYAN, RESET);
    println!("    {} heatcapacity{}", GREEN, RESET);
    println!("    {} # Custom parameters (Relative path){}", CYAN, RESET);
    println!("    {} heatcapacity files/lead.toml{}", GREEN, RESET);
    println!();
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn setup_test_dir(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push("heatcapacity_tests");
        path.push(name);
        path.push(format!(
            "{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_function() {
        let test_dir = setup_test_dir("test_run_function");
        let toml_path = test_dir.join("test_cli_run.toml");
        fs::copy("files/lead.toml", &toml_path).unwrap();

        let cli = Config::run(&args(&["program_name", toml_path.to_str().unwrap()])).unwrap();
        assert!(!cli.legacy_debye);
        assert!(test_dir.join("test_cli_run.html").exists());
    }

    #[test]
    fn test_build_without_arguments_uses_reference_run() {
        let cli = Config::build(&args(&["program_name"])).unwrap();
        assert_eq!(
            cli,
            Config {
                config_path: None,
                legacy_debye: false
            }
        );
    }

    #[test]
    fn test_build_legacy_flag() {
        let cli = Config::build(&args(&["program_name", "--legacy-debye", "a.toml"])).unwrap();
        assert!(cli.legacy_debye);
        assert_eq!(cli.config_path, Some(PathBuf::from("a.toml")));
    }

    #[test]
    fn test_build_too_many_paths() {
        let result = Config::build(&args(&["program_name", "a.toml", "b.toml"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_build_unknown_flag() {
        let err = Config::build(&args(&["program_name", "--fast"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown option `--fast`");
    }

    #[test]
    fn test_run_missing_config_file() {
        let result = Config::run(&args(&["program_name", "files/does_not_exist.toml"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_output_html_path() {
        assert_eq!(output_html_path(None), PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(
            output_html_path(Some(Path::new("files/lead.toml"))),
            PathBuf::from("files/lead.html")
        );
        assert_eq!(
            output_html_path(Some(Path::new("run"))),
            PathBuf::from("run.html")
        );
    }

    #[test]
    fn test_version_output_format() {
        let version = env!("CARGO_PKG_VERSION");
        let parts: Vec<&str> = version.split('.').collect();
        assert_eq!(parts.len(), 3, "Version should be in X.Y.Z format");
    }
}
