//! `pwd-tool`: generate a password, then check one typed by the user.

use clap::Parser;
use pwd_tool::{StrengthChecker, StrengthReport, generate_password};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const RULE: &str = "--------------------------------------------------";

#[derive(Parser, Debug)]
#[command(version, about = "Password Security Tool")]
struct Args {
    /// Length of the generated password
    #[arg(short, long, value_name = "chars", default_value_t = 16)]
    length: usize,

    /// Skip generator mode
    #[arg(long, default_value_t = false)]
    no_generate: bool,

    /// Password to check instead of prompting for one
    #[arg(short, long, value_name = "password")]
    password: Option<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Error, Debug)]
enum ToolError {
    #[error("Failed to read password: {0}")]
    Prompt(#[from] std::io::Error),
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &StrengthReport) {
    let rating = report.rating();
    println!("Rating: {} ({})", rating, rating.description());
    println!("\nDetailed Feedback:");
    for line in &report.feedback {
        println!("  {}", line);
    }
}

fn run(args: Args) -> Result<(), ToolError> {
    let checker = StrengthChecker::default();

    println!("{}", RULE);
    println!("       Password Security Tool ");
    println!("{}", RULE);

    if !args.no_generate {
        let generated = generate_password(args.length);
        let length = generated.expose_secret().chars().count();
        println!("\n[GENERATOR MODE]");
        println!("Generated {}-character Password: \n>> {}", length, generated.expose_secret());

        let report = checker.check(&generated);
        println!("Generated Password Strength: {} ({})\n", report.rating(), report.rating().description());
        println!("{}", RULE);
    }

    let password = match args.password {
        Some(password) => SecretString::new(password.into()),
        None => SecretString::new(
            rpassword::prompt_password("Enter a password to check its strength: ")?.into(),
        ),
    };

    let report = checker.check(&password);
    tracing::info!(score = report.score().value(), "checked user password");

    println!("\n[CHECKER RESULTS]");
    print_report(&report);

    Ok(())
}

fn main() -> Result<(), ToolError> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
