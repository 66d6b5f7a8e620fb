use anyhow::{bail, Context, Result};
use sum_substrings::constants::EXIT_FAILED_CHECK;
use sum_substrings::RuleSet;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Command {
    Version,
    Usage,
    Check(CheckArgs),
}

#[derive(Debug, Default, PartialEq)]
struct CheckArgs {
    rules_path: PathBuf,
    /// Texts to check; empty means read standard input
    texts: Vec<String>,
    bleed: bool,
    no_plain_digits: bool,
    report: bool,
}

impl CheckArgs {
    /// Apply command-line flags on top of the options from the rules file
    fn apply(&self, rules: &mut RuleSet) {
        if self.bleed {
            rules.options.allow_bleeding = true;
        }
        if self.no_plain_digits {
            rules.options.sum_plain_digits = false;
        }
    }
}

/// Parse arguments, excluding the program name
fn parse_args(args: &[String]) -> Result<Command> {
    let Some(first) = args.first() else {
        return Ok(Command::Usage);
    };
    if first == "--version" || first == "-v" {
        return Ok(Command::Version);
    }
    if first.starts_with("--") {
        bail!("Unknown option: {}", first);
    }

    let mut check = CheckArgs {
        rules_path: PathBuf::from(first),
        ..CheckArgs::default()
    };

    for arg in &args[1..] {
        match arg.as_str() {
            "--bleed" => check.bleed = true,
            "--no-plain-digits" => check.no_plain_digits = true,
            "--report" => check.report = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            _ => check.texts.push(arg.clone()),
        }
    }

    Ok(Command::Check(check))
}

fn read_lines<R: BufRead>(input: R) -> Result<Vec<String>> {
    input
        .lines()
        .map(|line| line.context("Failed to read standard input"))
        .collect()
}

/// Check each text and write one verdict (or JSON report) per text.
///
/// Returns the number of texts that failed.
fn run_checks<W: Write>(rules: &RuleSet, texts: &[String], report: bool, out: &mut W) -> Result<usize> {
    let mut failures = 0;

    for text in texts {
        let result = rules.check(text);
        if !result.is_match() {
            failures += 1;
        }

        if report {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        } else {
            let verdict = if result.is_match() { "PASS" } else { "FAIL" };
            writeln!(out, "{}\t{}", verdict, text)?;
        }
    }

    Ok(failures)
}

fn print_usage(program: &str) {
    println!("sum-substrings v{}", sum_substrings::VERSION);
    println!("\nUsage:");
    println!("  {} <RULES.json> [TEXT ...] [--bleed] [--no-plain-digits] [--report]", program);
    println!("  {} --version", program);
    println!("\nWith no TEXT arguments, each line of standard input is checked.");
    println!("\nOptions:");
    println!("  --bleed              Let required substrings be cut short by the end of the text");
    println!("  --no-plain-digits    Only configured tokens contribute to the sum");
    println!("  --report             Print the full match report as JSON");
    println!("  --version, -v        Show version information");
}

// Simple CLI without clap
fn main() -> Result<()> {
    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("sum-substrings");

    let check = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(Command::Version) => {
            println!("sum-substrings v{}", sum_substrings::VERSION);
            return Ok(());
        }
        Ok(Command::Usage) => {
            print_usage(program);
            return Ok(());
        }
        Ok(Command::Check(check)) => check,
        Err(e) => {
            print_usage(program);
            return Err(e);
        }
    };

    let mut rules = RuleSet::load(&check.rules_path)
        .with_context(|| format!("Failed to load rules from {}", check.rules_path.display()))?;
    check.apply(&mut rules);

    let texts = if check.texts.is_empty() {
        read_lines(std::io::stdin().lock())?
    } else {
        check.texts.clone()
    };

    info!("Checking {} text(s) against {} required substrings", texts.len(), rules.required.len());

    let failures = run_checks(&rules, &texts, check.report, &mut std::io::stdout().lock())?;

    if failures > 0 {
        info!("{} of {} text(s) failed", failures, texts.len());
        std::process::exit(EXIT_FAILED_CHECK);
    }

    Ok(())
}
