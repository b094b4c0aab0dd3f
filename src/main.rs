//! squadsheet command-line tool
//!
//! Reads a pasted squad list from a file or stdin and writes the color-coded
//! squad sheet.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use squadsheet::{
    HttpLogoFetcher, MalformedLinePolicy, NoLogo, OutputFormat, SquadSheetBuilder,
    DEFAULT_LOGO_HOST,
};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Xlsx,
    Json,
}

#[derive(Parser)]
#[command(version, about = "Generate a color-coded Excel squad sheet from a pasted squad list")]
struct Opts {
    /// Club name, used for the title, the logo lookup and the file name
    #[arg(short, long)]
    club: String,

    /// Squad list file (one player per line: number, name, positions); stdin when omitted or `-`
    roster: Option<PathBuf>,

    /// Output file or directory; a temporary file is created when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not fetch the club logo
    #[arg(long)]
    no_logo: bool,

    /// Base URL of the logo service
    #[arg(long, default_value = DEFAULT_LOGO_HOST)]
    logo_host: String,

    /// Skip lines without a number and a name instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "xlsx")]
    format: Format,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    let roster = read_roster(opts.roster.as_ref())?;

    if roster.trim().is_empty() || opts.club.trim().is_empty() {
        bail!("Please provide both squad list and club name.");
    }

    let policy = if opts.skip_malformed {
        MalformedLinePolicy::Skip
    } else {
        MalformedLinePolicy::Reject
    };
    let builder = SquadSheetBuilder::new().with_malformed_line_policy(policy);
    let builder = if opts.no_logo {
        builder.with_logo_fetcher(NoLogo)
    } else {
        builder.with_logo_fetcher(HttpLogoFetcher::with_base_url(opts.logo_host.as_str()))
    };
    let generator = builder.build()?;

    if let Format::Json = opts.format {
        match &opts.output {
            Some(path) => {
                let file = fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                generator.convert(&roster, &opts.club, OutputFormat::Json, file)?;
            }
            None => generator.convert(&roster, &opts.club, OutputFormat::Json, io::stdout())?,
        }
        return Ok(());
    }

    let sheet = generator.generate(&roster, &opts.club)?;
    let path = match &opts.output {
        Some(path) => sheet.save(path)?,
        None => sheet.save_to_temp_file()?,
    };

    log::info!(
        "{} player(s), logo {}",
        sheet.player_count(),
        if sheet.has_logo() { "embedded" } else { "omitted" }
    );
    println!("{}", path.display());
    Ok(())
}

fn read_roster(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read squad list {}", path.display())),
        _ => {
            let mut roster = String::new();
            io::stdin()
                .read_to_string(&mut roster)
                .context("Failed to read squad list from stdin")?;
            Ok(roster)
        }
    }
}
