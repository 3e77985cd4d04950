//! licenseme CLI
//!
//! Usage:
//!   licenseme [OPTIONS] [LICENSE]
//!
//! Generates a filled-in license on stdout, or into a file with
//! `-o/--output`. Missing fields are prompted for on a terminal and filled
//! from defaults or placeholders otherwise.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Parser;

use licenseme::{registry, render, resolve};
use licenseme::{Config, Context, SystemIdentity, TerminalPrompter};

#[derive(Parser)]
#[command(name = "licenseme")]
#[command(about = "Generate popular open source licenses from SPDX templates")]
#[command(version)]
struct Cli {
    /// License identifier or alias (e.g. MIT, Apache-2.0)
    license: Option<String>,

    /// Write the generated license to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    force: bool,

    /// List supported licenses and exit
    #[arg(long)]
    list: bool,

    /// Skip prompts by using default values wherever possible
    #[arg(long)]
    defaults: bool,

    /// Config file with identity defaults (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the copyright year
    #[arg(long)]
    year: Option<String>,

    /// Override the copyright holder/author
    #[arg(long)]
    holder: Option<String>,

    /// Override owner fields (e.g. BSD)
    #[arg(long)]
    owner: Option<String>,

    /// Override contact email
    #[arg(long)]
    email: Option<String>,

    /// Override the program name for GPL-style notices
    #[arg(long)]
    program_name: Option<String>,

    /// Override the one-line program description
    #[arg(long)]
    program_description: Option<String>,

    /// Override the project URL
    #[arg(long)]
    program_url: Option<String>,

    /// Override the project name used in preambles
    #[arg(long)]
    project_name: Option<String>,

    /// Set an arbitrary field (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        print_license_list();
        return Ok(());
    }

    let Some(identifier) = cli.license.as_deref() else {
        bail!("No license specified. Use --list to see available options.");
    };
    let spec = registry::resolve(identifier)?;

    let batch = cli.defaults || !io::stdin().is_terminal();
    let overrides = build_overrides(&cli)?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => Config::default(),
    };
    let identity = SystemIdentity::new(config);

    let context = if batch {
        resolve::collect_fields(spec, &overrides, &identity, None)
    } else {
        let mut prompter = TerminalPrompter;
        resolve::collect_fields(spec, &overrides, &identity, Some(&mut prompter))
    };

    let text = render::render(spec, &context).context("Failed to render license")?;

    match &cli.output {
        Some(path) => {
            if path.exists() && !cli.force {
                bail!(
                    "Refusing to overwrite existing file: {}. Use --force to override.",
                    path.display()
                );
            }
            fs::write(path, &text)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn print_license_list() {
    let specs = registry::all();
    let width = specs.iter().map(|spec| spec.key.len()).max().unwrap_or(0);
    for spec in specs {
        let mut aliases: Vec<&str> = spec
            .aliases
            .iter()
            .copied()
            .filter(|alias| *alias != spec.key)
            .collect();
        aliases.sort_unstable();
        aliases.dedup();
        let alias_text = if aliases.is_empty() {
            String::new()
        } else {
            format!(" (aliases: {})", aliases.join(", "))
        };
        println!("{:width$} - {}{}", spec.key, spec.name, alias_text);
    }
}

fn build_overrides(cli: &Cli) -> Result<Context> {
    let mut overrides = Context::new();
    let mut push = |value: &Option<String>, keys: &[&str]| {
        if let Some(value) = value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                for key in keys {
                    overrides.insert((*key).to_string(), trimmed.to_string());
                }
            }
        }
    };

    push(&cli.year, &["year"]);
    // --holder seeds both holder spellings so BSD-style owner fields
    // pick it up; an explicit --owner then takes the owner slot back
    push(&cli.holder, &["copyright_holder", "owner"]);
    push(&cli.owner, &["owner"]);
    push(&cli.email, &["email"]);
    push(&cli.program_name, &["program_name"]);
    push(&cli.program_description, &["program_description"]);
    push(&cli.program_url, &["program_url"]);
    push(&cli.project_name, &["project_name"]);

    for assignment in &cli.set {
        let (key, value) = resolve::parse_override(assignment)?;
        overrides.insert(key, value);
    }
    Ok(overrides)
}
