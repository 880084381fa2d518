// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Pagewire CLI
//!
//! Mounts the page script on an HTML file and replays recorded interactions
//! against it, or runs single inputs through the form rules.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};

use pagewire::{sanitize_input, FieldKind, Page, ReplayStep, ScriptConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pagewire=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "run" => match RunOptions::parse(&args[2..]) {
            Ok(opts) => run_page(opts).await,
            Err(e) => Err(e),
        },
        "sanitize" => {
            if args.len() < 3 {
                eprintln!("Usage: pagewire sanitize <text>");
                return ExitCode::from(1);
            }
            println!("{}", sanitize_input(&args[2..].join(" ")));
            Ok(())
        }
        "check" => {
            if args.len() < 4 {
                eprintln!("Usage: pagewire check <field> <value>");
                return ExitCode::from(1);
            }
            check_field(&args[2], &args[3..].join(" "))
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-v" | "version" => {
            println!("pagewire {}", pagewire::VERSION);
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"Pagewire - page enhancement script on a pure Rust DOM

USAGE:
    pagewire <COMMAND> [OPTIONS]

COMMANDS:
    run <page.html> [events.json]   Mount the script and replay events
        --config <file>             JSON overrides for ids, classes, timings
        --realtime                  Sleep through waits instead of skipping
        --html                      Print the final document after the state
    sanitize <text>                 Show what the sanitizer keeps
    check <field> <value>           Validate one value (name, email, subject,
                                    service, message)
    help                            Show this help message
    version                         Show version information

EXAMPLES:
    pagewire run demos/site.html demos/events.json
    pagewire sanitize "<b>Hi</b><script>alert(1)</script>"
    pagewire check email a@b.co
"#
    );
}

#[derive(Debug, Default)]
struct RunOptions {
    page: PathBuf,
    events: Option<PathBuf>,
    config: Option<PathBuf>,
    realtime: bool,
    print_html: bool,
}

impl RunOptions {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut opts = RunOptions::default();
        let mut positional = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => {
                    let path = iter.next().context("--config needs a file")?;
                    opts.config = Some(PathBuf::from(path));
                }
                "--realtime" => opts.realtime = true,
                "--html" => opts.print_html = true,
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                path => positional.push(PathBuf::from(path)),
            }
        }

        let mut positional = positional.into_iter();
        opts.page = positional
            .next()
            .context("Usage: pagewire run <page.html> [events.json]")?;
        opts.events = positional.next();
        if let Some(extra) = positional.next() {
            bail!("Unexpected argument: {}", extra.display());
        }
        Ok(opts)
    }
}

async fn run_page(opts: RunOptions) -> anyhow::Result<()> {
    let config = match &opts.config {
        Some(path) => ScriptConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScriptConfig::default(),
    };

    let html = std::fs::read_to_string(&opts.page)
        .with_context(|| format!("reading {}", opts.page.display()))?;
    let mut page = Page::from_html(&html, config)
        .with_context(|| format!("mounting script on {}", opts.page.display()))?;

    let steps: Vec<ReplayStep> = match &opts.events {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Vec::new(),
    };

    for (n, step) in steps.iter().enumerate() {
        match step {
            ReplayStep::Wait { .. } => {
                let wait = step.wait().unwrap_or_default();
                let fired = if opts.realtime {
                    page.run_for(wait).await
                } else {
                    page.advance(wait)
                };
                tracing::info!(step = n, wait_ms = wait.as_millis() as u64, fired, "Waited");
            }
            ReplayStep::Event(event) => {
                let outcome = page
                    .dispatch(event)
                    .with_context(|| format!("step {} ({})", n, event.kind()))?;
                tracing::info!(
                    step = n,
                    event = event.kind(),
                    handlers = outcome.handlers_run,
                    prevented = outcome.default_prevented,
                    "Dispatched"
                );
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&page.state())?);
    if let Some(submission) = page.last_submission() {
        println!("{}", serde_json::to_string_pretty(submission)?);
    }
    if opts.print_html {
        println!("{}", page.document().outer_html());
    }
    Ok(())
}

fn check_field(field: &str, value: &str) -> anyhow::Result<()> {
    let kind: FieldKind = field.parse()?;
    let sanitized = sanitize_input(value);

    println!("Field:     {}", kind);
    println!("Sanitized: {:?}", sanitized);
    if kind.validate(&sanitized) {
        println!("Result:    valid");
        Ok(())
    } else {
        bail!("{}", kind.error_message())
    }
}
