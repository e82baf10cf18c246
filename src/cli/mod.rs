//! CLI command definitions and handlers

mod dns;
mod rewrite;
mod scan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// siteops - operator toolkit for web app maintenance
///
/// Small one-shot tools: an unhandled-button scanner for JSX/TSX markup,
/// a DNS record diagnostic, and source-tree rewrite helpers.
#[derive(Parser, Debug)]
#[command(name = "siteops")]
#[command(
    version,
    about = "Operator toolkit — scan for unhandled buttons, diagnose DNS records, run one-shot source rewrites",
    long_about = "siteops bundles the maintenance scripts for the site into one binary.\n\n\
Run without a subcommand to scan ./src for <button> elements missing an\n\
onClick handler, grouped into triage categories.",
    after_help = "\
Examples:
  siteops                                      Scan ./src for unhandled buttons
  siteops scan web/src                         Scan a specific source tree
  siteops dns example.com                      Check DNS records for a domain
  siteops fix-imports --from '@/lib/email' --to '@/lib/email-service'
  siteops inject-init --import \"import './init';\" --call 'setup();' --dry-run"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a source tree for <button> elements without an onClick handler
    #[command(after_help = "\
Examples:
  siteops scan                                 Scan ./src
  siteops scan web/src                         Scan another tree
A missing root or an empty match set is a normal zero-finding run.")]
    Scan {
        /// Root directory to scan
        #[arg(default_value = "src")]
        root: PathBuf,
    },

    /// Query A/AAAA/CNAME/MX/TXT/NS records for a domain over DNS-over-HTTPS
    #[command(after_help = "\
Examples:
  siteops dns example.com                      Full record rundown
Warns when the apex has no address record or www does not resolve.")]
    Dns {
        /// Domain to diagnose (apex, without scheme)
        domain: String,
    },

    /// Rewrite import statements matching an exact module specifier
    #[command(name = "fix-imports", after_help = "\
Examples:
  siteops fix-imports --from 'react-hot-toast' --to 'sonner'
  siteops fix-imports --from '@/lib/email' --to '@/lib/email-service' --dry-run
Running the same rewrite twice produces no further change.")]
    FixImports {
        /// Old module specifier (matched exactly, both quote styles)
        #[arg(long)]
        from: String,

        /// New module specifier
        #[arg(long)]
        to: String,

        /// Root directory to rewrite under
        #[arg(long, default_value = "src")]
        root: PathBuf,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Inject an import line and an initialization call after each file's imports
    #[command(name = "inject-init", after_help = "\
Examples:
  siteops inject-init --import \"import { initMonitoring } from '@/lib/monitoring';\" \\
                      --call 'initMonitoring();' --containing 'createRoot('
Files already carrying the call line are left untouched.")]
    InjectInit {
        /// Import line to ensure exists
        #[arg(long)]
        import: String,

        /// Initialization call line to inject after the imports
        #[arg(long)]
        call: String,

        /// Only touch files containing this substring
        #[arg(long)]
        containing: Option<String>,

        /// Root directory to rewrite under
        #[arg(long, default_value = "src")]
        root: PathBuf,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Scan { root }) => scan::run(&root),

        Some(Commands::Dns { domain }) => dns::run(&domain),

        Some(Commands::FixImports {
            from,
            to,
            root,
            dry_run,
        }) => rewrite::run_fix_imports(&root, &from, &to, dry_run),

        Some(Commands::InjectInit {
            import,
            call,
            containing,
            root,
            dry_run,
        }) => rewrite::run_inject_init(&root, &import, &call, containing.as_deref(), dry_run),

        Some(Commands::Version) => {
            println!("siteops {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        // Default: scan the conventional source tree
        None => scan::run(std::path::Path::new("src")),
    }
}
