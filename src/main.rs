use anyhow::Result;
use clap::Parser;

use git_release::config;
use git_release::git::Git2Repository;
use git_release::project::{DiskStore, ProjectFiles};
use git_release::release::{run_release, ReleaseOutcome};
use git_release::ui;
use git_release::version::{Part, Version};

#[derive(clap::Parser)]
#[command(
    name = "git-release",
    about = "Bump the project version, commit the change and tag the release"
)]
struct Args {
    #[arg(long, value_name = "PART", help = "Version component to bump: major, minor or patch")]
    part: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'C', long, default_value = ".", help = "Project directory to operate in")]
    dir: String,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp
            || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            e.exit()
        }
        Err(e) => {
            // Unknown flags or malformed arguments are a usage error with
            // exit status 1, not clap's default status 2.
            ui::display_error(&e.to_string());
            ui::display_usage(read_current_version(None, ".").as_ref());
            std::process::exit(1);
        }
    };

    if args.version {
        println!("git-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Validate the requested increment kind before touching any state
    let part: Part = match args.part.as_deref() {
        Some(raw) => match raw.parse() {
            Ok(part) => part,
            Err(e) => {
                ui::display_error(&format!("{}", e));
                ui::display_usage(read_current_version(args.config.as_deref(), &args.dir).as_ref());
                std::process::exit(1);
            }
        },
        None => {
            ui::display_usage(read_current_version(args.config.as_deref(), &args.dir).as_ref());
            std::process::exit(1);
        }
    };

    // Initialize collaborators
    let repo = match Git2Repository::open(&args.dir) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("{}", e));
            std::process::exit(1);
        }
    };

    let root = match repo.workdir() {
        Ok(root) => root,
        Err(e) => {
            ui::display_error(&format!("{}", e));
            std::process::exit(1);
        }
    };

    let files = ProjectFiles::new(root, &config.files, DiskStore);

    match run_release(part, &config, &files, &repo, ui::confirm_release) {
        Ok(ReleaseOutcome::Completed(summary)) => {
            ui::display_success(&format!(
                "Released version {} (was {}), tagged as {}",
                summary.released, summary.previous, summary.tag
            ));
            ui::display_push_reminder(&config.release.push_remote);
            Ok(())
        }
        Ok(ReleaseOutcome::Cancelled) => {
            // A declined confirmation is a deliberate choice, not a failure
            ui::display_status("Release cancelled.");
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}

/// Best-effort read of the current version for the usage screen.
fn read_current_version(config_path: Option<&str>, dir: &str) -> Option<Version> {
    let config = config::load_config(config_path).ok()?;
    let repo = Git2Repository::open(dir).ok()?;
    let root = repo.workdir().ok()?;
    let files = ProjectFiles::new(root, &config.files, DiskStore);
    files.read_version().ok()
}
