//! Doclint CLI binary entry point.
//! Resolves effective settings, runs validation, prints results.

use clap::Parser;
use doclint::cli::Cli;
use doclint::{config, output, utils, validate};

fn main() {
    let cli = Cli::parse();

    if !cli.path.exists() {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!("Path not found: {}", cli.path.display())
        );
        std::process::exit(1);
    }

    let eff = config::resolve_effective(
        &cli.path,
        cli.format.as_deref(),
        if cli.fix { Some(true) } else { None },
        if cli.dry_run { Some(true) } else { None },
        if cli.strict { Some(true) } else { None },
    );

    if eff.dry_run && eff.format != "json" {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "Dry run: no files will be modified."
        );
    }

    let result = validate::run_validate(
        &cli.path,
        validate::Options {
            fix: eff.fix,
            dry_run: eff.dry_run,
        },
    );
    output::print_result(&result, &eff.format);

    if result.error_count() > 0 || (eff.strict && result.warning_count() > 0) {
        std::process::exit(1);
    }
}
