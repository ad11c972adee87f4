//! CLI parse tests.

use super::{Cli, CliCommand, QuickArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn parse_quick(args: &[&str]) -> QuickArgs {
    match parse(args) {
        CliCommand::Quick(q) => q,
        other => panic!("expected Quick, got {other:?}"),
    }
}
