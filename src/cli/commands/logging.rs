use clap::{Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)")
            .global(true)
            .action(ArgAction::Count),
    )
}
