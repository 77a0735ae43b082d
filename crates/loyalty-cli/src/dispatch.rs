use loyalty_client::commands;
use loyalty_client::{ClientResult, SuccessEnvelope};

use crate::cli::Cli;

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    commands::analyze::run(&cli.input, &cli.percentile_file, &cli.output)
}
