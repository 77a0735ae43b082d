mod cli;
mod dispatch;
mod logging;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use loyalty_client::ClientError;
use stdout_io::write_stdout_text;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error = ClientError::invalid_argument(&clean_message);
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };

    logging::init_logging();
    let mode = output::mode_for_cli(&cli);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::error!(code = %error.code, "{}", error.message);
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so the usage line in "What to do next" is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::{infer_requested_output_mode, strip_clap_boilerplate};
    use crate::output::OutputMode;

    #[test]
    fn strips_usage_and_more_information_tail() {
        let message = "error: the following required arguments were not provided:\n  <OUTPUT>\n\nUsage: loyalty <INPUT> <PERCENTILE_FILE> <OUTPUT>\n\nFor more information, try '--help'.\n";
        assert_eq!(
            strip_clap_boilerplate(message),
            "error: the following required arguments were not provided:\n  <OUTPUT>"
        );
    }

    #[test]
    fn json_mode_is_inferred_from_raw_args() {
        let args = ["loyalty".to_string(), "--json".to_string()];
        assert_eq!(infer_requested_output_mode(&args), OutputMode::Json);
        assert_eq!(
            infer_requested_output_mode(&["loyalty".to_string()]),
            OutputMode::Text
        );
    }
}
