use std::time::{SystemTime, UNIX_EPOCH};

use clarg::{ArgumentParser, Printer, UserInterface};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{options, ConfigError, GenerationConfig, FORMAT, HELP};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Run `gentest` over the Cli `tokens` (excluding the program name).
///
/// Returns `Err(code)` when the program should exit immediately: `0` after the help message, `1` after a failure.
pub fn run(program: &str, tokens: &[&str], user_interface: &impl UserInterface) -> Result<(), i32> {
    let arguments = ArgumentParser::new(program)
        .expect(FORMAT)
        .parse_tokens(tokens);
    let printer = Printer::terminal(program, options());

    if HELP.is_present(&arguments) {
        printer.print_usage(user_interface);
        return Err(0);
    }

    if arguments.has_errors() {
        for error in arguments.errors() {
            user_interface.print_error(format!("Error: {error}"));
        }

        printer.print_usage(user_interface);
        return Err(1);
    }

    let config = match GenerationConfig::from_arguments(&arguments) {
        Ok(config) => config,
        Err(error) => {
            user_interface.print_error(config_message(&error));
            printer.print_usage(user_interface);
            return Err(1);
        }
    };

    if config.verbose {
        for line in config.describe() {
            user_interface.print(line);
        }
    }

    let request = config.request().map_err(|error| {
        user_interface.print_error(format!("Error: {error}"));
        1
    })?;
    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(clock_seed));

    request
        .write_to(&config.output, config.samples, &mut rng)
        .map_err(|error| {
            user_interface.print_error(format!("Error: {error}"));
            1
        })
}

fn config_message(error: &ConfigError) -> String {
    match error {
        ConfigError::MissingSamples => error.to_string(),
        ConfigError::InvalidValue(_) => format!("Error: {error}"),
    }
}

fn clock_seed() -> u64 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Seeding from the clock: {seed}.");
    }

    seed
}
