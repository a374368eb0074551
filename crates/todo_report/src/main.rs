use clap::error::ErrorKind;
use clap::{Arg, Command};
use env_logger::Env;

use todo_report::{run, AppConfig};

fn main() {
    let matches = Command::new("todo_report")
        .version("0.1.0")
        .about("Collects TODO/FIXME/BUG/DANGER/TODOCS annotations into TODO.md and links it from README.md")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .try_get_matches()
        .unwrap_or_else(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        });

    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{:#}", err);
            std::process::exit(1);
        }
    };
    log::debug!("{:?}", config);

    if let Err(err) = run(&config) {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

/// All diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
