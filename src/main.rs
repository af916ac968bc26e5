use clap::Parser;
use complexity_map::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version come through here too
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = cli::init_logging(cli.verbosity) {
        eprintln!("Warning: {e}");
    }

    ExitCode::from(cli::run(cli))
}
