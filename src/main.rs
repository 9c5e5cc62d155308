use std::process::ExitCode;

fn main() -> ExitCode {
    docmark::cli::run()
}
