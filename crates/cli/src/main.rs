use std::process::ExitCode;

fn main() -> ExitCode {
    siza_cli::run()
}
