use std::process::ExitCode;

fn main() -> ExitCode {
    tierly_cli::run()
}
