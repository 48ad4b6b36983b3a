use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = gq::cli::run() {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
