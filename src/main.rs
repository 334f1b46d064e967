use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = contacts::run() {
        eprintln!("error: {err:#}");
        return ExitCode::from(contacts::exit_code(&err));
    }
    ExitCode::SUCCESS
}
