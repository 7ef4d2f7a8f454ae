use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    closet_cli::run()
}
