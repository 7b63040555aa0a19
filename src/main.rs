use std::process::ExitCode;

fn main() -> ExitCode {
    roll_watcher::run()
}
