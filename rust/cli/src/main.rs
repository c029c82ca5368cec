use std::io;

fn main() {
    twentyone_cli::logging::init_logging();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();

    let code = twentyone_cli::run(std::env::args(), &mut input, &mut out, &mut err);
    std::process::exit(code);
}
