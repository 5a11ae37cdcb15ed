use std::io;

fn main() {
    // a subscriber already installed by the host is fine
    let _ = bjlite_cli::logging::init_logging();

    let code = bjlite_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
