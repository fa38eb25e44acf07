use std::io;

fn main() {
    pokersim_cli::logging::init_logging();
    let code = pokersim_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
