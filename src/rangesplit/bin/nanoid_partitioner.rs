fn main() {
    if let Err(e) = rangesplit::cli::run_nanoid() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
