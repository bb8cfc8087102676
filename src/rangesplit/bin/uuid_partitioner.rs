fn main() {
    if let Err(e) = rangesplit::cli::run_uuid() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
