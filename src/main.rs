use webblocker::error::BlockerError;

fn main() {
    if let Err(e) = webblocker::cli::run() {
        eprintln!("Error: {e:#}");
        let code = e
            .chain()
            .find_map(|c| c.downcast_ref::<BlockerError>())
            .map_or(1, BlockerError::exit_code);
        std::process::exit(code);
    }
}
