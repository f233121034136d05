fn main() {
    if let Err(e) = wordsift_lib::run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
