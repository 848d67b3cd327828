fn main() {
    if let Err(e) = mediagrab_lib::run() {
        eprintln!("mediagrab: {:#}", e);
        std::process::exit(1);
    }
}
