fn main() {
    if let Err(err) = rb_rank::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
