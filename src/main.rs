fn main() {
    make_env::app::cli::run();
}
