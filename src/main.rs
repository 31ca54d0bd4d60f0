fn main() {
    std::process::exit(jobring::app::startup::run());
}
