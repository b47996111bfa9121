fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG=debug shows edits, history moves and zoom changes
    env_logger::init();

    // Run the string wave application
    string_wave_lab::run_app()
}
