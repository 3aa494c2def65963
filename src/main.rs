fn main() -> Result<(), eframe::Error> {
    // RUST_LOG=flow_vision=debug shows gesture transitions and graph edits
    env_logger::init();

    flow_vision::run_app()
}
