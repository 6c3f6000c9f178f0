#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    // Set up logging, controlled through RUST_LOG
    env_logger::init();

    // Run the editor; export dialogs are spawned onto the tokio runtime
    code_block_editor::run_app()
}
