use scratchpad::{parse_launch_args, ScratchpadApp, Settings};

/// Launch the native egui sheet.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = parse_launch_args(std::env::args().skip(1));
    let settings = match &options.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("Failed to load settings: {err}");
                std::process::exit(2);
            }
        },
        None => Settings::default(),
    };

    let app = match ScratchpadApp::new(&settings, options.tool) {
        Ok(app) => app.with_debug_overlay(options.debug),
        Err(err) => {
            eprintln!("Invalid settings: {err}");
            std::process::exit(2);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Scratchpad")
            .with_inner_size([1200.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Scratchpad",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
