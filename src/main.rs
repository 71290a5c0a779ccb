//! Gobang GUI
//!
//! A two-player five-in-a-row board game with regret/undo-regret support.

use gobang::ui::GobangApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([760.0, 640.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(|cc| Ok(Box::new(GobangApp::new(cc)))),
    )
}
