mod app;
mod io;

use app::DesktopApp;
use job_board_common::{Schema, SortMode};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Job Board Viewer",
        options,
        Box::new(|_cc| Box::new(DesktopApp::new(Schema::Auto, SortMode::Unsorted))),
    )
}
