use std::panic;

use clap::Parser;
use eframe::NativeOptions;

use token_radar::{Cli, run_app};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("token_radar"), my_code_level)
        .init();

    let args = Cli::parse();
    let tuning = match args.feed_tuning() {
        Ok(tuning) => tuning,
        Err(err) => {
            log::error!("Invalid arguments: {err}");
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Token Radar - Discover the next big token"),
        ..Default::default()
    };

    eframe::run_native(
        "Token Radar",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args, tuning)))),
    )
}
