use crate::app::gui::Gui;
use crate::app::run::App;
use crate::breed_classifier::impl_fake::BreedClassifierFake;
use crate::breed_classifier::impl_http::BreedClassifierHttp;
use crate::breed_classifier::interface::BreedClassifier;
use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_file_picker::impl_rfd::FilePickerRfd;
use crate::device_preview::impl_memory::PreviewStoreMemory;
use crate::device_speech::impl_console::SpeechSynthConsole;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

mod app;
mod breed_classifier;
mod capture;
mod config;
mod device_camera;
mod device_file_picker;
mod device_preview;
mod device_speech;
mod library;
mod locale;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let demo_mode = std::env::args().any(|arg| arg == "--demo");
    let classifier: Arc<dyn BreedClassifier + Send + Sync> = if demo_mode {
        let _ = logger.info("Demo mode: using the fake classifier");
        Arc::new(BreedClassifierFake::new(logger.clone()))
    } else {
        let _ = logger.info(&format!(
            "Prediction endpoint: {}",
            config.prediction_base_url
        ));
        Arc::new(
            BreedClassifierHttp::new(config.prediction_base_url.clone(), logger.clone())
                .map_err(|e| -> Box<dyn std::error::Error> { e })?,
        )
    };

    let app = App::new(
        config,
        logger.clone(),
        Arc::new(FilePickerRfd::new(logger.clone())),
        Arc::new(DeviceCameraFake::new(logger.clone())),
        Arc::new(PreviewStoreMemory::new(logger.clone())),
        Arc::new(SpeechSynthConsole::new(logger.clone())),
        classifier,
    );

    let worker = app.clone();
    std::thread::spawn(move || worker.run());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 860.0])
            .with_min_inner_size([560.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cattle Classification",
        options,
        Box::new(move |cc| Box::new(Gui::new(cc, app))),
    )?;

    Ok(())
}
