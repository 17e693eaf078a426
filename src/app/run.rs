use crate::app::core::{init, transition, Effect, Model, Msg};
use crate::breed_classifier::interface::BreedClassifier;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_file_picker::interface::FilePicker;
use crate::device_preview::interface::PreviewStore;
use crate::device_speech::interface::SpeechSynth;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub model: Arc<Mutex<Model>>,
    pub file_picker: Arc<dyn FilePicker + Send + Sync>,
    pub camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub previews: Arc<dyn PreviewStore + Send + Sync>,
    pub speech: Arc<dyn SpeechSynth + Send + Sync>,
    pub classifier: Arc<dyn BreedClassifier + Send + Sync>,
    msg_tx: Sender<Msg>,
    msg_rx: Arc<Mutex<Receiver<Msg>>>,
    repaint: Arc<Mutex<Option<egui::Context>>>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
        camera: Arc<dyn DeviceCamera + Send + Sync>,
        previews: Arc<dyn PreviewStore + Send + Sync>,
        speech: Arc<dyn SpeechSynth + Send + Sync>,
        classifier: Arc<dyn BreedClassifier + Send + Sync>,
    ) -> Self {
        let (msg_tx, msg_rx) = channel();
        let (initial, _) = init(&config);

        Self {
            config,
            logger,
            model: Arc::new(Mutex::new(initial)),
            file_picker,
            camera,
            previews,
            speech,
            classifier,
            msg_tx,
            msg_rx: Arc::new(Mutex::new(msg_rx)),
            repaint: Arc::new(Mutex::new(None)),
        }
    }

    pub fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    /// Pops one pending message without blocking. Lets tests drive effects
    /// synchronously and inspect what they sent back.
    #[cfg(test)]
    pub fn try_recv(&self) -> Option<Msg> {
        self.msg_rx.lock().unwrap().try_recv().ok()
    }

    /// The GUI registers its context here so model updates trigger a frame.
    pub fn attach_repaint(&self, ctx: egui::Context) {
        *self.repaint.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.repaint.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let runner = self.clone();
            std::thread::spawn(move || runner.run_effect(effect));
        }
    }

    /// Drives the state machine until every message sender is gone.
    pub fn run(&self) {
        let (initial, effects) = init(&self.config);
        *self.model.lock().unwrap() = initial.clone();
        self.spawn_effects(effects);

        let mut current = initial;

        loop {
            let msg = match self.msg_rx.lock().unwrap().recv() {
                Ok(msg) => msg,
                Err(_) => return,
            };

            let _ = self.logger.info(&format!(
                "\nold model:\n\t{:?}\n\nmsg:\n\t{:?}",
                current, msg
            ));

            let (next, effects) = transition(&self.config, current, msg);

            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                next, effects
            ));

            current = next.clone();
            *self.model.lock().unwrap() = next;

            self.request_repaint();
            self.spawn_effects(effects);
        }
    }
}
