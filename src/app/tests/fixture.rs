use crate::app::core::{
    CaptureSource, Flow, LoadingModel, Model, ReportModel, SelectedImage, UploadModel,
};
use crate::breed_classifier::interface::BreedReport;
use crate::capture::{CandidateImage, ImageKind};
use crate::config::Config;
use crate::device_preview::interface::PreviewHandle;
use crate::locale::Locale;
use std::time::Instant;

pub fn config() -> Config {
    Config::default()
}

pub fn png_candidate() -> CandidateImage {
    CandidateImage::new(
        "cow.png",
        vec![
            0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
        ],
    )
}

pub fn jpeg_candidate() -> CandidateImage {
    CandidateImage::new("cow.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
}

pub fn text_candidate() -> CandidateImage {
    CandidateImage::new("notes.txt", b"not an image".to_vec())
}

pub fn selected(handle: u64) -> SelectedImage {
    SelectedImage {
        file_name: "cow.png".to_string(),
        kind: ImageKind::Png,
        bytes: png_candidate().bytes,
        preview: PreviewHandle(handle),
    }
}

pub fn holstein() -> BreedReport {
    BreedReport {
        breed: "Holstein".to_string(),
        confidence: 0.92,
        dairy_level: "High".to_string(),
        purpose: "Dairy".to_string(),
        usability_score: 0.8,
        evidence: vec!["large udder".to_string(), "dairy frame".to_string()],
    }
}

pub fn model(flow: Flow) -> Model {
    Model {
        flow,
        locale: Locale::En,
    }
}

pub fn upload_empty() -> Model {
    model(Flow::Upload(UploadModel::default()))
}

pub fn upload_with_selection(handle: u64) -> Model {
    model(Flow::Upload(UploadModel {
        source: CaptureSource::FilePicker,
        selection: Some(selected(handle)),
        notice: None,
    }))
}

pub fn camera_mode() -> Model {
    model(Flow::Upload(UploadModel {
        source: CaptureSource::Camera,
        selection: None,
        notice: None,
    }))
}

pub fn loading(handle: u64) -> Model {
    model(Flow::Loading(LoadingModel {
        selection: selected(handle),
        started: Instant::now(),
    }))
}

pub fn report(handle: u64) -> Model {
    model(Flow::Report(ReportModel {
        report: holstein(),
        selection: selected(handle),
    }))
}

pub fn failure() -> Box<dyn std::error::Error + Send + Sync> {
    "boom".into()
}
