use crate::breed_classifier::interface::BreedReport;
use crate::capture::{validate, CandidateImage, ImageKind};
use crate::config::Config;
use crate::device_preview::interface::PreviewHandle;
use crate::locale::Locale;
use std::time::Instant;

/// An image the user has committed to, with its live preview. Exists from
/// the moment a capture is accepted until the cycle resets.
#[derive(Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
    pub preview: PreviewHandle,
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("kind", &self.kind)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .field("preview", &self.preview)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub flow: Flow,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Upload(UploadModel),
    Loading(LoadingModel),
    Report(ReportModel),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadModel {
    pub source: CaptureSource,
    pub selection: Option<SelectedImage>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureSource {
    #[default]
    FilePicker,
    Camera,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadingModel {
    pub selection: SelectedImage,
    pub started: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    pub report: BreedReport,
    pub selection: SelectedImage,
}

/// Local, non-fatal notices shown inline on the upload screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidFileType,
    AnalysisFailed,
    CameraFailed,
}

#[derive(Debug)]
pub enum Msg {
    BrowsePressed,
    FilePicked(Result<Option<CandidateImage>, Box<dyn std::error::Error + Send + Sync>>),
    FileDropped(CandidateImage),
    CameraOpened,
    CameraCancelled,
    CapturePressed,
    FrameCaptured(Result<CandidateImage, Box<dyn std::error::Error + Send + Sync>>),
    PreviewReady(Result<SelectedImage, Box<dyn std::error::Error + Send + Sync>>),
    SubmitPressed,
    ClassifyDone(Result<BreedReport, Box<dyn std::error::Error + Send + Sync>>),
    ResetPressed,
    NoticeDismissed,
    LocaleToggled,
}

#[derive(Clone, PartialEq)]
pub enum Effect {
    OpenFilePicker,
    StartCamera,
    StopCamera,
    CaptureFrame,
    CreatePreview {
        candidate: CandidateImage,
        kind: ImageKind,
    },
    ReleasePreview {
        handle: PreviewHandle,
    },
    Classify {
        image: Vec<u8>,
    },
    Announce {
        text: String,
    },
    CancelAnnouncement,
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::OpenFilePicker => write!(f, "OpenFilePicker"),
            Effect::StartCamera => write!(f, "StartCamera"),
            Effect::StopCamera => write!(f, "StopCamera"),
            Effect::CaptureFrame => write!(f, "CaptureFrame"),
            Effect::CreatePreview { candidate, kind } => f
                .debug_struct("CreatePreview")
                .field("candidate", candidate)
                .field("kind", kind)
                .finish(),
            Effect::ReleasePreview { handle } => f
                .debug_struct("ReleasePreview")
                .field("handle", handle)
                .finish(),
            Effect::Classify { image } => {
                write!(f, "Classify {{ image: {} bytes }}", image.len())
            }
            Effect::Announce { text } => {
                f.debug_struct("Announce").field("text", text).finish()
            }
            Effect::CancelAnnouncement => write!(f, "CancelAnnouncement"),
        }
    }
}

pub fn init(config: &Config) -> (Model, Vec<Effect>) {
    (
        Model {
            flow: Flow::Upload(UploadModel::default()),
            locale: config.default_locale,
        },
        vec![],
    )
}

/// The spoken summary for a finished analysis.
pub fn announcement(report: &BreedReport) -> String {
    format!(
        "Analysis complete. Breed: {}. Dairy Level: {}.",
        report.breed, report.dairy_level
    )
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let Model { flow, locale } = model;

    // Locale is orthogonal to the analysis flow and valid in every state.
    if let Msg::LocaleToggled = msg {
        return (
            Model {
                flow,
                locale: locale.toggled(),
            },
            vec![],
        );
    }

    let (flow, effects) = transition_flow(config, flow, msg);
    (Model { flow, locale }, effects)
}

fn transition_flow(config: &Config, flow: Flow, msg: Msg) -> (Flow, Vec<Effect>) {
    match (flow, msg) {
        // Choosing an image
        (Flow::Upload(upload), Msg::BrowsePressed) => {
            (Flow::Upload(upload), vec![Effect::OpenFilePicker])
        }
        (Flow::Upload(mut upload), Msg::NoticeDismissed) => {
            upload.notice = None;
            (Flow::Upload(upload), vec![])
        }
        (Flow::Upload(mut upload), Msg::CameraOpened) => {
            upload.source = CaptureSource::Camera;
            upload.notice = None;
            (Flow::Upload(upload), vec![Effect::StartCamera])
        }
        (Flow::Upload(mut upload), Msg::CameraCancelled) => {
            let effects = leave_camera(&mut upload);
            (Flow::Upload(upload), effects)
        }
        (Flow::Upload(upload), Msg::CapturePressed) => {
            if upload.source == CaptureSource::Camera {
                (Flow::Upload(upload), vec![Effect::CaptureFrame])
            } else {
                (Flow::Upload(upload), vec![])
            }
        }
        (Flow::Upload(upload), Msg::FilePicked(Ok(Some(candidate)))) => {
            accept_candidate(config, upload, candidate, vec![])
        }
        (Flow::Upload(upload), Msg::FilePicked(Ok(None))) => (Flow::Upload(upload), vec![]),
        (Flow::Upload(mut upload), Msg::FilePicked(Err(_))) => {
            upload.notice = Some(Notice::InvalidFileType);
            (Flow::Upload(upload), vec![])
        }
        (Flow::Upload(mut upload), Msg::FileDropped(candidate)) => {
            let effects = leave_camera(&mut upload);
            accept_candidate(config, upload, candidate, effects)
        }
        (Flow::Upload(mut upload), Msg::FrameCaptured(Ok(candidate))) => {
            let effects = leave_camera(&mut upload);
            accept_candidate(config, upload, candidate, effects)
        }
        (Flow::Upload(mut upload), Msg::FrameCaptured(Err(_))) => {
            let effects = leave_camera(&mut upload);
            upload.notice = Some(Notice::CameraFailed);
            (Flow::Upload(upload), effects)
        }

        // Preview decoding finished. Adopting the new preview is the one
        // place the previous one is released.
        (Flow::Upload(mut upload), Msg::PreviewReady(Ok(image))) => {
            let mut effects = vec![];
            if let Some(previous) = upload.selection.take() {
                effects.push(Effect::ReleasePreview {
                    handle: previous.preview,
                });
            }
            upload.selection = Some(image);
            upload.notice = None;
            (Flow::Upload(upload), effects)
        }
        (Flow::Upload(mut upload), Msg::PreviewReady(Err(_))) => {
            upload.notice = Some(Notice::InvalidFileType);
            (Flow::Upload(upload), vec![])
        }

        // Submission. Leaving Upload here is what makes a second in-flight
        // request impossible: Loading ignores SubmitPressed.
        (Flow::Upload(mut upload), Msg::SubmitPressed) => {
            if let Some(selection) = upload.selection.take() {
                let image = selection.bytes.clone();
                (
                    Flow::Loading(LoadingModel {
                        selection,
                        started: Instant::now(),
                    }),
                    vec![Effect::Classify { image }],
                )
            } else {
                (Flow::Upload(upload), vec![])
            }
        }

        (Flow::Loading(loading), Msg::ClassifyDone(Ok(report))) => {
            let mut effects = vec![];
            if config.speech_enabled {
                effects.push(Effect::Announce {
                    text: announcement(&report),
                });
            }
            (
                Flow::Report(ReportModel {
                    report,
                    selection: loading.selection,
                }),
                effects,
            )
        }
        // The selection survives a failed analysis so the user can resubmit
        // without picking the image again.
        (Flow::Loading(loading), Msg::ClassifyDone(Err(_))) => (
            Flow::Upload(UploadModel {
                source: CaptureSource::FilePicker,
                selection: Some(loading.selection),
                notice: Some(Notice::AnalysisFailed),
            }),
            vec![],
        ),

        // A preview that finished decoding after the flow moved on would
        // leak; release it on arrival.
        (flow @ (Flow::Loading(_) | Flow::Report(_)), Msg::PreviewReady(Ok(image))) => (
            flow,
            vec![Effect::ReleasePreview {
                handle: image.preview,
            }],
        ),

        (Flow::Report(report), Msg::ResetPressed) => (
            Flow::Upload(UploadModel::default()),
            vec![
                Effect::ReleasePreview {
                    handle: report.selection.preview,
                },
                Effect::CancelAnnouncement,
            ],
        ),

        (flow, _) => (flow, vec![]),
    }
}

fn leave_camera(upload: &mut UploadModel) -> Vec<Effect> {
    if upload.source == CaptureSource::Camera {
        upload.source = CaptureSource::FilePicker;
        vec![Effect::StopCamera]
    } else {
        vec![]
    }
}

fn accept_candidate(
    config: &Config,
    mut upload: UploadModel,
    candidate: CandidateImage,
    mut effects: Vec<Effect>,
) -> (Flow, Vec<Effect>) {
    match validate(&candidate, &config.accepted_kinds) {
        Ok(kind) => {
            upload.notice = None;
            effects.push(Effect::CreatePreview { candidate, kind });
            (Flow::Upload(upload), effects)
        }
        Err(_) => {
            upload.notice = Some(Notice::InvalidFileType);
            (Flow::Upload(upload), effects)
        }
    }
}
