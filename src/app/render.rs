//! Pure mapping from the model to a display-ready view. Everything the GUI
//! paints comes through here, so the full result/loading/upload presentation
//! is testable without a window.

use crate::app::core::{CaptureSource, Flow, Model};
use crate::app::core::{LoadingModel, Notice, ReportModel, UploadModel};
use crate::config::Config;
use crate::device_preview::interface::PreviewHandle;
use crate::locale::{text, LocaleText};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub header: HeaderView,
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub title: String,
    pub locale_toggle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Upload(UploadScreen),
    Loading(LoadingScreen),
    Report(ReportScreen),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadScreen {
    pub notice: Option<NoticeView>,
    pub mode: UploadMode,
}

/// A submission failure blocks the screen until dismissed; capture problems
/// show inline.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeView {
    pub text: String,
    pub blocking: bool,
    pub dismiss_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadMode {
    Picker {
        title: String,
        subtitle: String,
        drop_hint: String,
        drop_active_hint: String,
        or_separator: String,
        browse_label: String,
        camera_label: String,
    },
    Camera {
        viewfinder_hint: String,
        capture_label: String,
        cancel_label: String,
    },
    Preview {
        title: String,
        preview: PreviewHandle,
        file_name: String,
        analyze_label: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadingScreen {
    pub title: String,
    pub steps: Vec<StepView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub label: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportScreen {
    pub title: String,
    pub image: PreviewHandle,
    pub breed_label: String,
    pub breed: String,
    pub dairy_label: String,
    pub dairy_badge: BadgeView,
    pub purpose_label: String,
    pub purpose: String,
    pub confidence_label: String,
    pub confidence_percent: String,
    pub confidence_fraction: f32,
    pub usability_label: String,
    pub usability_percent: String,
    pub usability_fraction: f32,
    pub evidence_title: String,
    pub evidence: Vec<String>,
    pub reset_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeView {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

pub fn view(config: &Config, model: &Model, now: Instant) -> View {
    let strings = text(model.locale);

    let screen = match &model.flow {
        Flow::Upload(upload) => Screen::Upload(upload_screen(upload, strings)),
        Flow::Loading(loading) => Screen::Loading(loading_screen(config, loading, strings, now)),
        Flow::Report(report) => Screen::Report(report_screen(report, strings)),
    };

    View {
        header: HeaderView {
            title: strings.app_title.to_string(),
            locale_toggle: model.locale.toggle_label().to_string(),
        },
        screen,
    }
}

fn upload_screen(upload: &UploadModel, strings: &LocaleText) -> UploadScreen {
    let notice = upload.notice.map(|notice| NoticeView {
        text: match notice {
            Notice::InvalidFileType => strings.notice_invalid_file,
            Notice::AnalysisFailed => strings.notice_analysis_failed,
            Notice::CameraFailed => strings.notice_camera_failed,
        }
        .to_string(),
        blocking: notice == Notice::AnalysisFailed,
        dismiss_label: strings.ok.to_string(),
    });

    // A held selection always wins over the picker/camera choice, exactly as
    // the picker card gives way to the preview card.
    let mode = if let Some(selection) = &upload.selection {
        UploadMode::Preview {
            title: strings.image_selected.to_string(),
            preview: selection.preview,
            file_name: selection.file_name.clone(),
            analyze_label: strings.analyze_image.to_string(),
        }
    } else if upload.source == CaptureSource::Camera {
        UploadMode::Camera {
            viewfinder_hint: strings.viewfinder_hint.to_string(),
            capture_label: strings.capture_photo.to_string(),
            cancel_label: strings.cancel.to_string(),
        }
    } else {
        UploadMode::Picker {
            title: strings.upload_title.to_string(),
            subtitle: strings.upload_subtitle.to_string(),
            drop_hint: strings.drop_hint.to_string(),
            drop_active_hint: strings.drop_active_hint.to_string(),
            or_separator: strings.or_separator.to_string(),
            browse_label: strings.browse_files.to_string(),
            camera_label: strings.take_photo.to_string(),
        }
    };

    UploadScreen { notice, mode }
}

fn loading_screen(
    config: &Config,
    loading: &LoadingModel,
    strings: &LocaleText,
    now: Instant,
) -> LoadingScreen {
    let labels = [
        strings.step_uploaded,
        strings.step_structure,
        strings.step_breed,
        strings.step_report,
    ];

    let elapsed = now.saturating_duration_since(loading.started);
    let interval = config.loading_step_interval.as_millis().max(1);
    let active = (elapsed.as_millis() / interval).min(labels.len() as u128 - 1) as usize;

    let steps = labels
        .iter()
        .enumerate()
        .map(|(index, label)| StepView {
            label: label.to_string(),
            status: if index < active {
                StepStatus::Done
            } else if index == active {
                StepStatus::Active
            } else {
                StepStatus::Pending
            },
        })
        .collect();

    LoadingScreen {
        title: strings.loading_title.to_string(),
        steps,
    }
}

fn report_screen(report: &ReportModel, strings: &LocaleText) -> ReportScreen {
    let data = &report.report;

    ReportScreen {
        title: strings.result_title.to_string(),
        image: report.selection.preview,
        breed_label: strings.detected_breed.to_string(),
        breed: data.breed.clone(),
        dairy_label: strings.dairy_level.to_string(),
        dairy_badge: BadgeView {
            text: data.dairy_level.clone(),
            tone: badge_tone(&data.dairy_level),
        },
        purpose_label: strings.purpose.to_string(),
        purpose: data.purpose.clone(),
        confidence_label: strings.confidence_score.to_string(),
        confidence_percent: percent_text(data.confidence),
        confidence_fraction: data.confidence.clamp(0.0, 1.0),
        usability_label: strings.usability_score.to_string(),
        usability_percent: percent_text(data.usability_score),
        usability_fraction: data.usability_score.clamp(0.0, 1.0),
        evidence_title: strings.evidence_title.to_string(),
        evidence: data.evidence.clone(),
        reset_label: strings.new_analysis.to_string(),
    }
}

/// Qualitative color for a dairy-level string. Bucketing is by substring so
/// endpoint variants like "High Dairy" land in the right bucket; anything
/// unrecognized stays neutral.
pub fn badge_tone(dairy_level: &str) -> Tone {
    let level = dairy_level.to_lowercase();
    if level.contains("high") {
        Tone::Success
    } else if level.contains("medium") {
        Tone::Warning
    } else if level.contains("low") {
        Tone::Danger
    } else {
        Tone::Neutral
    }
}

pub fn percent_text(value: f32) -> String {
    format!("{}%", (value * 100.0).round() as i32)
}
