use crate::app::core::{
    announcement, init, transition, CaptureSource, Effect, Flow, Msg, Notice,
};
use crate::app::tests::fixture;
use crate::capture::ImageKind;
use crate::device_preview::interface::PreviewHandle;
use crate::locale::Locale;

#[test]
fn init_starts_on_upload_with_no_effects() {
    let (model, effects) = init(&fixture::config());

    match model.flow {
        Flow::Upload(upload) => {
            assert!(upload.selection.is_none());
            assert!(upload.notice.is_none());
            assert_eq!(upload.source, CaptureSource::FilePicker);
        }
        _ => panic!("Unexpected state"),
    }
    assert_eq!(model.locale, Locale::En);
    assert!(effects.is_empty());
}

#[test]
fn browse_opens_file_picker() {
    let config = fixture::config();

    let (model, effects) = transition(&config, fixture::upload_empty(), Msg::BrowsePressed);

    assert!(matches!(model.flow, Flow::Upload(_)));
    assert_eq!(effects, vec![Effect::OpenFilePicker]);
}

#[test]
fn accepted_png_requests_preview() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::upload_empty(),
        Msg::FilePicked(Ok(Some(fixture::png_candidate()))),
    );

    match model.flow {
        Flow::Upload(upload) => assert!(upload.notice.is_none()),
        _ => panic!("Unexpected state"),
    }
    assert_eq!(
        effects,
        vec![Effect::CreatePreview {
            candidate: fixture::png_candidate(),
            kind: ImageKind::Png,
        }]
    );
}

#[test]
fn rejected_file_keeps_prior_selection() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::upload_with_selection(1),
        Msg::FilePicked(Ok(Some(fixture::text_candidate()))),
    );

    match model.flow {
        Flow::Upload(upload) => {
            assert_eq!(upload.notice, Some(Notice::InvalidFileType));
            assert_eq!(upload.selection, Some(fixture::selected(1)));
        }
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn cancelled_picker_changes_nothing() {
    let config = fixture::config();
    let before = fixture::upload_with_selection(1);

    let (model, effects) = transition(&config, before.clone(), Msg::FilePicked(Ok(None)));

    assert_eq!(model, before);
    assert!(effects.is_empty());
}

#[test]
fn picker_error_shows_notice() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::upload_empty(),
        Msg::FilePicked(Err(fixture::failure())),
    );

    match model.flow {
        Flow::Upload(upload) => assert_eq!(upload.notice, Some(Notice::InvalidFileType)),
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn dropped_file_follows_the_same_path() {
    let config = fixture::config();

    let (_, effects) = transition(
        &config,
        fixture::upload_empty(),
        Msg::FileDropped(fixture::jpeg_candidate()),
    );

    assert_eq!(
        effects,
        vec![Effect::CreatePreview {
            candidate: fixture::jpeg_candidate(),
            kind: ImageKind::Jpeg,
        }]
    );
}

#[test]
fn preview_ready_adopts_selection() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::upload_empty(),
        Msg::PreviewReady(Ok(fixture::selected(1))),
    );

    match model.flow {
        Flow::Upload(upload) => {
            assert_eq!(upload.selection, Some(fixture::selected(1)));
            assert!(upload.notice.is_none());
        }
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn replacing_selection_releases_previous_preview() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::upload_with_selection(1),
        Msg::PreviewReady(Ok(fixture::selected(2))),
    );

    match model.flow {
        Flow::Upload(upload) => {
            assert_eq!(upload.selection.unwrap().preview, PreviewHandle(2));
        }
        _ => panic!("Unexpected state"),
    }
    assert_eq!(
        effects,
        vec![Effect::ReleasePreview {
            handle: PreviewHandle(1),
        }]
    );
}

#[test]
fn preview_decode_failure_shows_notice() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::upload_empty(),
        Msg::PreviewReady(Err(fixture::failure())),
    );

    match model.flow {
        Flow::Upload(upload) => {
            assert_eq!(upload.notice, Some(Notice::InvalidFileType));
            assert!(upload.selection.is_none());
        }
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn camera_open_starts_camera() {
    let config = fixture::config();

    let (model, effects) = transition(&config, fixture::upload_empty(), Msg::CameraOpened);

    match model.flow {
        Flow::Upload(upload) => assert_eq!(upload.source, CaptureSource::Camera),
        _ => panic!("Unexpected state"),
    }
    assert_eq!(effects, vec![Effect::StartCamera]);
}

#[test]
fn camera_cancel_stops_camera() {
    let config = fixture::config();

    let (model, effects) = transition(&config, fixture::camera_mode(), Msg::CameraCancelled);

    match model.flow {
        Flow::Upload(upload) => assert_eq!(upload.source, CaptureSource::FilePicker),
        _ => panic!("Unexpected state"),
    }
    assert_eq!(effects, vec![Effect::StopCamera]);
}

#[test]
fn capture_outside_camera_mode_is_ignored() {
    let config = fixture::config();

    let (_, effects) = transition(&config, fixture::upload_empty(), Msg::CapturePressed);

    assert!(effects.is_empty());
}

#[test]
fn capture_in_camera_mode_requests_frame() {
    let config = fixture::config();

    let (_, effects) = transition(&config, fixture::camera_mode(), Msg::CapturePressed);

    assert_eq!(effects, vec![Effect::CaptureFrame]);
}

#[test]
fn captured_frame_stops_camera_and_requests_preview() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::camera_mode(),
        Msg::FrameCaptured(Ok(fixture::jpeg_candidate())),
    );

    match model.flow {
        Flow::Upload(upload) => assert_eq!(upload.source, CaptureSource::FilePicker),
        _ => panic!("Unexpected state"),
    }
    assert_eq!(
        effects,
        vec![
            Effect::StopCamera,
            Effect::CreatePreview {
                candidate: fixture::jpeg_candidate(),
                kind: ImageKind::Jpeg,
            },
        ]
    );
}

#[test]
fn camera_failure_shows_notice() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::camera_mode(),
        Msg::FrameCaptured(Err(fixture::failure())),
    );

    match model.flow {
        Flow::Upload(upload) => {
            assert_eq!(upload.notice, Some(Notice::CameraFailed));
            assert_eq!(upload.source, CaptureSource::FilePicker);
        }
        _ => panic!("Unexpected state"),
    }
    assert_eq!(effects, vec![Effect::StopCamera]);
}

#[test]
fn submit_without_selection_is_ignored() {
    let config = fixture::config();

    let (model, effects) = transition(&config, fixture::upload_empty(), Msg::SubmitPressed);

    assert!(matches!(model.flow, Flow::Upload(_)));
    assert!(effects.is_empty());
}

#[test]
fn submit_starts_classification() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::upload_with_selection(1),
        Msg::SubmitPressed,
    );

    match model.flow {
        Flow::Loading(loading) => {
            assert_eq!(loading.selection, fixture::selected(1));
        }
        _ => panic!("Unexpected state"),
    }
    assert_eq!(
        effects,
        vec![Effect::Classify {
            image: fixture::selected(1).bytes,
        }]
    );
}

#[test]
fn no_second_classification_while_loading() {
    let config = fixture::config();

    let (model, effects) = transition(&config, fixture::loading(1), Msg::SubmitPressed);
    assert!(matches!(model.flow, Flow::Loading(_)));
    assert!(effects.is_empty());

    let (model, effects) = transition(&config, model, Msg::BrowsePressed);
    assert!(matches!(model.flow, Flow::Loading(_)));
    assert!(effects.is_empty());
}

#[test]
fn submit_from_report_is_ignored() {
    let config = fixture::config();

    let (model, effects) = transition(&config, fixture::report(1), Msg::SubmitPressed);

    assert!(matches!(model.flow, Flow::Report(_)));
    assert!(effects.is_empty());
}

#[test]
fn classification_success_shows_report_and_announces() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::loading(1),
        Msg::ClassifyDone(Ok(fixture::holstein())),
    );

    match model.flow {
        Flow::Report(report) => {
            assert_eq!(report.report, fixture::holstein());
            assert_eq!(report.selection, fixture::selected(1));
        }
        _ => panic!("Unexpected state"),
    }
    assert_eq!(
        effects,
        vec![Effect::Announce {
            text: "Analysis complete. Breed: Holstein. Dairy Level: High.".to_string(),
        }]
    );
    assert_eq!(
        announcement(&fixture::holstein()),
        "Analysis complete. Breed: Holstein. Dairy Level: High."
    );
}

#[test]
fn speech_disabled_suppresses_announcement() {
    let mut config = fixture::config();
    config.speech_enabled = false;

    let (model, effects) = transition(
        &config,
        fixture::loading(1),
        Msg::ClassifyDone(Ok(fixture::holstein())),
    );

    assert!(matches!(model.flow, Flow::Report(_)));
    assert!(effects.is_empty());
}

#[test]
fn classification_failure_returns_to_upload_keeping_selection() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::loading(1),
        Msg::ClassifyDone(Err(fixture::failure())),
    );

    match model.flow {
        Flow::Upload(upload) => {
            assert_eq!(upload.notice, Some(Notice::AnalysisFailed));
            assert_eq!(upload.selection, Some(fixture::selected(1)));
        }
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn reset_releases_preview_and_cancels_speech() {
    let config = fixture::config();

    let (model, effects) = transition(&config, fixture::report(1), Msg::ResetPressed);

    match model.flow {
        Flow::Upload(upload) => {
            assert!(upload.selection.is_none());
            assert!(upload.notice.is_none());
        }
        _ => panic!("Unexpected state"),
    }
    assert_eq!(
        effects,
        vec![
            Effect::ReleasePreview {
                handle: PreviewHandle(1),
            },
            Effect::CancelAnnouncement,
        ]
    );
}

#[test]
fn stale_preview_is_released_while_loading() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::loading(1),
        Msg::PreviewReady(Ok(fixture::selected(9))),
    );

    assert!(matches!(model.flow, Flow::Loading(_)));
    assert_eq!(
        effects,
        vec![Effect::ReleasePreview {
            handle: PreviewHandle(9),
        }]
    );
}

#[test]
fn stale_preview_is_released_on_report() {
    let config = fixture::config();

    let (model, effects) = transition(
        &config,
        fixture::report(1),
        Msg::PreviewReady(Ok(fixture::selected(9))),
    );

    assert!(matches!(model.flow, Flow::Report(_)));
    assert_eq!(
        effects,
        vec![Effect::ReleasePreview {
            handle: PreviewHandle(9),
        }]
    );
}

#[test]
fn notice_dismissed_clears_notice() {
    let config = fixture::config();
    let (model, _) = transition(
        &config,
        fixture::loading(1),
        Msg::ClassifyDone(Err(fixture::failure())),
    );

    let (model, effects) = transition(&config, model, Msg::NoticeDismissed);

    match model.flow {
        Flow::Upload(upload) => {
            assert!(upload.notice.is_none());
            assert_eq!(upload.selection, Some(fixture::selected(1)));
        }
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn locale_toggle_preserves_flow() {
    let config = fixture::config();

    for before in [fixture::upload_with_selection(1), fixture::loading(1), fixture::report(1)] {
        let (model, effects) = transition(&config, before.clone(), Msg::LocaleToggled);

        assert_eq!(model.flow, before.flow);
        assert_eq!(model.locale, Locale::Hi);
        assert!(effects.is_empty());
    }
}

/// Walks a whole session (pick, replace, failed submit, resubmit, reset)
/// and checks every preview handle is released exactly once.
#[test]
fn previews_are_released_exactly_once_across_a_full_cycle() {
    let config = fixture::config();
    let mut released = vec![];
    let mut record = |effects: &[Effect]| {
        for effect in effects {
            if let Effect::ReleasePreview { handle } = effect {
                released.push(*handle);
            }
        }
    };

    let (model, effects) = transition(
        &config,
        fixture::upload_empty(),
        Msg::FilePicked(Ok(Some(fixture::png_candidate()))),
    );
    record(&effects);
    assert!(matches!(effects[0], Effect::CreatePreview { .. }));

    let (model, effects) = transition(&config, model, Msg::PreviewReady(Ok(fixture::selected(1))));
    record(&effects);

    // Replace the selection with a second image.
    let (model, effects) = transition(&config, model, Msg::PreviewReady(Ok(fixture::selected(2))));
    record(&effects);

    // First submission fails; the selection is retained.
    let (model, effects) = transition(&config, model, Msg::SubmitPressed);
    record(&effects);
    let (model, effects) = transition(&config, model, Msg::ClassifyDone(Err(fixture::failure())));
    record(&effects);

    // Second submission succeeds, then the user resets.
    let (model, effects) = transition(&config, model, Msg::SubmitPressed);
    record(&effects);
    let (model, effects) = transition(
        &config,
        model,
        Msg::ClassifyDone(Ok(fixture::holstein())),
    );
    record(&effects);
    let (model, effects) = transition(&config, model, Msg::ResetPressed);
    record(&effects);

    assert!(matches!(model.flow, Flow::Upload(_)));
    released.sort_by_key(|handle| handle.0);
    assert_eq!(released, vec![PreviewHandle(1), PreviewHandle(2)]);
}
