use crate::app::core::Msg;
use crate::app::render::{
    self, BadgeView, LoadingScreen, NoticeView, ReportScreen, Screen, StepStatus, Tone,
    UploadMode, UploadScreen, View,
};
use crate::app::run::App;
use crate::capture::CandidateImage;
use crate::device_preview::interface::PreviewHandle;
use eframe::egui;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const PRIMARY: egui::Color32 = egui::Color32::from_rgb(40, 167, 69);
const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(244, 244, 244);
const CARD_BG: egui::Color32 = egui::Color32::WHITE;
const CARD_BORDER: egui::Color32 = egui::Color32::from_rgb(224, 224, 224);
const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(102, 102, 102);
const DROP_BORDER: egui::Color32 = egui::Color32::from_rgb(187, 187, 187);
const DANGER_BG: egui::Color32 = egui::Color32::from_rgb(253, 237, 237);
const DANGER_TEXT: egui::Color32 = egui::Color32::from_rgb(95, 33, 32);
const VIEWFINDER_BG: egui::Color32 = egui::Color32::from_rgb(33, 37, 41);

fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Success => egui::Color32::from_rgb(46, 125, 50),
        Tone::Warning => egui::Color32::from_rgb(237, 108, 2),
        Tone::Danger => egui::Color32::from_rgb(211, 47, 47),
        Tone::Neutral => egui::Color32::from_rgb(117, 117, 117),
    }
}

pub struct Gui {
    app: App,
    textures: HashMap<PreviewHandle, egui::TextureHandle>,
}

impl Gui {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        app.attach_repaint(cc.egui_ctx.clone());

        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = PAGE_BG;
        visuals.window_fill = CARD_BG;
        visuals.selection.bg_fill = PRIMARY;
        cc.egui_ctx.set_visuals(visuals);

        install_devanagari_font(&cc.egui_ctx, &app);

        Self {
            app,
            textures: HashMap::new(),
        }
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        handle: PreviewHandle,
    ) -> Option<egui::TextureHandle> {
        if let Some(texture) = self.textures.get(&handle) {
            return Some(texture.clone());
        }
        let pixels = self.app.previews.pixels(handle)?;
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [pixels.width as usize, pixels.height as usize],
            &pixels.rgba,
        );
        let texture = ctx.load_texture(
            format!("preview-{}", handle.0),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(handle, texture.clone());
        Some(texture)
    }

    fn prune_textures(&mut self, view: &View) {
        let live = match &view.screen {
            Screen::Upload(upload) => match &upload.mode {
                UploadMode::Preview { preview, .. } => Some(*preview),
                _ => None,
            },
            Screen::Loading(_) => None,
            Screen::Report(report) => Some(report.image),
        };
        self.textures.retain(|handle, _| Some(*handle) == live);
    }

    fn handle_dropped_files(&self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        let candidate = if let Some(bytes) = &file.bytes {
            let name = if file.name.is_empty() {
                "dropped-image".to_string()
            } else {
                file.name.clone()
            };
            Some(CandidateImage::new(name, bytes.to_vec()))
        } else if let Some(path) = &file.path {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "dropped-image".to_string());
            match std::fs::read(path) {
                Ok(bytes) => Some(CandidateImage::new(name, bytes)),
                Err(e) => {
                    let _ = self
                        .app
                        .logger
                        .warn(&format!("Failed to read dropped file: {}", e));
                    None
                }
            }
        } else {
            None
        };

        if let Some(candidate) = candidate {
            self.app.send(Msg::FileDropped(candidate));
        }
    }

    fn show_header(&self, ctx: &egui::Context, view: &View) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(CARD_BG)
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(rect, egui::Rounding::same(8.0), PRIMARY);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "C",
                        egui::FontId::proportional(16.0),
                        egui::Color32::WHITE,
                    );
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(&view.header.title).size(18.0).strong());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(&view.header.locale_toggle).clicked() {
                            self.app.send(Msg::LocaleToggled);
                        }
                    });
                });
            });
    }

    fn show_upload(&mut self, ui: &mut egui::Ui, screen: &UploadScreen, drag_active: bool) {
        if let Some(notice) = &screen.notice {
            if !notice.blocking {
                inline_notice(ui, &notice.text);
                ui.add_space(10.0);
            }
        }

        card().show(ui, |ui| match screen.mode.clone() {
            UploadMode::Picker {
                title,
                subtitle,
                drop_hint,
                drop_active_hint,
                or_separator,
                browse_label,
                camera_label,
            } => {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(title).size(22.0).strong());
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(subtitle).color(TEXT_MUTED));
                });
                ui.add_space(16.0);

                let hint = if drag_active { drop_active_hint } else { drop_hint };
                drop_zone(ui, &hint, drag_active);

                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(or_separator).color(TEXT_MUTED));
                });
                ui.add_space(8.0);

                ui.columns(2, |columns| {
                    if primary_button(&mut columns[0], &browse_label) {
                        self.app.send(Msg::BrowsePressed);
                    }
                    if outlined_button(&mut columns[1], &camera_label) {
                        self.app.send(Msg::CameraOpened);
                    }
                });
            }
            UploadMode::Camera {
                viewfinder_hint,
                capture_label,
                cancel_label,
            } => {
                viewfinder(ui, &viewfinder_hint);
                ui.add_space(12.0);
                ui.columns(2, |columns| {
                    if outlined_button(&mut columns[0], &cancel_label) {
                        self.app.send(Msg::CameraCancelled);
                    }
                    if primary_button(&mut columns[1], &capture_label) {
                        self.app.send(Msg::CapturePressed);
                    }
                });
            }
            UploadMode::Preview {
                title,
                preview,
                file_name,
                analyze_label,
            } => {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(title).size(22.0).strong());
                });
                ui.add_space(12.0);

                if let Some(texture) = self.texture_for(ui.ctx(), preview) {
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Image::new(&texture)
                                .max_height(320.0)
                                .max_width(ui.available_width())
                                .rounding(egui::Rounding::same(8.0)),
                        );
                    });
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("✔").color(PRIMARY).strong());
                    ui.label(egui::RichText::new(file_name).strong());
                });

                ui.add_space(14.0);
                if primary_button(ui, &analyze_label) {
                    self.app.send(Msg::SubmitPressed);
                }
            }
        });
    }

    fn show_loading(&self, ui: &mut egui::Ui, screen: &LoadingScreen) {
        card().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(&screen.title).size(22.0).strong());
            });
            ui.add_space(16.0);

            for step in &screen.steps {
                ui.horizontal(|ui| {
                    match step.status {
                        StepStatus::Done => {
                            ui.label(egui::RichText::new("✔").color(PRIMARY).strong());
                        }
                        StepStatus::Active => {
                            ui.add(egui::Spinner::new().color(PRIMARY).size(15.0));
                        }
                        StepStatus::Pending => {
                            ui.label(egui::RichText::new("•").weak());
                        }
                    }
                    let label = egui::RichText::new(&step.label);
                    match step.status {
                        StepStatus::Active => ui.label(label.strong()),
                        StepStatus::Pending => ui.label(label.weak()),
                        StepStatus::Done => ui.label(label),
                    };
                });
                ui.add_space(8.0);
            }
        });
    }

    fn show_report(&mut self, ui: &mut egui::Ui, screen: &ReportScreen) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&screen.title).size(24.0).strong());
        });
        ui.add_space(14.0);

        card().show(ui, |ui| {
            ui.horizontal_top(|ui| {
                if let Some(texture) = self.texture_for(ui.ctx(), screen.image) {
                    ui.add(
                        egui::Image::new(&texture)
                            .max_height(250.0)
                            .max_width(ui.available_width() * 0.5)
                            .rounding(egui::Rounding::same(8.0)),
                    );
                    ui.add_space(16.0);
                }

                ui.vertical(|ui| {
                    overline(ui, &screen.breed_label);
                    ui.label(egui::RichText::new(&screen.breed).size(26.0).strong());
                    ui.add_space(10.0);

                    overline(ui, &screen.dairy_label);
                    badge(ui, &screen.dairy_badge);
                    ui.add_space(10.0);

                    overline(ui, &screen.purpose_label);
                    ui.label(egui::RichText::new(&screen.purpose).size(17.0));
                });
            });
        });
        ui.add_space(12.0);

        card().show(ui, |ui| {
            ui.columns(2, |columns| {
                columns[0].vertical_centered(|ui| {
                    ui.label(egui::RichText::new(&screen.confidence_label).strong());
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(&screen.confidence_percent)
                            .size(30.0)
                            .color(PRIMARY)
                            .strong(),
                    );
                    ui.add(
                        egui::ProgressBar::new(screen.confidence_fraction)
                            .desired_width(180.0)
                            .rounding(egui::Rounding::same(4.0)),
                    );
                });
                columns[1].vertical_centered(|ui| {
                    ui.label(egui::RichText::new(&screen.usability_label).strong());
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(&screen.usability_percent)
                            .size(30.0)
                            .strong(),
                    );
                    ui.add(
                        egui::ProgressBar::new(screen.usability_fraction)
                            .desired_width(180.0)
                            .rounding(egui::Rounding::same(4.0)),
                    );
                });
            });
        });
        ui.add_space(12.0);

        card().show(ui, |ui| {
            ui.label(egui::RichText::new(&screen.evidence_title).size(17.0).strong());
            ui.add_space(8.0);
            for item in &screen.evidence {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("✔").color(PRIMARY));
                    ui.label(item);
                });
                ui.add_space(4.0);
            }
        });
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            if ui
                .add_sized(
                    [220.0, 42.0],
                    egui::Button::new(
                        egui::RichText::new(&screen.reset_label)
                            .color(egui::Color32::WHITE)
                            .size(15.0),
                    )
                    .fill(PRIMARY)
                    .rounding(egui::Rounding::same(8.0)),
                )
                .clicked()
            {
                self.app.send(Msg::ResetPressed);
            }
        });
    }

    fn show_blocking_notice(&self, ctx: &egui::Context, notice: &NoticeView) {
        egui::Window::new("notice")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                ui.add_space(6.0);
                ui.label(egui::RichText::new(&notice.text).color(DANGER_TEXT));
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if primary_button(ui, &notice.dismiss_label) {
                        self.app.send(Msg::NoticeDismissed);
                    }
                });
                ui.add_space(6.0);
            });
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = {
            let model = self.app.model.lock().unwrap();
            render::view(&self.app.config, &model, Instant::now())
        };

        self.handle_dropped_files(ctx);
        let drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let blocked = matches!(
            &view.screen,
            Screen::Upload(upload) if upload.notice.as_ref().is_some_and(|n| n.blocking)
        );

        self.show_header(ctx, &view);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(PAGE_BG)
                    .inner_margin(egui::Margin::same(24.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_enabled_ui(!blocked, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(620.0);
                            match &view.screen {
                                Screen::Upload(upload) => {
                                    self.show_upload(ui, upload, drag_active)
                                }
                                Screen::Loading(loading) => self.show_loading(ui, loading),
                                Screen::Report(report) => self.show_report(ui, report),
                            }
                        });
                    });
                });
            });

        if blocked {
            if let Screen::Upload(upload) = &view.screen {
                if let Some(notice) = &upload.notice {
                    self.show_blocking_notice(ctx, notice);
                }
            }
        }

        self.prune_textures(&view);

        // The loading steps advance on elapsed time, so keep frames coming.
        if matches!(view.screen, Screen::Loading(_)) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn card() -> egui::Frame {
    egui::Frame::none()
        .fill(CARD_BG)
        .rounding(egui::Rounding::same(12.0))
        .stroke(egui::Stroke::new(1.0, CARD_BORDER))
        .inner_margin(egui::Margin::same(24.0))
}

fn overline(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(11.0)
            .color(TEXT_MUTED),
    );
}

fn badge(ui: &mut egui::Ui, badge: &BadgeView) {
    let color = tone_color(badge.tone);
    egui::Frame::none()
        .fill(color)
        .rounding(egui::Rounding::same(14.0))
        .inner_margin(egui::Margin::symmetric(14.0, 5.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&badge.text)
                    .color(egui::Color32::WHITE)
                    .strong(),
            );
        });
}

fn inline_notice(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(DANGER_BG)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("!")
                        .color(tone_color(Tone::Danger))
                        .strong(),
                );
                ui.label(egui::RichText::new(text).color(DANGER_TEXT));
            });
        });
}

fn drop_zone(ui: &mut egui::Ui, hint: &str, drag_active: bool) {
    let size = egui::vec2(ui.available_width(), 150.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

    let bg = if drag_active {
        egui::Color32::from_rgb(240, 240, 240)
    } else {
        egui::Color32::from_rgb(250, 250, 250)
    };
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(8.0), bg);

    let stroke = egui::Stroke::new(1.5, DROP_BORDER);
    let corners = [
        (rect.left_top(), rect.right_top()),
        (rect.right_top(), rect.right_bottom()),
        (rect.right_bottom(), rect.left_bottom()),
        (rect.left_bottom(), rect.left_top()),
    ];
    for (from, to) in corners {
        ui.painter()
            .extend(egui::Shape::dashed_line(&[from, to], stroke, 8.0, 6.0));
    }

    ui.painter().text(
        rect.center() - egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        "⬆",
        egui::FontId::proportional(30.0),
        DROP_BORDER,
    );
    ui.painter().text(
        rect.center() + egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        hint,
        egui::FontId::proportional(15.0),
        TEXT_MUTED,
    );
}

fn viewfinder(ui: &mut egui::Ui, hint: &str) {
    let size = egui::vec2(ui.available_width(), 260.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

    ui.painter()
        .rect_filled(rect, egui::Rounding::same(8.0), VIEWFINDER_BG);

    // Corner brackets, viewfinder style.
    let bracket = 22.0;
    let stroke = egui::Stroke::new(2.0, egui::Color32::from_gray(200));
    let inset = rect.shrink(14.0);
    let corners = [
        (inset.left_top(), egui::vec2(bracket, 0.0), egui::vec2(0.0, bracket)),
        (inset.right_top(), egui::vec2(-bracket, 0.0), egui::vec2(0.0, bracket)),
        (inset.right_bottom(), egui::vec2(-bracket, 0.0), egui::vec2(0.0, -bracket)),
        (inset.left_bottom(), egui::vec2(bracket, 0.0), egui::vec2(0.0, -bracket)),
    ];
    for (corner, dx, dy) in corners {
        ui.painter().line_segment([corner, corner + dx], stroke);
        ui.painter().line_segment([corner, corner + dy], stroke);
    }

    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        hint,
        egui::FontId::proportional(15.0),
        egui::Color32::from_gray(220),
    );
}

fn primary_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add_sized(
        [ui.available_width().min(280.0), 42.0],
        egui::Button::new(
            egui::RichText::new(label)
                .color(egui::Color32::WHITE)
                .size(15.0),
        )
        .fill(PRIMARY)
        .rounding(egui::Rounding::same(8.0)),
    )
    .clicked()
}

fn outlined_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add_sized(
        [ui.available_width().min(280.0), 42.0],
        egui::Button::new(egui::RichText::new(label).color(PRIMARY).size(15.0))
            .fill(CARD_BG)
            .stroke(egui::Stroke::new(1.0, PRIMARY))
            .rounding(egui::Rounding::same(8.0)),
    )
    .clicked()
}

/// The built-in egui fonts have no Devanagari coverage, so the Hindi locale
/// depends on a system font. Best effort: look in the usual places.
fn install_devanagari_font(ctx: &egui::Context, app: &App) {
    const CANDIDATES: [&str; 4] = [
        "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
        "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf",
        "C:\\Windows\\Fonts\\Nirmala.ttf",
    ];

    for path in CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            let mut fonts = egui::FontDefinitions::default();
            fonts
                .font_data
                .insert("devanagari".to_owned(), egui::FontData::from_owned(bytes));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push("devanagari".to_owned());
            }
            ctx.set_fonts(fonts);
            return;
        }
    }

    let _ = app
        .logger
        .warn("No Devanagari font found; Hindi text may not render correctly");
}
