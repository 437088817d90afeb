use crate::identify::core::Event;
use crate::identify::main::IdentifyFlow;
use crate::identify::render::{render, Tone, View};
use crate::image_classifier::interface::ImageFile;
use crate::language::preference::LanguagePreference;
use crate::language::translations::Message;
use crate::language::Language;
use crate::library::logger::interface::Logger;
use eframe::egui;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Desktop window around the identify flow: pick an image, press identify, read the result.
pub struct IdentifyWindow {
    flow: IdentifyFlow,
    preference: Arc<LanguagePreference>,
    language: Language,
    path_input: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl IdentifyWindow {
    pub fn new(
        flow: IdentifyFlow,
        preference: Arc<LanguagePreference>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let language = preference.get();
        Self {
            flow,
            preference,
            language,
            path_input: String::new(),
            logger: logger.with_namespace("gui"),
        }
    }

    fn select_path(&mut self) {
        let path = self.path_input.trim().to_string();
        if path.is_empty() {
            return;
        }
        match ImageFile::read(Path::new(&path)) {
            Ok(image) => self.flow.send(Event::FileSelected(image)),
            Err(e) => {
                let _ = self.logger.error(&format!("Could not read {}: {}", path, e));
            }
        }
    }

    fn select_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        self.language = language;
        if let Err(e) = self.preference.set(language) {
            let _ = self.logger.error(&format!("Could not save language: {}", e));
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        let current = self.language;
        let mut selected = current;
        ui.horizontal(|ui| {
            ui.heading("🐄 Breed Identifier");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_label(Message::Language.text(current))
                    .selected_text(selected.native_name())
                    .show_ui(ui, |ui| {
                        for language in Language::all() {
                            ui.selectable_value(&mut selected, *language, language.native_name());
                        }
                    });
            });
        });
        self.select_language(selected);
    }

    fn input(&mut self, ui: &mut egui::Ui, view: &View) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.path_input)
                    .hint_text(Message::SelectImage.text(self.language))
                    .desired_width(ui.available_width() - 90.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.select_path();
            }
            if ui.button("📂").clicked() {
                self.select_path();
            }
        });

        if let Some(file_name) = &view.file_name {
            ui.label(format!("📷 {}", file_name));
        }

        ui.add_space(8.0);
        let identify = ui.add_enabled(
            view.can_identify,
            egui::Button::new(Message::Identify.text(self.language)).min_size([120.0, 32.0].into()),
        );
        if identify.clicked() {
            self.flow.send(Event::IdentifyClicked);
        }
    }

    fn result(&self, ui: &mut egui::Ui, view: &View) {
        ui.horizontal(|ui| {
            if view.processing {
                ui.spinner();
            }
            let color = match view.tone {
                Tone::Neutral => ui.visuals().text_color(),
                Tone::Positive => egui::Color32::from_rgb(30, 140, 60),
                Tone::Demo => egui::Color32::from_rgb(90, 110, 180),
                Tone::Negative => egui::Color32::from_rgb(200, 40, 40),
            };
            ui.label(egui::RichText::new(&view.headline).size(18.0).color(color));
        });

        if let Some(percent) = view.confidence {
            ui.add_space(4.0);
            ui.label(Message::Confidence.text(self.language));
            ui.add(
                egui::ProgressBar::new(f32::from(percent) / 100.0)
                    .text(format!("{}%", percent)),
            );
        }

        for (label, value) in &view.catalogue_hint {
            ui.label(format!("{}: {}", label, value));
        }

        if let Some(panel) = &view.info_panel {
            ui.add_space(8.0);
            egui::CollapsingHeader::new(&panel.title)
                .default_open(true)
                .show(ui, |ui| {
                    for section in &panel.sections {
                        ui.strong(&section.title);
                        if let Some(text) = &section.text {
                            ui.label(text);
                        }
                        for item in &section.items {
                            ui.label(format!("• {}", item));
                        }
                        ui.add_space(4.0);
                    }
                    if let Some(message) = &panel.empty_message {
                        ui.weak(message);
                    }
                });
        }

        if let Some(warning) = &view.warning {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::from_rgb(200, 120, 0), format!("⚠ {}", warning));
        }
    }
}

impl eframe::App for IdentifyWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.flow.poll();

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            match image_from_dropped(&file) {
                Some(image) => self.flow.send(Event::FileSelected(image)),
                None => {
                    let _ = self.logger.error(&format!("Could not read dropped {}", file.name));
                }
            }
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| self.header(ui));

        let view = render(self.flow.state(), self.language);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.input(ui, &view);
                ui.separator();
                self.result(ui, &view);
            });
        });

        if view.processing {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn image_from_dropped(file: &egui::DroppedFile) -> Option<ImageFile> {
    if let Some(bytes) = &file.bytes {
        return Some(ImageFile::new(file.name.clone(), bytes.to_vec()));
    }
    file.path.as_deref().and_then(|path| ImageFile::read(path).ok())
}

/// Blocks until the window is closed.
pub fn run(window: IdentifyWindow) -> Result<(), Box<dyn Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Breed Identifier",
        options,
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| format!("Window failed: {}", e).into())
}
