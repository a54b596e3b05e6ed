use crate::dashboard::render::{CheckRow, FeedView, Tone, ViewModel};
use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

struct Shared {
    view: ViewModel,
    // Frames are decoded on the feed thread so the paint loop only uploads
    // the texture.
    frame: Option<egui::ColorImage>,
    frame_seq: u64,
}

struct DashboardWindow {
    shared: Arc<Mutex<Shared>>,
    texture: Option<egui::TextureHandle>,
    shown_seq: u64,
}

fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Good => egui::Color32::from_rgb(74, 222, 128),
        Tone::Alarm => egui::Color32::from_rgb(248, 113, 113),
        Tone::Caution => egui::Color32::from_rgb(250, 204, 21),
    }
}

impl DashboardWindow {
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let mut shared = self.shared.lock().unwrap();
        if shared.frame_seq == self.shown_seq {
            return;
        }
        if let Some(image) = shared.frame.take() {
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture =
                        Some(ctx.load_texture("camera_feed", image, egui::TextureOptions::LINEAR))
                }
            }
        }
        self.shown_seq = shared.frame_seq;
    }

    fn feed_panel(&self, ui: &mut egui::Ui, feed: FeedView, caption: &str) {
        ui.horizontal(|ui| {
            ui.heading("Live Camera Feed");
            let color = match feed {
                FeedView::Stream => tone_color(Tone::Good),
                FeedView::Connecting => tone_color(Tone::Caution),
                FeedView::Offline => tone_color(Tone::Alarm),
            };
            ui.label(egui::RichText::new(caption).color(color).strong());
        });
        ui.add_space(4.0);

        match (feed, &self.texture) {
            (FeedView::Stream, Some(texture)) => {
                let available = ui.available_size();
                let size = texture.size_vec2();
                let scale = (available.x / size.x).min(available.y / size.y);
                ui.add(egui::Image::new((texture.id(), size * scale)));
            }
            _ => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Camera feed unavailable")
                            .color(egui::Color32::GRAY)
                            .size(16.0),
                    );
                });
            }
        }
    }

    fn status_panel(
        &self,
        ui: &mut egui::Ui,
        banner_text: &str,
        banner_tone: Tone,
        checks: &[CheckRow],
        bottle_number: u32,
        timestamp: &str,
    ) {
        let banner_color = tone_color(banner_tone);

        egui::Frame::none()
            .stroke(egui::Stroke::new(2.0, banner_color))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Current Status");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(banner_text)
                                .color(banner_color)
                                .size(24.0)
                                .strong(),
                        );
                    });
                });
                ui.label(format!("Bottle #{}  {}", bottle_number, timestamp));
            });

        ui.add_space(8.0);
        ui.heading("Component Checks");
        ui.add_space(4.0);

        for check in checks {
            let color = tone_color(check.tone);
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(check.name).strong());
                        ui.weak(check.detail);
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&check.value)
                                .color(color)
                                .size(16.0)
                                .strong(),
                        );
                    });
                });
            });
        }
    }
}

impl eframe::App for DashboardWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_texture(ctx);
        let view = self.shared.lock().unwrap().view.clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Defect Detection System");
                ui.weak("Real-time Quality Control");
            });
            ui.separator();

            match &view {
                ViewModel::Waiting => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new("Waiting for bottle detection...")
                                .color(egui::Color32::GRAY)
                                .size(18.0),
                        );
                    });
                }
                ViewModel::Live {
                    feed,
                    feed_caption,
                    banner_text,
                    banner_tone,
                    checks,
                    bottle_number,
                    timestamp,
                } => {
                    ui.columns(2, |columns| {
                        self.feed_panel(&mut columns[0], *feed, feed_caption);
                        self.status_panel(
                            &mut columns[1],
                            banner_text,
                            *banner_tone,
                            checks,
                            *bottle_number,
                            timestamp,
                        );
                    });
                }
            }
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    shared: Arc<Mutex<Shared>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                view: ViewModel::Waiting,
                frame: None,
                frame_seq: 0,
            })),
        }
    }
}

impl Default for DeviceDisplayGui {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let shared = self.shared.clone();

        // The window runs on its own thread; it blocks there until closed.
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([1100.0, 640.0])
                    .with_title("Defect Detection System"),
                ..Default::default()
            };

            let window = DashboardWindow {
                shared,
                texture: None,
                shown_seq: 0,
            };

            let _ = eframe::run_native(
                "Defect Detection System",
                options,
                Box::new(|_cc| Box::new(window)),
            );
        });

        Ok(())
    }

    fn render(&mut self, view: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shared.lock().unwrap().view = view.clone();
        Ok(())
    }

    fn show_frame(&mut self, frame: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let decoded = image::load_from_memory(frame)?.to_rgba8();
        let size = [decoded.width() as usize, decoded.height() as usize];
        let pixels = decoded.into_raw();
        let image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);

        let mut shared = self.shared.lock().unwrap();
        shared.frame = Some(image);
        shared.frame_seq += 1;
        Ok(())
    }
}
