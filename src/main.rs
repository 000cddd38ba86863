#![windows_subsystem = "windows"]
//! Experience Section - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod data;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::APP_VERSION;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;
use types::ExperienceRecord;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "experience-section.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,experience_section=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Experience Section");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Experience section starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1280.0, 800.0)))
        .with_min_inner_size([720.0, 560.0])
        .with_title("Experience");

    // Window/taskbar icon rasterized from the SVG mark
    {
        let (rgba, w, h) = utils::rasterize_icon_square(256);
        let icon = egui::IconData { rgba, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Experience",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Start avatar prefetch on first frame
        if !self.prefetch_started {
            self.prefetch_started = true;
            self.start_avatar_prefetch(ctx);
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Section fade-in. The latch is set one frame late so the animation
        // clock starts from zero; it never resets afterward.
        let section_t = ctx.animate_bool_with_time(
            egui::Id::new("section_fade"),
            self.section_seen,
            theme::SECTION_FADE_SECS,
        );
        self.section_seen = true;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(40, 24)),
            )
            .show(ctx, |ui| {
                ui.multiply_opacity(section_t);

                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("EXPERIENCE")
                                .size(theme::FONT_HEADING)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(theme::SPACING_XL);

                self.render_experience_row(ui, ctx);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// SECTION & CARD RENDERING
// ============================================================================

impl App {
    /// The scrollable card row: one card per record, dataset order, with
    /// snap-to-center once scrolling settles.
    fn render_experience_row(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (card_w, avatar_px) = theme::card_metrics(ui.available_width());
        let card_h = (ui.available_height() - 16.0).max(420.0);
        let spacing = theme::CARD_SPACING;

        // Any scroll or pointer activity cancels a snap in flight
        let (raw_scroll, pointer_down) =
            ui.input(|i| (i.raw_scroll_delta, i.pointer.any_down()));
        let user_scrolling = raw_scroll != egui::Vec2::ZERO || pointer_down;
        if user_scrolling {
            self.snap_target = None;
        }

        // Ease toward the snap target (exponential decay, ~0.2s feel)
        if let Some(target) = self.snap_target {
            let diff = target - self.scroll_offset;
            if diff.abs() < 0.5 {
                self.scroll_offset = target;
                self.snap_target = None;
            } else {
                let dt = ctx.input(|i| i.stable_dt).min(0.1);
                let t = 1.0 - (-theme::SNAP_EASE_RATE * dt).exp();
                self.scroll_offset += diff * t;
                ctx.request_repaint();
            }
        }

        let records = self.records;
        let scroll_output = egui::ScrollArea::horizontal()
            .id_salt("experience_row")
            .auto_shrink([false, false])
            .horizontal_scroll_offset(self.scroll_offset)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = spacing;
                    for (idx, record) in records.iter().enumerate() {
                        self.render_experience_card(
                            ui,
                            ctx,
                            idx,
                            record,
                            egui::vec2(card_w, card_h),
                            avatar_px,
                        );
                    }
                });
            });

        let viewport_w = scroll_output.inner_rect.width();
        let content_w = scroll_output.content_size.x;
        self.scroll_offset = scroll_output.state.offset.x;

        // Arm a snap only after the offset has been still for a few frames,
        // so fling momentum finishes before the row settles on a card
        let moved = (self.scroll_offset - self.last_scroll_offset).abs() > 0.1;
        self.last_scroll_offset = self.scroll_offset;

        if user_scrolling || moved {
            self.scroll_idle_frames = 0;
        } else if self.snap_target.is_none()
            && content_w > viewport_w
            && self.scroll_idle_frames < theme::SNAP_IDLE_FRAMES
        {
            self.scroll_idle_frames += 1;
            if self.scroll_idle_frames == theme::SNAP_IDLE_FRAMES {
                let stride = card_w + spacing;
                let center_shift = (viewport_w - card_w) / 2.0;
                let max_offset = (content_w - viewport_w).max(0.0);
                let nearest = ((self.scroll_offset + center_shift) / stride)
                    .round()
                    .clamp(0.0, (records.len() - 1) as f32);
                let target = (nearest * stride - center_shift).clamp(0.0, max_offset);
                if (target - self.scroll_offset).abs() >= 0.5 {
                    self.snap_target = Some(target);
                    ctx.request_repaint();
                }
            } else {
                ctx.request_repaint();
            }
        }
    }

    /// One record as a self-contained card: avatar with entrance animation,
    /// optional badge, title/subtitle, icon row, period, highlights.
    fn render_experience_card(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        idx: usize,
        record: &'static ExperienceRecord,
        card_size: egui::Vec2,
        avatar_px: f32,
    ) {
        let (rect, response) = ui.allocate_exact_size(card_size, egui::Sense::hover());

        // Dimmed at rest, full opacity while hovered
        let hover_t = ctx.animate_bool_with_time(
            egui::Id::new(("card_hover", idx)),
            response.hovered(),
            theme::HOVER_FADE_SECS,
        );
        let alpha = theme::CARD_REST_OPACITY + (1.0 - theme::CARD_REST_OPACITY) * hover_t;

        // Avatar entrance: one-shot latch, armed the frame after the card
        // first becomes visible
        let entrance_t = ctx.animate_bool_with_time(
            egui::Id::new(("card_entrance", idx)),
            self.card_seen[idx],
            theme::IMAGE_ENTRANCE_SECS,
        );
        if ui.is_rect_visible(rect) && !self.card_seen[idx] {
            self.card_seen[idx] = true;
            ctx.request_repaint();
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        let avatar = self.load_avatar(ctx, record.title);
        let placeholder = self.placeholder(ctx);
        let texture = avatar.as_ref().unwrap_or(&placeholder);

        ui.allocate_ui_at_rect(rect, |ui| {
            ui.multiply_opacity(alpha);

            theme::card_frame().show(ui, |ui| {
                let inner = card_size - egui::vec2(theme::CARD_PADDING, theme::CARD_PADDING) * 2.0;
                ui.set_min_size(inner);
                ui.set_max_width(inner.x);

                // Avatar, centered, sliding down into place while fading in.
                // Clipped to the card so the slide never spills outside it.
                ui.vertical_centered(|ui| {
                    let (slot, _) = ui.allocate_exact_size(
                        egui::vec2(avatar_px, avatar_px),
                        egui::Sense::hover(),
                    );
                    let draw_rect = slot.translate(egui::vec2(
                        0.0,
                        -theme::IMAGE_ENTRANCE_DROP * (1.0 - entrance_t),
                    ));
                    let clip = ui.clip_rect().intersect(rect);
                    let painter = ui.painter().with_clip_rect(clip);
                    let tint = egui::Color32::WHITE.gamma_multiply(entrance_t);
                    // Textured rect with corner radius = half size: a circle
                    let brush = egui::epaint::Brush {
                        fill_texture_id: texture.id(),
                        uv: egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    };
                    let mut shape = egui::epaint::RectShape::filled(
                        draw_rect,
                        egui::CornerRadius::same((avatar_px / 2.0) as u8),
                        tint,
                    );
                    shape.brush = Some(std::sync::Arc::new(brush));
                    painter.add(shape);
                });

                ui.add_space(theme::SPACING_STACK);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new(record.title)
                            .size(theme::FONT_TITLE)
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false)
                    .wrap(),
                );
                ui.add_space(theme::SPACING_SM);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(record.subtitle)
                            .size(theme::FONT_SUBTITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false)
                    .wrap(),
                );

                ui.add_space(theme::SPACING_MD);
                components::icon_row(ui, record.tech_icons);

                ui.add_space(theme::SPACING_LG);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(components::format_period(
                            record.period.0,
                            record.period.1,
                        ))
                        .size(theme::FONT_PERIOD)
                        .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );

                ui.add_space(theme::SPACING_LG);
                components::bullet_list(ui, record.bullets);
            });

            // Badge overlays the card's top-right corner, above the frame
            if let Some((text, _)) = components::badge(record.note) {
                let clip = ui.clip_rect().intersect(rect);
                components::draw_badge(&ui.painter().with_clip_rect(clip), rect, text);
            }
        });
    }
}
