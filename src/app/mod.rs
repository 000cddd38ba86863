//! App module - contains the main application state and logic

mod avatars;

use crate::data::EXPERIENCES;
use crate::settings::Settings;
use crate::theme;
use crate::types::ExperienceRecord;
use crate::utils::get_cache_dir;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) records: &'static [ExperienceRecord],
    // Avatar texture cache: None records a failed decode, so the
    // placeholder renders instead of retrying every frame
    pub(crate) avatar_cache: HashMap<&'static str, Option<egui::TextureHandle>>,
    pub(crate) placeholder_texture: Option<egui::TextureHandle>,
    pub(crate) prefetch_started: bool,
    pub(crate) cache_dir: PathBuf,
    pub(crate) runtime: tokio::runtime::Runtime,
    // One-shot animation latches. Set the frame AFTER first visibility so
    // the animation clock starts from zero instead of jumping to the target.
    pub(crate) section_seen: bool,
    pub(crate) card_seen: Vec<bool>,
    // Snap scrolling
    pub(crate) scroll_offset: f32,
    pub(crate) last_scroll_offset: f32,
    pub(crate) snap_target: Option<f32>,
    pub(crate) scroll_idle_frames: u32,
    // Window geometry
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font (the technology icon catalog)
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let cache_dir = get_cache_dir();
        std::fs::create_dir_all(&cache_dir).ok();

        Self {
            records: EXPERIENCES,
            avatar_cache: HashMap::new(),
            placeholder_texture: None,
            prefetch_started: false,
            cache_dir,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            section_seen: false,
            card_seen: vec![false; EXPERIENCES.len()],
            scroll_offset: 0.0,
            last_scroll_offset: 0.0,
            snap_target: None,
            scroll_idle_frames: 0,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
