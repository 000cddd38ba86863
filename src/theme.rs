//! Centralized theme constants for the experience section
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const CARD_BG: Color32 = Color32::from_rgb(0x29, 0x29, 0x29); // card surface

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb); // gray-300
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Badges
// =============================================================================
pub const BADGE_EDUCATION: Color32 = Color32::from_rgb(0x07, 0x59, 0x85); // sky-800
pub const BADGE_OPEN_SOURCE: Color32 = Color32::from_rgb(0x7f, 0x1d, 0x1d); // red-900
pub const BADGE_DEFAULT: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88); // teal-600

/// Badge background and text colors for a category tag.
///
/// Total over arbitrary tags; unknown tags fall through to the generic
/// accent. Whether a badge renders at all is decided by the caller from the
/// record's `note` being present.
pub fn badge_colors(note: &str) -> (Color32, Color32) {
    match note {
        "Education" => (BADGE_EDUCATION, TEXT_PRIMARY),
        "Open Source" => (BADGE_OPEN_SOURCE, TEXT_PRIMARY),
        _ => (BADGE_DEFAULT, TEXT_PRIMARY),
    }
}

// =============================================================================
// COLORS - Scrollbar
// =============================================================================
pub const SCROLL_TRACK: Color32 = Color32::from_rgba_premultiplied(0x30, 0x30, 0x33, 0x33);
pub const SCROLL_THUMB: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88);

// =============================================================================
// ANIMATION
// =============================================================================
/// Whole-section fade-in when it first becomes visible. One-shot.
pub const SECTION_FADE_SECS: f32 = 1.5;
/// Avatar entrance (fade + settle from above) when a card is first visible.
pub const IMAGE_ENTRANCE_SECS: f32 = 1.0;
/// Vertical distance the avatar settles from during its entrance.
pub const IMAGE_ENTRANCE_DROP: f32 = 100.0;
/// Card opacity transition on hover, both directions.
pub const HOVER_FADE_SECS: f32 = 0.2;
/// Resting card opacity; hover animates to 1.0.
pub const CARD_REST_OPACITY: f32 = 0.4;
/// Exponential decay rate for the snap-to-card scroll animation (~0.2s feel)
pub const SNAP_EASE_RATE: f32 = 10.0;
/// Frames of settled scroll input before a snap target is chosen
pub const SNAP_IDLE_FRAMES: u32 = 3;

// =============================================================================
// DIMENSIONS - Cards
// =============================================================================
pub const CARD_WIDTH_SM: f32 = 500.0;
pub const CARD_WIDTH_MD: f32 = 600.0;
pub const CARD_WIDTH_XL: f32 = 900.0;
pub const AVATAR_SIZE_SM: f32 = 128.0;
pub const AVATAR_SIZE_XL: f32 = 200.0;
pub const CARD_SPACING: f32 = 20.0;
pub const CARD_PADDING: f32 = 40.0;
pub const BADGE_INSET: f32 = 28.0;

/// Card width and avatar size for the available viewport width.
/// Cards grow at two width thresholds; the avatar only grows at the widest.
pub fn card_metrics(viewport_w: f32) -> (f32, f32) {
    if viewport_w >= 1500.0 {
        (CARD_WIDTH_XL, AVATAR_SIZE_XL)
    } else if viewport_w >= 1000.0 {
        (CARD_WIDTH_MD, AVATAR_SIZE_SM)
    } else {
        (CARD_WIDTH_SM, AVATAR_SIZE_SM)
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADING: f32 = 24.0;
pub const FONT_TITLE: f32 = 36.0;
pub const FONT_SUBTITLE: f32 = 24.0;
pub const FONT_BADGE: f32 = 14.0;
pub const FONT_PERIOD: f32 = 14.0;
pub const FONT_BULLET: f32 = 18.0;
pub const ICON_SIZE: f32 = 40.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_STACK: f32 = 28.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_BASE,
        extreme_bg_color: BG_BASE,
        faint_bg_color: CARD_BG,
        override_text_color: Some(TEXT_PRIMARY),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        // Thin styled scrollbar under the card row
        style.spacing.scroll.bar_inner_margin = 2.0;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.bar_outer_margin = 2.0;
        style.spacing.scroll.handle_min_length = 20.0;
        style.spacing.scroll.floating = false;
        style.visuals.widgets.noninteractive.bg_fill = SCROLL_TRACK;
        style.visuals.widgets.inactive.bg_fill = SCROLL_THUMB;
        style.visuals.widgets.hovered.bg_fill = SCROLL_THUMB;
        style.visuals.widgets.active.bg_fill = SCROLL_THUMB;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_BG)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(CARD_PADDING as i8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_lookup_is_total_with_default() {
        assert_eq!(badge_colors("Education").0, BADGE_EDUCATION);
        assert_eq!(badge_colors("Open Source").0, BADGE_OPEN_SOURCE);
        assert_eq!(badge_colors("Volunteering").0, BADGE_DEFAULT);
        assert_eq!(badge_colors("").0, BADGE_DEFAULT);
    }

    #[test]
    fn card_metrics_follow_breakpoints() {
        assert_eq!(card_metrics(800.0), (CARD_WIDTH_SM, AVATAR_SIZE_SM));
        assert_eq!(card_metrics(1000.0), (CARD_WIDTH_MD, AVATAR_SIZE_SM));
        assert_eq!(card_metrics(1500.0), (CARD_WIDTH_XL, AVATAR_SIZE_XL));
    }

    #[test]
    fn card_metrics_never_shrink_with_width() {
        let mut last = (0.0f32, 0.0f32);
        for w in [320.0, 999.0, 1000.0, 1499.0, 1500.0, 2560.0] {
            let m = card_metrics(w);
            assert!(m.0 >= last.0 && m.1 >= last.1);
            last = m;
        }
    }
}
