//! Reusable UI components
//!
//! Standalone pieces of the experience card: the period label, the category
//! badge, the technology icon row, and the highlight list.

use crate::theme;
use eframe::egui;

/// Format a period pair as the literal card label.
/// No date parsing; `end` may be a sentinel like "present".
pub fn format_period(start: &str, end: &str) -> String {
    format!("Start: {} | End: {}", start, end)
}

/// Badge text and (background, text) colors for a record note.
/// `None` means no badge element renders at all.
pub fn badge(note: Option<&'static str>) -> Option<(&'static str, (egui::Color32, egui::Color32))> {
    note.map(|n| (n, theme::badge_colors(n)))
}

/// Paint the category badge overlaying the top-right corner of the card.
pub fn draw_badge(painter: &egui::Painter, card_rect: egui::Rect, note: &str) {
    let (bg, fg) = theme::badge_colors(note);
    let font = egui::FontId::proportional(theme::FONT_BADGE);
    let galley = painter.layout_no_wrap(note.to_string(), font, fg);
    let pad = egui::vec2(theme::SPACING_XL, theme::SPACING_LG);
    let size = galley.size() + pad * 2.0;
    let rect = egui::Rect::from_min_size(
        egui::pos2(card_rect.right() - theme::BADGE_INSET - size.x, card_rect.top()),
        size,
    );
    painter.rect_filled(rect, theme::RADIUS_LARGE, bg);
    painter.galley(rect.min + pad, galley, fg);
}

/// Render the technology icon row, one glyph per entry in input order at a
/// fixed uniform size. Renders nothing when the list is empty.
pub fn icon_row(ui: &mut egui::Ui, icons: &[&str]) {
    if icons.is_empty() {
        return;
    }
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
        for icon in icons {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(*icon)
                        .size(theme::ICON_SIZE)
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            );
        }
    });
}

/// Render the highlight list: one disc-marked row per string, input order,
/// duplicates preserved.
pub fn bullet_list(ui: &mut egui::Ui, bullets: &[&str]) {
    for bullet in bullets {
        ui.horizontal_top(|ui| {
            ui.add_sized(
                [theme::SPACING_XL, theme::FONT_BULLET + 4.0],
                egui::Label::new(
                    egui::RichText::new("•")
                        .size(theme::FONT_BULLET)
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(*bullet)
                        .size(theme::FONT_BULLET)
                        .color(theme::TEXT_SECONDARY),
                )
                .wrap(),
            );
        });
        ui.add_space(theme::SPACING_MD);
    }
}

#[cfg(test)]
mod tests {
    use super::{badge, format_period};
    use crate::theme;

    #[test]
    fn period_renders_literally() {
        assert_eq!(format_period("2020", "present"), "Start: 2020 | End: present");
        assert_eq!(format_period("Jun 22", "Jul 22"), "Start: Jun 22 | End: Jul 22");
    }

    #[test]
    fn badge_maps_known_tags_to_their_colors() {
        let (text, (bg, _)) = badge(Some("Education")).expect("badge should render");
        assert_eq!(text, "Education");
        assert_eq!(bg, theme::BADGE_EDUCATION);

        let (text, (bg, _)) = badge(Some("Open Source")).expect("badge should render");
        assert_eq!(text, "Open Source");
        assert_eq!(bg, theme::BADGE_OPEN_SOURCE);
    }

    #[test]
    fn unknown_tag_gets_default_color_absent_tag_gets_no_badge() {
        let (_, (bg, _)) = badge(Some("Hackathon")).expect("badge should render");
        assert_eq!(bg, theme::BADGE_DEFAULT);
        assert!(badge(None).is_none());
    }
}
