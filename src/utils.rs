//! Utility functions

use std::path::PathBuf;

// Avatar placeholder, shown while an image is fetching or when it failed
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200"><defs><style>.p1{fill:#27272a}.p2{fill:#71717a}</style></defs><circle class="p1" cx="100" cy="100" r="100"/><circle class="p2" cx="100" cy="78" r="34"/><path class="p2" d="m100,122c-38,0-62,22-62,50v28h124v-28c0-28-24-50-62-50Z"/></svg>"##;

// Window/taskbar icon, square viewBox
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><defs><style>.i1{fill:#09090b}.i2{fill:#0d9488}.i3{fill:#e4e4e7}</style></defs><rect class="i1" width="256" height="256" rx="48"/><rect class="i2" x="40" y="88" width="176" height="120" rx="16"/><path class="i3" d="m96,88v-16c0-8.8,7.2-16,16-16h32c8.8,0,16,7.2,16,16v16h-16v-14h-32v14h-16Z"/><rect class="i3" x="112" y="128" width="32" height="20" rx="6"/></svg>"##;

/// Rasterize the avatar placeholder at the given square size.
pub fn rasterize_placeholder(size: u32) -> (Vec<u8>, u32, u32) {
    rasterize_square(PLACEHOLDER_SVG, size)
}

/// Rasterize the app icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_icon_square(size: u32) -> (Vec<u8>, u32, u32) {
    rasterize_square(ICON_SVG, size)
}

fn rasterize_square(svg: &str, size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the cache directory path
pub fn get_cache_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Experience Section")
        .join("cache")
}

/// Filesystem-safe cache key for a record title.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{rasterize_placeholder, slug};

    #[test]
    fn slug_is_lowercase_dashed_alnum() {
        assert_eq!(slug("Blekinge Institute of Technology"), "blekinge-institute-of-technology");
        assert_eq!(slug("Create T3 App"), "create-t3-app");
        assert_eq!(slug("tRPC"), "trpc");
    }

    #[test]
    fn slug_collapses_and_trims_separators() {
        assert_eq!(slug("  a -- b!!"), "a-b");
        assert_eq!(slug("---"), "");
    }

    #[test]
    fn placeholder_rasterizes_at_requested_size() {
        let (pixels, w, h) = rasterize_placeholder(64);
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
    }
}
