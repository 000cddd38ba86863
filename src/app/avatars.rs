//! Avatar fetching and texture loading

use super::App;
use crate::constants::*;
use crate::utils::{rasterize_placeholder, slug};
use eframe::egui;
use tracing::{debug, warn};

impl App {
    pub fn start_avatar_prefetch(&mut self, ctx: &egui::Context) {
        let cache_dir = self.cache_dir.clone();
        let ctx_clone = ctx.clone();
        let jobs: Vec<(String, String)> = self
            .records
            .iter()
            .map(|r| (slug(r.title), r.image_url.to_string()))
            .collect();

        debug!(count = jobs.len(), "Starting avatar prefetch");

        self.runtime.spawn(async move {
            let client = reqwest::Client::new();
            let semaphore =
                std::sync::Arc::new(tokio::sync::Semaphore::new(AVATAR_FETCH_CONCURRENCY));

            let avatar_dir = cache_dir.join(AVATAR_CACHE_DIR);
            std::fs::create_dir_all(&avatar_dir).ok();

            let mut handles = vec![];

            for (name, url) in jobs {
                let avatar_path = avatar_dir.join(format!("{}.img", name));
                if avatar_path.exists() {
                    continue;
                }

                let sem = semaphore.clone();
                let client = client.clone();
                let ctx = ctx_clone.clone();

                let handle = tokio::spawn(async move {
                    let _permit = sem.acquire().await.ok();
                    match client.get(&url).send().await {
                        Ok(response) if response.status().is_success() => {
                            if let Ok(bytes) = response.bytes().await {
                                std::fs::write(&avatar_path, &bytes).ok();
                                ctx.request_repaint();
                            }
                        }
                        Ok(response) => {
                            warn!(url = %url, status = %response.status(), "Avatar fetch failed")
                        }
                        Err(e) => warn!(url = %url, error = %e, "Avatar fetch failed"),
                    }
                });
                handles.push(handle);
            }

            for handle in handles {
                handle.await.ok();
            }
        });
    }

    /// Load a record's avatar texture from the disk cache, memoized.
    /// Returns None while the fetch is still in flight; a failed decode is
    /// memoized as None so the placeholder renders from then on.
    pub fn load_avatar(
        &mut self,
        ctx: &egui::Context,
        title: &'static str,
    ) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.avatar_cache.get(title) {
            return cached.clone();
        }

        let avatar_path = self
            .cache_dir
            .join(AVATAR_CACHE_DIR)
            .join(format!("{}.img", slug(title)));

        if avatar_path.exists() {
            let texture = std::fs::read(&avatar_path)
                .ok()
                .and_then(|bytes| image::load_from_memory(&bytes).ok())
                .map(|img| {
                    let rgba = img.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let pixels = rgba.into_raw();
                    ctx.load_texture(
                        title,
                        egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                        egui::TextureOptions::LINEAR,
                    )
                });
            if texture.is_none() {
                warn!(title = title, "Failed to decode cached avatar");
            }
            self.avatar_cache.insert(title, texture.clone());
            return texture;
        }

        None
    }

    /// The generic avatar placeholder texture, rasterized once.
    pub fn placeholder(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        self.placeholder_texture
            .get_or_insert_with(|| {
                let (pixels, w, h) = rasterize_placeholder(AVATAR_INTRINSIC);
                ctx.load_texture(
                    "avatar_placeholder",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }
}
