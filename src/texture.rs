use crate::app::SharedApp;
use crate::constants::UI_PLATE_TEXT;
use crate::dom;
use crate::render::{rasterize_label, rasterize_plate};
use gloo_net::http::Request;
use orbit_core::texture::{decode_texture, TextureImage};
use wasm_bindgen_futures::spawn_local;

async fn fetch_texture(url: &str) -> anyhow::Result<TextureImage> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} for {}", resp.status(), url);
    }
    let bytes = resp.binary().await?;
    Ok(decode_texture(&bytes)?)
}

/// Rasterise the UI marker's caption plate. Without it the plate renders
/// plain white.
pub fn prepare_ui_plate(app: &SharedApp) {
    let Some(document) = dom::window_document() else {
        log::warn!("[texture] no document for the UI plate");
        return;
    };
    match rasterize_plate(&document, UI_PLATE_TEXT) {
        Ok(image) => {
            if let Some(g) = &mut app.borrow_mut().gpu {
                g.set_ui_plate_texture(&image);
            }
        }
        Err(e) => log::warn!("[texture] UI plate: {:#}", e),
    }
}

/// Fetch the planet map in the background. On success the textured surface
/// layer is wrapped around the planet and the meteors are added; a failure
/// leaves the scene without both.
pub fn load_earth_texture(app: &SharedApp, url: String) {
    let app = app.clone();
    spawn_local(async move {
        let image = match fetch_texture(&url).await {
            Ok(img) => img,
            Err(e) => {
                log::warn!("[texture] could not load {}: {:#}; meteors disabled", url, e);
                return;
            }
        };
        log::info!("[texture] loaded {} ({}x{})", url, image.width, image.height);

        let mut a = app.borrow_mut();
        let services = a.params.services;
        if let Some(g) = &mut a.gpu {
            g.set_earth_texture(&image);
            match dom::window_document() {
                Some(document) => {
                    let labels: Vec<TextureImage> = services
                        .iter()
                        .filter_map(|s| match rasterize_label(&document, s.label, s.color) {
                            Ok(img) => Some(img),
                            Err(e) => {
                                log::warn!("[texture] label {:?}: {:#}", s.label, e);
                                None
                            }
                        })
                        .collect();
                    if labels.len() == services.len() {
                        g.set_label_textures(&labels);
                    }
                }
                None => log::warn!("[texture] no document for label rasterisation"),
            }
        }
        a.main.add_earth_layer();
        a.main.add_meteors(services);
    });
}
