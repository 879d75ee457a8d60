//! Sprite image loading
//!
//! All images are fetched up front; the game starts once every one has
//! loaded, after which lookups cannot miss.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::sim::Sprite;

/// Loaded sprite images
pub struct Resources {
    images: HashMap<Sprite, HtmlImageElement>,
}

impl Resources {
    /// Load every sprite, resolving once all are ready
    pub async fn load(sprites: &[Sprite]) -> Result<Self, JsValue> {
        let mut images = HashMap::with_capacity(sprites.len());
        for &sprite in sprites {
            if images.contains_key(&sprite) {
                continue;
            }
            let image = load_image(sprite.path()).await?;
            images.insert(sprite, image);
        }
        log::info!("Loaded {} images", images.len());
        Ok(Self { images })
    }

    pub fn get(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        self.images.get(&sprite)
    }
}

async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    let promise = {
        let image = image.clone();
        let src = src.to_owned();
        js_sys::Promise::new(&mut move |resolve: js_sys::Function, reject: js_sys::Function| {
            let onload = Closure::once_into_js(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            let src = src.clone();
            let onerror = Closure::once_into_js(move || {
                let _ = reject.call1(
                    &JsValue::NULL,
                    &JsValue::from_str(&format!("failed to load {}", src)),
                );
            });
            image.set_onload(Some(onload.unchecked_ref()));
            image.set_onerror(Some(onerror.unchecked_ref()));
        })
    };
    image.set_src(src);
    JsFuture::from(promise).await?;
    log::debug!("Loaded {}", src);
    Ok(image)
}
