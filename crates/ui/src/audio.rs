//! Play/pause buttons for embedded audio players
//!
//! Playback state lives in the media element. The button text only mirrors
//! it after a click and is not resynced if something else pauses the audio.

use template_form_model::{FormConfig, PlaybackState};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlMediaElement};

use crate::dom::{class_selector, query_all};
use crate::registry::{with_registry, WidgetId};

/// Bind every complete audio player on the page; returns how many were bound
pub fn init(document: &Document, config: &FormConfig) -> Result<usize, JsValue> {
    let Some(root) = document.document_element() else {
        return Ok(0);
    };

    let button_selector = class_selector(&config.play_button_class);
    let mut bound = 0;

    for (i, player) in query_all(&root, &class_selector(&config.audio_player_class))?
        .into_iter()
        .enumerate()
    {
        let audio = player
            .query_selector("audio")?
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok());
        let button = player.query_selector(&button_selector)?;

        let (Some(audio), Some(button)) = (audio, button) else {
            debug!(player = i, "audio player missing audio element or button, skipping");
            continue;
        };

        let label = button.clone();
        with_registry(|r| {
            r.bind(WidgetId::AudioPlayer(i), &button, move || {
                toggle(&audio, &label);
            })
        })?;
        bound += 1;
    }

    info!(players = bound, "audio players ready");
    Ok(bound)
}

/// Flip playback of `audio` and relabel `button`
pub fn toggle(audio: &HtmlMediaElement, button: &Element) -> PlaybackState {
    let next = PlaybackState::from_paused(audio.paused()).toggled();
    match next {
        PlaybackState::Playing => match audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    warn!(error = ?e, "audio playback rejected");
                }
            }),
            Err(e) => warn!(error = ?e, "audio play() failed"),
        },
        PlaybackState::Paused => {
            if let Err(e) = audio.pause() {
                warn!(error = ?e, "audio pause() failed");
            }
        }
    }
    button.set_text_content(Some(next.button_label()));
    next
}
