// Browser media element access: lookup, transport commands, property reads
// and listener registration. Native builds get inert stand-ins.
use crate::api::models::TechnicalState;

use super::PlaybackError;
#[cfg(target_arch = "wasm32")]
use super::{MediaErrorInfo, MediaSignal, SignalDetail, SignalHandler, SignalTarget};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
pub type MediaElement = HtmlAudioElement;

/// Headless stand-in: no element can ever be found on native targets, so the
/// type has no values.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub enum MediaElement {}

/// DOM id for a player instance's `<audio>` element.
pub fn media_element_id(instance: &uuid::Uuid) -> String {
    format!("miniplayer-audio-{}", instance.simple())
}

#[cfg(target_arch = "wasm32")]
pub fn find_media_element(id: &str) -> Option<MediaElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn find_media_element(_id: &str) -> Option<MediaElement> {
    None
}

#[cfg(target_arch = "wasm32")]
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(err.name());
        let message = String::from(err.message());
        return if name.is_empty() {
            message
        } else {
            format!("{name}: {message}")
        };
    }
    value
        .as_string()
        .unwrap_or_else(|| "unknown rejection".to_string())
}

/// Ask the element to start playing and wait for the browser's verdict.
#[cfg(target_arch = "wasm32")]
pub async fn request_play(audio: &MediaElement) -> Result<(), PlaybackError> {
    let promise = audio
        .play()
        .map_err(|err| PlaybackError::Rejected(js_error_message(&err)))?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| PlaybackError::Rejected(js_error_message(&err)))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn request_play(_audio: &MediaElement) -> Result<(), PlaybackError> {
    Err(PlaybackError::NoElement)
}

#[cfg(target_arch = "wasm32")]
pub fn request_pause(audio: &MediaElement) {
    let _ = audio.pause();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn request_pause(_audio: &MediaElement) {}

/// Read the element's technical properties. Never fails.
#[cfg(target_arch = "wasm32")]
pub fn inspect(audio: Option<&MediaElement>) -> TechnicalState {
    let Some(audio) = audio else {
        return TechnicalState::detached();
    };
    let duration = audio.duration();
    let current_src = audio.current_src();
    let src = if current_src.is_empty() {
        audio.src()
    } else {
        current_src
    };
    TechnicalState {
        attached: true,
        ready_state: Some(audio.ready_state()),
        paused: Some(audio.paused()),
        src: (!src.is_empty()).then_some(src),
        duration: (!duration.is_nan()).then_some(duration),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn inspect(_audio: Option<&MediaElement>) -> TechnicalState {
    TechnicalState::detached()
}

#[cfg(target_arch = "wasm32")]
fn read_signal_detail(audio: &HtmlAudioElement) -> SignalDetail {
    SignalDetail {
        duration: audio.duration(),
        error: audio.error().map(|err| MediaErrorInfo {
            code: err.code(),
            message: err.message(),
        }),
    }
}

#[cfg(target_arch = "wasm32")]
impl SignalTarget for HtmlAudioElement {
    type Handle = Closure<dyn FnMut(web_sys::Event)>;

    fn subscribe(&self, signal: MediaSignal, handler: SignalHandler) -> Option<Self::Handle> {
        let audio = self.clone();
        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler(signal, read_signal_detail(&audio));
        }) as Box<dyn FnMut(web_sys::Event)>);
        self.add_event_listener_with_callback(
            signal.event_name(),
            callback.as_ref().unchecked_ref(),
        )
        .ok()?;
        Some(callback)
    }

    fn unsubscribe(&self, signal: MediaSignal, handle: &Self::Handle) {
        let _ = self.remove_event_listener_with_callback(
            signal.event_name(),
            handle.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl super::SignalTarget for MediaElement {
    type Handle = ();

    fn subscribe(
        &self,
        _signal: super::MediaSignal,
        _handler: super::SignalHandler,
    ) -> Option<Self::Handle> {
        None
    }

    fn unsubscribe(&self, _signal: super::MediaSignal, _handle: &Self::Handle) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_are_unique_per_instance() {
        let a = media_element_id(&uuid::Uuid::new_v4());
        let b = media_element_id(&uuid::Uuid::new_v4());
        assert!(a.starts_with("miniplayer-audio-"));
        assert_ne!(a, b);
    }

    #[test]
    fn inspecting_without_element_returns_detached_record() {
        let first = inspect(None);
        let second = inspect(None);
        assert_eq!(first, TechnicalState::detached());
        assert_eq!(first, second);
    }
}
