//! Browser Media
//!
//! Microphone capture for the candle ceremony, background music control and
//! haptic feedback.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AnalyserNode, AudioContext, HtmlMediaElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

/// FFT size for the blow analyser (128 frequency bins)
const FFT_SIZE: u32 = 256;

/// An open microphone stream with an analyser attached
///
/// Dropping the guard stops every track and closes the audio context, so the
/// browser's recording indicator goes away on every exit path.
pub struct MicrophoneGuard {
    stream: MediaStream,
    context: Option<AudioContext>,
    analyser: Option<AnalyserNode>,
    bins: Vec<u8>,
}

impl MicrophoneGuard {
    /// Ask for the microphone. Rejection by the user comes back as `Err`.
    pub async fn acquire() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let devices = window.navigator().media_devices()?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices.get_user_media_with_constraints(&constraints)?;
        let stream: MediaStream = JsFuture::from(promise).await?.dyn_into()?;

        let mut guard = Self {
            stream,
            context: None,
            analyser: None,
            bins: Vec::new(),
        };
        guard.attach_analyser()?;
        Ok(guard)
    }

    fn attach_analyser(&mut self) -> Result<(), JsValue> {
        let context = AudioContext::new()?;
        self.context = Some(context.clone());

        let analyser = context.create_analyser()?;
        analyser.set_fft_size(FFT_SIZE);
        let source = context.create_media_stream_source(&self.stream)?;
        source.connect_with_audio_node(&analyser)?;

        self.bins = vec![0; analyser.frequency_bin_count() as usize];
        self.analyser = Some(analyser);
        Ok(())
    }

    /// Current frequency-bin levels
    pub fn sample(&mut self) -> &[u8] {
        if let Some(analyser) = &self.analyser {
            analyser.get_byte_frequency_data(&mut self.bins);
        }
        &self.bins
    }
}

impl Drop for MicrophoneGuard {
    fn drop(&mut self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        if let Some(context) = self.context.take() {
            let _ = context.close();
        }
        log::debug!("microphone released");
    }
}

/// Start playback; browsers may refuse without a user gesture
pub async fn play(media: HtmlMediaElement) -> Result<(), JsValue> {
    JsFuture::from(media.play()?).await?;
    Ok(())
}

pub fn pause(media: &HtmlMediaElement) {
    if let Err(e) = media.pause() {
        log::warn!("pause failed: {:?}", e);
    }
}

/// Buzz the device for `ms` milliseconds. Silently does nothing where the
/// Vibration API is missing (desktop, iOS Safari).
pub fn vibrate(ms: u32) {
    let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
        return;
    };
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false) {
        return;
    }
    if !navigator.vibrate_with_duration(ms) {
        log::debug!("vibration refused");
    }
}
