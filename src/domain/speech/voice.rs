use super::{GenderPreference, VoiceHandle};

/// Pick a voice by list position.
///
/// `Male` takes the first enumerated voice, anything else takes the second.
/// Many engines list a male voice first and a female one second, but nothing
/// guarantees it. `None` means the engine default voice should be used.
pub fn select_voice(voices: &[VoiceHandle], preference: GenderPreference) -> Option<&VoiceHandle> {
    match preference {
        GenderPreference::Male if !voices.is_empty() => voices.first(),
        _ => voices.get(1),
    }
}
