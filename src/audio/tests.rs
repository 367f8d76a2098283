//! Audio: tests for the shipped cues and the sound bank.

use std::path::Path;

use super::{JUMP_SOUND_PATH, SoundBank, SoundCue};

#[test]
fn test_jump_sound_is_shipped_as_wav() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(JUMP_SOUND_PATH);
    let bytes = std::fs::read(&path).expect("jump sound should be shipped");

    assert!(bytes.len() > 44, "jump sound has no samples");
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
}

#[test]
fn test_empty_bank_has_no_handle() {
    let bank = SoundBank::default();
    assert!(bank.handle(SoundCue::Jump).is_none());
}
