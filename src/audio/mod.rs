//! Audio domain: preloaded sound cues played on request.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

#[cfg(test)]
mod tests;

const JUMP_SOUND_PATH: &str = "audio/jump.wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
}

/// Request to play a cue once. Fire-and-forget.
#[derive(Debug)]
pub struct PlaySound {
    pub cue: SoundCue,
}

impl Message for PlaySound {}

/// Handles loaded at startup so playback never waits on the asset server.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    jump: Option<Handle<AudioSource>>,
}

impl SoundBank {
    pub fn handle(&self, cue: SoundCue) -> Option<Handle<AudioSource>> {
        match cue {
            SoundCue::Jump => self.jump.clone(),
        }
    }
}

pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_message::<PlaySound>()
            .add_systems(Startup, load_sound_bank)
            .add_systems(Update, play_requested_sounds);
    }
}

fn load_sound_bank(mut bank: ResMut<SoundBank>, asset_server: Res<AssetServer>) {
    bank.jump = Some(asset_server.load(JUMP_SOUND_PATH));
}

fn play_requested_sounds(
    mut commands: Commands,
    mut requests: MessageReader<PlaySound>,
    bank: Res<SoundBank>,
) {
    for request in requests.read() {
        let Some(handle) = bank.handle(request.cue) else {
            warn!("No sound loaded for {:?}", request.cue);
            continue;
        };
        commands.spawn((AudioPlayer::new(handle), PlaybackSettings::DESPAWN));
    }
}
