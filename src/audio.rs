//! Sound effects and background music
//!
//! Gameplay code only ever asks for a sound by `SoundId`; whether anything is
//! actually heard depends on the backend picked at startup. The `mixer`
//! cargo feature is on by default; without it, or if SDL2_mixer fails to
//! open, the game runs with `SilentAudio`. A sound file that fails to load becomes a silent handle.

use std::path::Path;
use tracing::debug;
#[cfg(feature = "mixer")]
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Hack,
    Jump,
    Damage,
}

impl SoundId {
    pub const ALL: [SoundId; 3] = [SoundId::Hack, SoundId::Jump, SoundId::Damage];

    pub fn file_name(&self) -> &'static str {
        match self {
            SoundId::Hack => "hack.wav",
            SoundId::Jump => "jump.wav",
            SoundId::Damage => "damage.wav",
        }
    }
}

pub const MUSIC_FILE: &str = "background.mp3";

/// Fire-and-forget audio output
pub trait Audio {
    fn play_sound(&mut self, sound: SoundId);

    /// Starts the looping background track at `volume` (0.0 - 1.0).
    fn start_music(&mut self, volume: f32);
}

/// Backend that plays nothing
#[derive(Debug, Default)]
pub struct SilentAudio;

impl Audio for SilentAudio {
    fn play_sound(&mut self, sound: SoundId) {
        debug!(?sound, "sound (silent)");
    }

    fn start_music(&mut self, _volume: f32) {}
}

/// Picks the best available backend for the sounds under `<assets_dir>/sounds`.
pub fn open(sdl: &sdl2::Sdl, assets_dir: &Path, enabled: bool) -> Box<dyn Audio> {
    if !enabled {
        debug!("sound disabled in config");
        return Box::new(SilentAudio);
    }

    #[cfg(feature = "mixer")]
    {
        match mixer::MixerAudio::open(sdl, &assets_dir.join("sounds")) {
            Ok(audio) => {
                info!("audio mixer opened");
                return Box::new(audio);
            }
            Err(e) => warn!(error = %e, "audio unavailable, running silent"),
        }
    }

    #[cfg(not(feature = "mixer"))]
    {
        let _ = (sdl, assets_dir);
        debug!("built without the mixer feature, running silent");
    }

    Box::new(SilentAudio)
}

#[cfg(feature = "mixer")]
mod mixer {
    use super::{Audio, MUSIC_FILE, SoundId};
    use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, Sdl2MixerContext, AUDIO_S16LSB, MAX_VOLUME};
    use std::collections::HashMap;
    use std::path::Path;
    use tracing::warn;

    pub struct MixerAudio {
        chunks: HashMap<SoundId, Chunk>,
        music: Option<Music<'static>>,
        _context: Sdl2MixerContext,
        _audio: sdl2::AudioSubsystem,
    }

    impl MixerAudio {
        pub fn open(sdl: &sdl2::Sdl, sounds_dir: &Path) -> Result<Self, String> {
            let audio = sdl.audio()?;
            mixer::open_audio(44_100, AUDIO_S16LSB, 2, 1_024)?;
            let context = mixer::init(InitFlag::MP3)?;
            mixer::allocate_channels(8);

            let mut chunks = HashMap::new();
            for sound in SoundId::ALL {
                let path = sounds_dir.join(sound.file_name());
                match Chunk::from_file(&path) {
                    Ok(chunk) => {
                        chunks.insert(sound, chunk);
                    }
                    Err(e) => warn!(path = %path.display(), error = %e, "sound unavailable"),
                }
            }

            let music_path = sounds_dir.join(MUSIC_FILE);
            let music = match Music::from_file(&music_path) {
                Ok(music) => Some(music),
                Err(e) => {
                    warn!(path = %music_path.display(), error = %e, "music unavailable");
                    None
                }
            };

            Ok(MixerAudio {
                chunks,
                music,
                _context: context,
                _audio: audio,
            })
        }
    }

    impl Audio for MixerAudio {
        fn play_sound(&mut self, sound: SoundId) {
            if let Some(chunk) = self.chunks.get(&sound) {
                if let Err(e) = Channel::all().play(chunk, 0) {
                    warn!(?sound, error = %e, "failed to play sound");
                }
            }
        }

        fn start_music(&mut self, volume: f32) {
            if let Some(music) = &self.music {
                Music::set_volume((volume.clamp(0.0, 1.0) * MAX_VOLUME as f32) as i32);
                if let Err(e) = music.play(-1) {
                    warn!(error = %e, "failed to start music");
                }
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Remembers every sound request
    #[derive(Debug, Default)]
    pub struct RecordingAudio {
        pub played: Vec<SoundId>,
    }

    impl Audio for RecordingAudio {
        fn play_sound(&mut self, sound: SoundId) {
            self.played.push(sound);
        }

        fn start_music(&mut self, _volume: f32) {}
    }
}
