use crate::domain::ports::MediaLibrary;
use sdl2::hint::Hint;
use sdl2::{Sdl, VideoSubsystem};

pub const VIDEO_DRIVER_HINT: &str = "SDL_VIDEODRIVER";

/// SDL2 backed [`MediaLibrary`].
///
/// Hints are applied right before `SDL_Init` with override priority, so they
/// win over environment variables of the same name. Dropping the retained
/// handles runs `SDL_QuitSubSystem` and `SDL_Quit`.
#[derive(Default)]
pub struct Sdl2Library {
    hints: Vec<(String, String)>,
    video: Option<VideoSubsystem>,
    context: Option<Sdl>,
}

impl Sdl2Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hints<I>(hints: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            hints: hints.into_iter().collect(),
            video: None,
            context: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.video.is_some()
    }

    fn apply_hints(&self) {
        for (name, value) in &self.hints {
            if sdl2::hint::set_with_priority(name, value, &Hint::Override) {
                tracing::debug!("🔧 SDL hint {}={}", name, value);
            } else {
                tracing::warn!("⚠️ SDL rejected hint {}={}", name, value);
            }
        }
    }
}

impl MediaLibrary for Sdl2Library {
    fn init_video(&mut self) -> Result<(), String> {
        self.apply_hints();

        let context = sdl2::init()?;
        let video = context.video()?;
        tracing::debug!("SDL video driver: {}", video.current_video_driver());

        self.video = Some(video);
        self.context = Some(context);
        Ok(())
    }

    fn shutdown(&mut self) {
        if !self.is_initialized() {
            return;
        }
        // 先釋放子系統，再釋放 context
        drop(self.video.take());
        drop(self.context.take());
        tracing::debug!("SDL context released");
    }
}

impl Drop for Sdl2Library {
    fn drop(&mut self) {
        self.shutdown();
    }
}
