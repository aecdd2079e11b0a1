/// Playback state of an audio widget, as read from its media element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

impl PlaybackState {
    pub const fn from_paused(paused: bool) -> Self {
        if paused {
            Self::Paused
        } else {
            Self::Playing
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    /// Button text offering the opposite action
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Playing => "Pause",
            Self::Paused => "Play",
        }
    }
}
