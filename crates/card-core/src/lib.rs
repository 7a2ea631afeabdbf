pub mod config;
pub mod constants;
pub mod content;
pub mod ease;
pub mod error;
pub mod lifecycle;
pub mod particles;
pub mod playback;
pub mod scheduler;
pub mod scroll;
pub mod sequencer;
pub mod tween;

pub use config::CardConfig;
pub use error::CardError;
pub use lifecycle::{PageAction, PageLifecycle};
pub use particles::{particle_count, Particle, ParticleField, ParticleSurface, Viewport};
pub use playback::{AudioPlaybackState, AutoplayOutcome, MediaElement, MediaEvent, PlaybackController};
pub use scheduler::{FrameScheduler, FrameTime, Registration};
pub use sequencer::{SequencerEvent, SequencerEvents, ViewSequencer, ViewState};
