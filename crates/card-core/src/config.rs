use crate::content::CardContent;
use crate::particles::FieldParams;
use crate::playback::AudioSettings;
use crate::sequencer::SequencerTimings;

/// Everything tunable about the card, defaulting to the values in
/// [`crate::constants`] and [`crate::content`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardConfig {
    pub content: CardContent,
    pub timings: SequencerTimings,
    pub snow: FieldParams,
    pub audio: AudioSettings,
}
