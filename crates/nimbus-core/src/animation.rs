use crate::convert::PalettedFrame;

/// How an encoded animation should loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loop {
    /// Repeat forever.
    Infinite,
    /// Play through once and stop.
    Once,
}

/// An assembled animation: palette-indexed frames in chronological order
/// with one delay per frame.
#[derive(Clone, Debug)]
pub struct Animation {
    pub frames: Vec<PalettedFrame>,
    /// Per-frame delay in hundredths of a second; same length as `frames`.
    pub delays: Vec<u16>,
    pub looping: Loop,
}

/// Combine converted frames with a uniform delay and a loop policy.
pub fn assemble(frames: Vec<PalettedFrame>, delay: u16, repeat: bool) -> Animation {
    let delays = vec![delay; frames.len()];
    let looping = if repeat { Loop::Infinite } else { Loop::Once };
    Animation {
        frames,
        delays,
        looping,
    }
}
