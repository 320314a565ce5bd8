use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use gif::{Encoder, Frame, Repeat};
use tracing::info;

use crate::animation::{Animation, Loop};
use crate::error::Result;
use crate::palette;

/// Write an animation as a GIF using the shared global palette.
///
/// A play-once animation simply omits the repeat extension.
pub fn write_gif(anim: &Animation, path: &Path) -> Result<()> {
    let (width, height) = anim
        .frames
        .first()
        .map(|f| (f.width as u16, f.height as u16))
        .unwrap_or((0, 0));

    let file = File::create(path)?;
    let global = palette::flattened();
    let mut encoder = Encoder::new(file, width, height, &global)?;
    if anim.looping == Loop::Infinite {
        encoder.set_repeat(Repeat::Infinite)?;
    }

    for (frame, &delay) in anim.frames.iter().zip(&anim.delays) {
        let gif_frame = Frame {
            width: frame.width as u16,
            height: frame.height as u16,
            delay,
            buffer: Cow::Borrowed(&frame.indices),
            ..Frame::default()
        };
        encoder.write_frame(&gif_frame)?;
    }

    info!(frames = anim.frames.len(), path = %path.display(), "GIF written");
    Ok(())
}
