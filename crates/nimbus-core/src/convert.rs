use std::thread;

use image::RgbImage;

use crate::palette::{nearest, reference_palette, PALETTE_SIZE};
use crate::pipeline::ProgressReporter;

/// A raster quantized onto the shared reference palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PalettedFrame {
    pub width: u32,
    pub height: u32,
    /// One palette index per pixel, row-major.
    pub indices: Vec<u8>,
}

/// Quantize every frame onto the shared palette using `workers` threads.
///
/// Frame `i` of the output is always the quantized frame `i` of the input:
/// each worker owns the contiguous block `[i * (n / workers), ..)` of
/// `n / workers` output slots, workers `0..n % workers` each take one extra
/// trailing slot, and the slots are handed out as disjoint mutable splits
/// before any thread starts. Completion order cannot affect placement.
///
/// Surplus workers (`workers > n`) get an empty assignment and return
/// immediately. The call blocks until every worker has finished.
pub fn convert_frames(
    frames: &[RgbImage],
    workers: usize,
    reporter: &dyn ProgressReporter,
) -> Vec<PalettedFrame> {
    let n = frames.len();
    let workers = workers.max(1);
    let palette = reference_palette();

    let block = n / workers;
    let rem = n % workers;

    let mut out: Vec<Option<PalettedFrame>> = (0..n).map(|_| None).collect();
    let (head, tail) = out.split_at_mut(n - rem);
    // `head` is `workers * block` slots; with `block == 0` it is empty and
    // the chunk size below only keeps `chunks_mut` well-defined.
    let mut blocks = head.chunks_mut(block.max(1));
    let mut extras = tail.chunks_mut(1);

    thread::scope(|s| {
        for id in 0..workers {
            let slots = if block > 0 { blocks.next() } else { None };
            let extra = if id < rem { extras.next() } else { None };
            s.spawn(move || {
                if let Some(slots) = slots {
                    let offset = id * block;
                    for (j, slot) in slots.iter_mut().enumerate() {
                        *slot = Some(quantize(&frames[offset + j], palette));
                        reporter.advance(1);
                    }
                }
                if let Some(extra) = extra {
                    let index = workers * block + id;
                    extra[0] = Some(quantize(&frames[index], palette));
                    reporter.advance(1);
                }
            });
        }
    });

    out.into_iter()
        .map(|f| f.expect("every slot is assigned to exactly one worker"))
        .collect()
}

fn quantize(img: &RgbImage, palette: &'static [[u8; 3]; PALETTE_SIZE]) -> PalettedFrame {
    let indices = img.pixels().map(|p| nearest(palette, p.0)).collect();
    PalettedFrame {
        width: img.width(),
        height: img.height(),
        indices,
    }
}
