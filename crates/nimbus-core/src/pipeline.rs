use chrono::NaiveDate;
use tracing::info;

use crate::animation::{assemble, Animation};
use crate::capability::{validate_area, validate_param};
use crate::client::fetch_series;
use crate::convert::convert_frames;
use crate::decode::decode_series;
use crate::endpoint::series_url;
use crate::error::Result;
use crate::selector::{Area, Param, Satellite};

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum PipelineStage {
    ValidatingArea,
    ValidatingParam,
    Fetching,
    Decoding,
    Converting,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidatingArea => write!(f, "Checking area"),
            Self::ValidatingParam => write!(f, "Checking parameter"),
            Self::Fetching => write!(f, "Fetching images"),
            Self::Decoding => write!(f, "Decoding images"),
            Self::Converting => write!(f, "Converting frames"),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., frame count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` work items within the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op reporter for callers that don't track progress.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Everything needed to build one animation.
#[derive(Clone, Debug)]
pub struct AnimationRequest {
    pub satellite: Satellite,
    pub area: Area,
    pub param: Param,
    /// Day to fetch; the catalog serves one day of imagery per query.
    pub date: NaiveDate,
    /// Per-frame delay in hundredths of a second.
    pub delay: u16,
    pub repeat: bool,
    /// Palette-conversion worker thread count.
    pub workers: usize,
}

/// Fetch, validate, decode, and convert one day of imagery into an
/// animation.
///
/// The area is checked against the catalog's advertised list before the
/// parameter is, since parameter validity is scoped to an accepted area.
/// Any stage failure aborts the run; no partial animation is produced.
pub fn fetch_animation(req: &AnimationRequest, reporter: &dyn ProgressReporter) -> Result<Animation> {
    reporter.begin_stage(PipelineStage::ValidatingArea, None);
    validate_area(req.satellite, req.area)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::ValidatingParam, None);
    validate_param(req.satellite, req.area, req.param)?;
    reporter.finish_stage();

    let url = series_url(req.satellite, req.area, req.param, req.date);
    info!(%url, "fetching image series");
    reporter.begin_stage(PipelineStage::Fetching, None);
    let entries = fetch_series(&url)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Decoding, Some(entries.len()));
    let frames = decode_series(&entries)?;
    reporter.finish_stage();

    info!(
        frames = frames.len(),
        workers = req.workers,
        "converting frames to the shared palette"
    );
    reporter.begin_stage(PipelineStage::Converting, Some(frames.len()));
    let paletted = convert_frames(&frames, req.workers, reporter);
    reporter.finish_stage();

    Ok(assemble(paletted, req.delay, req.repeat))
}
