use indicatif::{ProgressBar, ProgressStyle};
use nimbus_core::pipeline::{PipelineStage, ProgressReporter};

/// Drives a single indicatif bar from pipeline progress callbacks.
///
/// Stages without a known item count render as a spinner; counted stages
/// switch to a bar.
pub struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Done");
    }
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        match total_items {
            Some(total) => {
                self.bar.set_style(
                    ProgressStyle::default_bar()
                        .template("{msg:20} [{bar:40}] {pos}/{len}")
                        .expect("valid template")
                        .progress_chars("=> "),
                );
                self.bar.set_length(total as u64);
            }
            None => {
                self.bar.set_style(ProgressStyle::default_spinner());
            }
        }
        self.bar.set_position(0);
        self.bar.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.bar.inc(items_done as u64);
    }
}
