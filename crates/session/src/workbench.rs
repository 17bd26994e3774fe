//! The screen's state machine.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rand::RngCore;
use rand::rngs::StdRng;
use tracing::{Instrument, debug, error, info, info_span, warn};

use deepauth_core::{
    AnalysisId, AnalysisInput, AnalysisResult, ImageAnalysisResult, ImageInput, Modality,
    SAMPLE_IMAGE_MIME, SampleKind, TextAnalysisResult,
};
use deepauth_engine::AnalysisEngine;
use deepauth_report::{FALLBACK_IMAGE_NAME, ReportArtifact, ReportSink, build_report};

use crate::display::TextStats;
use crate::error::SessionError;
use crate::fetch::{HttpSampleFetcher, SampleImageFetcher};
use crate::overlay::{OverlayCell, overlay_cells};

#[derive(Debug)]
struct State {
    active_tab: Modality,
    image: Option<ImageInput>,
    text: String,
    in_flight: bool,
    image_result: Option<ImageAnalysisResult>,
    text_result: Option<TextAnalysisResult>,
    /// Heatmap overlay toggle on the image result panel.
    show_heatmap: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            active_tab: Modality::Image,
            image: None,
            text: String::new(),
            in_flight: false,
            image_result: None,
            text_result: None,
            show_heatmap: false,
        }
    }
}

impl State {
    fn can_analyze(&self) -> bool {
        match self.active_tab {
            Modality::Image => self.image.is_some(),
            Modality::Text => !self.text.trim().is_empty(),
        }
    }

    fn pending_input(&self) -> Option<AnalysisInput> {
        if !self.can_analyze() {
            return None;
        }
        match self.active_tab {
            Modality::Image => self.image.clone().map(AnalysisInput::Image),
            Modality::Text => Some(AnalysisInput::Text(self.text.clone())),
        }
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.in_flight {
            return Err(SessionError::Busy);
        }
        Ok(())
    }

    fn store(&mut self, result: AnalysisResult) {
        match result {
            AnalysisResult::Image(r) => {
                self.image_result = Some(r);
                self.show_heatmap = false;
            }
            AnalysisResult::Text(r) => self.text_result = Some(r),
        }
    }
}

/// Clears the in-flight flag when the analysis ends, including when the
/// caller drops the `analyze` future early.
struct InFlight<'a> {
    state: &'a Mutex<State>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .in_flight = false;
    }
}

/// Headless workbench: input slots, results, and the one-at-a-time rule.
///
/// All methods take `&self`; the state sits behind a mutex that is only held
/// for short synchronous sections, so a view can keep reading it (e.g.
/// `is_analyzing`) while an analysis is suspended.
pub struct Workbench<R = StdRng> {
    engine: Arc<AnalysisEngine<R>>,
    fetcher: Arc<dyn SampleImageFetcher>,
    state: Mutex<State>,
}

impl<R> core::fmt::Debug for Workbench<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Workbench")
            .field("engine", &self.engine)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<R: RngCore + Send + 'static> Workbench<R> {
    /// Workbench on the image tab, fetching samples over HTTP.
    pub fn new(engine: Arc<AnalysisEngine<R>>) -> Self {
        Self {
            engine,
            fetcher: Arc::new(HttpSampleFetcher::default()),
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_fetcher(mut self, fetcher: impl SampleImageFetcher) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn active_tab(&self) -> Modality {
        self.lock().active_tab
    }

    /// Switching tabs keeps both input slots and both results.
    pub fn set_tab(&self, tab: Modality) {
        self.lock().active_tab = tab;
    }

    pub fn selected_image(&self) -> Option<ImageInput> {
        self.lock().image.clone()
    }

    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    pub fn is_analyzing(&self) -> bool {
        self.lock().in_flight
    }

    pub fn image_result(&self) -> Option<ImageAnalysisResult> {
        self.lock().image_result.clone()
    }

    pub fn text_result(&self) -> Option<TextAnalysisResult> {
        self.lock().text_result.clone()
    }

    /// Result held for the active tab, if any.
    pub fn current_result(&self) -> Option<AnalysisResult> {
        let state = self.lock();
        match state.active_tab {
            Modality::Image => state.image_result.clone().map(Into::into),
            Modality::Text => state.text_result.clone().map(Into::into),
        }
    }

    /// Put an image in the image slot. Drops any previous image result.
    pub fn select_image(&self, image: ImageInput) -> Result<(), SessionError> {
        let mut state = self.lock();
        state.ensure_idle()?;
        debug!(
            file_name = image.file_name(),
            mime_type = image.mime_type(),
            bytes = image.size_bytes(),
            "image selected"
        );
        state.image = Some(image);
        state.image_result = None;
        state.show_heatmap = false;
        Ok(())
    }

    pub fn clear_image(&self) -> Result<(), SessionError> {
        let mut state = self.lock();
        state.ensure_idle()?;
        state.image = None;
        state.image_result = None;
        state.show_heatmap = false;
        Ok(())
    }

    pub fn heatmap_visible(&self) -> bool {
        self.lock().show_heatmap
    }

    /// Flip the heatmap overlay. Stays off while there is no image result;
    /// returns the new visibility.
    pub fn toggle_heatmap(&self) -> bool {
        let mut state = self.lock();
        state.show_heatmap = state.image_result.is_some() && !state.show_heatmap;
        state.show_heatmap
    }

    /// Overlay cells for the image result, laid over an image of the given
    /// natural size. `None` while the overlay is hidden.
    pub fn heatmap_overlay(&self, image_width: f64, image_height: f64) -> Option<Vec<OverlayCell>> {
        let state = self.lock();
        if !state.show_heatmap {
            return None;
        }
        let result = state.image_result.as_ref()?;
        Some(overlay_cells(&result.heatmap_data, image_width, image_height))
    }

    /// Replace the text slot. Drops any previous text result.
    pub fn set_text(&self, text: impl Into<String>) -> Result<(), SessionError> {
        let mut state = self.lock();
        state.ensure_idle()?;
        state.text = text.into();
        state.text_result = None;
        Ok(())
    }

    /// Live counter for the current text.
    pub fn text_stats(&self) -> TextStats {
        TextStats::of(&self.lock().text)
    }

    /// Whether the analyze button is enabled.
    pub fn can_analyze(&self) -> bool {
        let state = self.lock();
        !state.in_flight && state.can_analyze()
    }

    /// Analyze the active tab's input and keep the result.
    ///
    /// Returns `None` without doing anything when the input is missing or
    /// blank, or when another analysis is still running. Engine failures are
    /// logged and also yield `None`; whatever the slot held before is left
    /// untouched (only editing the input clears it).
    pub async fn analyze(&self) -> Option<AnalysisResult> {
        let input = {
            let mut state = self.lock();
            if state.in_flight {
                debug!("analysis already running; ignoring request");
                return None;
            }
            let input = state.pending_input()?;
            state.in_flight = true;
            input
        };
        let _in_flight = InFlight { state: &self.state };

        let id = AnalysisId::new();
        let span = info_span!("analysis", analysis_id = %id, modality = %input.modality());

        match self.engine.analyze(&input).instrument(span).await {
            Ok(result) => {
                self.lock().store(result.clone());
                Some(result)
            }
            Err(e) => {
                error!(analysis_id = %id, error = %e, "analysis failed");
                None
            }
        }
    }

    /// Load the sample for the active tab.
    ///
    /// Text samples are set directly. Image samples are downloaded through
    /// the fetcher and selected as `sample-{kind}.jpg`. Failures are logged
    /// and reported as `false`.
    pub async fn load_sample(&self, kind: SampleKind) -> bool {
        match self.try_load_sample(kind).await {
            Ok(()) => true,
            Err(e) => {
                warn!(sample = kind.as_str(), error = %e, "failed to load sample");
                false
            }
        }
    }

    async fn try_load_sample(&self, kind: SampleKind) -> Result<(), SessionError> {
        match self.active_tab() {
            Modality::Text => self.set_text(kind.text()),
            Modality::Image => {
                let bytes = self.fetcher.fetch(kind.image_url()).await?;
                let image = ImageInput::new(kind.image_file_name(), SAMPLE_IMAGE_MIME, bytes)?;
                self.select_image(image)?;
                info!(sample = kind.as_str(), "sample image loaded");
                Ok(())
            }
        }
    }

    /// Report artifact for the active tab's result, stamped with `at`.
    pub fn report_at(&self, at: DateTime<Utc>) -> Result<ReportArtifact, SessionError> {
        let state = self.lock();
        let artifact = match state.active_tab {
            Modality::Image => {
                let result = state
                    .image_result
                    .clone()
                    .ok_or(SessionError::NothingToReport)?;
                let file_name = state
                    .image
                    .as_ref()
                    .map_or(FALLBACK_IMAGE_NAME, ImageInput::file_name);
                build_report(&AnalysisResult::from(result), file_name, at)?
            }
            Modality::Text => {
                let result = state
                    .text_result
                    .clone()
                    .ok_or(SessionError::NothingToReport)?;
                build_report(&AnalysisResult::from(result), &state.text, at)?
            }
        };
        Ok(artifact)
    }

    /// Build the active tab's report and offer it to `sink`. Returns the
    /// suggested file name.
    pub fn download_report(&self, sink: &dyn ReportSink) -> Result<String, SessionError> {
        let artifact = self.report_at(Utc::now())?;
        deepauth_report::download_report(sink, &artifact.content, &artifact.file_name)?;
        Ok(artifact.file_name)
    }
}
