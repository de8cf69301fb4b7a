use crate::clip_encoder::ClipEncoder;
use crate::{AnalysisResult, get_caption_data, get_face_demographics};
use app_state::AnalyzerSettings;
use color_eyre::eyre::Result;
use std::path::Path;
use tracing::debug;

pub struct VisualAnalyzer {
    encoder: ClipEncoder,
}

impl VisualAnalyzer {
    /// Creates a new instance of the `VisualAnalyzer`, loading the
    /// pretrained encoder weights once for reuse across calls.
    ///
    /// # Errors
    ///
    /// This function will return an error if the weights cannot be
    /// resolved or no usable compute device is found.
    pub fn new(settings: &AnalyzerSettings) -> Result<Self> {
        let encoder = ClipEncoder::load(&settings.clip)?;
        Ok(Self { encoder })
    }

    /// Performs a visual analysis of the given image file: embed it, then
    /// assemble the caption and face demographics data.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or the forward pass
    /// fails.
    pub fn analyze_image(&self, file: &Path) -> Result<AnalysisResult> {
        let embedding = self.encoder.embed_image(file)?;
        debug!("Embedded {} into {} dims", file.display(), embedding.len());

        let clip_analysis = get_caption_data(&embedding);
        let fairface_analysis = get_face_demographics(file);

        Ok(AnalysisResult {
            clip_analysis,
            fairface_analysis,
        })
    }
}
