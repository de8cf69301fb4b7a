use app_state::ClipSettings;
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::clip::{ClipConfig, ClipModel};
use color_eyre::eyre::Result;
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use image::ImageReader;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::info;

// Per-channel normalization constants the encoder was trained with.
const CLIP_MEAN: [f32; 3] = [0.481_454_66, 0.457_827_5, 0.408_210_73];
const CLIP_STD: [f32; 3] = [0.268_629_54, 0.261_302_58, 0.275_777_11];

/// Pretrained ViT-B/32 image-text encoder.
pub struct ClipEncoder {
    model: ClipModel,
    config: ClipConfig,
    device: Device,
}

impl ClipEncoder {
    /// Load the pretrained weights once; the instance is reused for all calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the weights cannot be resolved or the compute
    /// device cannot be initialized.
    pub fn load(settings: &ClipSettings) -> Result<Self> {
        let device = pick_device()?;
        let weights = resolve_weights(settings)?;
        info!("Loading encoder weights from {}", weights.display());

        let config = ClipConfig::vit_base_patch32();
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, &device)? };
        let model = ClipModel::new(vb, &config)?;

        Ok(Self {
            model,
            config,
            device,
        })
    }

    /// Embed one image into the encoder's shared text-image space.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or the forward pass
    /// fails.
    pub fn embed_image(&self, file: &Path) -> Result<Vec<f32>> {
        let pixels = preprocess_image(file, self.config.image_size, &self.device)?;
        let batch = pixels.unsqueeze(0)?;
        let features = self.model.get_image_features(&batch)?;
        let embedding = features.flatten_all()?.to_vec1::<f32>()?;
        Ok(l2_normalize(embedding))
    }
}

fn resolve_weights(settings: &ClipSettings) -> Result<PathBuf> {
    if let Some(file) = &settings.weights_file {
        return Ok(file.clone());
    }
    let api = Api::new()?;
    let repo = api.repo(Repo::with_revision(
        settings.model_id.clone(),
        RepoType::Model,
        settings.revision.clone(),
    ));
    Ok(repo.get("model.safetensors")?)
}

/// CUDA when present, otherwise Metal, otherwise plain CPU.
pub fn pick_device() -> Result<Device> {
    if candle_core::utils::cuda_is_available() {
        Ok(Device::new_cuda(0)?)
    } else if candle_core::utils::metal_is_available() {
        Ok(Device::new_metal(0)?)
    } else {
        Ok(Device::Cpu)
    }
}

/// Decode an image and turn it into the encoder input: a `(3, size, size)`
/// f32 tensor, normalized with the encoder's channel constants.
pub fn preprocess_image(file: &Path, image_size: usize, device: &Device) -> Result<Tensor> {
    let img = ImageReader::open(file)?.with_guessed_format()?.decode()?;
    let img = img.resize_to_fill(image_size as u32, image_size as u32, FilterType::Triangle);

    let pixels = Tensor::from_vec(
        img.to_rgb8().into_raw(),
        (image_size, image_size, 3),
        device,
    )?
    .permute((2, 0, 1))?
    .to_dtype(DType::F32)?
    .affine(1. / 255., 0.)?;

    let mean = Tensor::new(&CLIP_MEAN, device)?.reshape((3, 1, 1))?;
    let std = Tensor::new(&CLIP_STD, device)?.reshape((3, 1, 1))?;
    Ok(pixels.broadcast_sub(&mean)?.broadcast_div(&std)?)
}

/// Scale a vector to unit L2 norm. The zero vector is returned unchanged.
#[must_use]
pub fn l2_normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm = embedding.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0. {
        for v in &mut embedding {
            *v /= norm;
        }
    }
    embedding
}
