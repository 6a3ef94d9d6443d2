//! Audio start-up: instantiate the DSP voice, route it to the output and read
//! its parameter descriptors, keeping the toggle button disabled until the
//! voice exists.

use crate::error::AudioError;
use crate::params::{DescriptorTable, ParamDescriptor};

/// The button that suspends and resumes audio.
pub trait ToggleControl {
    fn set_enabled(&self, enabled: bool);
}

/// Source of DSP voices for a named processing unit.
#[allow(async_fn_in_trait)]
pub trait DspFactory {
    type Voice;

    /// Instantiate `unit`. `Ok(None)` means the factory answered but handed
    /// back no usable node.
    async fn create(&self, unit: &str, voice_mode: u32) -> Result<Option<Self::Voice>, AudioError>;

    /// Connect the voice's output to the final audio output.
    fn connect(&self, voice: &Self::Voice) -> Result<(), AudioError>;

    fn descriptors(&self, voice: &Self::Voice) -> Result<Vec<ParamDescriptor>, AudioError>;
}

pub struct DspReady<V> {
    pub voice: V,
    pub descriptors: DescriptorTable,
}

/// Disable the button, create and connect the voice, then re-enable the
/// button. Any failure leaves the button disabled.
pub async fn initialize<F, B>(
    factory: &F,
    button: &B,
    unit: &str,
    voice_mode: u32,
) -> Result<DspReady<F::Voice>, AudioError>
where
    F: DspFactory,
    B: ToggleControl + ?Sized,
{
    button.set_enabled(false);

    let voice = factory
        .create(unit, voice_mode)
        .await?
        .ok_or_else(|| AudioError::DspUnavailable {
            unit: unit.to_string(),
        })?;
    factory.connect(&voice)?;

    // Missing descriptors only turn off clamping.
    let descriptors = match factory.descriptors(&voice) {
        Ok(list) => DescriptorTable::new(list),
        Err(e) => {
            log::warn!("[audio] {}", e);
            DescriptorTable::default()
        }
    };
    descriptors.log_ranges();

    button.set_enabled(true);
    Ok(DspReady { voice, descriptors })
}
