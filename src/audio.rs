use anyhow::anyhow;
use js_sys::{Promise, Reflect};
use sonic_canvas_core::{
    AudioError, AudioState, AudioTransport, DspFactory, DspMeta, ParamDescriptor, ParamSink,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// Factory module emitted next to the page by the DSP compiler.
#[wasm_bindgen(raw_module = "../create-node.js")]
extern "C" {
    #[wasm_bindgen(js_name = createFaustNode, catch)]
    async fn create_faust_node(
        ctx: &web::AudioContext,
        name: &str,
        voices: u32,
    ) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// Audio worklet node wrapping the compiled DSP unit.
    #[wasm_bindgen(extends = web::AudioNode)]
    pub type FaustNode;

    #[wasm_bindgen(method, js_name = setParamValue)]
    fn set_param_value(this: &FaustNode, address: &str, value: f32);

    #[wasm_bindgen(method, getter, js_name = fDescriptor)]
    fn descriptor(this: &FaustNode) -> JsValue;
}

/// The DSP voice as the controller sees it.
#[derive(Clone)]
pub struct DspVoice {
    node: FaustNode,
}

impl DspVoice {
    pub fn descriptors(&self) -> Result<Vec<ParamDescriptor>, AudioError> {
        serde_wasm_bindgen::from_value(self.node.descriptor())
            .map_err(|e| AudioError::Descriptor(e.to_string()))
    }
}

impl ParamSink for DspVoice {
    fn set_param_value(&self, address: &str, value: f32) {
        self.node.set_param_value(address, value);
    }
}

/// Owns the audio context and builds DSP voices on it through the factory
/// module.
pub struct WebDspFactory {
    ctx: web::AudioContext,
}

impl WebDspFactory {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    /// Start suspended; the toggle button resumes it.
    async fn suspend_initially(&self) {
        let result = match self.ctx.suspend() {
            Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            log::warn!("[audio] initial suspend: {:?}", e);
        }
    }
}

impl DspFactory for WebDspFactory {
    type Voice = DspVoice;

    async fn create(&self, unit: &str, voice_mode: u32) -> Result<Option<DspVoice>, AudioError> {
        self.suspend_initially().await;

        let created = create_faust_node(&self.ctx, unit, voice_mode)
            .await
            .map_err(|e| AudioError::Context(format!("{:?}", e)))?;
        let Some(node) = Reflect::get(&created, &JsValue::from_str("faustNode"))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
        else {
            return Ok(None);
        };

        let meta: DspMeta = Reflect::get(&created, &JsValue::from_str("dspMeta"))
            .ok()
            .and_then(|v| serde_wasm_bindgen::from_value(v).ok())
            .unwrap_or_default();
        log::info!("[audio] DSP unit `{}` ready", meta.name);

        Ok(Some(DspVoice {
            node: node.unchecked_into::<FaustNode>(),
        }))
    }

    fn connect(&self, voice: &DspVoice) -> Result<(), AudioError> {
        voice
            .node
            .connect_with_audio_node(&self.ctx.destination())
            .map(|_| ())
            .map_err(|e| AudioError::Context(format!("connect: {:?}", e)))
    }

    fn descriptors(&self, voice: &DspVoice) -> Result<Vec<ParamDescriptor>, AudioError> {
        voice.descriptors()
    }
}

/// `AudioContext` driven through the toggle machine. Transitions hand back
/// the browser promise; a promise that could not even be created is returned
/// already rejected.
#[derive(Clone)]
pub struct WebAudioTransport {
    ctx: web::AudioContext,
}

impl WebAudioTransport {
    pub fn new(ctx: web::AudioContext) -> Self {
        Self { ctx }
    }
}

impl AudioTransport for WebAudioTransport {
    type Pending = Promise;

    fn state(&self) -> AudioState {
        match self.ctx.state() {
            web::AudioContextState::Running => AudioState::Running,
            _ => AudioState::Suspended,
        }
    }

    fn suspend(&self) -> Promise {
        self.ctx.suspend().unwrap_or_else(|e| Promise::reject(&e))
    }

    fn resume(&self) -> Promise {
        self.ctx.resume().unwrap_or_else(|e| Promise::reject(&e))
    }
}
