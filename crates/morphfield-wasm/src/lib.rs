use morphfield_core::{EngineConfig, GeometryEngine, MorphError, ShapeId, VertexAttributes};
use wasm_bindgen::prelude::*;

/// GPU-compatible vertex: 64 bytes, matches the WGSL `MorphVertex` layout.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],     // 12 bytes
    pub mass: f32,              //  4 bytes
    pub charge: f32,            //  4 bytes
    pub symmetry_index: f32,    //  4 bytes
    pub light_reflectivity: f32,
    pub light_absorption: f32,
    pub valency: f32,
    pub volume: f32,
    pub density: f32,
    pub orientation: [f32; 3],  // 12 bytes
    pub _pad: [f32; 2],         //  8 bytes
}

impl From<&VertexAttributes> for GpuVertex {
    fn from(v: &VertexAttributes) -> Self {
        GpuVertex {
            position: v.position.as_vec3().to_array(),
            mass: v.mass as f32,
            charge: v.charge as f32,
            symmetry_index: v.symmetry_index as f32,
            light_reflectivity: v.light_reflectivity as f32,
            light_absorption: v.light_absorption as f32,
            valency: v.valency as f32,
            volume: v.volume as f32,
            density: v.density as f32,
            orientation: v.orientation.as_vec3().to_array(),
            _pad: [0.0; 2],
        }
    }
}

fn to_js(err: MorphError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct MorphWorld {
    engine: GeometryEngine,
    gpu_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl MorphWorld {
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        radius: f64,
        polygon_count: u32,
        grid_width: u32,
        grid_height: u32,
        morph_speed: f64,
        dynamic_evolution: bool,
        initial_shape: &str,
        seed: Option<u64>,
    ) -> Result<MorphWorld, JsValue> {
        let config = EngineConfig {
            radius,
            polygon_count,
            grid_width,
            grid_height,
            morph_speed,
            dynamic_evolution,
            initial_shape: initial_shape.parse::<ShapeId>().map_err(to_js)?,
            seed,
        };
        let engine = GeometryEngine::configure(config).map_err(to_js)?;

        web_sys::console::log_1(
            &format!(
                "WASM MorphWorld created: {} vertices, {}x{} property grid, shape {}",
                polygon_count, grid_width, grid_height, initial_shape
            )
            .into(),
        );

        let mut world = MorphWorld {
            engine,
            gpu_buffer: Vec::with_capacity(polygon_count as usize),
        };
        world.write_gpu_output();
        Ok(world)
    }

    /// Advance one frame; returns the time spent in milliseconds.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f64) -> Result<f32, JsValue> {
        let start = js_sys::Date::now();
        self.engine.update(dt).map_err(to_js)?;
        self.write_gpu_output();
        let elapsed = js_sys::Date::now() - start;
        Ok(elapsed as f32)
    }

    #[wasm_bindgen]
    pub fn request_morph(&mut self, target: &str, duration: f64) -> Result<(), JsValue> {
        self.engine.request_morph_named(target, duration).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_dynamic_evolution(&mut self, enabled: bool) {
        self.engine.set_dynamic_evolution(enabled);
    }

    #[wasm_bindgen]
    pub fn set_morph_speed(&mut self, speed: f64) -> Result<(), JsValue> {
        self.engine.set_morph_speed(speed).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn current_shape(&self) -> String {
        self.engine.snapshot().current_shape.to_string()
    }

    /// Blend progress in `[0, 1]`; 1.0 when no morph is running.
    #[wasm_bindgen]
    pub fn morph_progress(&self) -> f64 {
        self.engine.snapshot().transition.map_or(1.0, |t| t.progress())
    }

    #[wasm_bindgen]
    pub fn is_morphing(&self) -> bool {
        self.engine.snapshot().transition.is_some()
    }

    #[wasm_bindgen]
    pub fn time(&self) -> f64 {
        self.engine.snapshot().time
    }

    #[wasm_bindgen]
    pub fn vertex_count(&self) -> usize {
        self.gpu_buffer.len()
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<GpuVertex, u8>(&self.gpu_buffer).len()
    }

    #[wasm_bindgen]
    pub fn shape_names() -> Vec<String> {
        ShapeId::ALL.iter().map(|s| s.name().to_string()).collect()
    }
}

impl MorphWorld {
    fn write_gpu_output(&mut self) {
        self.gpu_buffer.clear();
        self.gpu_buffer
            .extend(self.engine.current_attributes().iter().map(GpuVertex::from));
    }
}
