use pointfield_core::config::{Fade, FieldConfig};
use pointfield_core::error::{self, Error};
use pointfield_core::field::{ParticleField, Segment};
use wasm_bindgen::prelude::*;

/// Floats per segment, for the JS side to stride through the buffer.
#[wasm_bindgen]
pub fn segment_stride() -> usize {
    Segment::STRIDE
}

fn js_error(e: Error) -> JsError {
    JsError::new(&e.to_string())
}

/// Numbers coming from JS are only trusted once `typeof` says "number".
fn number(value: &JsValue, param: &'static str) -> Result<f32, JsError> {
    error::number(value.as_f64(), param).map_err(js_error)
}

fn index(value: &JsValue, param: &'static str) -> Result<usize, JsError> {
    error::index(value.as_f64(), param).map_err(js_error)
}

/// Sizes an allocation, so it is capped before any memory is requested.
fn capacity(value: &JsValue, param: &'static str) -> Result<usize, JsError> {
    error::capacity(value.as_f64(), param).map_err(js_error)
}

fn fade_from(mode: u8) -> Fade {
    match mode {
        1 => Fade::In,
        2 => Fade::Out,
        3 => Fade::InOut,
        _ => Fade::None,
    }
}

#[wasm_bindgen]
pub struct PointField {
    field: ParticleField,
    segments: Vec<Segment>,
    tick: u32,
}

#[wasm_bindgen]
impl PointField {
    #[wasm_bindgen(constructor)]
    pub fn new(
        count: JsValue,
        max: JsValue,
        width: JsValue,
        height: JsValue,
    ) -> Result<PointField, JsError> {
        let config = FieldConfig {
            count: index(&count, "count")?,
            max: capacity(&max, "max")?,
            bounds: glam::Vec2::new(number(&width, "width")?, number(&height, "height")?),
            ..FieldConfig::default()
        };

        let mut seed = [0u8; 4];
        getrandom::getrandom(&mut seed).map_err(|e| JsError::new(&e.to_string()))?;

        let field = ParticleField::new(config, u32::from_le_bytes(seed)).map_err(js_error)?;
        let segments = vec![Segment::default(); field.particles().max()];

        web_sys::console::log_1(
            &format!(
                "WASM PointField created: {} of {} particles",
                field.count(),
                field.particles().max()
            )
            .into(),
        );

        let mut world = PointField { field, segments, tick: 0 };
        world.write_segments();
        Ok(world)
    }

    /// Advance one frame; returns the time spent in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self) -> f32 {
        let start = js_sys::Date::now();
        self.field.step();
        self.tick = self.tick.wrapping_add(1);
        self.write_segments();
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn get_segment_buffer_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<Segment, f32>(&self.segments).as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_segment_buffer_byte_length(&self) -> usize {
        self.field.count() * std::mem::size_of::<Segment>()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.field.count()
    }

    #[wasm_bindgen]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Grow or shrink the live population to `count`.
    #[wasm_bindgen]
    pub fn set_particle_count(&mut self, count: JsValue) -> Result<(), JsError> {
        let target = index(&count, "count")?;
        let current = self.field.count();
        if target > current {
            self.field.add_particles(target - current).map_err(js_error)?;
        } else {
            self.field.remove_particles(current - target);
        }
        self.write_segments();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_motion(&mut self, max_ttl: JsValue, speed: JsValue) -> Result<(), JsError> {
        let max_ttl = number(&max_ttl, "max_ttl")?;
        let speed = number(&speed, "speed")?;
        self.field.config.max_ttl = max_ttl;
        self.field.config.speed = speed;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_fade(&mut self, mode: u8) {
        self.field.config.fade = fade_from(mode);
    }

    /// Track a resized canvas. Particles outside the new area respawn on the next step.
    #[wasm_bindgen]
    pub fn set_bounds(&mut self, width: JsValue, height: JsValue) -> Result<(), JsError> {
        let width = number(&width, "width")?;
        let height = number(&height, "height")?;
        self.field.config.bounds = glam::Vec2::new(width, height);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn respawn(&mut self, i: JsValue) -> Result<(), JsError> {
        let i = index(&i, "i")?;
        if i < self.field.count() {
            self.field.spawn(i);
        }
        Ok(())
    }
}

impl PointField {
    fn write_segments(&mut self) {
        self.field.write_segments(&mut self.segments);
    }
}
