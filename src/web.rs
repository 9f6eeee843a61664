//! Browser host: binds a [`ParticleField`] to a canvas element,
//! `requestAnimationFrame` and the window `resize` event.
//!
//! A canvas or 2d context that cannot be acquired gives an inert handle
//! instead of an error; the page simply has no particles.

use crate::animator::{resize_shared, tick_shared, Animator, FrameScheduler, SharedAnimator};
use crate::color::Color;
use crate::config::FieldConfig;
use crate::error::SurfaceError;
use crate::field::ParticleField;
use crate::surface::DrawSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use tracing::{debug, warn};
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

impl DrawSurface for CanvasRenderingContext2d {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color, alpha: f64) {
        self.set_fill_style_str(&color.css_rgba(alpha));
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64) {
        self.set_fill_style_str(&color.css_rgba(alpha));
        self.begin_path();
        if let Err(e) = self.arc(center[0], center[1], radius, 0.0, PI * 2.0) {
            warn!(?e, radius, "Failed to trace particle");
            return;
        }
        self.fill();
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
        alpha: f64,
    ) {
        self.set_stroke_style_str(&color.css_rgba(alpha));
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
    }
}

type Callback = Closure<dyn FnMut()>;
type CallbackSlot = Rc<RefCell<Option<Callback>>>;
type CanvasAnimator = Animator<CanvasRenderingContext2d, AnimationFrameScheduler>;

/// `window.requestAnimationFrame` with a callback owned by the handle.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: CallbackSlot,
}

impl FrameScheduler for AnimationFrameScheduler {
    type Token = i32;

    fn schedule(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        // Released at teardown
        let callback = callback.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(?e, "requestAnimationFrame failed");
                None
            }
        }
    }

    fn cancel(&mut self, id: i32) {
        if let Err(e) = self.window.cancel_animation_frame(id) {
            warn!(?e, id, "cancelAnimationFrame failed");
        }
    }
}

pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement, SurfaceError> {
    let document = web_sys::window()
        .ok_or(SurfaceError::NoWindow)?
        .document()
        .ok_or(SurfaceError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SurfaceError::NotACanvas(id.to_owned()))
}

pub fn acquire_context(
    canvas: &HtmlCanvasElement,
) -> Result<CanvasRenderingContext2d, SurfaceError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(SurfaceError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::ContextUnavailable)
}

// Sets the drawing buffer to the element's layout size.
fn fit_to_container(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width as f64, height as f64)
}

struct Attached {
    window: Window,
    animator: SharedAnimator<CanvasRenderingContext2d, AnimationFrameScheduler>,
    frame_callback: CallbackSlot,
    resize_callback: Option<Callback>,
}

impl Attached {
    fn new(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Attached, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let context = acquire_context(&canvas)?;
        let animator: SharedAnimator<CanvasRenderingContext2d, AnimationFrameScheduler> =
            Rc::new(RefCell::new(None));

        // Registered before the field exists, so early resizes hit an empty slot.
        let resize_callback = {
            let slot = Rc::downgrade(&animator);
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || {
                let (width, height) = fit_to_container(&canvas);
                let applied = slot
                    .upgrade()
                    .map(|slot| resize_shared(&slot, width, height))
                    .unwrap_or(false);
                if !applied {
                    debug!(width, height, "Resize ignored, animation not ready");
                }
            }) as Box<dyn FnMut()>)
        };
        let resize_callback = match window
            .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
        {
            Ok(()) => Some(resize_callback),
            Err(e) => {
                warn!(?e, "Failed to register resize listener");
                None
            }
        };

        let (width, height) = fit_to_container(&canvas);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let profile = config.profile_frames;
        let field = ParticleField::new(width, height, config, &mut rng);

        let frame_callback: CallbackSlot = Rc::new(RefCell::new(None));
        {
            let slot = Rc::downgrade(&animator);
            *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let _timer = if profile {
                    Some(Timer::new("ParticleField::frame"))
                } else {
                    None
                };
                if let Some(slot) = slot.upgrade() {
                    tick_shared(&slot);
                }
            }) as Box<dyn FnMut()>));
        }

        let scheduler = AnimationFrameScheduler {
            window: window.clone(),
            callback: frame_callback.clone(),
        };
        *animator.borrow_mut() = Some(Animator::new(field, context, scheduler));
        if let Some(animator) = animator.borrow_mut().as_mut() {
            animator.start();
        }

        Ok(Attached {
            window,
            animator,
            frame_callback,
            resize_callback,
        })
    }

    fn teardown(&mut self) {
        if let Ok(mut slot) = self.animator.try_borrow_mut() {
            if let Some(mut animator) = slot.take() {
                animator.stop();
            }
        }
        if let Some(callback) = self.resize_callback.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                warn!(?e, "Failed to remove resize listener");
            }
        }
        self.frame_callback.borrow_mut().take();
    }
}

/// A running particle field, owned by the page. `free()` (or `stop()`)
/// tears it down.
#[wasm_bindgen]
pub struct ParticleFieldHandle {
    inner: Option<Attached>,
}

#[wasm_bindgen]
impl ParticleFieldHandle {
    /// Attaches with the default configuration.
    pub fn attach(canvas_id: &str) -> ParticleFieldHandle {
        ParticleFieldHandle::start(find_canvas(canvas_id), FieldConfig::default())
    }

    pub fn attach_with_config(
        canvas_id: &str,
        config_json: &str,
    ) -> Result<ParticleFieldHandle, JsValue> {
        let config = FieldConfig::from_json(config_json)?;
        Ok(ParticleFieldHandle::start(find_canvas(canvas_id), config))
    }

    pub fn attach_to_canvas(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<ParticleFieldHandle, JsValue> {
        let config = match config_json {
            Some(json) => FieldConfig::from_json(&json)?,
            None => FieldConfig::default(),
        };
        Ok(ParticleFieldHandle::start(Ok(canvas), config))
    }

    pub fn stop(&mut self) {
        if let Some(attached) = self.inner.as_mut() {
            attached.teardown();
        }
    }

    pub fn is_running(&self) -> bool {
        self.with_animator(|a| a.is_running()).unwrap_or(false)
    }

    pub fn particle_count(&self) -> usize {
        self.with_animator(|a| a.field().particles().len())
            .unwrap_or(0)
    }

    /// `[width, height]` of the field, empty when inert.
    pub fn dimensions(&self) -> Vec<f64> {
        self.with_animator(|a| vec![a.field().width(), a.field().height()])
            .unwrap_or_default()
    }
}

impl ParticleFieldHandle {
    fn start(
        canvas: Result<HtmlCanvasElement, SurfaceError>,
        config: FieldConfig,
    ) -> ParticleFieldHandle {
        let inner = match canvas.and_then(|canvas| Attached::new(canvas, config)) {
            Ok(attached) => Some(attached),
            Err(e) => {
                debug!(error = %e, "No drawing surface, particle field disabled");
                None
            }
        };
        ParticleFieldHandle { inner }
    }

    fn with_animator<T>(&self, f: impl FnOnce(&CanvasAnimator) -> T) -> Option<T> {
        let attached = self.inner.as_ref()?;
        let animator = attached.animator.try_borrow().ok()?;
        let result = animator.as_ref().map(f);
        result
    }
}

impl Drop for ParticleFieldHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
