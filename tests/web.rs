//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_field::web::{acquire_context, find_canvas, ParticleFieldHandle};
use particle_field::SurfaceError;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas
        .style()
        .set_css_text(&format!("display: block; width: {}px; height: {}px", width, height));
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_is_inert() {
    particle_field::initialize();
    let mut handle = ParticleFieldHandle::attach("no-such-canvas");
    assert!(!handle.is_running());
    assert_eq!(handle.particle_count(), 0);
    assert!(handle.dimensions().is_empty());
    handle.stop();
}

#[wasm_bindgen_test]
fn find_canvas_reports_wrong_element() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();

    assert_eq!(
        find_canvas("not-a-canvas").err(),
        Some(SurfaceError::NotACanvas("not-a-canvas".into()))
    );
    assert_eq!(
        find_canvas("nowhere").err(),
        Some(SurfaceError::CanvasNotFound("nowhere".into()))
    );
}

#[wasm_bindgen_test]
fn webgl_canvas_has_no_2d_context() {
    let canvas = mount_canvas("webgl-taken", 10, 10);
    // A canvas only hands out one kind of context.
    if canvas.get_context("webgl").ok().flatten().is_some() {
        assert_eq!(
            acquire_context(&canvas).err(),
            Some(SurfaceError::ContextUnavailable)
        );
    }
}

#[wasm_bindgen_test]
fn attaches_and_sizes_to_container() {
    mount_canvas("hero-canvas", 800, 600);
    let mut handle = ParticleFieldHandle::attach("hero-canvas");
    assert!(handle.is_running());
    assert_eq!(handle.particle_count(), 50);
    assert_eq!(handle.dimensions(), vec![800.0, 600.0]);

    handle.stop();
    assert!(!handle.is_running());
    // particles are released at teardown
    assert_eq!(handle.particle_count(), 0);
    assert!(handle.dimensions().is_empty());
    // second teardown is a no-op
    handle.stop();
    assert!(!handle.is_running());
}

#[wasm_bindgen_test]
fn attach_with_config_applies_count() {
    let canvas = mount_canvas("configured", 200, 100);
    let config = r#"{ "particle_count": 7, "seed": 1 }"#;
    let handle = ParticleFieldHandle::attach_to_canvas(canvas, Some(config.into())).unwrap();
    assert_eq!(handle.particle_count(), 7);
}

#[wasm_bindgen_test]
fn bad_config_is_an_error() {
    mount_canvas("bad-config", 10, 10);
    let config = r#"{ "link_distance": -1 }"#;
    assert!(ParticleFieldHandle::attach_with_config("bad-config", config).is_err());
}

#[wasm_bindgen_test]
fn resize_event_updates_bounds() {
    let canvas = mount_canvas("resizable", 800, 600);
    let handle = ParticleFieldHandle::attach_to_canvas(canvas.clone(), None).unwrap();
    canvas
        .style()
        .set_css_text("display: block; width: 400px; height: 300px");

    let event = web_sys::Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();

    assert_eq!(handle.dimensions(), vec![400.0, 300.0]);
    assert_eq!(canvas.width(), 400);
}
