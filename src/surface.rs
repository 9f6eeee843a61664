// The three drawing primitives the particle field needs. The browser canvas
// implements this in `web`; tests record the calls instead.

use crate::color::Color;
use vecmath::Vector2;

pub trait DrawSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color, alpha: f64);

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64);

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
        alpha: f64,
    );
}

impl<T: DrawSurface + ?Sized> DrawSurface for &mut T {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color, alpha: f64) {
        (**self).fill_rect(x, y, width, height, color, alpha)
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64) {
        (**self).fill_circle(center, radius, color, alpha)
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
        alpha: f64,
    ) {
        (**self).stroke_line(from, to, width, color, alpha)
    }
}
