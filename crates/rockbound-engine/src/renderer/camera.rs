use glam::Vec2;

/// World bounds the camera may not look past.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// 2D follow camera.
///
/// The viewport is a fixed number of screen units; `zoom` scales how much
/// of the world fits in it (zoom 2 shows half the width and height).
#[derive(Debug, Clone)]
pub struct Camera2D {
    viewport: Vec2,
    zoom: f32,
    /// Center of the view in world space.
    pub center: Vec2,
    bounds: Option<Bounds>,
    /// 0.0 snaps to the target, values toward 1.0 lag behind it.
    smoothing: f32,
}

impl Camera2D {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport: Vec2::new(viewport_width, viewport_height),
            zoom: 1.0,
            center: Vec2::new(viewport_width / 2.0, viewport_height / 2.0),
            bounds: None,
            smoothing: 0.0,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.01);
        self.clamp_to_bounds();
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
        self.clamp_to_bounds();
    }

    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing.clamp(0.0, 0.99);
    }

    /// Size of the visible world region.
    pub fn view_size(&self) -> Vec2 {
        self.viewport / self.zoom
    }

    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
        self.clamp_to_bounds();
    }

    /// Move toward `target`; call each step with the followed actor's position.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        if self.smoothing <= 0.0 {
            self.look_at(target);
        } else {
            let lerp_factor = 1.0 - self.smoothing.powf(dt * 60.0);
            self.center += (target - self.center) * lerp_factor;
            self.clamp_to_bounds();
        }
    }

    fn clamp_to_bounds(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let half = self.view_size() / 2.0;
        let size = bounds.size();

        // A view wider (or taller) than the bounds centers on them.
        self.center.x = if self.view_size().x >= size.x {
            (bounds.min.x + bounds.max.x) / 2.0
        } else {
            self.center.x.clamp(bounds.min.x + half.x, bounds.max.x - half.x)
        };
        self.center.y = if self.view_size().y >= size.y {
            (bounds.min.y + bounds.max.y) / 2.0
        } else {
            self.center.y.clamp(bounds.min.y + half.y, bounds.max.y - half.y)
        };
    }

    /// Whether a world-space point is inside the view.
    pub fn is_visible(&self, point: Vec2) -> bool {
        let half = self.view_size() / 2.0;
        let min = self.center - half;
        let max = self.center + half;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_shrinks_view() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.set_zoom(2.0);
        assert_eq!(cam.view_size(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn bounds_clamp_center() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.set_zoom(2.0);
        cam.set_bounds(Bounds::new(0.0, 0.0, 3000.0, 700.0));

        cam.look_at(Vec2::new(0.0, 0.0));
        assert_eq!(cam.center, Vec2::new(200.0, 150.0));

        cam.look_at(Vec2::new(5000.0, 5000.0));
        assert_eq!(cam.center, Vec2::new(2800.0, 550.0));
    }

    #[test]
    fn view_larger_than_bounds_centers() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.set_bounds(Bounds::new(0.0, 0.0, 400.0, 300.0));
        cam.look_at(Vec2::new(1000.0, 1000.0));
        assert_eq!(cam.center, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn follow_without_smoothing_snaps() {
        let mut cam = Camera2D::new(100.0, 100.0);
        cam.follow(Vec2::new(200.0, 150.0), 1.0 / 60.0);
        assert_eq!(cam.center, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn follow_with_smoothing_lags() {
        let mut cam = Camera2D::new(100.0, 100.0);
        cam.center = Vec2::ZERO;
        cam.set_smoothing(0.9);
        cam.follow(Vec2::new(100.0, 100.0), 1.0 / 60.0);
        assert!(cam.center.x > 0.0 && cam.center.x < 100.0);
    }

    #[test]
    fn visibility_respects_zoom() {
        let mut cam = Camera2D::new(100.0, 100.0);
        cam.look_at(Vec2::new(50.0, 50.0));
        assert!(cam.is_visible(Vec2::new(0.0, 0.0)));

        cam.set_zoom(2.0);
        assert!(!cam.is_visible(Vec2::new(0.0, 0.0)));
        assert!(cam.is_visible(Vec2::new(30.0, 70.0)));
    }
}
