use glam::Vec2;

/// Last pointer position, normalized per axis to [0, 1] of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub uv: Vec2,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self {
            uv: Vec2::splat(0.5),
        }
    }
}

impl PointerPosition {
    #[inline]
    pub fn x(&self) -> f32 {
        self.uv.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.uv.y
    }

    /// Recompute from raw client coordinates. Positions outside the viewport
    /// are clamped to its edges; a zero-sized viewport leaves the state as is
    /// and returns `false`.
    pub fn update(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> bool {
        match normalize_client(client_x, client_y, viewport_width, viewport_height) {
            Some(uv) => {
                self.uv = uv;
                true
            }
            None => false,
        }
    }
}

#[inline]
pub fn normalize_client(
    client_x: f32,
    client_y: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Option<Vec2> {
    if !(viewport_width > 0.0 && viewport_height > 0.0) {
        return None;
    }
    let uv = Vec2::new(client_x, client_y) / Vec2::new(viewport_width, viewport_height);
    uv.is_finite().then(|| uv.clamp(Vec2::ZERO, Vec2::ONE))
}
