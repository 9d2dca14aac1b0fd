// CSS transform state kept per element so updates can be partial.

/// Composite transform applied to an element: rotate, then scale, then
/// translate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Degrees.
    pub rotate: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            rotate: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Partial transform. `None` retains the previous value on [`Transform::set`]
/// and adds nothing on [`Transform::add`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub rotate: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
}

impl TransformUpdate {
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }
}

impl Transform {
    pub fn set(&mut self, update: TransformUpdate) {
        self.x = update.x.unwrap_or(self.x);
        self.y = update.y.unwrap_or(self.y);
        self.z = update.z.unwrap_or(self.z);
        self.rotate = update.rotate.unwrap_or(self.rotate);
        self.scale_x = update.scale_x.unwrap_or(self.scale_x);
        self.scale_y = update.scale_y.unwrap_or(self.scale_y);
    }

    pub fn add(&mut self, delta: TransformUpdate) {
        self.x += delta.x.unwrap_or(0.0);
        self.y += delta.y.unwrap_or(0.0);
        self.z += delta.z.unwrap_or(0.0);
        self.rotate += delta.rotate.unwrap_or(0.0);
        self.scale_x += delta.scale_x.unwrap_or(0.0);
        self.scale_y += delta.scale_y.unwrap_or(0.0);
    }

    /// Value for the `transform` style property.
    pub fn to_css(&self) -> String {
        format!(
            "rotate({}deg) scaleX({}) scaleY({}) translate3d({}px, {}px, {}px)",
            self.rotate, self.scale_x, self.scale_y, self.x, self.y, self.z
        )
    }
}
