// The main crate is wasm-only, so the pure core modules are included by path
// under the same parent they have in `src/core`.

#![allow(dead_code)]

pub mod core {
    pub mod animation {
        include!("../../src/core/animation.rs");
    }
    pub mod color {
        include!("../../src/core/color.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod glyph {
        include!("../../src/core/glyph.rs");
    }
    pub mod numeric {
        include!("../../src/core/numeric.rs");
    }
    pub mod pointer {
        include!("../../src/core/pointer.rs");
    }
    pub mod scroll {
        include!("../../src/core/scroll.rs");
    }
    pub mod tracking {
        include!("../../src/core/tracking.rs");
    }
    pub mod transform {
        include!("../../src/core/transform.rs");
    }
}

use std::cell::Cell;
use std::rc::Rc;

/// Stands in for `requestAnimationFrame`: counts requests so a test can run
/// exactly the frames that were asked for.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pub requested: Rc<Cell<usize>>,
}

impl ManualScheduler {
    /// Consume one outstanding request, if any.
    pub fn take(&self) -> bool {
        let n = self.requested.get();
        if n == 0 {
            return false;
        }
        self.requested.set(n - 1);
        true
    }
}

impl self::core::scroll::FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.requested.set(self.requested.get() + 1);
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
