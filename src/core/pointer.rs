use crate::core::View;
use crate::domain::model::PointerEvent;

/// Cursor-follow glow. A view without a glow element builds it disabled.
#[derive(Debug, Clone, Copy)]
pub struct PointerGlow {
    enabled: bool,
}

impl PointerGlow {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn on_pointer<V: View + ?Sized>(&self, view: &mut V, event: &PointerEvent) {
        if !self.enabled {
            return;
        }

        match event {
            PointerEvent::Mouse { x, y } => view.move_glow(*x, *y),
            // 只跟隨第一個觸控點
            PointerEvent::Touch { touches } => {
                if let Some(first) = touches.first() {
                    view.move_glow(first.x, first.y);
                }
            }
        }
    }
}
