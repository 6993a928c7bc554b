use std::sync::Mutex;

use crate::shared::constants::PHONE_MAX_WIDTH;

/// Which variant of a responsive component pair to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceVariant {
    Phone,
    Desktop,
}

impl DeviceVariant {
    /// Select the variant for a viewport width against a threshold.
    /// Widths at or above the threshold render the desktop variant.
    pub fn for_width_with_threshold(width: u32, threshold: u32) -> Self {
        if width < threshold {
            DeviceVariant::Phone
        } else {
            DeviceVariant::Desktop
        }
    }

    /// Select the variant using the standard phone threshold.
    pub fn for_width(width: u32) -> Self {
        Self::for_width_with_threshold(width, PHONE_MAX_WIDTH)
    }
}

type VariantListener = Box<dyn Fn(DeviceVariant) + Send + Sync>;

/// Shared viewport observer.
///
/// One observer per shell replaces the per-component resize listeners of the
/// original dashboards. `handle_resize` recomputes synchronously on every
/// event with no debounce; listeners are only notified when the variant
/// actually flips.
pub struct ViewportObserver {
    threshold: u32,
    current: Mutex<Option<DeviceVariant>>,
    listeners: Mutex<Vec<VariantListener>>,
}

impl ViewportObserver {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            current: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn with_default_threshold() -> Self {
        Self::new(PHONE_MAX_WIDTH)
    }

    pub fn subscribe(&self, listener: impl Fn(DeviceVariant) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .expect("listener lock poisoned")
            .push(Box::new(listener));
    }

    pub fn current(&self) -> Option<DeviceVariant> {
        *self.current.lock().expect("variant lock poisoned")
    }

    /// Feed a viewport width sample (mount or resize event). Returns the
    /// selected variant.
    pub fn handle_resize(&self, width: u32) -> DeviceVariant {
        let variant = DeviceVariant::for_width_with_threshold(width, self.threshold);

        let changed = {
            let mut current = self.current.lock().expect("variant lock poisoned");
            let changed = *current != Some(variant);
            *current = Some(variant);
            changed
        };

        if changed {
            for listener in self
                .listeners
                .lock()
                .expect("listener lock poisoned")
                .iter()
            {
                listener(variant);
            }
        }

        variant
    }
}
