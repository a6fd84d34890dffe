// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared tooltip overlay.

use kurbo::Point;

use crate::dataset::Record;

/// Offset from the pointer so the overlay doesn't sit under the cursor.
const POINTER_OFFSET_X: f64 = 10.0;

/// The single tooltip overlay: one instance serves every mark.
///
/// Hosts mirror this state into their overlay element — visibility toggles a
/// hidden attribute, `pos` becomes absolute coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    visible: bool,
    pos: Point,
    text: String,
}

impl Tooltip {
    /// Populates and shows the overlay for a hovered record.
    ///
    /// The temperature is formatted to two decimal places.
    pub fn show(&mut self, pointer: Point, record: &Record) {
        self.visible = true;
        self.pos = Point::new(pointer.x + POINTER_OFFSET_X, pointer.y);
        self.text = format!("Lat: {}°\nTemp: {:.2}°C", record.lat, record.tas);
    }

    /// Hides the overlay. The stale text is kept; hidden overlays don't
    /// render.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the overlay is showing.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Overlay anchor position.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Overlay content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_formats_temperature_to_two_decimals() {
        let mut t = Tooltip::default();
        t.show(
            Point::new(100.0, 50.0),
            &Record {
                month: 1,
                lat: -90.0,
                tas: -38.456,
            },
        );
        assert!(t.is_visible());
        assert_eq!(t.pos(), Point::new(110.0, 50.0));
        assert_eq!(t.text(), "Lat: -90°\nTemp: -38.46°C");
    }

    #[test]
    fn hide_toggles_visibility_only() {
        let mut t = Tooltip::default();
        t.show(
            Point::ZERO,
            &Record {
                month: 1,
                lat: 0.0,
                tas: 15.0,
            },
        );
        t.hide();
        assert!(!t.is_visible());
        assert_eq!(t.text(), "Lat: 0°\nTemp: 15.00°C");
    }
}
