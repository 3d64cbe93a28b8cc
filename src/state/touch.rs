// Pointer/pinch gesture state for the map viewer.

use super::camera::Point;

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

/// At most two concurrent pointers take part in a gesture.
pub const MAX_POINTERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRecord {
    pub id: i32,
    pub position: Point,
}

/// Pressed pointers in press order. Never holds more than [`MAX_POINTERS`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivePointers {
    records: Vec<PointerRecord>,
}

impl ActivePointers {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.records.len() >= MAX_POINTERS
    }

    #[must_use]
    pub fn records(&self) -> &[PointerRecord] {
        &self.records
    }

    #[must_use]
    pub fn first(&self) -> Option<PointerRecord> {
        self.records.first().copied()
    }

    #[must_use]
    pub fn contains(&self, id: i32) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Registers a press. A repeated id only refreshes its position; a press
    /// beyond capacity is refused.
    pub fn press(&mut self, id: i32, position: Point) -> bool {
        if self.update(id, position) {
            return true;
        }
        if self.is_full() {
            return false;
        }
        self.records.push(PointerRecord { id, position });
        true
    }

    /// Moves a registered pointer; unknown ids are ignored.
    pub fn update(&mut self, id: i32, position: Point) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes a pointer; unknown ids are a no-op.
    pub fn release(&mut self, id: i32) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Horizontal separation of the two pointers of a pinch.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        match self.records.as_slice() {
            [a, b] => Some((a.position.x - b.position.x).abs()),
            _ => None,
        }
    }
}

/// Gesture in progress between the first press and the last release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GestureSession {
    #[default]
    Idle,
    /// Single-pointer drag. `anchor` is the press position minus the
    /// translate at that time, so translate = pointer - anchor.
    Panning { anchor: Point },
    /// Two-pointer zoom. `prev_distance` is 0 until the first pinch move.
    Pinching { anchor: Point, prev_distance: f64 },
}

impl GestureSession {
    /// Starts a drag for a pointer pressed at `position` over a layer
    /// currently translated by `translate`.
    #[must_use]
    pub fn begin(position: Point, translate: Point) -> Self {
        Self::Panning { anchor: Point::new(position.x - translate.x, position.y - translate.y) }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match *self {
            Self::Idle => None,
            Self::Panning { anchor } | Self::Pinching { anchor, .. } => Some(anchor),
        }
    }

    #[must_use]
    pub fn prev_pinch_distance(&self) -> f64 {
        match *self {
            Self::Pinching { prev_distance, .. } => prev_distance,
            _ => 0.0,
        }
    }
}
