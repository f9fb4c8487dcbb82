use scale_slider_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer sample delivered by the platform, in slider coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn down(x: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, 0.0))
    }

    pub fn moved(x: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, 0.0))
    }

    pub fn up(x: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, 0.0))
    }

    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO)
    }
}
