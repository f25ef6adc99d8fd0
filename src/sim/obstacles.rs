//! Obstacle registry, hit hand-off, and axis-aligned collision tests
//!
//! Each piece of falling debris owns one `Obstacle` in the registry; other
//! tasks (bolts, the ship) only query it. A bolt that hits an obstacle does
//! not remove it - it marks the id in `PendingHits`, and the owning flight
//! task consumes the mark on its next resumption. Stable integer ids make
//! "obstacle no longer exists" a cheap check: a stale id simply matches
//! nothing.

/// Stable handle to a registered obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleId(u32);

/// An active collidable region. The top row advances every tick; the
/// column and extent are fixed for the obstacle's lifetime.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub row: f32,
    pub column: u16,
    pub height: u16,
    pub width: u16,
}

/// True iff the point (`row`, `column`) lies inside the obstacle's
/// rectangle: row in `[row, row+height)`, column in `[column, column+width)`.
/// Used for the ship's reference cell and for bolt positions.
pub fn has_collision(obstacle: &Obstacle, row: f32, column: f32) -> bool {
    row >= obstacle.row
        && row < obstacle.row + obstacle.height as f32
        && column >= obstacle.column as f32
        && column < (obstacle.column + obstacle.width) as f32
}

/// Standard AABB test with half-open intervals on both axes: the object
/// `[row, row+h) x [column, column+w)` against the obstacle's rectangle.
/// Touching edges do not count as overlap.
pub fn has_collision_sized(
    obstacle: &Obstacle,
    row: f32,
    column: f32,
    obj_height: u16,
    obj_width: u16,
) -> bool {
    let rows_overlap =
        row < obstacle.row + obstacle.height as f32 && obstacle.row < row + obj_height as f32;
    let columns_overlap = column < (obstacle.column + obstacle.width) as f32
        && (obstacle.column as f32) < column + obj_width as f32;
    rows_overlap && columns_overlap
}

/// Registry of active obstacles with id allocation.
#[derive(Debug, Default)]
pub struct Obstacles {
    items: Vec<Obstacle>,
    next_id: u32,
}

impl Obstacles {
    /// Register a new obstacle and hand back its stable id.
    /// Height and width must be at least 1.
    pub fn insert(&mut self, row: f32, column: u16, height: u16, width: u16) -> ObstacleId {
        debug_assert!(height >= 1 && width >= 1);
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.items.push(Obstacle {
            id,
            row,
            column,
            height,
            width,
        });
        id
    }

    /// Deregister an obstacle. Removing an id twice is a no-op.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let index = self.items.iter().position(|o| o.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.items.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.items.iter_mut().find(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.items.iter()
    }

    /// First registered obstacle overlapping the 1x1 cell at
    /// (`row`, `column`), if any.
    pub fn first_hit(&self, row: f32, column: f32) -> Option<ObstacleId> {
        self.items
            .iter()
            .find(|o| has_collision(o, row, column))
            .map(|o| o.id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Struck obstacles awaiting their owning flight task. First writer wins;
/// each entry is consumed by exactly one reader.
#[derive(Debug, Default)]
pub struct PendingHits {
    ids: Vec<ObstacleId>,
}

impl PendingHits {
    /// Record a hit. Marking an already-struck obstacle is a no-op.
    pub fn mark(&mut self, id: ObstacleId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Consume the mark for `id`, returning whether it was present.
    pub fn take(&mut self, id: ObstacleId) -> bool {
        match self.ids.iter().position(|&h| h == id) {
            Some(index) => {
                self.ids.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
