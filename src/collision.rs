/// Collision detection for the arcade world
///
/// Everything that takes part in collision (player, drones, fish rewards,
/// platforms) exposes its axis-aligned bounding box through one trait, so the
/// physics code never has to care which kind of object it is looking at.
///
/// # Architecture
///
/// - `Collidable` trait: bounding-box accessor implemented by every entity
/// - AABB functions: pure functions for rectangle intersection and point hit-tests
use sdl2::rect::Rect;

/// Trait for anything that occupies a box in the world.
///
/// # Example
///
/// ```rust
/// impl Collidable for Platform {
///     fn get_bounds(&self) -> Rect {
///         Rect::new(self.x, self.y, self.width, self.height)
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    ///
    /// The returned `Rect` is used both for drawing placement and for
    /// collision tests, so it must match what is drawn on screen.
    fn get_bounds(&self) -> Rect;
}

impl Collidable for Rect {
    fn get_bounds(&self) -> Rect {
        *self
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Touching edges do not count as an intersection (upper bounds are exclusive).
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Checks if a point lies inside a rectangle (right/bottom edges exclusive).
pub fn contains_point(rect: &Rect, (x, y): (i32, i32)) -> bool {
    x >= rect.x()
        && x < rect.x() + rect.width() as i32
        && y >= rect.y()
        && y < rect.y() + rect.height() as i32
}

/// Checks collision between a single entity and a collection of other entities.
///
/// # Returns
///
/// Indices into `entities` of every entity whose bounds intersect `entity`,
/// in collection order.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();
    let mut collisions = Vec::new();

    for (index, other) in entities.iter().enumerate() {
        let other_bounds = other.get_bounds();

        if aabb_intersect(&entity_bounds, &other_bounds) {
            collisions.push(index);
        }
    }

    collisions
}

/// True if the two entities' boxes overlap.
pub fn overlaps(a: &impl Collidable, b: &impl Collidable) -> bool {
    aabb_intersect(&a.get_bounds(), &b.get_bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drone_grazing_player_overlaps() {
        let player = Rect::new(600, 400, 40, 40);
        let drone = Rect::new(630, 390, 20, 20);

        assert!(overlaps(&player, &drone));
        assert!(overlaps(&drone, &player));
    }

    #[test]
    fn test_standing_on_surface_is_not_overlap() {
        // Feet exactly on the platform top, or flush against its side
        let platform = Rect::new(100, 600, 200, 20);
        let on_top = Rect::new(150, 560, 40, 40);
        let beside = Rect::new(300, 590, 40, 40);

        assert!(!aabb_intersect(&on_top, &platform));
        assert!(!aabb_intersect(&beside, &platform));
    }

    #[test]
    fn test_sunk_one_pixel_overlaps() {
        let platform = Rect::new(100, 600, 200, 20);
        let feet_in = Rect::new(150, 561, 40, 40);

        assert!(aabb_intersect(&feet_in, &platform));
    }

    #[test]
    fn test_reward_inside_player_overlaps() {
        let player = Rect::new(0, 0, 40, 40);
        let fish = Rect::new(10, 10, 12, 12);

        assert!(overlaps(&player, &fish));
        assert!(!overlaps(&player, &Rect::new(500, 500, 12, 12)));
    }

    #[test]
    fn test_contains_point_edges() {
        let rect = Rect::new(10, 10, 20, 20);

        assert!(contains_point(&rect, (10, 10)));
        assert!(contains_point(&rect, (29, 29)));
        assert!(!contains_point(&rect, (30, 15)));
        assert!(!contains_point(&rect, (15, 30)));
        assert!(!contains_point(&rect, (9, 15)));
    }

    #[test]
    fn test_collection_preserves_order() {
        let probe = Rect::new(0, 0, 50, 50);
        let others = vec![
            Rect::new(40, 40, 10, 10),
            Rect::new(200, 200, 10, 10),
            Rect::new(0, 0, 5, 5),
        ];

        assert_eq!(check_collisions_with_collection(&probe, &others), vec![0, 2]);
    }
}
