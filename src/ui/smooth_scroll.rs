//! Page-position smooth scroll with exponential ease-out.
//!
//! The position is measured in pages.  When the target changes the position
//! keeps its current value and each tick closes a fixed fraction of the gap,
//! so pages slide quickly at first and decelerate into place.

/// Distance (in pages) below which the animation snaps to its target.
const SNAP_EPSILON: f64 = 0.002;

/// Page-position animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Current position; the integer part is a page index.
    position: f64,
    target: f64,
    /// Damping: `gap *= (1 - speed)` each tick.
    /// Higher speed = faster settle.  Good range: 0.2–0.4 at 60 fps.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(position: usize, speed: f64) -> Self {
        Self {
            position: position as f64,
            target: position as f64,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Aim at `target` without moving yet.
    pub fn set_target(&mut self, target: usize) {
        self.target = target as f64;
    }

    /// Jump straight to `position` (also the new target).
    pub fn jump_to(&mut self, position: f64) {
        self.position = position;
        self.target = position;
    }

    /// Close part of the gap.  Call once per frame.
    pub fn tick(&mut self) {
        let gap = self.target - self.position;
        if gap.abs() < SNAP_EPSILON {
            self.position = self.target;
            return;
        }
        self.position += gap * self.speed;
        if (self.target - self.position).abs() < SNAP_EPSILON {
            self.position = self.target;
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// True while the position has not reached the target.
    pub fn is_animating(&self) -> bool {
        self.position != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decelerates_into_target() {
        let mut s = SmoothScroll::new(0, 0.5);
        s.set_target(4);
        s.tick();
        assert_eq!(s.position(), 2.0);
        s.tick();
        assert_eq!(s.position(), 3.0);
        for _ in 0..20 {
            s.tick();
        }
        assert_eq!(s.position(), 4.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn speed_is_clamped() {
        let mut s = SmoothScroll::new(0, 5.0);
        s.set_target(1);
        s.tick();
        assert!(s.position() < 1.0);
    }

    #[test]
    fn jump_settles_immediately() {
        let mut s = SmoothScroll::new(2, 0.3);
        s.jump_to(2.5);
        assert_eq!(s.position(), 2.5);
        assert!(!s.is_animating());
    }
}
