//! Slide navigation: a bounded index behind a one-way intro gate.

/// Which view the presenter should mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Intro,
    Showing(usize),
}

/// Direction of the last index change. Animation metadata only; it is
/// never reset, only overwritten by the next successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Neutral,
    Forward,
}

impl Direction {
    /// The slide-in offset sign: -1, 0 or +1.
    pub fn offset(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Neutral => 0,
            Direction::Forward => 1,
        }
    }
}

/// Tracks which of N slides is current, plus the intro shown before the
/// first interaction.
///
/// The whole machine is `{started, index, direction}`: `started` flips
/// true exactly once and never back, and `index` stays clamped to
/// `[0, slide_count - 1]` no matter what input arrives.
#[derive(Debug, Clone)]
pub struct Navigator {
    slide_count: usize,
    started: bool,
    index: usize,
    direction: Direction,
}

impl Navigator {
    pub fn new(slide_count: usize) -> Self {
        assert!(slide_count > 0, "navigator needs at least one slide");
        Self {
            slide_count,
            started: false,
            index: 0,
            direction: Direction::Neutral,
        }
    }

    pub fn current(&self) -> Slide {
        if self.started {
            Slide::Showing(self.index)
        } else {
            Slide::Intro
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Apply one tap at horizontal position `x` in a viewport of
    /// `viewport_width`. On the intro any tap starts the show; after that
    /// the left half goes back and the right half (midpoint included)
    /// goes forward.
    pub fn tap(&mut self, x: f64, viewport_width: f64) {
        if !self.started {
            self.started = true;
            return;
        }

        if x < viewport_width / 2.0 {
            self.back();
        } else {
            self.advance();
        }
    }

    /// Move to the next slide. No-op on the last slide.
    pub fn advance(&mut self) {
        if self.index + 1 >= self.slide_count {
            return;
        }
        self.direction = Direction::Forward;
        self.index += 1;
    }

    /// Move to the previous slide. No-op on the first slide.
    pub fn back(&mut self) {
        if self.index == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.index -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 1280.0;

    #[test]
    fn test_any_tap_leaves_intro() {
        let mut nav = Navigator::new(10);
        assert_eq!(nav.current(), Slide::Intro);

        // Position is irrelevant on the intro, even the far left.
        nav.tap(0.0, WIDTH);
        assert!(nav.started());
        assert_eq!(nav.current(), Slide::Showing(0));
        assert_eq!(nav.direction(), Direction::Neutral);
    }

    #[test]
    fn test_back_on_first_slide_is_clamped() {
        let mut nav = Navigator::new(10);
        nav.tap(100.0, WIDTH);
        nav.tap(100.0, WIDTH); // left half: back
        assert_eq!(nav.current(), Slide::Showing(0));
        assert!(nav.started());
    }

    #[test]
    fn test_advance_walks_to_last_slide_then_clamps() {
        let mut nav = Navigator::new(10);
        nav.tap(1000.0, WIDTH);

        for _ in 0..9 {
            nav.tap(1000.0, WIDTH); // right half: forward
        }
        assert_eq!(nav.current(), Slide::Showing(9));

        nav.tap(1000.0, WIDTH);
        assert_eq!(nav.current(), Slide::Showing(9));
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn test_direction_tracks_last_index_change() {
        let mut nav = Navigator::new(10);
        nav.tap(1000.0, WIDTH);
        nav.tap(1000.0, WIDTH);
        assert_eq!(nav.direction(), Direction::Forward);

        nav.tap(100.0, WIDTH);
        assert_eq!(nav.direction(), Direction::Backward);
        assert_eq!(nav.direction().offset(), -1);

        // A clamped retreat does not overwrite the direction.
        nav.tap(100.0, WIDTH);
        assert_eq!(nav.current(), Slide::Showing(0));
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn test_midpoint_counts_as_forward() {
        let mut nav = Navigator::new(3);
        nav.tap(WIDTH / 2.0, WIDTH);
        nav.tap(WIDTH / 2.0, WIDTH);
        assert_eq!(nav.current(), Slide::Showing(1));
    }
}
