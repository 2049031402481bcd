/// Index cycling for the rotating hero text and the teachers carousel.
///
/// The state is a plain value so widget code can do functional updates
/// (`state.set(carousel.next())`) without borrowing games, and so the wrap
/// arithmetic can be tested off-browser.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "carousel over empty list");
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    /// Wraps from 0 back to the last item without going through a negative
    /// intermediate value.
    pub fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn select(self, index: usize) -> Self {
        Self {
            index: index % self.len,
            ..self
        }
    }

    /// The three visible slots of the card carousel: previous, current, next.
    pub fn window3(&self) -> [usize; 3] {
        [
            (self.index + self.len - 1) % self.len,
            self.index,
            (self.index + 1) % self.len,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_front() {
        let mut c = Carousel::new(3);
        for _ in 0..3 {
            c = c.next();
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn prev_from_zero_lands_on_last() {
        let c = Carousel::new(5);
        assert_eq!(c.prev().index(), 4);
    }

    #[test]
    fn index_stays_in_range_under_any_sequence() {
        let mut c = Carousel::new(4);
        let ops: &[fn(Carousel) -> Carousel] = &[
            Carousel::next,
            Carousel::prev,
            Carousel::prev,
            Carousel::next,
            |c| c.select(7),
            Carousel::prev,
            |c| c.select(2),
            Carousel::next,
        ];
        for op in ops.iter().cycle().take(200) {
            c = op(c);
            assert!(c.index() < c.len());
        }
    }

    #[test]
    fn select_wraps_out_of_range_index() {
        let c = Carousel::new(3).select(10);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn window_is_prev_current_next() {
        let c = Carousel::new(5).select(0);
        assert_eq!(c.window3(), [4, 0, 1]);
        assert_eq!(c.next().window3(), [0, 1, 2]);
    }

    #[test]
    fn single_item_carousel_is_stable() {
        let c = Carousel::new(1);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
        assert_eq!(c.window3(), [0, 0, 0]);
    }
}
