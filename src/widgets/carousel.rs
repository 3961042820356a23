/// Cyclic index over a fixed, non-growing list of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Jumps to `index`; out-of-range targets leave the carousel where it is.
    pub fn go_to(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self { index, ..self }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let c = Carousel::new(3);
        assert_eq!(c.next().next().next().index(), 0);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.prev().prev().index(), 1);
        assert_eq!(c.next().prev(), c);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let c = Carousel::new(4).go_to(2);
        assert!(c.is_current(2));
        assert_eq!(c.go_to(4), c);
        assert_eq!(c.go_to(0).index(), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let c = Carousel::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
        assert_eq!(c.go_to(0), c);
    }
}
