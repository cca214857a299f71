//! Slide index for the narrow-screen carousels. One slide per catalog item,
//! no wrap-around at either end.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the slide changed.
    pub fn next(&mut self) -> bool {
        self.go_to(self.index + 1)
    }

    pub fn prev(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(i) => self.go_to(i),
            None => false,
        }
    }

    /// Jump to `index`, clamped to the last slide.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = index.min(self.len - 1);
        let changed = target != self.index;
        self.index = target;
        changed
    }

    /// Pagination dots, active slide filled.
    pub fn dots(&self) -> String {
        (0..self.len)
            .map(|i| if i == self.index { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
