/// Index over a fixed list of photos, advanced by autoplay or by hand
///
/// Every mutation wraps modulo the photo count. With no photos the index is
/// pinned to 0.
#[derive(Debug, Clone)]
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

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Autoplay advance; same transition as `next`
    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump straight to `target` (indicator click). Returns false and leaves
    /// the index alone when `target` is out of range.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.len {
            tracing::debug!("Ignoring jump to photo {} of {}", target, self.len);
            return false;
        }
        self.index = target;
        true
    }
}
