use super::Shape;

/// Ordered, append-only list of placed shapes.
///
/// Insertion order is paint order: later shapes are drawn over earlier ones.
/// There is no removal or update; [`clear`](Self::clear) drops everything.
///
/// Performance characteristics:
/// - `push()` is amortized O(1)
/// - `clear()` keeps the allocation for reuse
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayList {
    shapes: Vec<Shape>,
}

impl DisplayList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape at the top of the paint order.
    #[inline]
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes every shape. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in paint order (oldest first).
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
