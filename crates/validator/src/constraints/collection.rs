//! Size constraints for slices.

use super::{max_size, min_size};
use crate::foundation::ConstraintsBuilder;

impl<E: 'static> ConstraintsBuilder<[E]> {
    /// Requires at least `min` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_size(self, min: usize) -> Self {
        self.constraint(min_size(min, <[E]>::len))
    }

    /// Allows at most `max` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_size(self, max: usize) -> Self {
        self.constraint(max_size(max, <[E]>::len))
    }
}

#[cfg(test)]
mod tests {
    use crate::foundation::ConstraintsBuilder;

    #[test]
    fn slice_sizes() {
        let constraints = ConstraintsBuilder::<[u8]>::new().min_size(1).max_size(2).build();
        let check = |v: &[u8]| constraints.iter().map(|c| c.test(v)).collect::<Vec<_>>();
        assert_eq!(check(&[]), vec![false, true]);
        assert_eq!(check(&[1, 2]), vec![true, true]);
        assert_eq!(check(&[1, 2, 3]), vec![true, false]);
    }
}
