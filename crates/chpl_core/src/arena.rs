//! Arena allocation for uAST nodes.
//!
//! Every node of a tree, and every child list and literal payload it points
//! at, lives in one bump arena. The tree is dropped as a whole when the arena
//! goes away, so nodes never own heap data themselves.

use bumpalo::Bump;

/// Bump arena holding a uAST and its payloads.
pub struct CompilerArena {
    bump: Bump,
}

impl CompilerArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create an arena with the given initial capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocate a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Copy raw bytes (string and bytes literal payloads) into the arena.
    #[inline]
    pub fn alloc_bytes(&self, src: &[u8]) -> &[u8] {
        self.bump.alloc_slice_copy(src)
    }

    /// Move every item of an exact-size iterator into an arena slice.
    ///
    /// Child lists are built this way since nodes are neither `Copy` nor
    /// `Clone`.
    #[inline]
    pub fn alloc_slice<T, I>(&self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Returns the total bytes allocated in this arena.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Reset the arena, deallocating all nodes but keeping the memory.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for CompilerArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_slice_preserves_order() {
        let arena = CompilerArena::new();
        let items = arena.alloc_slice(vec![(1, 'a'), (2, 'b')]);
        assert_eq!(items, &[(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_alloc_bytes() {
        let arena = CompilerArena::with_capacity(64);
        let bytes = arena.alloc_bytes(b"hi\0there");
        assert_eq!(bytes, b"hi\0there");
        assert!(arena.allocated_bytes() > 0);
    }
}
