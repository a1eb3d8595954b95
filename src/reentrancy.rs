//! Debug-only check that a table is never entered twice at once.
//!
//! The table runs every operation to completion without yielding. The only
//! way to observe it mid-operation is for user code it calls (`K: Eq`,
//! `K: Hash`, `K: Clone`) to reach back into the same table. Debug builds
//! panic when that happens; release builds carry no state at all.

#[cfg(debug_assertions)]
use core::cell::Cell;
use core::marker::PhantomData;

/// Depth counter embedded in the table. Public entry points open a section
/// with `let _s = self.sections.enter();`.
///
/// The owner stays `Send` but not `Sync` in every build profile.
#[derive(Debug)]
pub(crate) struct ExclusiveSections {
    #[cfg(debug_assertions)]
    depth: Cell<u32>,
    _not_sync: PhantomData<core::cell::Cell<()>>,
}

impl ExclusiveSections {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            depth: Cell::new(0),
            _not_sync: PhantomData,
        }
    }

    /// Open a section. In debug builds, panics if one is already open.
    #[inline]
    pub(crate) fn enter(&self) -> Section<'_> {
        #[cfg(debug_assertions)]
        {
            let d = self.depth.get();
            assert!(d == 0, "reentrant call into ChainedHashMap");
            self.depth.set(d + 1);
            return Section {
                owner: self,
                _pd: PhantomData,
            };
        }

        #[cfg(not(debug_assertions))]
        {
            return Section { _pd: PhantomData };
        }
    }

    #[cfg(all(test, debug_assertions))]
    fn depth(&self) -> u32 {
        self.depth.get()
    }
}

/// Closes its section on drop, including during unwinding.
pub(crate) struct Section<'a> {
    #[cfg(debug_assertions)]
    owner: &'a ExclusiveSections,
    _pd: PhantomData<&'a ()>,
}

impl Drop for Section<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            let d = self.owner.depth.get();
            debug_assert!(d > 0);
            self.owner.depth.set(d - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExclusiveSections;

    #[test]
    fn sequential_sections_are_fine() {
        let s = ExclusiveSections::new();
        {
            let _a = s.enter();
        }
        let _b = s.enter();
    }

    #[cfg(debug_assertions)]
    #[test]
    fn nested_section_panics_in_debug() {
        let s = ExclusiveSections::new();
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _outer = s.enter();
            let _inner = s.enter();
        }));
        assert!(res.is_err(), "expected nested entry to panic in debug builds");
        // The outer section was closed while unwinding.
        assert_eq!(s.depth(), 0);
        let _again = s.enter();
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn nested_section_is_noop_in_release() {
        let s = ExclusiveSections::new();
        let _outer = s.enter();
        let _inner = s.enter();
    }
}
