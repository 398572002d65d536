use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCS: Cell<usize> = const { Cell::new(0) };
    static BYTES: Cell<usize> = const { Cell::new(0) };
}

/// Allocation counts observed on the calling thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    pub allocs: usize,
    pub bytes: usize,
}

/// System allocator that counts allocations per thread, so parallel tests in
/// the same binary do not see each other's traffic.
pub struct BudgetAlloc;

impl BudgetAlloc {
    pub const fn new() -> Self {
        Self
    }

    /// Run `f` and report the allocations it made on this thread.
    pub fn measure<R>(&self, f: impl FnOnce() -> R) -> (R, AllocStats) {
        let before = Self::snapshot();
        let out = f();
        let after = Self::snapshot();
        (
            out,
            AllocStats {
                allocs: after.allocs - before.allocs,
                bytes: after.bytes - before.bytes,
            },
        )
    }

    fn snapshot() -> AllocStats {
        AllocStats {
            allocs: ALLOCS.try_with(Cell::get).unwrap_or(0),
            bytes: BYTES.try_with(Cell::get).unwrap_or(0),
        }
    }

    fn record(bytes: usize) {
        let _ = ALLOCS.try_with(|c| c.set(c.get() + 1));
        let _ = BYTES.try_with(|c| c.set(c.get() + bytes));
    }
}

unsafe impl GlobalAlloc for BudgetAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            Self::record(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            Self::record(layout.size());
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            Self::record(new_size.saturating_sub(layout.size()));
        }
        new_ptr
    }
}
