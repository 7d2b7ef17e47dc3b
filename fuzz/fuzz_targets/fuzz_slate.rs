#![no_main]

use slate::{Allocation, Slate};

use libfuzzer_sys::fuzz_target;

use libfuzzer_sys::arbitrary::Arbitrary;

const TOTAL_SIZE: u32 = 1 << 24;
const MAX_ALLOCS: u32 = 4096;

#[derive(Arbitrary, Debug)]
enum Actions {
    /// Allocate a span of the given size
    Alloc { size: u32 },
    /// Free the ith live allocation
    Free { index: u16 },
    /// Check the storage report against the shadow model
    Report,
}
use Actions::*;

fuzz_target!(|actions: Vec<Actions>| {
    let mut buffer = vec![0u8; Slate::required_bytes(MAX_ALLOCS)];
    let mut slate = Slate::new(TOTAL_SIZE, MAX_ALLOCS, &mut buffer);

    let mut live: Vec<(Allocation, u32)> = vec![];
    let mut live_total: u64 = 0;

    for action in actions {
        match action {
            Alloc { size } => {
                // failure is fine (oversized request or exhaustion), but a
                // handed-out span must be in bounds and sized as requested
                if let Ok(allocation) = slate.allocate(size) {
                    assert!(allocation.offset as u64 + size as u64 <= TOTAL_SIZE as u64);
                    assert!(slate.allocation_size(allocation) == size);
                    live_total += size as u64;
                    live.push((allocation, size));
                }
            }
            Free { index } => {
                if (index as usize) < live.len() {
                    let (allocation, size) = live.swap_remove(index as usize);
                    live_total -= size as u64;
                    slate.free(allocation);
                }
            }
            Report => {
                let report = slate.storage_report();
                // total free space is zero when the node pool is exhausted,
                // and exactly the unallocated remainder otherwise
                if report.total_free_space != 0 {
                    assert!(report.total_free_space as u64 == TOTAL_SIZE as u64 - live_total);
                    assert!(report.largest_free_region <= report.total_free_space);
                }
            }
        }
    }

    // free every remaining allocation; everything must coalesce back
    for (allocation, _) in live {
        slate.free(allocation);
    }

    let whole = slate.allocate(TOTAL_SIZE).unwrap();
    assert!(whole.offset == 0);
});
