/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_cell::{
    AtomicBackend,
    AtomicCell,
    MemoryOrder,
    NativeBackend,
    Primitive,
};
use std::cell::Cell;
use std::sync::Arc;
use std::thread;

thread_local! {
    static WEAK_CALLS: Cell<usize> = const { Cell::new(0) };
}

fn weak_calls() -> usize {
    WEAK_CALLS.with(|calls| calls.get())
}

/// Native backend whose weak compare-exchange fails spuriously on every
/// other attempt made by the current thread.
struct FlakyBackend;

impl AtomicBackend for FlakyBackend {
    const NAME: &'static str = "flaky";

    fn effective_order(order: MemoryOrder) -> MemoryOrder {
        NativeBackend::effective_order(order)
    }

    fn load<P: Primitive>(storage: &P::Storage, order: MemoryOrder) -> P {
        NativeBackend::load(storage, order)
    }

    fn store<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) {
        NativeBackend::store(storage, value, order)
    }

    fn exchange<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        NativeBackend::exchange(storage, value, order)
    }

    fn compare_exchange_weak<P: Primitive>(
        storage: &P::Storage,
        current: P,
        new: P,
        order: MemoryOrder,
    ) -> Result<P, P> {
        let call = WEAK_CALLS.with(|calls| {
            let n = calls.get();
            calls.set(n + 1);
            n
        });
        if call % 2 == 0 {
            return Err(current);
        }
        NativeBackend::compare_exchange_weak(storage, current, new, order)
    }

    fn fetch_add<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        NativeBackend::fetch_add(storage, value, order)
    }

    fn fetch_sub<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        NativeBackend::fetch_sub(storage, value, order)
    }

    fn fetch_and<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        NativeBackend::fetch_and(storage, value, order)
    }

    fn fetch_or<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        NativeBackend::fetch_or(storage, value, order)
    }

    fn fetch_xor<P: Primitive>(storage: &P::Storage, value: P, order: MemoryOrder) -> P {
        NativeBackend::fetch_xor(storage, value, order)
    }
}

type FlakyCell<T> = AtomicCell<T, FlakyBackend>;

#[test]
fn test_weak_may_fail_spuriously() {
    let cell: FlakyCell<u32> = AtomicCell::new(7);
    let mut failures = 0;
    let mut expected = 7;
    while !cell.compare_exchange_weak(&mut expected, 9) {
        assert_eq!(expected, 7);
        failures += 1;
        assert!(failures < 4);
    }
    assert_eq!(cell.load(), 9);
}

#[test]
fn test_strong_has_no_false_negatives() {
    let cell: FlakyCell<u64> = AtomicCell::new(0);
    for value in 0..100_u64 {
        let before = weak_calls();
        let mut expected = value;
        assert!(cell.compare_exchange_strong(&mut expected, value + 1));
        assert_eq!(expected, value);
        assert!(weak_calls() > before);
    }
    assert_eq!(cell.load(), 100);
}

#[test]
fn test_strong_retries_through_spurious_failure() {
    let cell: FlakyCell<i16> = AtomicCell::new(-5);
    WEAK_CALLS.with(|calls| calls.set(0));

    let mut expected = -5;
    assert!(cell.compare_exchange_strong(&mut expected, 5));
    assert!(weak_calls() >= 2);
    assert_eq!(cell.load(), 5);
}

#[test]
fn test_strong_reports_real_mismatch() {
    let cell: FlakyCell<i32> = AtomicCell::new(3);
    let mut expected = 4;
    assert!(!cell.compare_exchange_strong(&mut expected, 8));
    assert_eq!(expected, 3);
    assert_eq!(cell.load(), 3);
}

#[test]
fn test_strong_on_bool_and_pointer() {
    let flag: FlakyCell<bool> = AtomicCell::new(false);
    let mut expected = false;
    assert!(flag.compare_exchange_strong(&mut expected, true));
    assert!(flag.load());

    let mut slots = [0_u8; 4];
    let base = slots.as_mut_ptr();
    let cursor: FlakyCell<*mut u8> = AtomicCell::new(base);
    let mut expected = base;
    assert!(cursor.compare_exchange_strong(&mut expected, base.wrapping_add(2)));
    assert_eq!(cursor.load(), base.wrapping_add(2));
}

#[test]
fn test_strong_with_explicit_orders() {
    let cell: FlakyCell<u8> = AtomicCell::new(1);
    for order in MemoryOrder::ALL {
        let current = cell.load();
        let mut expected = current;
        assert!(cell.compare_exchange_strong_explicit(&mut expected, current + 1, order));
    }
    let mut expected = 7;
    assert!(cell.compare_exchange_strong_orders(
        &mut expected,
        0,
        MemoryOrder::Release,
        MemoryOrder::Relaxed,
    ));
    assert_eq!(cell.load(), 0);
}

#[test]
fn test_strong_counter_under_contention() {
    let cell: Arc<FlakyCell<usize>> = Arc::new(AtomicCell::new(0));
    let mut handles = vec![];

    for _ in 0..4 {
        let cell = cell.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..250 {
                let mut current = cell.load();
                loop {
                    let next = current + 1;
                    if cell.compare_exchange_strong(&mut current, next) {
                        break;
                    }
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cell.load(), 1000);
}
