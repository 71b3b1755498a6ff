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
    AtomicBool,
    AtomicCell,
    IntrinsicBackend,
    MemoryOrder,
    NativeBackend,
};
use std::mem;
use std::sync::atomic::{
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_new() {
    let atomic = AtomicBool::new(true);
    assert!(atomic.load());
    let atomic = AtomicBool::new(false);
    assert!(!atomic.load());
}

#[test]
fn test_default() {
    let atomic = AtomicBool::default();
    assert!(!atomic.load());
}

#[test]
fn test_from() {
    let atomic = AtomicBool::from(true);
    assert!(atomic.load());
}

#[test]
fn test_stored_as_one_byte() {
    assert_eq!(mem::size_of::<AtomicBool>(), 1);
    assert_eq!(mem::size_of::<AtomicCell<bool, IntrinsicBackend>>(), 1);
    assert_eq!(mem::size_of::<AtomicCell<bool, NativeBackend>>(), 1);
}

#[test]
fn test_store_load() {
    let atomic = AtomicBool::new(false);
    atomic.store(true);
    assert!(atomic.load());
    atomic.store(false);
    assert!(!atomic.get());
}

#[test]
fn test_assign() {
    let atomic = AtomicBool::new(false);
    assert!(atomic.assign(true));
    assert!(atomic.load());
}

fn exchange_scenario<B: AtomicBackend>() {
    let atomic: AtomicCell<bool, B> = AtomicCell::new(false);
    assert!(!atomic.exchange(true));
    assert!(atomic.load());
}

#[test]
fn test_exchange_on_both_backends() {
    exchange_scenario::<IntrinsicBackend>();
    exchange_scenario::<NativeBackend>();
}

#[test]
fn test_fetch_and() {
    let atomic = AtomicBool::new(true);
    assert!(atomic.fetch_and(false));
    assert!(!atomic.load());

    atomic.store(true);
    assert!(atomic.fetch_and(true));
    assert!(atomic.load());

    atomic.store(false);
    assert!(!atomic.fetch_and(true));
    assert!(!atomic.load());
}

#[test]
fn test_fetch_or() {
    let atomic = AtomicBool::new(false);
    assert!(!atomic.fetch_or(true));
    assert!(atomic.load());

    atomic.store(false);
    assert!(!atomic.fetch_or(false));
    assert!(!atomic.load());

    atomic.store(true);
    assert!(atomic.fetch_or(false));
    assert!(atomic.load());
}

#[test]
fn test_fetch_xor() {
    let atomic = AtomicBool::new(false);
    assert!(!atomic.fetch_xor(true));
    assert!(atomic.load());

    assert!(atomic.fetch_xor(true));
    assert!(!atomic.load());

    assert!(!atomic.fetch_xor(false));
    assert!(!atomic.load());
}

#[test]
fn test_bitwise_assign_forms() {
    let atomic = AtomicBool::new(true);
    assert!(!atomic.and_assign(false));
    assert!(atomic.or_assign(true));
    assert!(!atomic.xor_assign(true));
    assert!(!atomic.load());
}

#[test]
fn test_compare_exchange_strong() {
    let atomic = AtomicBool::new(false);
    let mut expected = false;
    assert!(atomic.compare_exchange_strong(&mut expected, true));
    assert!(atomic.load());

    let mut expected = false;
    assert!(!atomic.compare_exchange_strong(&mut expected, false));
    assert!(expected);
    assert!(atomic.load());
}

#[test]
fn test_compare_exchange_weak_failure() {
    let atomic = AtomicBool::new(false);
    let mut expected = true;
    assert!(!atomic.compare_exchange_weak(&mut expected, false));
    assert!(!expected);
    assert!(!atomic.load());
}

#[test]
fn test_compare_exchange_weak_in_loop() {
    let atomic = AtomicBool::new(false);
    let mut expected = false;
    while !atomic.compare_exchange_weak(&mut expected, true) {
        assert!(!expected);
    }
    assert!(atomic.load());
}

#[test]
fn test_explicit_orders() {
    let atomic = AtomicBool::new(false);
    for order in MemoryOrder::ALL {
        atomic.store_explicit(true, order);
        assert!(atomic.load_explicit(order));
        assert!(atomic.exchange_explicit(false, order));
        assert!(!atomic.fetch_or_explicit(true, order));
        assert!(atomic.fetch_and_explicit(false, order));
        assert!(!atomic.fetch_xor_explicit(false, order));
    }
}

#[test]
fn test_concurrent_toggle() {
    let flag = Arc::new(AtomicBool::new(false));
    let mut handles = vec![];

    for _ in 0..10 {
        let flag = flag.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                flag.fetch_xor(true);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // 1000 toggles
    assert!(!flag.load());
}

#[test]
fn test_concurrent_set_once() {
    let flag = Arc::new(AtomicBool::new(false));
    let mut handles = vec![];
    let success_count = Arc::new(StdAtomicUsize::new(0));

    for _ in 0..10 {
        let flag = flag.clone();
        let success_count = success_count.clone();
        let handle = thread::spawn(move || {
            let mut expected = false;
            if flag.compare_exchange_strong(&mut expected, true) {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(flag.load());
    assert_eq!(success_count.load(Ordering::Relaxed), 1);
}

#[test]
fn test_debug_display() {
    let atomic = AtomicBool::new(true);
    let debug_str = format!("{:?}", atomic);
    assert!(debug_str.contains("true"));
    let display_str = format!("{}", atomic);
    assert_eq!(display_str, "true");
}
