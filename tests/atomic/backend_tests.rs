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
    AtomicI32,
    DefaultBackend,
    IntrinsicBackend,
    MemoryOrder,
    NativeBackend,
};

fn scalar_scenario<B: AtomicBackend>() {
    let cell: AtomicCell<i32, B> = AtomicCell::new(1);
    assert_eq!(cell.fetch_add(2), 1);
    assert_eq!(cell.load(), 3);

    let mut expected = 3;
    assert!(cell.compare_exchange_strong(&mut expected, 5));

    let mut expected = 3;
    assert!(!cell.compare_exchange_strong(&mut expected, 7));
    assert_eq!(expected, 5);
    assert_eq!(cell.load(), 5);
}

#[test]
fn test_scalar_scenario_on_both_backends() {
    scalar_scenario::<IntrinsicBackend>();
    scalar_scenario::<NativeBackend>();
}

#[test]
fn test_intrinsic_runs_everything_as_seq_cst() {
    for order in MemoryOrder::ALL {
        assert_eq!(IntrinsicBackend::effective_order(order), MemoryOrder::SeqCst);
        assert_eq!(
            AtomicCell::<u8, IntrinsicBackend>::effective_order(order),
            MemoryOrder::SeqCst
        );
    }
}

#[test]
fn test_native_forwards_requested_order() {
    assert_eq!(NativeBackend::effective_order(MemoryOrder::Relaxed), MemoryOrder::Relaxed);
    assert_eq!(NativeBackend::effective_order(MemoryOrder::Consume), MemoryOrder::Acquire);
    assert_eq!(NativeBackend::effective_order(MemoryOrder::Acquire), MemoryOrder::Acquire);
    assert_eq!(NativeBackend::effective_order(MemoryOrder::Release), MemoryOrder::Release);
    assert_eq!(NativeBackend::effective_order(MemoryOrder::AcqRel), MemoryOrder::AcqRel);
    assert_eq!(NativeBackend::effective_order(MemoryOrder::SeqCst), MemoryOrder::SeqCst);
}

#[test]
fn test_backend_names() {
    assert_eq!(IntrinsicBackend::NAME, "intrinsic");
    assert_eq!(NativeBackend::NAME, "native");
    let debug = format!("{:?}", AtomicCell::<u16, IntrinsicBackend>::new(9));
    assert!(debug.contains("intrinsic"));
}

#[cfg(feature = "intrinsic-backend")]
#[test]
fn test_default_backend_is_intrinsic() {
    assert_eq!(DefaultBackend::NAME, IntrinsicBackend::NAME);
}

#[cfg(not(feature = "intrinsic-backend"))]
#[test]
fn test_default_backend_is_native() {
    assert_eq!(DefaultBackend::NAME, NativeBackend::NAME);
}

#[test]
fn test_aliases_use_default_backend() {
    let cell = AtomicI32::new(0);
    let debug = format!("{:?}", cell);
    assert!(debug.contains(DefaultBackend::NAME));
}

#[test]
fn test_default_order_is_seq_cst() {
    assert_eq!(MemoryOrder::default(), MemoryOrder::SeqCst);
}

#[test]
fn test_intrinsic_ignores_tag_for_values() {
    let relaxed: AtomicCell<u32, IntrinsicBackend> = AtomicCell::new(10);
    let strict: AtomicCell<u32, IntrinsicBackend> = AtomicCell::new(10);

    relaxed.store_explicit(20, MemoryOrder::Relaxed);
    strict.store_explicit(20, MemoryOrder::SeqCst);
    assert_eq!(
        relaxed.fetch_add_explicit(1, MemoryOrder::Relaxed),
        strict.fetch_add_explicit(1, MemoryOrder::SeqCst)
    );
    assert_eq!(relaxed.load_explicit(MemoryOrder::Acquire), strict.load());
}
