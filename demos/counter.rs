/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates using atomic integers as thread-safe counters.

use prism3_atomic_cell::{
    AtomicCell,
    AtomicI32,
    IntrinsicBackend,
    MemoryOrder,
};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = AtomicI32::new(0);
    println!("   Initial value: {}", counter.load());

    println!("   ++counter: {}", counter.pre_increment());
    println!("   counter++: {}", counter.post_increment());
    println!("   counter += 5: {}", counter.add_assign(5));
    println!("   --counter: {}", counter.pre_decrement());
    println!("   Now: {}", counter);

    // Example 2: Multi-threaded counter
    println!("\n2. Multi-threaded Counter:");
    let counter = Arc::new(AtomicI32::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.fetch_add_explicit(1, MemoryOrder::Relaxed);
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final count: {} (expected: {})",
        counter.load(),
        num_threads * increments_per_thread
    );

    // Example 3: Compare-and-exchange
    println!("\n3. Compare-and-Exchange:");
    let counter = AtomicI32::new(10);
    println!("   Initial value: {}", counter.load());

    let mut expected = 10;
    if counter.compare_exchange_strong(&mut expected, 20) {
        println!("   CAS succeeded: value is now {}", counter.load());
    }

    let mut expected = 10;
    if !counter.compare_exchange_strong(&mut expected, 30) {
        println!("   CAS failed: actual value was {}", expected);
    }

    // Example 4: CAS loop doubling the value
    println!("\n4. CAS Loop:");
    let counter = AtomicI32::new(5);
    let mut current = counter.load();
    loop {
        let doubled = current * 2;
        if counter.compare_exchange_weak(&mut current, doubled) {
            break;
        }
    }
    println!("   After doubling - old: {}, new: {}", current, counter.load());

    // Example 5: Intrinsic backend ignores the requested tag
    println!("\n5. Backend Orders:");
    let counter: AtomicCell<u32, IntrinsicBackend> = AtomicCell::new(0);
    for order in MemoryOrder::ALL {
        counter.fetch_add_explicit(1, order);
        println!(
            "   requested {:<20} runs as {}",
            order.name(),
            AtomicCell::<u32, IntrinsicBackend>::effective_order(order)
        );
    }
    println!("   Count: {}", counter.load());

    println!("\n=== Example completed ===");
}
