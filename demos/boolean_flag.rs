/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Boolean Cell Example
//!
//! Runs the same flag walkthrough on both backends: exchange, weak against
//! strong compare-exchange, logical read-modify-write and a one-shot claim.

use prism3_atomic_cell::{
    AtomicBackend,
    AtomicCell,
    IntrinsicBackend,
    MemoryOrder,
    NativeBackend,
};
use std::mem;
use std::sync::Arc;
use std::thread;

type Flag<B> = AtomicCell<bool, B>;

fn walkthrough<B: AtomicBackend>() {
    println!("--- backend: {} ---", B::NAME);
    println!("cell size: {} byte(s)", mem::size_of::<Flag<B>>());

    let flag: Flag<B> = Flag::default();
    let previous = flag.exchange(true);
    println!("exchange(true) on false -> {}, now {}", previous, flag.load());

    // A weak attempt may fail even when the value matches; count retries.
    flag.store(false);
    let mut expected = false;
    let mut attempts = 1;
    while !flag.compare_exchange_weak(&mut expected, true) {
        attempts += 1;
    }
    println!("weak CAS false -> true after {} attempt(s)", attempts);

    // The strong form only fails on a real mismatch and reports what it saw.
    let mut stale = false;
    let swapped = flag.compare_exchange_strong(&mut stale, false);
    println!("strong CAS expecting false: swapped={}, observed={}", swapped, stale);

    println!("fetch_and(false) -> {}", flag.fetch_and(false));
    println!("fetch_or(true)   -> {}", flag.fetch_or(true));
    println!("xor_assign(true) -> {}", flag.xor_assign(true));

    for order in [MemoryOrder::Relaxed, MemoryOrder::Acquire, MemoryOrder::SeqCst] {
        println!(
            "requested {:<20} runs as {}",
            order.name(),
            Flag::<B>::effective_order(order)
        );
    }

    let claimed: Arc<Flag<B>> = Arc::new(Flag::new(false));
    let winners = (0..4)
        .map(|_| {
            let claimed = claimed.clone();
            thread::spawn(move || {
                let mut unclaimed = false;
                claimed.compare_exchange_strong_explicit(&mut unclaimed, true, MemoryOrder::AcqRel)
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|won| *won)
        .count();
    println!("threads that claimed the flag: {}\n", winners);
}

fn main() {
    println!("=== Boolean Cell Example ===\n");
    walkthrough::<IntrinsicBackend>();
    walkthrough::<NativeBackend>();
    println!("=== Example completed ===");
}
