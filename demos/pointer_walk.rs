/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Pointer Example
//!
//! Demonstrates element-scaled pointer arithmetic and a shared bump cursor.

use prism3_atomic_cell::AtomicPtr;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic Pointer Example ===\n");

    // Example 1: Walking an array
    println!("1. Walking an Array:");
    let mut values = [10_u64, 20, 30, 40, 50];
    let base = values.as_mut_ptr();
    let cursor = AtomicPtr::new(base);

    cursor.pre_increment();
    cursor.post_increment();
    let at = cursor.load();
    println!(
        "   After two increments: index {} (moved {} bytes)",
        (at as usize - base as usize) / std::mem::size_of::<u64>(),
        at as usize - base as usize
    );

    cursor.fetch_add(2);
    println!(
        "   After fetch_add(2): index {}",
        (cursor.load() as usize - base as usize) / std::mem::size_of::<u64>()
    );

    cursor.fetch_sub(4);
    println!("   Back at base: {}", cursor.load() == base);

    // Example 2: Shared bump cursor
    println!("\n2. Shared Bump Cursor:");
    let mut slots = vec![0_u32; 40];
    let start = slots.as_mut_ptr();
    let cursor = Arc::new(AtomicPtr::new(start));
    let mut handles = vec![];

    for i in 0..4 {
        let cursor = cursor.clone();
        let handle = thread::spawn(move || {
            let first = cursor.fetch_add(10) as usize;
            println!("   Thread {} claimed 10 slots at {:#x}", i, first);
            first
        });
        handles.push(handle);
    }

    let mut claimed: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    claimed.sort_unstable();
    claimed.dedup();
    println!("   Distinct blocks: {}", claimed.len());
    println!(
        "   Cursor at end of buffer: {}",
        cursor.load() == start.wrapping_add(slots.len())
    );

    println!("\n=== Example completed ===");
}
