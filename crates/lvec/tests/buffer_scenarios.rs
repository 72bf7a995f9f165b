//! # Buffer Scenario Tests
//!
//! End-to-end walks through the buffer contract, through both the typed
//! and the byte-level API.
//!
//! Run with: cargo test --package lvec --test buffer_scenarios

use lvec::{Buffer, BufferConfig, BufferError, LVec, Status};

fn bytes(value: u32) -> [u8; 4] {
    value.to_ne_bytes()
}

// ============================================================================
// TYPED API
// ============================================================================

#[test]
fn scenario_append_insert_remove() {
    let mut nums: LVec<u32> = LVec::new().unwrap();
    for n in [10, 20, 30] {
        nums.push(n).unwrap();
    }
    assert_eq!(nums.len(), 3);

    nums.insert(25, 1).unwrap();
    assert_eq!(nums.as_slice(), &[10, 25, 20, 30]);

    assert_eq!(nums.remove(0).unwrap(), 10);
    assert_eq!(nums.as_slice(), &[25, 20, 30]);
    assert_eq!(nums.len(), 3);

    nums.remove(2).unwrap();
    assert_eq!(nums.as_slice(), &[25, 20]);
    assert_eq!(nums.len(), 2);
}

#[test]
fn scenario_shrink_fresh_buffer_to_floor() {
    let mut nums: LVec<u32> = LVec::new().unwrap();
    assert_eq!(nums.capacity(), 10);

    nums.shrink_to_fit().unwrap();
    assert_eq!(nums.capacity(), 2);
    assert!(nums.is_empty());
}

#[test]
fn scenario_growth_relocation_keeps_order() {
    let mut nums: LVec<u32> = LVec::new().unwrap();
    for n in 0..11 {
        nums.push(n * 100).unwrap();
    }

    assert_eq!(nums.capacity(), 15);
    assert_eq!(nums.len(), 11);
    for (i, value) in nums.as_slice().iter().enumerate() {
        assert_eq!(*value, i as u32 * 100);
    }
}

#[test]
fn scenario_reserve_then_fill_without_growth() {
    let mut nums: LVec<u64> = LVec::new().unwrap();
    nums.reserve_minimum(100).unwrap();
    let reserved = nums.capacity();
    assert!(reserved >= 100);

    for n in 0..100 {
        nums.push(n).unwrap();
    }
    assert_eq!(nums.capacity(), reserved);

    // Already covered: nothing changes.
    nums.reserve_minimum(50).unwrap();
    assert_eq!(nums.capacity(), reserved);
    assert_eq!(nums.len(), 100);
}

#[test]
fn scenario_clear_and_reuse() {
    let mut nums: LVec<i16> = LVec::new().unwrap();
    for n in 0..20 {
        nums.push(n).unwrap();
    }
    let capacity = nums.capacity();

    nums.clear();
    assert!(nums.is_empty());
    assert_eq!(nums.capacity(), capacity);

    nums.push(-1).unwrap();
    assert_eq!(nums.as_slice(), &[-1]);
}

// ============================================================================
// BYTE-LEVEL API
// ============================================================================

#[test]
fn scenario_byte_buffer_matches_typed() {
    let mut buffer = Buffer::new(4).unwrap();
    for n in [10, 20, 30] {
        buffer.append(&bytes(n)).unwrap();
    }
    buffer.insert(&bytes(25), 1).unwrap();
    buffer.remove(0).unwrap();

    let nums = LVec::<u32>::from_buffer(buffer).unwrap();
    assert_eq!(nums.as_slice(), &[25, 20, 30]);
}

#[test]
fn scenario_out_of_bounds_leaves_buffer_alone() {
    let mut buffer = Buffer::new(4).unwrap();
    assert_eq!(Status::of(&buffer.remove_last()), Some(Status::OutOfBounds));
    assert_eq!(Status::of(&buffer.remove(0)), Some(Status::OutOfBounds));
    assert_eq!(
        Status::of(&buffer.insert(&bytes(1), 0)),
        Some(Status::OutOfBounds)
    );

    buffer.append(&bytes(1)).unwrap();
    buffer.append(&bytes(2)).unwrap();
    let before = buffer.as_bytes().to_vec();

    assert!(matches!(
        buffer.insert(&bytes(3), 2),
        Err(BufferError::OutOfBounds { index: 2, length: 2 })
    ));
    assert!(matches!(
        buffer.remove(7),
        Err(BufferError::OutOfBounds { index: 7, length: 2 })
    ));
    assert_eq!(buffer.as_bytes(), &before[..]);
    assert_eq!(buffer.length(), 2);
}

#[test]
fn scenario_budget_exhaustion_is_all_or_nothing() {
    let config = BufferConfig::from_toml_str("initial_capacity = 4\nmax_bytes = 16\n").unwrap();
    let mut nums: LVec<u32> = LVec::with_config(config).unwrap();
    for n in 1..=4 {
        nums.push(n).unwrap();
    }

    let result = nums.push(5);
    assert_eq!(Status::of(&result), Some(Status::AllocationFailure));
    assert_eq!(nums.len(), 4);
    assert_eq!(nums.capacity(), 4);
    assert_eq!(nums.as_slice(), &[1, 2, 3, 4]);

    // Shrinking stays within budget, and later growth is still refused.
    nums.remove(3).unwrap();
    nums.shrink_to_fit().unwrap();
    assert_eq!(nums.capacity(), 3);
    nums.push(4).unwrap();
    assert_eq!(nums.capacity(), 4);
    assert!(nums.push(5).is_err());
    assert_eq!(nums.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn scenario_custom_growth_factor() {
    let config = BufferConfig::from_toml_str("initial_capacity = 2\ngrowth_factor = 2.0\n").unwrap();
    let mut nums: LVec<u8> = LVec::with_config(config).unwrap();
    for n in 0..5 {
        nums.push(n).unwrap();
    }
    // 2 -> 4 -> 8
    assert_eq!(nums.capacity(), 8);
    assert_eq!(nums.as_slice(), &[0, 1, 2, 3, 4]);
}
