use std::collections::VecDeque;

use circ_buff::{ReadStatus, RingBuffer, RingBufferError, WriteStatus};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Write(u32),
    Read,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u32>().prop_map(Op::Write), Just(Op::Read)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_matches_fifo_model(capacity in 1usize..16, ops in prop::collection::vec(op(), 0..200)) {
        let mut buf = RingBuffer::new(capacity).unwrap();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Write(v) => match buf.write(v) {
                    Ok(()) => model.push_back(v),
                    Err(RingBufferError::BufferFull { .. }) => {
                        prop_assert_eq!(model.len(), capacity);
                    }
                    Err(e) => {
                        prop_assert!(false, "unexpected error {}", e);
                    }
                },
                Op::Read => match buf.read() {
                    Ok(v) => {
                        prop_assert_eq!(Some(v), model.pop_front());
                    }
                    Err(RingBufferError::BufferEmpty) => {
                        prop_assert!(model.is_empty());
                    }
                    Err(e) => {
                        prop_assert!(false, "unexpected error {}", e);
                    }
                },
            }

            let occupancy = buf.occupancy().unwrap();
            prop_assert_eq!(occupancy, model.len());
            prop_assert!(occupancy <= capacity);
            prop_assert_eq!(buf.check_full().unwrap() == WriteStatus::Full, occupancy == capacity);
            prop_assert_eq!(buf.check_empty().unwrap() == ReadStatus::Empty, occupancy == 0);
            prop_assert!(buf.read_cursor().unwrap() < capacity);
            prop_assert!(buf.write_cursor().unwrap() < capacity);
        }
    }

    #[test]
    fn prop_failed_ops_leave_state_unchanged(capacity in 1usize..8, fill in any::<u32>()) {
        let mut buf = RingBuffer::new(capacity).unwrap();
        prop_assert!(buf.read().is_err());
        let untouched = buf.snapshot().unwrap();
        let zeros = vec![0u32; capacity];
        prop_assert_eq!(untouched.slots(), zeros.as_slice());

        for _ in 0..capacity {
            buf.write(fill).unwrap();
        }
        let before = buf.snapshot().unwrap();
        prop_assert!(buf.write(fill.wrapping_add(1)).is_err());
        prop_assert_eq!(buf.snapshot().unwrap(), before);
        prop_assert_eq!(buf.occupancy().unwrap(), capacity);
    }

    #[test]
    fn prop_refill_after_partial_drain(capacity in 1usize..32, drained in 0usize..32) {
        let k = drained % capacity;
        let mut buf = RingBuffer::new(capacity).unwrap();
        for v in 0..capacity as u32 {
            buf.write(v).unwrap();
        }
        for v in 0..k as u32 {
            prop_assert_eq!(buf.read().unwrap(), v);
        }
        for v in 0..k as u32 {
            buf.write(1000 + v).unwrap();
        }
        prop_assert_eq!(buf.check_full().unwrap(), WriteStatus::Full);

        let expected: Vec<u32> = (k as u32..capacity as u32).chain((0..k as u32).map(|v| 1000 + v)).collect();
        let drained: Vec<u32> = (0..capacity).map(|_| buf.read().unwrap()).collect();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prop_write_then_read_round_trips(capacity in 1usize..8, prefix in 0usize..8, v in any::<u32>()) {
        let mut buf = RingBuffer::new(capacity).unwrap();
        // shift the cursors off the origin first
        for i in 0..prefix {
            buf.write(i as u32).unwrap();
            buf.read().unwrap();
        }
        buf.write(v).unwrap();
        prop_assert_eq!(buf.read().unwrap(), v);
    }
}
