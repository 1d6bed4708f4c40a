// tests/property_tests.rs
use binkit_rs::*;
use proptest::collection::vec;
use proptest::prelude::*;
use std::io::Cursor;

proptest! {
    #[test]
    fn reversing_twice_is_identity(value in any::<u64>()) {
        let mut twice = value;
        reverse(&mut twice);
        reverse(&mut twice);
        prop_assert_eq!(twice, value);
    }

    #[test]
    fn reversal_matches_integer_swap(value in any::<u32>()) {
        let mut reversed = value;
        reverse(&mut reversed);
        prop_assert_eq!(reversed, value.swap_bytes());
    }

    #[test]
    fn wide_reversal_matches_integer_swap(value in any::<u128>()) {
        let mut reversed = value;
        reverse(&mut reversed);
        prop_assert_eq!(reversed, value.swap_bytes());
    }

    #[test]
    fn batch_reversal_swaps_every_element_in_place(values in vec(any::<u16>(), 0..256)) {
        let mut reversed = values.clone();
        reverse_many(&mut reversed);

        prop_assert_eq!(reversed.len(), values.len());
        for (swapped, original) in reversed.iter().zip(values.iter()) {
            prop_assert_eq!(*swapped, original.swap_bytes());
        }
    }

    #[test]
    fn untyped_runs_agree_with_plain_chunk_reversal(
        (width, mut bytes) in (1usize..24, 0usize..16).prop_flat_map(|(width, count)| {
            (Just(width), vec(any::<u8>(), width * count))
        })
    ) {
        let mut expected = bytes.clone();
        for chunk in expected.chunks_exact_mut(width) {
            chunk.reverse();
        }

        reverse_each(&mut bytes, width).unwrap();
        prop_assert_eq!(bytes, expected);
    }

    #[test]
    fn conversion_round_trip_is_identity(
        values in vec(any::<i64>(), 0..128),
        from_big in any::<bool>(),
        to_big in any::<bool>(),
    ) {
        let from = if from_big { Endianness::Big } else { Endianness::Little };
        let to = if to_big { Endianness::Big } else { Endianness::Little };

        let mut converted = values.clone();
        convert_many(&mut converted, from, to);
        convert_many(&mut converted, to, from);
        prop_assert_eq!(converted, values);
    }

    #[test]
    fn equal_orders_are_always_noops(
        values in vec(any::<u32>(), 0..64),
        big in any::<bool>(),
    ) {
        let order = if big { Endianness::Big } else { Endianness::Little };

        let mut converted = values.clone();
        convert_many(&mut converted, order, order);
        prop_assert_eq!(converted, values);
    }

    #[test]
    fn stream_round_trip_returns_input(values in vec(any::<u64>(), 0..128)) {
        let mut stream = Vec::new();
        stream.write_many(&values).unwrap();
        prop_assert_eq!(stream.len(), values.len() * 8);

        let restored: Vec<u64> = Cursor::new(stream).read_vec(values.len()).unwrap();
        prop_assert_eq!(restored, values);
    }
}
