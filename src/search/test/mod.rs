//! Tests for the dictionary and the search methods.

#[cfg(test)]
mod tests {
    use crate::error::AlgoError;
    use crate::random::generate_perm;
    use crate::search::*;
    use crate::utils::bench::make_rng;

    fn log2_ceil(n: usize) -> u64 {
        // ceil(log2(n + 1))
        (usize::BITS - n.leading_zeros()) as u64
    }

    #[test]
    fn test_binary_search_example() {
        let mut table = [1, 3, 5, 7, 9, 11];
        let hit = BinarySearch.search(&mut table, 0, 5, 7).unwrap();
        assert_eq!(hit.position, 3);
        assert!(hit.obs <= 3);
    }

    #[test]
    fn test_binary_search_bound() {
        let mut rng = make_rng(Some(17));
        for n in [1usize, 2, 7, 8, 100, 1023, 1024] {
            let mut dict = Dictionary::new(n, Order::Sorted).unwrap();
            dict.massive_insert(&generate_perm(n, &mut rng).unwrap()).unwrap();
            for key in 1..=n as i32 {
                let hit = dict.search(key, &BinarySearch).unwrap();
                assert_eq!(hit.position, key as usize - 1);
                assert!(hit.obs <= log2_ceil(n), "n={} key={} obs={}", n, key, hit.obs);
            }
        }
    }

    #[test]
    fn test_linear_search_counts() {
        let mut table = [4, 8, 15, 16, 23, 42];
        let hit = LinearSearch.search(&mut table, 0, 5, 15).unwrap();
        assert_eq!(hit, SearchHit { position: 2, obs: 3 });

        let hit = LinearSearch.search(&mut table, 2, 5, 23).unwrap();
        assert_eq!(hit, SearchHit { position: 4, obs: 3 });
    }

    #[test]
    fn test_misses() {
        let mut table = [1, 3, 5, 7];
        for method in available_searchers() {
            assert!(
                matches!(
                    method.search(&mut table, 0, 3, 4),
                    Err(AlgoError::NotFound { key: 4 })
                ),
                "{} found a missing key",
                method.name()
            );
        }
        // a key outside the searched range is a miss as well
        assert!(LinearSearch.search(&mut table, 1, 3, 1).is_err());
        assert!(BinarySearch.search(&mut table, 0, 1, 7).is_err());
    }

    #[test]
    fn test_invalid_range() {
        let mut table = [1, 2, 3];
        for method in available_searchers() {
            assert!(matches!(
                method.search(&mut table, 2, 1, 2),
                Err(AlgoError::InvalidRange { .. })
            ));
            assert!(method.search(&mut table, 0, 3, 2).is_err());
        }
    }

    #[test]
    fn test_self_organizing_moves_one_slot() {
        let mut table = [10, 20, 30, 40];
        let hit = SelfOrganizingSearch.search(&mut table, 0, 3, 40).unwrap();
        assert_eq!(hit, SearchHit { position: 2, obs: 4 });
        assert_eq!(table, [10, 20, 40, 30]);
        assert_eq!(table[hit.position], 40);

        let hit = SelfOrganizingSearch.search(&mut table, 0, 3, 10).unwrap();
        assert_eq!(hit, SearchHit { position: 0, obs: 1 });
        assert_eq!(table, [10, 20, 40, 30]);
    }

    #[test]
    fn test_self_organizing_never_moves_back() {
        let mut rng = make_rng(Some(4));
        let mut dict = Dictionary::new(50, Order::NotSorted).unwrap();
        dict.massive_insert(&generate_perm(50, &mut rng).unwrap()).unwrap();

        let mut last_position = usize::MAX;
        let mut last_obs = u64::MAX;
        for _ in 0..60 {
            let hit = dict.search(37, &SelfOrganizingSearch).unwrap();
            assert!(hit.position <= last_position);
            assert!(hit.obs <= last_obs);
            last_position = hit.position;
            last_obs = hit.obs;
        }
        assert_eq!(last_position, 0);
        assert_eq!(dict.as_slice()[0], 37);
    }

    #[test]
    fn test_sorted_insert_keeps_order() {
        let mut rng = make_rng(Some(8));
        let keys = generate_perm(200, &mut rng).unwrap();
        let mut dict = Dictionary::new(200, Order::Sorted).unwrap();
        for &key in &keys {
            dict.insert(key).unwrap();
            assert!(dict.as_slice().windows(2).all(|w| w[0] <= w[1]));
        }
        assert_eq!(dict.len(), 200);
    }

    #[test]
    fn test_insert_counts_shifts() {
        let mut dict = Dictionary::new(4, Order::Sorted).unwrap();
        assert_eq!(dict.massive_insert(&[4, 3, 2, 1]).unwrap(), 6);
        assert_eq!(dict.as_slice(), &[1, 2, 3, 4]);

        let mut dict = Dictionary::new(4, Order::NotSorted).unwrap();
        assert_eq!(dict.massive_insert(&[4, 3, 2, 1]).unwrap(), 0);
        assert_eq!(dict.as_slice(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut dict = Dictionary::new(2, Order::NotSorted).unwrap();
        dict.insert(1).unwrap();
        dict.insert(2).unwrap();
        assert!(matches!(
            dict.insert(3),
            Err(AlgoError::CapacityExceeded { size: 2 })
        ));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_massive_insert_stops_on_first_error() {
        let mut dict = Dictionary::new(3, Order::Sorted).unwrap();
        assert!(dict.massive_insert(&[5, 1, 3, 2, 4]).is_err());
        assert_eq!(dict.as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn test_empty_dictionary_search() {
        let mut dict = Dictionary::new(0, Order::Sorted).unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.capacity(), 0);
        assert!(matches!(
            dict.search(1, &LinearSearch),
            Err(AlgoError::NotFound { key: 1 })
        ));
    }
}
