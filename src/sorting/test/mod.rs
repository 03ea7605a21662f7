//! Tests for the sorting implementations.

#[cfg(test)]
mod tests {
    use crate::error::AlgoError;
    use crate::random::generate_perm;
    use crate::sorting::*;
    use crate::utils::bench::make_rng;

    fn is_sorted(table: &[i32], descending: bool) -> bool {
        table.windows(2).all(|w| {
            if descending {
                w[0] >= w[1]
            } else {
                w[0] <= w[1]
            }
        })
    }

    fn same_multiset(a: &[i32], b: &[i32]) -> bool {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    #[test]
    fn test_select_sort_example() {
        let mut table = [5, 3, 1, 4, 2];
        let obs = SelectSort.sort(&mut table, 0, 4).unwrap();
        assert_eq!(table, [1, 2, 3, 4, 5]);
        assert_eq!(obs, 10, "4 + 3 + 2 + 1 comparisons");
    }

    #[test]
    fn test_select_sort_inv_example() {
        let mut table = [5, 3, 1, 4, 2];
        let obs = SelectSortInv.sort(&mut table, 0, 4).unwrap();
        assert_eq!(table, [5, 4, 3, 2, 1]);
        assert_eq!(obs, 10);
    }

    #[test]
    fn test_select_sort_subrange_only() {
        let mut table = [9, 4, 3, 2, 0];
        let obs = SelectSort.sort(&mut table, 1, 3).unwrap();
        assert_eq!(table, [9, 2, 3, 4, 0]);
        assert_eq!(obs, 3);

        let mut table = [0, 1, 2, 3, 9];
        SelectSortInv.sort(&mut table, 1, 3).unwrap();
        assert_eq!(table, [0, 3, 2, 1, 9]);
    }

    #[test]
    fn test_all_sorters_on_permutations() {
        let mut rng = make_rng(Some(7));
        for sorter in available_sorters() {
            for n in [1usize, 2, 3, 10, 64, 257] {
                let original = generate_perm(n, &mut rng).unwrap();
                let mut table = original.clone();
                sorter.sort(&mut table, 0, n - 1).unwrap();
                assert!(
                    is_sorted(&table, sorter.descending()),
                    "{} left size {} unsorted",
                    sorter.name(),
                    n
                );
                assert!(same_multiset(&original, &table), "{} lost values", sorter.name());
            }
        }
    }

    #[test]
    fn test_sorters_with_duplicates() {
        let original = vec![4, 1, 4, 2, 2, 9, 0, 4, 1, 1];
        let sorters: Vec<Box<dyn SortAlgorithm>> = vec![
            Box::new(SelectSort),
            Box::new(SelectSortInv),
            Box::new(MergeSort),
            Box::new(QuickSort::new(LastElement)),
            Box::new(QuickSort::new(Midpoint)),
            Box::new(QuickSort::new(MedianOfThree)),
        ];
        for sorter in sorters {
            let mut table = original.clone();
            let last = table.len() - 1;
            sorter.sort(&mut table, 0, last).unwrap();
            assert!(is_sorted(&table, sorter.descending()), "{}", sorter.name());
            assert!(same_multiset(&original, &table), "{}", sorter.name());
        }
    }

    #[test]
    fn test_single_element_costs_nothing() {
        for sorter in available_sorters() {
            let mut table = [42];
            assert_eq!(sorter.sort(&mut table, 0, 0).unwrap(), 0, "{}", sorter.name());
            assert_eq!(table, [42]);
        }
    }

    #[test]
    fn test_invalid_ranges() {
        for sorter in available_sorters() {
            let mut table = [3, 2, 1];
            assert!(matches!(
                sorter.sort(&mut table, 2, 1),
                Err(AlgoError::InvalidRange { ip: 2, iu: 1, len: 3 })
            ));
            assert!(matches!(
                sorter.sort(&mut table, 0, 3),
                Err(AlgoError::InvalidRange { .. })
            ));
            let mut empty: [i32; 0] = [];
            assert!(sorter.sort(&mut empty, 0, 0).is_err());
            assert_eq!(table, [3, 2, 1], "{} touched the table", sorter.name());
        }
    }

    #[test]
    fn test_already_sorted_input() {
        let sorted: Vec<i32> = (1..=16).collect();

        let mut table = sorted.clone();
        let obs = MergeSort.sort(&mut table, 0, 15).unwrap();
        assert_eq!(table, sorted);
        // every merge drains the right half after len/2 comparisons
        assert_eq!(obs, 32);

        let mut table = sorted.clone();
        let obs = SelectSort.sort(&mut table, 0, 15).unwrap();
        assert_eq!(table, sorted);
        assert_eq!(obs, 120);

        let mut table = sorted.clone();
        QuickSort::new(Midpoint).sort(&mut table, 0, 15).unwrap();
        assert_eq!(table, sorted);
    }

    #[test]
    fn test_merge_counts_interleave_only() {
        let mut table = [1, 2, 3, 4, 5, 6];
        assert_eq!(merge(&mut table, 0, 2, 5).unwrap(), 3);
        assert_eq!(table, [1, 2, 3, 4, 5, 6]);

        let mut table = [1, 3, 5, 2, 4, 6];
        assert_eq!(merge(&mut table, 0, 2, 5).unwrap(), 5);
        assert_eq!(table, [1, 2, 3, 4, 5, 6]);

        let mut table = [4, 5, 6, 1, 2, 3];
        assert_eq!(merge(&mut table, 0, 2, 5).unwrap(), 3);
        assert_eq!(table, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_partition_counts_every_element_once() {
        let mut table = [3, 7, 1, 9, 5, 2, 8];
        let (pos, obs) = partition(&mut table, 0, 6, &LastElement).unwrap();
        assert_eq!(obs, 6);
        assert_eq!(table[pos], 8);
        assert!(table[..pos].iter().all(|&v| v < 8));
        assert!(table[pos + 1..].iter().all(|&v| v >= 8));
    }

    #[test]
    fn test_partition_subrange() {
        let mut table = [100, 4, 2, 3, 1, -100];
        let (pos, obs) = partition(&mut table, 1, 4, &Midpoint).unwrap();
        assert_eq!(obs, 3);
        assert_eq!(table[pos], 2);
        assert_eq!(table[0], 100);
        assert_eq!(table[5], -100);
    }

    #[test]
    fn test_quick_sort_stat_rejects_out_of_range_pivot() {
        let mut table = [100, 200, 300];
        assert!(matches!(
            QuickSort::new(StatisticalAverage).sort(&mut table, 0, 2),
            Err(AlgoError::PivotOutOfRange { pos: 200, ip: 0, iu: 2 })
        ));
    }

    #[test]
    fn test_quick_sort_stat_rejects_repeated_values() {
        let mut table = [7; 10];
        assert!(matches!(
            QuickSort::new(StatisticalAverage).sort(&mut table, 0, 9),
            Err(AlgoError::PivotOutOfRange { pos: 7, ip: 8, iu: 9 })
        ));
    }

    #[test]
    fn test_quick_sort_stat_on_identity() {
        let mut table = [1, 2, 3, 4, 5];
        let obs = QuickSort::new(StatisticalAverage).sort(&mut table, 0, 4).unwrap();
        assert_eq!(table, [1, 2, 3, 4, 5]);
        assert!(obs >= 4);
    }

    #[test]
    fn test_sorter_names_are_unique() {
        let sorters = available_sorters();
        let mut names: Vec<_> = sorters.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), sorters.len());
    }
}
