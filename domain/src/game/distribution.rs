//! Proportional split of a question count across sub-categories.

/// Split `question_count` questions across `sub_category_count` slots.
///
/// Every slot receives `question_count / sub_category_count`; the first
/// `question_count % sub_category_count` slots receive one extra. The result
/// always sums to `question_count`.
///
/// When there are more slots than questions, the trailing slots get `0`.
/// Callers decide what a zero allocation means (the fetch planner skips
/// them). With no slots at all the result is empty.
pub fn allocate(question_count: usize, sub_category_count: usize) -> Vec<usize> {
    if sub_category_count == 0 {
        return Vec::new();
    }

    let base = question_count / sub_category_count;
    let remainder = question_count % sub_category_count;

    (0..sub_category_count)
        .map(|slot| if slot < remainder { base + 1 } else { base })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uneven_split_front_loads_remainder() {
        assert_eq!(allocate(17, 5), vec![4, 4, 3, 3, 3]);
    }

    #[test]
    fn test_even_split() {
        assert_eq!(allocate(9, 3), vec![3, 3, 3]);
    }

    #[test]
    fn test_single_slot_takes_everything() {
        assert_eq!(allocate(23, 1), vec![23]);
    }

    #[test]
    fn test_fewer_questions_than_slots() {
        let result = allocate(5, 12);
        assert_eq!(result, vec![1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_no_slots() {
        assert!(allocate(10, 0).is_empty());
    }

    #[test]
    fn test_sum_always_matches() {
        for count in 1..=60 {
            for slots in 1..=15 {
                let result = allocate(count, slots);
                assert_eq!(result.len(), slots);
                assert_eq!(result.iter().sum::<usize>(), count, "{count}/{slots}");
                if slots <= count {
                    assert!(result.iter().all(|&n| n > 0), "{count}/{slots}");
                }
                // Allocations differ by at most one and never increase
                assert!(result.windows(2).all(|w| w[0] >= w[1] && w[0] - w[1] <= 1));
            }
        }
    }
}
