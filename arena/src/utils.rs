/// Mutable references to two distinct elements of `slice`.
pub fn get_two_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert!(i != j, "Indices must differ!");
    if i < j {
        let (left, right) = slice.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = slice.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_two_mut_either_order() {
        let mut values = [1, 2, 3, 4];
        let (a, b) = get_two_mut(&mut values, 3, 1);
        std::mem::swap(a, b);
        assert_eq!(values, [1, 4, 3, 2]);
    }

    #[test]
    #[should_panic]
    fn test_get_two_mut_same_index() {
        let mut values = [1, 2];
        get_two_mut(&mut values, 1, 1);
    }
}
