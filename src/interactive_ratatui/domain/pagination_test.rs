#[cfg(test)]
mod tests {
    use super::super::pagination::*;

    #[test]
    fn test_zero_hits_is_no_results() {
        assert_eq!(check_exhaustion(0, 1), Some(Exhaustion::NoResults));
        assert_eq!(check_exhaustion(0, 3), Some(Exhaustion::NoResults));
    }

    #[test]
    fn test_less_than_one_page_on_first_page() {
        assert_eq!(check_exhaustion(5, 1), Some(Exhaustion::NoMoreResults));
        assert_eq!(check_exhaustion(11, 1), Some(Exhaustion::NoMoreResults));
    }

    #[test]
    fn test_exactly_one_page_keeps_going() {
        // floor(12 / 1) == 12 is not below the page size
        assert_eq!(check_exhaustion(12, 1), None);
    }

    #[test]
    fn test_estimate_uses_floor_division() {
        assert_eq!(check_exhaustion(50, 1), None);
        assert_eq!(check_exhaustion(50, 4), None); // 12
        assert_eq!(check_exhaustion(50, 5), Some(Exhaustion::NoMoreResults)); // 10
    }

    #[test]
    fn test_large_result_sets() {
        assert_eq!(check_exhaustion(500, 41), None); // 12
        assert_eq!(check_exhaustion(500, 42), Some(Exhaustion::NoMoreResults)); // 11
    }
}
