//! Unit tests for cell padding and emphasis

use super::*;

#[cfg(test)]
mod padding_tests {
    use super::*;

    #[test]
    fn test_pad_right_string() {
        assert_eq!(pad_right("Arsenal", 10), "Arsenal   ");
    }

    #[test]
    fn test_pad_left_number() {
        assert_eq!(pad_left(7, 3), "  7");
        assert_eq!(pad_left(-12, 4), " -12");
    }

    #[test]
    fn test_numbers_and_strings_pad_alike() {
        assert_eq!(pad_right(42, 4), pad_right("42", 4));
        assert_eq!(pad_left(42u32, 4), pad_left("42", 4));
    }

    #[test]
    fn test_no_truncation() {
        assert_eq!(pad_right("Wolverhampton Wanderers", 18), "Wolverhampton Wanderers");
        assert_eq!(pad_left(1234, 2), "1234");
        assert_eq!(pad_right("exact", 5), "exact");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(pad_right("", 0), "");
        assert_eq!(pad_left("x", 0), "x");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let padded = pad_right("Müller", 8);
        assert_eq!(padded.chars().count(), 8);
        assert_eq!(padded, "Müller  ");
    }

    #[test]
    fn test_padding_keeps_content_anchored() {
        let values = ["", "a", "Leeds", "Nottingham Forest", "1.FC Köln"];
        for value in values {
            for width in 0..24 {
                let right = pad_right(value, width);
                let left = pad_left(value, width);
                assert!(right.chars().count() >= width);
                assert!(left.chars().count() >= width);
                assert!(right.starts_with(value));
                assert!(left.ends_with(value));
                assert!(right[value.len()..].chars().all(|c| c == ' '));
                assert!(left[..left.len() - value.len()].chars().all(|c| c == ' '));
            }
        }
    }
}

#[cfg(test)]
mod rank_tests {
    use super::*;

    #[test]
    fn test_rank_tiers() {
        assert_eq!(rank_emphasis(1), Some(Emphasis::Leader));
        assert_eq!(rank_emphasis(2), Some(Emphasis::Qualification));
        assert_eq!(rank_emphasis(4), Some(Emphasis::Qualification));
        assert_eq!(rank_emphasis(5), None);
        assert_eq!(rank_emphasis(17), None);
        assert_eq!(rank_emphasis(18), Some(Emphasis::Relegation));
        assert_eq!(rank_emphasis(20), Some(Emphasis::Relegation));
        assert_eq!(rank_emphasis(24), Some(Emphasis::Relegation));
    }

    #[test]
    fn test_rank_zero_is_unstyled() {
        assert_eq!(rank_emphasis(0), None);
    }

    #[test]
    fn test_emphasize_rank_pads_team() {
        let cell = emphasize_rank("Liverpool", 1, 18);
        assert_eq!(cell.text(), "Liverpool         ");
        assert_eq!(cell.emphasis(), Some(Emphasis::Leader));

        let cell = emphasize_rank("Brentford", 10, 18);
        assert_eq!(cell.emphasis(), None);
        assert_eq!(cell.to_string(), "Brentford         ");
    }
}

#[cfg(test)]
mod goal_difference_tests {
    use super::*;

    #[test]
    fn test_goal_difference_sign() {
        let cell = emphasize_goal_difference(12, 3);
        assert_eq!(cell.text(), " 12");
        assert_eq!(cell.emphasis(), Some(Emphasis::Positive));

        let cell = emphasize_goal_difference(-5, 3);
        assert_eq!(cell.text(), " -5");
        assert_eq!(cell.emphasis(), Some(Emphasis::Negative));

        let cell = emphasize_goal_difference(0, 3);
        assert_eq!(cell.text(), "  0");
        assert_eq!(cell.emphasis(), None);
    }
}

#[cfg(test)]
mod games_played_tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean([10, 11, 12]), 11.0);
        assert_eq!(mean([9, 10]), 9.5);
        assert_eq!(mean(Vec::<u32>::new()), 0.0);
    }

    #[test]
    fn test_whole_mean_boundaries() {
        assert_eq!(games_played_emphasis(11, 11.0), None);
        assert_eq!(games_played_emphasis(12, 11.0), Some(Emphasis::Ahead));
        assert_eq!(games_played_emphasis(10, 11.0), Some(Emphasis::Behind));
    }

    #[test]
    fn test_fractional_mean_boundaries() {
        // ceil = 10, floor = 9
        assert_eq!(games_played_emphasis(9, 9.4), None);
        assert_eq!(games_played_emphasis(10, 9.4), None);
        assert_eq!(games_played_emphasis(11, 9.4), Some(Emphasis::Ahead));
        assert_eq!(games_played_emphasis(8, 9.4), Some(Emphasis::Behind));
    }

    #[test]
    fn test_emphasis_never_contradicts_mean() {
        let tables: [&[u32]; 4] = [&[10, 10, 10], &[9, 10, 11, 12], &[0, 38], &[5, 6, 6, 6, 7, 8]];
        for table in tables {
            let m = mean(table.iter().copied());
            for &played in table {
                match games_played_emphasis(played, m) {
                    Some(Emphasis::Ahead) => assert!(f64::from(played) > m.ceil()),
                    Some(Emphasis::Behind) => assert!(f64::from(played) < m.floor()),
                    None => {
                        assert!(f64::from(played) <= m.ceil());
                        assert!(f64::from(played) >= m.floor());
                    }
                    other => panic!("Unexpected emphasis {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_emphasize_games_played_pads() {
        let cell = emphasize_games_played(8, 10.0, 2);
        assert_eq!(cell.text(), " 8");
        assert_eq!(cell.emphasis(), Some(Emphasis::Behind));
    }
}

#[cfg(test)]
mod styled_tests {
    use super::*;

    #[test]
    fn test_plain_display_is_text() {
        let cell = Styled::new(pad_left(3, 4), None);
        assert_eq!(cell.to_string(), "   3");
    }

    #[test]
    fn test_styled_display_contains_text() {
        let cell = emphasize_rank("Everton", 19, 10);
        assert!(cell.to_string().contains("Everton   "));
    }
}
