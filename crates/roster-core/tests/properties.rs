//! Property tests for header decoding and cell parsing.

use proptest::prelude::*;
use roster_core::{decode_header_cell, parse_flag, split_multi_value};
use roster_model::FieldType;

proptest! {
    #[test]
    fn header_cell_splits_into_type_and_tags(
        field in "[a-z_]{1,10}",
        tags in prop::collection::vec("[A-Za-zÀ-ú]{1,8}", 0..4),
    ) {
        let mut cell = field.clone();
        for tag in &tags {
            cell.push(' ');
            cell.push_str(tag);
        }
        let column = decode_header_cell(&cell);
        prop_assert_eq!(&column.name, &field);
        prop_assert_eq!(column.field, FieldType::from_token(&field));
        prop_assert_eq!(column.tags, tags);
    }

    #[test]
    fn header_commas_never_reach_tags(cell in "[a-z ,]{0,30}") {
        let column = decode_header_cell(&cell);
        prop_assert!(!column.name.contains(','));
        prop_assert!(column.tags.iter().all(|tag| !tag.contains(',') && !tag.is_empty()));
    }

    #[test]
    fn flags_are_true_outside_false_literals(cell in ".{0,6}") {
        let expected = !matches!(cell.as_str(), "" | "0" | "no");
        prop_assert_eq!(parse_flag(&cell), expected);
    }

    #[test]
    fn multi_value_tokens_are_trimmed_and_non_empty(cell in "[a-zA-Z /,]{0,40}") {
        for token in split_multi_value(&cell) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains(','));
        }
    }

    #[test]
    fn at_most_one_slash_is_consumed(cell in "[a-z/]{0,20}") {
        let slashes_in = cell.matches('/').count();
        let slashes_out: usize = split_multi_value(&cell)
            .iter()
            .map(|token| token.matches('/').count())
            .sum();
        prop_assert_eq!(slashes_out, slashes_in.saturating_sub(1));
    }
}
