//! Property tests for the resolver's join invariants.

use proptest::prelude::*;

use dre_model::{MappingEntry, MappingTable, RecordTable, comparison_key};
use dre_resolve::resolve;

fn input_table(categories: &[String]) -> RecordTable {
    let rows = categories
        .iter()
        .enumerate()
        .map(|(index, category)| vec![category.clone(), index.to_string()])
        .collect();
    RecordTable::new(vec!["Categoria".to_string(), "Valor".to_string()], rows)
}

fn mapping_table(pairs: &[(String, String)]) -> MappingTable {
    MappingTable::new(
        pairs
            .iter()
            .map(|(category, code)| MappingEntry::new(category.clone(), code.clone()))
            .collect(),
    )
}

proptest! {
    #[test]
    fn every_input_row_survives_exactly_once(
        categories in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..40),
        pairs in proptest::collection::vec(("[a-zA-Z]{1,8}", "[0-9]\\.[0-9]"), 0..10),
    ) {
        let table = input_table(&categories);
        let mapping = mapping_table(&pairs);
        let resolution = resolve(&table, &mapping, "Categoria").unwrap();

        prop_assert_eq!(resolution.total(), categories.len());
        prop_assert_eq!(
            resolution.mapped_count() + resolution.unmapped_count(),
            resolution.total()
        );
        for (row, category) in resolution.rows.iter().zip(&categories) {
            prop_assert_eq!(&row.values[0], category);
        }
    }

    #[test]
    fn status_agrees_with_the_mapping_index(
        categories in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..40),
        pairs in proptest::collection::vec(("[a-zA-Z]{1,8}", "[0-9]\\.[0-9]"), 0..10),
    ) {
        let table = input_table(&categories);
        let mapping = mapping_table(&pairs);
        let resolution = resolve(&table, &mapping, "Categoria").unwrap();

        let index = mapping.lookup_index();
        for row in &resolution.rows {
            let key = comparison_key(&row.values[0]);
            let expected = index.get(key.as_str()).map(|code| (*code).to_string());
            prop_assert_eq!(row.is_mapped(), expected.is_some());
            prop_assert_eq!(row.target_code.clone(), expected);
        }
    }

    #[test]
    fn padding_and_case_never_change_the_outcome(
        category in "[a-zA-Z]{1,12}",
        pairs in proptest::collection::vec(("[a-zA-Z]{1,8}", "[0-9]\\.[0-9]"), 0..10),
    ) {
        let variant = format!("  {}  ", category.to_uppercase());
        let table = input_table(&[category, variant]);
        let mapping = mapping_table(&pairs);
        let resolution = resolve(&table, &mapping, "Categoria").unwrap();

        prop_assert_eq!(
            resolution.rows[0].target_code.clone(),
            resolution.rows[1].target_code.clone()
        );
    }

    #[test]
    fn classification_is_deterministic(
        categories in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..40),
        pairs in proptest::collection::vec(("[a-zA-Z]{1,8}", "[0-9]\\.[0-9]"), 0..10),
    ) {
        let table = input_table(&categories);
        let mapping = mapping_table(&pairs);
        let first = resolve(&table, &mapping, "Categoria").unwrap();
        let second = resolve(&table, &mapping, "Categoria").unwrap();
        prop_assert_eq!(first.rows, second.rows);
    }
}
