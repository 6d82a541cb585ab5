//! Property-based tests for identifier ordering and group boundaries

use propgen::emitter::{PropertyIdList, ALIAS_PREFIX, PROPERTY_PREFIX};
use propgen::property::{PropertyDescriptor, PropertyTable};
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}"
}

/// Build a well-ordered table: longhands, then shorthands, then aliases.
fn ordered_table(longhands: &[String], shorthands: &[String], aliases: &[String]) -> PropertyTable {
    let mut entries = Vec::new();
    for (i, id) in longhands.iter().enumerate() {
        entries.push(PropertyDescriptor::longhand(format!("l{}", i), id.clone()));
    }
    for (i, id) in shorthands.iter().enumerate() {
        entries.push(PropertyDescriptor::shorthand(format!("s{}", i), id.clone()));
    }
    for (i, id) in aliases.iter().enumerate() {
        entries.push(PropertyDescriptor::alias(format!("a{}", i), id.clone()));
    }
    PropertyTable::from_descriptors(entries).unwrap()
}

proptest! {
    #[test]
    fn test_well_ordered_tables_keep_group_prefixes(
        longhands in prop::collection::vec(ident(), 0..20),
        shorthands in prop::collection::vec(ident(), 0..20),
        aliases in prop::collection::vec(ident(), 0..20),
    ) {
        let table = ordered_table(&longhands, &shorthands, &aliases);
        let list = PropertyIdList::collect(&table).unwrap();

        prop_assert_eq!(list.len(), table.len());
        prop_assert_eq!(list.longhand_count(), longhands.len());
        prop_assert_eq!(list.shorthand_count(), shorthands.len());

        let l = longhands.len();
        let s = shorthands.len();
        for (i, id) in longhands.iter().enumerate() {
            prop_assert_eq!(&list.ids()[i], &format!("{}{}", PROPERTY_PREFIX, id));
        }
        for (i, id) in shorthands.iter().enumerate() {
            prop_assert_eq!(&list.ids()[l + i], &format!("{}{}", PROPERTY_PREFIX, id));
        }
        for (i, id) in aliases.iter().enumerate() {
            prop_assert_eq!(&list.ids()[l + s + i], &format!("{}{}", ALIAS_PREFIX, id));
        }

        prop_assert_eq!(list.shorthand_marker().is_ok(), !aliases.is_empty());
        prop_assert_eq!(list.longhand_marker().is_ok(), s + aliases.len() > 0);
    }

    #[test]
    fn test_longhand_after_shorthand_is_always_rejected(
        before in prop::collection::vec(ident(), 0..10),
        shorthand in ident(),
        late in ident(),
    ) {
        let mut entries: Vec<PropertyDescriptor> = before
            .iter()
            .enumerate()
            .map(|(i, id)| PropertyDescriptor::longhand(format!("l{}", i), id.clone()))
            .collect();
        entries.push(PropertyDescriptor::shorthand("s", shorthand));
        entries.push(PropertyDescriptor::longhand("late", late));
        let table = PropertyTable::from_descriptors(entries).unwrap();

        let err = PropertyIdList::collect(&table).unwrap_err();
        prop_assert_eq!(err.0.len(), 1);
        prop_assert_eq!(err.0[0].position, before.len() + 1);
    }
}
