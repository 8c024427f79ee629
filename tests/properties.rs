//! Property-based tests for the item rules

use itemguard::{validate, Field, Item, ItemId, Profile, Reason};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[ \t\r\n]{0,6}".prop_map(Some),
        "[ ]{0,3}[A-Za-z0-9가-힣][A-Za-z0-9 ]{0,12}".prop_map(Some),
    ]
}

fn candidate_strategy() -> impl Strategy<Value = Item> {
    (
        proptest::option::of(any::<u64>().prop_map(ItemId::new)),
        name_strategy(),
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<i32>()),
    )
        .prop_map(|(id, item_name, price, quantity)| Item {
            id,
            item_name,
            price,
            quantity,
        })
}

fn profile_strategy() -> impl Strategy<Value = Profile> {
    prop_oneof![Just(Profile::Create), Just(Profile::Update)]
}

proptest! {
    #[test]
    fn prop_item_name_error_iff_blank(item in candidate_strategy(), profile in profile_strategy()) {
        let blank = item
            .item_name
            .as_deref()
            .map_or(true, |name| name.trim().is_empty());
        let errors = validate(&item, profile);
        prop_assert_eq!(errors.has_field_error(Field::ItemName), blank);
    }

    #[test]
    fn prop_price_error_iff_out_of_range(price in proptest::option::of(any::<i32>())) {
        let item = Item { price, ..Item::new("Book", 0, 10) };
        let expected = match price {
            None => true,
            Some(p) => !(1000..=1_000_000).contains(&p),
        };
        let errors = validate(&item, Profile::Create);
        prop_assert_eq!(errors.has_field_error(Field::Price), expected);
    }

    #[test]
    fn prop_price_range_boundary(price in 990..=1010i32) {
        let errors = validate(&Item::new("Book", price, 100), Profile::Create);
        prop_assert_eq!(errors.has_field_error(Field::Price), price < 1000);
    }

    #[test]
    fn prop_quantity_error_iff_missing_or_above_ceiling(quantity in proptest::option::of(any::<i32>())) {
        let item = Item { quantity, ..Item::new("Book", 2000, 0) };
        let expected = quantity.map_or(true, |q| q > 9999);
        let errors = validate(&item, Profile::Create);
        prop_assert_eq!(errors.has_field_error(Field::Quantity), expected);
    }

    #[test]
    fn prop_global_error_iff_product_below_minimum(price in any::<i32>(), quantity in any::<i32>()) {
        let errors = validate(&Item::new("Book", price, quantity), Profile::Create);
        let product = i64::from(price) * i64::from(quantity);
        prop_assert_eq!(errors.has_global_error(), product < 10_000);

        let global = errors.global_errors().next();
        if let Some(global) = global {
            prop_assert_eq!(global.reason(), Some(Reason::TotalPriceMin));
            prop_assert_eq!(global.args(), &[10_000, product][..]);
        }
    }

    #[test]
    fn prop_no_global_error_when_operand_missing(
        price in proptest::option::of(any::<i32>()),
        quantity in proptest::option::of(any::<i32>())
    ) {
        prop_assume!(price.is_none() || quantity.is_none());
        let item = Item { price, quantity, ..Item::new("Book", 0, 0) };
        prop_assert!(!validate(&item, Profile::Create).has_global_error());
    }

    #[test]
    fn prop_id_rule_by_profile(item in candidate_strategy()) {
        let create = validate(&item, Profile::Create);
        let update = validate(&item, Profile::Update);
        prop_assert_eq!(create.has_field_error(Field::Id), item.id.is_some());
        prop_assert_eq!(update.has_field_error(Field::Id), item.id.is_none());
    }

    #[test]
    fn prop_profiles_share_non_id_rules(item in candidate_strategy()) {
        let strip = |profile| {
            validate(&item, profile)
                .into_iter()
                .filter(|e| e.field_name() != Some(Field::Id))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(strip(Profile::Create), strip(Profile::Update));
    }

    #[test]
    fn prop_idempotent(item in candidate_strategy(), profile in profile_strategy()) {
        prop_assert_eq!(validate(&item, profile), validate(&item, profile));
    }

    #[test]
    fn prop_errors_follow_rule_order(item in candidate_strategy(), profile in profile_strategy()) {
        let rank = |e: &itemguard::ValidationError| match e.field_name() {
            Some(Field::Id) => 0,
            Some(Field::ItemName) => 1,
            Some(Field::Price) => 2,
            Some(Field::Quantity) => 3,
            None => 4,
        };
        let ranks: Vec<_> = validate(&item, profile).iter().map(rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(ranks, sorted);
    }
}
