//! Nesting, collections, groups, conditions and configuration.

use pretty_assertions::assert_eq;
use verdict_validator::prelude::*;

#[derive(Debug, Clone, Default)]
struct Item {
    name: String,
    quantity: u32,
}

#[derive(Debug, Clone, Default)]
struct Address {
    zip: String,
}

#[derive(Debug, Clone, Default)]
struct Order {
    id: i64,
    note: Option<String>,
    billing: Option<Address>,
    shipping: Option<Address>,
    items: Vec<Item>,
    tags: Option<Vec<Item>>,
}

fn item_validator() -> Validator<Item> {
    ValidatorBuilder::<Item>::new()
        .constraint("name", |i: &Item| i.name.as_str(), |c| c.not_blank())
        .constraint("quantity", |i: &Item| &i.quantity, |c| c.greater_than(0))
        .build()
}

fn address_validator() -> Validator<Address> {
    ValidatorBuilder::<Address>::new()
        .constraint("zip", |a: &Address| a.zip.as_str(), |c| c.min_length(5).max_length(5))
        .build()
}

fn valid_item() -> Item {
    Item {
        name: "pen".into(),
        quantity: 1,
    }
}

fn names(violations: &ConstraintViolations) -> Vec<&str> {
    violations.iter().map(ConstraintViolation::name).collect()
}

#[test]
fn for_each_names_elements_by_index() {
    let validator = ValidatorBuilder::<Order>::new()
        .for_each("items", |o: &Order| o.items.as_slice(), item_validator())
        .build();
    let order = Order {
        items: vec![
            valid_item(),
            Item {
                name: " ".into(),
                quantity: 0,
            },
        ],
        ..Order::default()
    };

    let violations = validator.violations(&order);
    assert_eq!(names(&violations), vec!["items[1].name", "items[1].quantity"]);
    assert_eq!(violations[0].message(), "\"items[1].name\" must not be blank");
}

#[test]
fn for_each_if_present_skips_absent_slices() {
    let validator = ValidatorBuilder::<Order>::new()
        .for_each_if_present("tags", |o: &Order| o.tags.as_deref(), item_validator())
        .build();

    assert!(validator.violations(&Order::default()).is_empty());

    let tagged = Order {
        tags: Some(vec![Item::default()]),
        ..Order::default()
    };
    assert_eq!(
        names(&validator.violations(&tagged)),
        vec!["tags[0].name", "tags[0].quantity"]
    );
}

#[test]
fn nullable_and_optional_nesting() {
    let validator = ValidatorBuilder::<Order>::new()
        .nest_nullable("billing", |o: &Order| o.billing.as_ref(), address_validator())
        .optional_nest("shipping", |o: &Order| o.shipping.as_ref(), address_validator())
        .build();

    let violations = validator.violations(&Order::default());
    assert_eq!(names(&violations), vec!["billing"]);
    assert_eq!(violations[0].message_key(), "object.notNull");

    let order = Order {
        billing: Some(Address { zip: "12345".into() }),
        shipping: Some(Address { zip: "1".into() }),
        ..Order::default()
    };
    let violations = validator.violations(&order);
    assert_eq!(names(&violations), vec!["shipping.zip"]);
    assert_eq!(
        violations[0].message(),
        "The size of \"shipping.zip\" must be greater than or equal to 5. The given size is 1"
    );
}

#[test]
fn chains_precede_nested_entries() {
    let validator = ValidatorBuilder::<Order>::new()
        .for_each("items", |o: &Order| o.items.as_slice(), item_validator())
        .constraint("id", |o: &Order| &o.id, |c| c.greater_than(0))
        .build();
    let order = Order {
        items: vec![Item::default()],
        ..Order::default()
    };

    assert_eq!(
        names(&validator.violations(&order)),
        vec!["id", "items[0].name", "items[0].quantity"]
    );
    let fail_fast = validator.validate_fail_fast(order);
    assert_eq!(names(fail_fast.errors()), vec!["id"]);
}

#[test]
fn rejected_null_suppresses_the_rest_of_the_chain() {
    let validator = ValidatorBuilder::<Order>::new()
        .constraint_nullable("note", |o: &Order| o.note.as_deref(), |c| {
            c.not_null().not_blank().max_length(3)
        })
        .build();

    let violations = validator.violations(&Order::default());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message(), "\"note\" must not be null");

    let long = Order {
        note: Some("    ".into()),
        ..Order::default()
    };
    let keys: Vec<_> = validator
        .violations(&long)
        .iter()
        .map(|v| v.message_key().to_string())
        .collect();
    assert_eq!(keys, vec!["charSequence.notBlank", "container.lessThanOrEqual"]);
}

#[test]
fn groups_select_tagged_chains() {
    let update = ConstraintGroup::of("update");
    let validator = ValidatorBuilder::<Order>::new()
        .constraint("items", |o: &Order| o.items.as_slice(), |c| c.min_size(1))
        .on_group(update.clone(), |b| {
            b.constraint("id", |o: &Order| &o.id, |c| c.greater_than(0))
        })
        .build();
    let order = Order::default();

    assert_eq!(names(&validator.violations(&order)), vec!["items"]);
    assert_eq!(
        names(&validator.violations_with(&order, &Locale::ROOT, &update)),
        vec!["items", "id"]
    );
}

#[test]
fn conditional_validators() {
    let create = ConstraintGroup::of("create");
    let needs_note = ValidatorBuilder::<Order>::new()
        .constraint_nullable("note", |o: &Order| o.note.as_deref(), |c| c.not_null())
        .build();
    let id_unset = ValidatorBuilder::<Order>::new()
        .constraint("id", |o: &Order| &o.id, |c| c.less_than_or_equal(0))
        .build();

    let validator = ValidatorBuilder::<Order>::new()
        .constraint_on_condition(|o: &Order, _| o.items.len() > 2, needs_note)
        .constraint_on_group(create.clone(), id_unset)
        .build();

    let small = Order {
        id: 7,
        ..Order::default()
    };
    assert!(validator.violations(&small).is_empty());
    assert_eq!(
        names(&validator.violations_with(&small, &Locale::ROOT, &create)),
        vec!["id"]
    );

    let large = Order {
        items: vec![valid_item(); 3],
        ..Order::default()
    };
    assert_eq!(names(&validator.violations(&large)), vec!["note"]);
}

#[test]
fn configuration_applies_to_names_and_null_messages() {
    let validator = ValidatorBuilder::<Order>::new()
        .constraint_nullable("note", |o: &Order| o.note.as_deref(), |c| c.not_null())
        .with_config(
            ValidatorConfig::new()
                .with_prefix("order")
                .with_not_null_message("required", "{0} is required"),
        )
        .build();

    let violations = validator.violations(&Order::default());
    assert_eq!(violations[0].name(), "order.note");
    assert_eq!(violations[0].message_key(), "required");
    assert_eq!(violations[0].message(), "order.note is required");
}

#[test]
fn duplicate_chain_names_both_report() {
    let validator = ValidatorBuilder::<Item>::new()
        .constraint("name", |i: &Item| i.name.as_str(), |c| c.not_empty())
        .constraint("name", |i: &Item| i.name.as_str(), |c| c.min_length(2))
        .build();

    let violations = validator.violations(&Item::default());
    assert_eq!(names(&violations), vec!["name", "name"]);
}

#[test]
fn validators_are_shared_across_threads() {
    let validator = item_validator();
    let handles: Vec<_> = (0..4u32)
        .map(|quantity| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                validator
                    .validate(Item {
                        name: "x".into(),
                        quantity,
                    })
                    .is_valid()
            })
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, true]);
}
