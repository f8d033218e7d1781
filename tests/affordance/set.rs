use affordance::{
    AffordanceModel, AffordanceSet, Affordances, HttpMethod, InputPayload, Link,
    PayloadProperties, PropertyMetadata,
};

fn model(href: &str, method: HttpMethod) -> AffordanceModel {
    Affordances::of(Link::new(href))
        .afford(method)
        .build()
        .expect("default name is valid")
}

#[test]
fn given_structurally_equal_models_when_inserted_then_deduplicated() {
    let mut set = AffordanceSet::new();

    assert!(set.insert(model("/orders", HttpMethod::Get)));
    assert!(!set.insert(model("/orders", HttpMethod::Get)));
    assert!(set.insert(model("/orders", HttpMethod::Post)));
    assert_eq!(set.len(), 2);
}

#[test]
fn given_models_when_collected_then_insertion_order_is_kept() {
    let set: AffordanceSet = [
        model("/orders", HttpMethod::Post),
        model("/orders", HttpMethod::Get),
        model("/orders", HttpMethod::Post),
    ]
    .into_iter()
    .collect();

    let methods: Vec<_> = set.iter().map(|model| model.http_method()).collect();
    assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Get]);
}

#[test]
fn given_mixed_targets_when_targeting_then_only_same_address_is_returned() {
    let set: AffordanceSet = [
        model("/orders", HttpMethod::Get),
        model("/orders{?page}", HttpMethod::Post),
        model("/invoices", HttpMethod::Get),
    ]
    .into_iter()
    .collect();

    let targeting = set.targeting(&Link::new("/orders")).expect("links expand");
    assert_eq!(targeting.len(), 2);
    assert!(targeting.iter().all(|model| model.uri().expect("link expands") == "/orders"));
}

#[test]
fn given_mixed_verbs_when_filtered_by_method_then_only_that_verb_remains() {
    let set: AffordanceSet = [
        model("/orders", HttpMethod::Get),
        model("/orders", HttpMethod::Post),
        model("/invoices", HttpMethod::Get),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.with_http_method(HttpMethod::Get).count(), 2);
    assert_eq!(set.with_http_method(HttpMethod::Delete).count(), 0);
}

#[test]
fn given_same_name_and_other_input_when_inserted_then_both_are_kept() {
    let mut set = AffordanceSet::new();
    let plain = model("/orders", HttpMethod::Post);
    let with_body = Affordances::of(Link::new("/orders"))
        .afford(HttpMethod::Post)
        .with_input(PayloadProperties::new([PropertyMetadata::new("title")]))
        .build()
        .expect("default name is valid");

    assert_eq!(plain.name(), with_body.name());
    assert_eq!(plain.input(), &InputPayload::NONE);
    assert!(set.insert(plain));
    assert!(set.insert(with_body));
    assert_eq!(set.len(), 2);
}

#[test]
fn given_set_when_serialized_then_it_is_a_plain_array() {
    let set: AffordanceSet = [model("/orders", HttpMethod::Get)].into_iter().collect();

    let value = serde_json::to_value(&set).expect("set should serialize");
    let array = value.as_array().expect("set serializes as an array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["name"], "get");
}
