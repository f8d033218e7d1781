use affordance::{
    AffordanceErrorKind, Affordances, HttpMethod, InputPayload, InputPayloadMetadata, Link,
    PayloadProperties, PropertyMetadata, QueryParameter, TypedInputPayloadMetadata,
};

struct Order;

fn order_input() -> TypedInputPayloadMetadata {
    TypedInputPayloadMetadata::of::<Order>(PayloadProperties::new([
        PropertyMetadata::new("id").with_read_only(true),
        PropertyMetadata::new("title").with_required(true),
    ]))
}

#[test]
fn given_no_configuration_when_build_then_body_less_defaults_are_used() {
    let model = Affordances::of(Link::new("/orders"))
        .afford(HttpMethod::Get)
        .build()
        .expect("default name is valid");

    assert_eq!(model.name(), "get");
    assert_eq!(model.input(), &InputPayload::NONE);
    assert_eq!(model.output(), &PayloadProperties::NONE);
    assert!(model.query_parameters().is_empty());
}

#[test]
fn given_typed_input_when_build_then_name_derives_from_type() {
    let model = Affordances::of(Link::new("/orders"))
        .afford(HttpMethod::Post)
        .with_input(order_input())
        .build()
        .expect("default name is valid");

    assert_eq!(model.name(), "postOrder");
    assert_eq!(model.input().i18n_codes().last().map(String::as_str), Some("Order"));
}

#[test]
fn given_explicit_name_when_build_then_name_is_kept() {
    let model = Affordances::of(Link::new("/orders"))
        .afford(HttpMethod::Post)
        .with_input(order_input())
        .with_name("createOrder")
        .build()
        .expect("name is valid");

    assert_eq!(model.name(), "createOrder");
}

#[test]
fn given_blank_name_when_build_then_invalid_argument() {
    let err = Affordances::of(Link::new("/orders"))
        .afford(HttpMethod::Post)
        .with_name(" ")
        .build()
        .expect_err("blank name must fail");

    assert_eq!(err.kind, AffordanceErrorKind::InvalidArgument);
}

#[test]
fn given_chained_verbs_when_into_models_then_all_share_the_link_in_order() {
    let models = Affordances::of(Link::new("/orders/{id}"))
        .afford(HttpMethod::Put)
        .with_input(order_input())
        .and_afford(HttpMethod::Delete)
        .expect("default name is valid")
        .into_models()
        .expect("default name is valid");

    let names: Vec<_> = models.iter().map(|model| model.name()).collect();
    assert_eq!(names, vec!["putOrder", "delete"]);
    assert!(models.iter().all(|model| model.link().href() == "/orders/{id}"));
}

#[test]
fn given_payload_when_query_parameters_from_then_constraints_are_mirrored() {
    let filter = PayloadProperties::new([
        PropertyMetadata::new("page").with_pattern("\\d+"),
        PropertyMetadata::new("status").with_required(true),
    ]);

    let model = Affordances::of(Link::new("/orders{?page,status}"))
        .afford(HttpMethod::Get)
        .with_query_parameters_from(&filter)
        .add_query_parameter(QueryParameter::optional("sort"))
        .build()
        .expect("default name is valid");

    assert_eq!(
        model.query_parameters(),
        &[
            QueryParameter::optional("page").with_pattern("\\d+"),
            QueryParameter::required("status"),
            QueryParameter::optional("sort"),
        ]
    );
}

#[test]
fn given_plain_payload_input_when_build_then_delegating_input_is_stored() {
    let model = Affordances::of(Link::new("/orders"))
        .afford(HttpMethod::Patch)
        .with_input(PayloadProperties::new([PropertyMetadata::new("title")]))
        .build()
        .expect("default name is valid");

    assert!(matches!(model.input(), InputPayload::Delegating(_)));
    assert_eq!(model.name(), "patch");
    assert!(model.input().i18n_codes().is_empty());
}
