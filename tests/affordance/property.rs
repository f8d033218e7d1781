use affordance::{AffordanceErrorKind, Named, PropertyMetadata, TypeDescriptor};

#[test]
fn given_exact_name_when_has_name_then_true() {
    let property = PropertyMetadata::new("title");

    assert!(property.has_name("title").expect("name is valid"));
}

#[test]
fn given_other_name_when_has_name_then_false() {
    let property = PropertyMetadata::new("title");

    for other in ["Title", "title ", "tit", "id"] {
        assert!(
            !property.has_name(other).expect("name is valid"),
            "'{other}' must not match"
        );
    }
}

#[test]
fn given_blank_name_when_has_name_then_invalid_argument() {
    let property = PropertyMetadata::new("title");

    for blank in ["", " ", "\t"] {
        let err = property.has_name(blank).expect_err("blank name is a contract violation");
        assert_eq!(err.kind, AffordanceErrorKind::InvalidArgument);
    }
}

#[test]
fn given_metadata_json_when_deserialized_then_defaults_apply() {
    let property: PropertyMetadata = serde_json::from_value(serde_json::json!({
        "name": "email",
        "pattern": ".+@.+",
        "type": "alloc::string::String"
    }))
    .expect("property should deserialize");

    assert_eq!(Named::name(&property), "email");
    assert!(!property.is_required());
    assert!(!property.is_read_only());
    assert_eq!(property.pattern(), Some(".+@.+"));
    assert_eq!(property.type_descriptor().simple_name(), "String");
}

#[test]
fn given_same_name_and_other_constraints_when_compared_then_not_equal() {
    let base = PropertyMetadata::new("title");
    let overridden = PropertyMetadata::new("title").with_required(true);

    assert_ne!(base, overridden);
    assert_eq!(base.name(), overridden.name());
}

#[test]
fn given_rust_type_when_descriptor_of_then_simple_name_is_type_name() {
    struct Invoice;

    let descriptor = TypeDescriptor::of::<Invoice>();
    assert_eq!(descriptor.simple_name(), "Invoice");
    assert!(descriptor.qualified_name().ends_with("Invoice"));
    assert!(!descriptor.is_any());
}
