//! Tests for enum lookup by name and by strum property

use strum::{AsRefStr, EnumIter, EnumProperty};

use extkit::enums::{parse_enum, parse_enum_by_property, to_enum_type, to_enum_type_by_property, ToEnumType};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumProperty)]
enum Status {
    #[default]
    Unknown,
    #[strum(props(Code = "A", Label = "Up and running"))]
    Active,
    #[strum(props(Code = "S"))]
    Suspended,
    Closed,
}

#[test]
fn given_any_case_name_when_parsing_then_member_found() {
    assert_eq!(parse_enum::<Status>("Active"), Some(Status::Active));
    assert_eq!(parse_enum::<Status>("active"), Some(Status::Active));
    assert_eq!(parse_enum::<Status>("SUSPENDED"), Some(Status::Suspended));
    assert_eq!(parse_enum::<Status>("nope"), None);
}

#[test]
fn given_unknown_name_when_converting_then_default() {
    assert_eq!(to_enum_type::<Status>("closed"), Status::Closed);
    assert_eq!(to_enum_type::<Status>(""), Status::Unknown);
    assert_eq!("Suspended".to_enum_type::<Status>(), Status::Suspended);
}

#[test]
fn given_property_value_when_parsing_then_member_carrying_it() {
    assert_eq!(parse_enum_by_property::<Status>("S", "Code"), Some(Status::Suspended));
    assert_eq!(
        parse_enum_by_property::<Status>("Up and running", "Label"),
        Some(Status::Active)
    );
}

#[test]
fn given_name_and_property_when_parsing_then_name_wins() {
    assert_eq!(parse_enum_by_property::<Status>("closed", "Code"), Some(Status::Closed));
}

#[test]
fn given_property_value_with_wrong_case_when_parsing_then_not_matched() {
    assert_eq!(parse_enum_by_property::<Status>("s", "Code"), None);
    assert_eq!(to_enum_type_by_property::<Status>("s", "Code"), Status::Unknown);
}

#[test]
fn given_unknown_property_key_when_parsing_then_default() {
    assert_eq!(to_enum_type_by_property::<Status>("A", "Missing"), Status::Unknown);
}
