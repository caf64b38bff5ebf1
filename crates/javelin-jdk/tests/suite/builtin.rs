use javelin_jdk::MinimalJdk;
use javelin_types::{ClassKind, Type, TypeProvider, Visibility};
use pretty_assertions::assert_eq;

#[test]
fn object_is_the_root() {
    let jdk = MinimalJdk::new();
    let object = jdk.lookup_type("java.lang.Object").unwrap().unwrap();
    assert!(object.is_root());
    assert_eq!(object.super_class(), None);
    assert!(object.interfaces().is_empty());
}

#[test]
fn string_declares_expected_supertypes_and_methods() {
    let jdk = MinimalJdk::new();
    let string = jdk.lookup_type("java.lang.String").unwrap().unwrap();

    assert_eq!(string.super_class().unwrap().describe(), "java.lang.Object");
    let interfaces: Vec<String> = string.interfaces().iter().map(|i| i.describe()).collect();
    assert_eq!(
        interfaces,
        vec![
            "java.io.Serializable".to_string(),
            "java.lang.Comparable<java.lang.String>".to_string(),
            "java.lang.CharSequence".to_string(),
        ]
    );

    let signatures: Vec<String> = string
        .declared_methods()
        .iter()
        .map(|m| m.signature())
        .collect();
    assert!(signatures.contains(&"charAt(int)".to_string()));
    assert!(signatures.contains(&"concat(java.lang.String)".to_string()));

    let value_of = string.declared_methods_named("valueOf").count();
    assert_eq!(value_of, 6);
}

#[test]
fn array_list_is_generic_with_private_storage() {
    let jdk = MinimalJdk::new();
    let array_list = jdk.lookup_type("java/util/ArrayList").unwrap().unwrap();

    assert_eq!(array_list.kind, ClassKind::Class);
    assert!(array_list.is_generic());
    assert_eq!(array_list.as_type().describe(), "java.util.ArrayList<E>");
    assert_eq!(
        array_list.super_class().unwrap().describe(),
        "java.util.AbstractList<E>"
    );

    let element_data = array_list.field("elementData").unwrap();
    assert_eq!(element_data.visibility, Visibility::Private);
    assert_eq!(element_data.ty, Type::array(Type::object()));
}

#[test]
fn interfaces_are_abstract_and_have_no_superclass() {
    let jdk = MinimalJdk::new();
    let list = jdk.lookup_type("java.util.List").unwrap().unwrap();
    assert!(list.is_interface());
    assert!(list.is_abstract);
    assert_eq!(list.super_class(), None);
    assert_eq!(list.interfaces()[0].describe(), "java.util.Collection<E>");
}

#[test]
fn enum_bound_refers_to_itself() {
    let jdk = MinimalJdk::new();
    let decl = jdk.lookup_type("java.lang.Enum").unwrap().unwrap();
    let e = decl.type_param("E").unwrap();
    assert_eq!(e.bounds[0].describe(), "java.lang.Enum<E>");
}

#[test]
fn unknown_names_are_absent_not_errors() {
    let jdk = MinimalJdk::new();
    assert!(jdk.lookup_type("java.util.HashMap").unwrap().is_none());
    assert!(!jdk.contains("com.example.Foo"));
    assert_eq!(jdk.name(), "minimal-jdk");
}
