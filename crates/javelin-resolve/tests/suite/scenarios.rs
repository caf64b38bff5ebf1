use javelin_resolve::{all_interfaces, all_super_classes, get_field};
use javelin_types::{Type, TypeDefStub, TypeVar};
use pretty_assertions::assert_eq;

use super::fixtures::{context_with, describe_all, foo, jdk, string};

#[test]
fn field_of_generic_superclass_is_substituted() {
    let ctx = context_with(vec![
        foo(),
        TypeDefStub::class("com.example.Bar").extends("com.example.Foo<java.lang.String>"),
    ]);

    let bar = ctx.solve_type("com.example.Bar").unwrap();
    let field = get_field(&ctx, &bar, "field").unwrap();
    assert_eq!(field.ty, string());
    assert_eq!(field.ty.describe(), "java.lang.String");
    assert_eq!(field.owner.describe(), "com.example.Foo<java.lang.String>");

    let foo = ctx.solve_type("com.example.Foo").unwrap();
    let declared = foo.field("field").unwrap();
    assert_eq!(
        declared.ty,
        Type::TypeVar(TypeVar::class("com.example.Foo", "E"))
    );
    assert!(declared.ty.is_type_variable());
}

#[test]
fn array_list_interface_closure() {
    let ctx = jdk();
    let array_list = ctx.solve_type("java.util.ArrayList").unwrap();

    let mut names: Vec<String> = all_interfaces(&ctx, &array_list)
        .unwrap()
        .into_iter()
        .map(|iface| iface.name)
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "java.io.Serializable",
            "java.lang.Cloneable",
            "java.lang.Iterable",
            "java.util.Collection",
            "java.util.List",
            "java.util.RandomAccess",
        ]
    );
}

#[test]
fn array_list_superclasses_nearest_first() {
    let ctx = jdk();
    let array_list = ctx.solve_type("java.util.ArrayList").unwrap();

    let supers = all_super_classes(&ctx, &array_list).unwrap();
    let names: Vec<&str> = supers.iter().map(|ty| ty.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "java.util.AbstractList",
            "java.util.AbstractCollection",
            "java.lang.Object",
        ]
    );
    assert!(!names.contains(&"java.util.ArrayList"));
}

#[test]
fn string_basics() {
    let ctx = jdk();
    let string = ctx.solve_type("java.lang.String").unwrap();
    assert_eq!(string.qualified_name(), "java.lang.String");
    assert_eq!(
        ctx.solve_type("java.util.ArrayList").unwrap().qualified_name(),
        "java.util.ArrayList"
    );

    let signatures: Vec<String> = string
        .declared_methods()
        .iter()
        .map(|m| m.signature())
        .collect();
    assert!(signatures.iter().any(|s| s == "charAt(int)"));
    assert!(signatures.iter().any(|s| s == "concat(java.lang.String)"));

    assert_eq!(
        describe_all(&all_super_classes(&ctx, &string).unwrap()),
        vec!["java.lang.Object"]
    );
}
