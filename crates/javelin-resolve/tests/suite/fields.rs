use javelin_resolve::{all_fields, get_field, get_field_in_type, has_field, solve_symbol, ResolveError};
use javelin_types::{FieldStub, SymbolKind, Type, TypeDefStub, TypeVar, Visibility};
use pretty_assertions::assert_eq;

use super::fixtures::{context_with, foo, generic, string};

fn my_list() -> TypeDefStub {
    TypeDefStub::class("com.example.MyList")
        .extends("java.util.ArrayList<java.lang.String>")
        .field("label", "java.lang.String")
}

#[test]
fn pass_through_field_type_is_owned_by_subtype() {
    let ctx = context_with(vec![
        foo(),
        TypeDefStub::class("com.example.Bar")
            .type_param("E")
            .extends("com.example.Foo<E>"),
    ]);
    let bar = ctx.solve_type("com.example.Bar").unwrap();

    let field = get_field(&ctx, &bar, "field").unwrap();
    assert_eq!(
        field.ty,
        Type::TypeVar(TypeVar::class("com.example.Bar", "E"))
    );
    assert_eq!(field.owner.describe(), "com.example.Foo<E>");
}

#[test]
fn direct_fields_win_over_inherited_ones() {
    let ctx = context_with(vec![
        foo(),
        TypeDefStub::class("com.example.Shadow")
            .extends("com.example.Foo<java.lang.String>")
            .field("field", "int"),
    ]);
    let shadow = ctx.solve_type("com.example.Shadow").unwrap();

    let field = get_field(&ctx, &shadow, "field").unwrap();
    assert_eq!(field.ty, Type::int());
    assert_eq!(field.owner_name(), "com.example.Shadow");

    let all = all_fields(&ctx, &shadow).unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn private_fields_are_not_inherited() {
    let ctx = context_with(vec![my_list()]);
    let my_list = ctx.solve_type("com.example.MyList").unwrap();

    assert_eq!(
        get_field(&ctx, &my_list, "elementData").unwrap_err(),
        ResolveError::NotFound {
            kind: SymbolKind::Field,
            owner: "com.example.MyList".to_string(),
            name: "elementData".to_string(),
        }
    );

    let mod_count = get_field(&ctx, &my_list, "modCount").unwrap();
    assert_eq!(mod_count.owner.describe(), "java.util.AbstractList<java.lang.String>");
    assert_eq!(mod_count.visibility, Visibility::Protected);
}

#[test]
fn interface_constants_are_found_after_superclasses() {
    let ctx = context_with(vec![
        TypeDefStub::interface("com.example.Limits")
            .field_stub(FieldStub::new("MAX", "int").as_static().as_final()),
        TypeDefStub::class("com.example.Impl").implements("com.example.Limits"),
    ]);
    let decl = ctx.solve_type("com.example.Impl").unwrap();

    let max = get_field(&ctx, &decl, "MAX").unwrap();
    assert_eq!(max.owner_name(), "com.example.Limits");
    assert!(max.is_static && max.is_final);
}

#[test]
fn solve_symbol_turns_absence_into_none() {
    let ctx = context_with(vec![my_list()]);
    let my_list = ctx.solve_type("com.example.MyList").unwrap();

    assert_eq!(solve_symbol(&ctx, &my_list, "missing").unwrap(), None);
    assert!(solve_symbol(&ctx, &my_list, "label").unwrap().is_some());
    assert!(has_field(&ctx, &my_list, "modCount").unwrap());
    assert!(!has_field(&ctx, &my_list, "size").unwrap());
}

#[test]
fn solve_symbol_propagates_hard_failures() {
    let ctx = context_with(vec![
        TypeDefStub::class("com.example.Orphan").extends("com.missing.Base")
    ]);
    let orphan = ctx.solve_type("com.example.Orphan").unwrap();
    assert!(matches!(
        solve_symbol(&ctx, &orphan, "x"),
        Err(ResolveError::UnsolvedSymbol { .. })
    ));
}

#[test]
fn all_fields_lists_visible_fields_closest_first() {
    let ctx = context_with(vec![my_list()]);
    let my_list = ctx.solve_type("com.example.MyList").unwrap();

    let names: Vec<(String, String)> = all_fields(&ctx, &my_list)
        .unwrap()
        .into_iter()
        .map(|f| (f.owner.name.clone(), f.decl.name))
        .collect();
    assert_eq!(
        names,
        vec![
            ("com.example.MyList".to_string(), "label".to_string()),
            ("java.util.AbstractList".to_string(), "modCount".to_string()),
        ]
    );
}

#[test]
fn field_lookup_on_instantiated_type() {
    let ctx = context_with(vec![foo()]);
    let ty = generic("com.example.Foo", vec![Type::array(string())]);
    let field = get_field_in_type(&ctx, &ty, "field").unwrap();
    assert_eq!(field.ty.describe(), "java.lang.String[]");
    assert_eq!(field.owner.describe(), "com.example.Foo<java.lang.String[]>");
}
