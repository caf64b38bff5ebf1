use javelin_resolve::{
    all_ancestors, all_interfaces, all_super_classes, ancestors_of_type, as_super_type,
    interfaces_of_type, super_classes_of_type, ResolveError,
};
use javelin_types::{Malformed, Type, TypeDefStub};
use pretty_assertions::assert_eq;

use super::fixtures::{context_with, describe_all, foo, generic, jdk, string};

#[test]
fn implicit_superclass_is_raw_object() {
    let ctx = context_with(vec![TypeDefStub::class("com.example.Plain")]);
    let plain = ctx.solve_type("com.example.Plain").unwrap();

    let sup = plain.super_class().unwrap();
    assert!(sup.is_object());
    assert!(sup.args.is_empty());
    assert_eq!(describe_all(&all_super_classes(&ctx, &plain).unwrap()), vec!["java.lang.Object"]);
}

#[test]
fn object_and_interfaces_have_no_superclass_chain_of_their_own() {
    let ctx = jdk();
    let object = ctx.solve_type("java.lang.Object").unwrap();
    assert!(all_super_classes(&ctx, &object).unwrap().is_empty());

    let list = ctx.solve_type("java.util.List").unwrap();
    assert_eq!(describe_all(&all_super_classes(&ctx, &list).unwrap()), vec!["java.lang.Object"]);
}

#[test]
fn superclass_argument_count_matches_declaration() {
    let ctx = jdk();
    let array_list = ctx.solve_type("java.util.ArrayList").unwrap();
    for sup in all_super_classes(&ctx, &array_list).unwrap() {
        let decl = ctx.solve_type(&sup.name).unwrap();
        assert_eq!(sup.args.len(), decl.type_params().len(), "{sup}");
    }
}

#[test]
fn pass_through_type_variables_belong_to_the_subtype() {
    let ctx = jdk();
    let array_list = ctx.solve_type("java.util.ArrayList").unwrap();
    assert_eq!(
        describe_all(&all_interfaces(&ctx, &array_list).unwrap()),
        vec![
            "java.util.List<E>",
            "java.util.Collection<E>",
            "java.lang.Iterable<E>",
            "java.util.RandomAccess",
            "java.lang.Cloneable",
            "java.io.Serializable",
        ]
    );

    let iterable = all_interfaces(&ctx, &array_list)
        .unwrap()
        .into_iter()
        .find(|iface| iface.name == "java.lang.Iterable")
        .unwrap();
    let var = iterable.args[0].as_type_var().unwrap();
    assert_eq!(var.declaring_class(), "java.util.ArrayList");
}

#[test]
fn concrete_instantiation_flows_through_every_level() {
    let ctx = jdk();
    let ty = generic("java.util.ArrayList", vec![string()]);

    assert_eq!(
        describe_all(&super_classes_of_type(&ctx, &ty).unwrap()),
        vec![
            "java.util.AbstractList<java.lang.String>",
            "java.util.AbstractCollection<java.lang.String>",
            "java.lang.Object",
        ]
    );
    let interfaces = describe_all(&interfaces_of_type(&ctx, &ty).unwrap());
    assert_eq!(
        &interfaces[..3],
        &[
            "java.util.List<java.lang.String>",
            "java.util.Collection<java.lang.String>",
            "java.lang.Iterable<java.lang.String>",
        ]
    );
    assert_eq!(
        as_super_type(&ctx, &ty, "java.lang.Iterable").unwrap().unwrap().describe(),
        "java.lang.Iterable<java.lang.String>"
    );
    assert_eq!(as_super_type(&ctx, &ty, "java.util.Map").unwrap(), None);
}

#[test]
fn multi_level_substitution() {
    let ctx = context_with(vec![
        TypeDefStub::class("com.example.A")
            .type_param("X")
            .field("items", "java.util.List<X>"),
        TypeDefStub::class("com.example.B")
            .type_param("T")
            .extends("com.example.A<T>"),
        TypeDefStub::class("com.example.C").extends("com.example.B<java.lang.String>"),
    ]);
    let c = ctx.solve_type("com.example.C").unwrap();

    assert_eq!(
        describe_all(&all_super_classes(&ctx, &c).unwrap()),
        vec![
            "com.example.B<java.lang.String>",
            "com.example.A<java.lang.String>",
            "java.lang.Object",
        ]
    );
}

#[test]
fn diamond_interfaces_are_reported_once() {
    let ctx = context_with(vec![
        TypeDefStub::interface("com.example.Top"),
        TypeDefStub::interface("com.example.Left").implements("com.example.Top"),
        TypeDefStub::interface("com.example.Right").implements("com.example.Top"),
        TypeDefStub::class("com.example.Base").implements("com.example.Right"),
        TypeDefStub::class("com.example.D")
            .extends("com.example.Base")
            .implements("com.example.Left")
            .implements("com.example.Right"),
    ]);
    let d = ctx.solve_type("com.example.D").unwrap();

    assert_eq!(
        describe_all(&all_interfaces(&ctx, &d).unwrap()),
        vec!["com.example.Left", "com.example.Top", "com.example.Right"]
    );
    assert_eq!(
        describe_all(&all_ancestors(&ctx, &d).unwrap()),
        vec![
            "com.example.Base",
            "java.lang.Object",
            "com.example.Left",
            "com.example.Top",
            "com.example.Right",
        ]
    );
}

#[test]
fn closure_is_transitive() {
    let ctx = jdk();
    let array_list = ctx.solve_type("java.util.ArrayList").unwrap();
    let ancestors = all_ancestors(&ctx, &array_list).unwrap();

    for ancestor in &ancestors {
        for transitive in ancestors_of_type(&ctx, ancestor).unwrap() {
            assert!(
                ancestors.iter().any(|a| a.name == transitive.name),
                "{transitive} reachable from {ancestor} but missing"
            );
        }
    }
}

#[test]
fn raw_supertype_erases_arguments() {
    let ctx = context_with(vec![
        TypeDefStub::class("com.example.Box")
            .type_param_bounded("T", &["java.lang.Number"])
            .field("value", "T"),
        TypeDefStub::class("com.example.RawBox").extends("com.example.Box"),
    ]);
    let raw = ctx.solve_type("com.example.RawBox").unwrap();
    let value = javelin_resolve::get_field(&ctx, &raw, "value").unwrap();
    assert_eq!(value.ty, Type::class("java.lang.Number", vec![]));
}

#[test]
fn superclass_cycle_is_reported() {
    let ctx = context_with(vec![
        TypeDefStub::class("com.example.A").extends("com.example.B"),
        TypeDefStub::class("com.example.B").extends("com.example.A"),
    ]);
    let a = ctx.solve_type("com.example.A").unwrap();

    let err = all_super_classes(&ctx, &a).unwrap_err();
    assert_eq!(
        err,
        ResolveError::CyclicHierarchy {
            path: vec![
                "com.example.A".to_string(),
                "com.example.B".to_string(),
                "com.example.A".to_string(),
            ]
        }
    );
    assert!(err.is_hard_failure());
}

#[test]
fn interface_cycle_is_reported() {
    let ctx = context_with(vec![
        TypeDefStub::interface("com.example.I").implements("com.example.J"),
        TypeDefStub::interface("com.example.J").implements("com.example.I"),
        TypeDefStub::class("com.example.C").implements("com.example.I"),
    ]);
    let c = ctx.solve_type("com.example.C").unwrap();
    assert!(matches!(
        all_interfaces(&ctx, &c),
        Err(ResolveError::CyclicHierarchy { .. })
    ));
}

#[test]
fn missing_ancestor_is_unsolved() {
    let ctx = context_with(vec![
        TypeDefStub::class("com.example.Orphan").extends("com.missing.Base")
    ]);
    let orphan = ctx.solve_type("com.example.Orphan").unwrap();
    assert_eq!(
        all_super_classes(&ctx, &orphan).unwrap_err(),
        ResolveError::UnsolvedSymbol {
            name: "com.missing.Base".to_string()
        }
    );
}

#[test]
fn wrong_argument_count_is_malformed() {
    let ctx = context_with(vec![
        foo(),
        TypeDefStub::class("com.example.Bad")
            .extends("com.example.Foo<java.lang.String, java.lang.Integer>"),
    ]);
    let bad = ctx.solve_type("com.example.Bad").unwrap();
    assert_eq!(
        all_super_classes(&ctx, &bad).unwrap_err(),
        ResolveError::MalformedUsage(Malformed::ArityMismatch {
            name: "com.example.Foo".to_string(),
            expected: 1,
            found: 2,
        })
    );
}

#[test]
fn ancestors_of_a_raw_supertype_are_raw() {
    let ctx = context_with(vec![
        TypeDefStub::class("com.example.MyList").extends("java.util.ArrayList")
    ]);
    let my_list = ctx.solve_type("com.example.MyList").unwrap();

    assert_eq!(
        describe_all(&all_super_classes(&ctx, &my_list).unwrap()),
        vec![
            "java.util.ArrayList",
            "java.util.AbstractList",
            "java.util.AbstractCollection",
            "java.lang.Object",
        ]
    );
    let interfaces = all_interfaces(&ctx, &my_list).unwrap();
    assert!(!interfaces.is_empty());
    assert!(interfaces.iter().all(|iface| iface.is_raw()));

    let raw = javelin_types::ClassType::raw("java.util.ArrayList");
    assert_eq!(
        as_super_type(&ctx, &raw, "java.util.Collection").unwrap(),
        Some(javelin_types::ClassType::raw("java.util.Collection"))
    );
}
