use javelin_types::format::format_method_signature;
use javelin_types::{
    ClassKind, MethodStub, Type, TypeDefStub, TypeParamOwner, TypeVar, Visibility,
};
use pretty_assertions::assert_eq;

const STUB_FILE: &str = r#"[{
  "name": "com.example.Foo",
  "kind": "class",
  "type_params": [{"name": "E", "bounds": []}],
  "super_class": "com.example.Base<E>",
  "interfaces": ["java.lang.Comparable<com.example.Foo<E>>"],
  "fields": [{"name": "field", "ty": "E"}],
  "methods": [{"name": "get", "params": ["int index"], "return_type": "E"}]
}, {
  "name": "com.example.Base",
  "kind": "class",
  "is_abstract": true,
  "type_params": [{"name": "T"}]
}]"#;

#[test]
fn stub_file_format_produces_declarations() {
    let stubs: Vec<TypeDefStub> = serde_json::from_str(STUB_FILE).unwrap();
    let decls: Vec<_> = stubs.iter().map(|s| s.to_decl().unwrap()).collect();

    let foo = &decls[0];
    assert_eq!(foo.kind, ClassKind::Class);
    assert_eq!(foo.visibility, Visibility::Public);
    assert_eq!(foo.super_class().unwrap().describe(), "com.example.Base<E>");
    assert_eq!(
        foo.interfaces()[0].describe(),
        "java.lang.Comparable<com.example.Foo<E>>"
    );
    assert_eq!(foo.simple_name(), "Foo");
    assert_eq!(foo.package_name(), Some("com.example"));
    assert_eq!(foo.as_type().describe(), "com.example.Foo<E>");

    let get = &foo.declared_methods()[0];
    assert_eq!(get.param(0).unwrap().ty, Type::int());
    assert_eq!(
        get.return_type,
        Type::TypeVar(TypeVar::class("com.example.Foo", "E"))
    );
    assert!(!get.is_static && !get.is_abstract);

    assert!(decls[1].is_abstract);
}

#[test]
fn method_type_parameters_shadow_class_parameters() {
    let decl = TypeDefStub::class("com.example.Holder")
        .type_param("T")
        .field("value", "T")
        .method(
            MethodStub::new("convert")
                .type_param("T")
                .param("T input")
                .returns("T"),
        )
        .build()
        .unwrap();

    let convert = &decl.declared_methods()[0];
    let var = convert.return_type.as_type_var().unwrap();
    assert_eq!(
        var.owner,
        TypeParamOwner::Method {
            class: "com.example.Holder".to_string(),
            method: "convert".to_string(),
            index: 0,
        }
    );
    assert!(decl.field("value").unwrap().ty.as_type_var().unwrap().declared_on_class());
}

#[test]
fn signatures_render_fully_qualified_parameter_types() {
    let decl = TypeDefStub::class("com.example.Repo")
        .type_param("E")
        .method(
            MethodStub::new("saveAll")
                .param("java.util.Collection<? extends E> items")
                .param("boolean flush")
                .returns("int[]"),
        )
        .build()
        .unwrap();

    let method = &decl.declared_methods()[0];
    assert_eq!(
        format_method_signature(method),
        "saveAll(java.util.Collection<? extends E>, boolean)"
    );
    assert_eq!(method.signature(), format_method_signature(method));
    assert_eq!(method.return_type.describe(), "int[]");
}

#[test]
fn declarations_serialize_with_typed_usages() {
    let decl = TypeDefStub::interface("com.example.Source")
        .type_param("T")
        .method(MethodStub::new("next").returns("T").as_abstract())
        .build()
        .unwrap();

    let json = serde_json::to_value(&decl).unwrap();
    assert_eq!(json["kind"], "interface");
    assert_eq!(json["type_params"][0]["name"], "T");

    let back: javelin_types::ClassDecl = serde_json::from_value(json).unwrap();
    assert_eq!(back, decl);
}
