use javelin_types::{FieldStub, MethodStub, TypeDefStub, Visibility};

const OBJECT: &str = "java.lang.Object";
const STRING: &str = "java.lang.String";
const SERIALIZABLE: &str = "java.io.Serializable";

/// Declarations of the built-in JDK subset, in no particular order.
pub(crate) fn minimal_jdk_stubs() -> Vec<TypeDefStub> {
    let mut out = Vec::new();
    out.extend(java_lang());
    out.extend(java_util());
    out
}

fn constant(name: &str, ty: &str) -> FieldStub {
    FieldStub::new(name, ty).as_static().as_final()
}

fn private_field(name: &str, ty: &str) -> FieldStub {
    FieldStub::new(name, ty).with_visibility(Visibility::Private)
}

fn java_lang() -> Vec<TypeDefStub> {
    let object = TypeDefStub::class(OBJECT)
        .method(MethodStub::new("equals").param("java.lang.Object obj").returns("boolean"))
        .method(MethodStub::new("hashCode").returns("int"))
        .method(MethodStub::new("toString").returns(STRING))
        .method(
            MethodStub::new("clone")
                .returns(OBJECT)
                .with_visibility(Visibility::Protected),
        );

    let comparable = TypeDefStub::interface("java.lang.Comparable")
        .type_param("T")
        .method(MethodStub::new("compareTo").param("T o").returns("int").as_abstract());

    let char_sequence = TypeDefStub::interface("java.lang.CharSequence")
        .method(MethodStub::new("length").returns("int").as_abstract())
        .method(MethodStub::new("charAt").param("int index").returns("char").as_abstract());

    let string = TypeDefStub::class(STRING)
        .implements(SERIALIZABLE)
        .implements("java.lang.Comparable<java.lang.String>")
        .implements("java.lang.CharSequence")
        .field_stub(private_field("value", "char[]").as_final())
        .field_stub(constant(
            "CASE_INSENSITIVE_ORDER",
            "java.util.Comparator<java.lang.String>",
        ))
        .method(MethodStub::new("length").returns("int"))
        .method(MethodStub::new("isEmpty").returns("boolean"))
        .method(MethodStub::new("charAt").param("int index").returns("char"))
        .method(MethodStub::new("concat").param("java.lang.String str").returns(STRING))
        .method(MethodStub::new("indexOf").param("int ch").returns("int"))
        .method(MethodStub::new("indexOf").param("java.lang.String str").returns("int"))
        .method(MethodStub::new("substring").param("int beginIndex").returns(STRING))
        .method(
            MethodStub::new("substring")
                .param("int beginIndex")
                .param("int endIndex")
                .returns(STRING),
        )
        .method(MethodStub::new("equals").param("java.lang.Object anObject").returns("boolean"))
        .method(MethodStub::new("hashCode").returns("int"))
        .method(MethodStub::new("compareTo").param("java.lang.String anotherString").returns("int"))
        .method(MethodStub::new("toString").returns(STRING))
        .method(
            MethodStub::new("indexOfSupplementary")
                .param("int ch")
                .param("int fromIndex")
                .returns("int")
                .with_visibility(Visibility::Private),
        )
        .method(MethodStub::new("valueOf").param("int i").returns(STRING).as_static())
        .method(MethodStub::new("valueOf").param("long l").returns(STRING).as_static())
        .method(MethodStub::new("valueOf").param("char c").returns(STRING).as_static())
        .method(MethodStub::new("valueOf").param("boolean b").returns(STRING).as_static())
        .method(MethodStub::new("valueOf").param("double d").returns(STRING).as_static())
        .method(MethodStub::new("valueOf").param("java.lang.Object obj").returns(STRING).as_static());

    let number = TypeDefStub::class("java.lang.Number")
        .as_abstract()
        .implements(SERIALIZABLE)
        .method(MethodStub::new("intValue").returns("int").as_abstract())
        .method(MethodStub::new("longValue").returns("long").as_abstract())
        .method(MethodStub::new("doubleValue").returns("double").as_abstract());

    let integer = TypeDefStub::class("java.lang.Integer")
        .extends("java.lang.Number")
        .implements("java.lang.Comparable<java.lang.Integer>")
        .field_stub(constant("MAX_VALUE", "int"))
        .field_stub(constant("MIN_VALUE", "int"))
        .field_stub(private_field("value", "int").as_final())
        .method(MethodStub::new("intValue").returns("int"))
        .method(MethodStub::new("longValue").returns("long"))
        .method(MethodStub::new("doubleValue").returns("double"))
        .method(MethodStub::new("compareTo").param("java.lang.Integer anotherInteger").returns("int"))
        .method(
            MethodStub::new("valueOf")
                .param("int i")
                .returns("java.lang.Integer")
                .as_static(),
        )
        .method(
            MethodStub::new("parseInt")
                .param("java.lang.String s")
                .returns("int")
                .as_static(),
        );

    let long = TypeDefStub::class("java.lang.Long")
        .extends("java.lang.Number")
        .implements("java.lang.Comparable<java.lang.Long>")
        .field_stub(constant("MAX_VALUE", "long"))
        .method(MethodStub::new("intValue").returns("int"))
        .method(MethodStub::new("longValue").returns("long"))
        .method(MethodStub::new("doubleValue").returns("double"))
        .method(MethodStub::new("compareTo").param("java.lang.Long anotherLong").returns("int"));

    let double = TypeDefStub::class("java.lang.Double")
        .extends("java.lang.Number")
        .implements("java.lang.Comparable<java.lang.Double>")
        .method(MethodStub::new("intValue").returns("int"))
        .method(MethodStub::new("longValue").returns("long"))
        .method(MethodStub::new("doubleValue").returns("double"))
        .method(MethodStub::new("compareTo").param("java.lang.Double anotherDouble").returns("int"));

    let boolean = TypeDefStub::class("java.lang.Boolean")
        .implements(SERIALIZABLE)
        .implements("java.lang.Comparable<java.lang.Boolean>")
        .field_stub(constant("TRUE", "java.lang.Boolean"))
        .field_stub(constant("FALSE", "java.lang.Boolean"))
        .method(MethodStub::new("booleanValue").returns("boolean"));

    let character = TypeDefStub::class("java.lang.Character")
        .implements(SERIALIZABLE)
        .implements("java.lang.Comparable<java.lang.Character>")
        .method(MethodStub::new("charValue").returns("char"));

    let enum_ = TypeDefStub::class("java.lang.Enum")
        .as_abstract()
        .type_param_bounded("E", &["java.lang.Enum<E>"])
        .implements("java.lang.Comparable<E>")
        .implements(SERIALIZABLE)
        .method(MethodStub::new("name").returns(STRING))
        .method(MethodStub::new("ordinal").returns("int"))
        .method(MethodStub::new("compareTo").param("E o").returns("int"));

    let math = TypeDefStub::class("java.lang.Math")
        .field_stub(constant("PI", "double"))
        .method(MethodStub::new("max").param("int a").param("int b").returns("int").as_static())
        .method(MethodStub::new("max").param("long a").param("long b").returns("long").as_static())
        .method(
            MethodStub::new("max")
                .param("double a")
                .param("double b")
                .returns("double")
                .as_static(),
        )
        .method(MethodStub::new("abs").param("int a").returns("int").as_static())
        .method(MethodStub::new("abs").param("double a").returns("double").as_static());

    let iterable = TypeDefStub::interface("java.lang.Iterable")
        .type_param("T")
        .method(
            MethodStub::new("iterator")
                .returns("java.util.Iterator<T>")
                .as_abstract(),
        );

    vec![
        object,
        TypeDefStub::interface(SERIALIZABLE),
        TypeDefStub::interface("java.lang.Cloneable"),
        comparable,
        char_sequence,
        string,
        number,
        integer,
        long,
        double,
        boolean,
        character,
        enum_,
        math,
        iterable,
    ]
}

fn java_util() -> Vec<TypeDefStub> {
    let iterator = TypeDefStub::interface("java.util.Iterator")
        .type_param("E")
        .method(MethodStub::new("hasNext").returns("boolean").as_abstract())
        .method(MethodStub::new("next").returns("E").as_abstract());

    let comparator = TypeDefStub::interface("java.util.Comparator")
        .type_param("T")
        .method(
            MethodStub::new("compare")
                .param("T o1")
                .param("T o2")
                .returns("int")
                .as_abstract(),
        );

    let collection = TypeDefStub::interface("java.util.Collection")
        .type_param("E")
        .implements("java.lang.Iterable<E>")
        .method(MethodStub::new("size").returns("int").as_abstract())
        .method(MethodStub::new("isEmpty").returns("boolean").as_abstract())
        .method(MethodStub::new("contains").param("java.lang.Object o").returns("boolean").as_abstract())
        .method(MethodStub::new("iterator").returns("java.util.Iterator<E>").as_abstract())
        .method(MethodStub::new("toArray").returns("java.lang.Object[]").as_abstract())
        .method(MethodStub::new("add").param("E e").returns("boolean").as_abstract())
        .method(MethodStub::new("remove").param("java.lang.Object o").returns("boolean").as_abstract())
        .method(
            MethodStub::new("addAll")
                .param("java.util.Collection<? extends E> c")
                .returns("boolean")
                .as_abstract(),
        );

    let list = TypeDefStub::interface("java.util.List")
        .type_param("E")
        .implements("java.util.Collection<E>")
        .method(MethodStub::new("add").param("E e").returns("boolean").as_abstract())
        .method(MethodStub::new("get").param("int index").returns("E").as_abstract())
        .method(
            MethodStub::new("set")
                .param("int index")
                .param("E element")
                .returns("E")
                .as_abstract(),
        )
        .method(
            MethodStub::new("add")
                .param("int index")
                .param("E element")
                .as_abstract(),
        )
        .method(MethodStub::new("remove").param("int index").returns("E").as_abstract())
        .method(MethodStub::new("indexOf").param("java.lang.Object o").returns("int").as_abstract())
        .method(
            MethodStub::new("subList")
                .param("int fromIndex")
                .param("int toIndex")
                .returns("java.util.List<E>")
                .as_abstract(),
        );

    let abstract_collection = TypeDefStub::class("java.util.AbstractCollection")
        .as_abstract()
        .type_param("E")
        .implements("java.util.Collection<E>")
        .method(MethodStub::new("iterator").returns("java.util.Iterator<E>").as_abstract())
        .method(MethodStub::new("size").returns("int").as_abstract())
        .method(MethodStub::new("isEmpty").returns("boolean"))
        .method(MethodStub::new("contains").param("java.lang.Object o").returns("boolean"))
        .method(MethodStub::new("add").param("E e").returns("boolean"))
        .method(MethodStub::new("toString").returns(STRING));

    let abstract_list = TypeDefStub::class("java.util.AbstractList")
        .as_abstract()
        .type_param("E")
        .extends("java.util.AbstractCollection<E>")
        .implements("java.util.List<E>")
        .field_stub(FieldStub::new("modCount", "int").with_visibility(Visibility::Protected))
        .method(MethodStub::new("add").param("E e").returns("boolean"))
        .method(MethodStub::new("get").param("int index").returns("E").as_abstract())
        .method(
            MethodStub::new("set")
                .param("int index")
                .param("E element")
                .returns("E"),
        )
        .method(MethodStub::new("indexOf").param("java.lang.Object o").returns("int"))
        .method(MethodStub::new("iterator").returns("java.util.Iterator<E>"))
        .method(MethodStub::new("equals").param("java.lang.Object o").returns("boolean"))
        .method(MethodStub::new("hashCode").returns("int"));

    let array_list = TypeDefStub::class("java.util.ArrayList")
        .type_param("E")
        .extends("java.util.AbstractList<E>")
        .implements("java.util.List<E>")
        .implements("java.util.RandomAccess")
        .implements("java.lang.Cloneable")
        .implements(SERIALIZABLE)
        .field_stub(private_field("elementData", "java.lang.Object[]"))
        .field_stub(private_field("size", "int"))
        .method(MethodStub::new("get").param("int index").returns("E"))
        .method(
            MethodStub::new("set")
                .param("int index")
                .param("E element")
                .returns("E"),
        )
        .method(MethodStub::new("add").param("E e").returns("boolean"))
        .method(MethodStub::new("add").param("int index").param("E element"))
        .method(MethodStub::new("remove").param("int index").returns("E"))
        .method(MethodStub::new("remove").param("java.lang.Object o").returns("boolean"))
        .method(MethodStub::new("size").returns("int"))
        .method(MethodStub::new("isEmpty").returns("boolean"))
        .method(MethodStub::new("ensureCapacity").param("int minCapacity"))
        .method(MethodStub::new("trimToSize"))
        .method(MethodStub::new("clone").returns(OBJECT))
        .method(
            MethodStub::new("grow")
                .param("int minCapacity")
                .returns("java.lang.Object[]")
                .with_visibility(Visibility::Private),
        );

    let map = TypeDefStub::interface("java.util.Map")
        .type_param("K")
        .type_param("V")
        .method(MethodStub::new("get").param("java.lang.Object key").returns("V").as_abstract())
        .method(
            MethodStub::new("put")
                .param("K key")
                .param("V value")
                .returns("V")
                .as_abstract(),
        )
        .method(
            MethodStub::new("containsKey")
                .param("java.lang.Object key")
                .returns("boolean")
                .as_abstract(),
        )
        .method(MethodStub::new("size").returns("int").as_abstract());

    vec![
        iterator,
        comparator,
        collection,
        list,
        TypeDefStub::interface("java.util.RandomAccess"),
        abstract_collection,
        abstract_list,
        array_list,
        map,
    ]
}
