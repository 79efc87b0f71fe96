use sv_transport::slot::{IndexedRef, IndexedSlot, KeyedRef, KeyedSlot, Slot, SlotRef};
use sv_transport::{dump, DictionaryValue, ListValue, TransportValue, ValueType};

#[test]
fn list_typed_set_and_get() {
    let mut list = ListValue::with_size(4);
    list.set_bool(0, true);
    list.set_int(1, -5);
    list.set_double(2, 1.5);
    list.set_string(3, "hi");

    assert_eq!(list.get_type(0), ValueType::Bool);
    assert_eq!(list.get_bool(0), Some(true));
    assert_eq!(list.get_int(1), Some(-5));
    assert_eq!(list.get_double(2), Some(1.5));
    assert_eq!(list.get_string(3), Some("hi"));

    // Wrong-type getters read as absent.
    assert_eq!(list.get_int(0), None);
    assert_eq!(list.get_bool(1), None);
}

#[test]
fn list_grows_with_null_on_set() {
    let mut list = ListValue::new();
    list.set_int(2, 9);
    assert_eq!(list.size(), 3);
    assert_eq!(list.get_type(0), ValueType::Null);
    assert_eq!(list.get_type(1), ValueType::Null);
    assert_eq!(list.get_int(2), Some(9));
}

#[test]
fn list_out_of_range_reads_as_null() {
    let list = ListValue::with_size(1);
    assert_eq!(list.get_type(7), ValueType::Null);
    assert!(list.get(7).is_none());
}

#[test]
fn list_set_size_truncates_and_grows() {
    let mut list = ListValue::with_size(2);
    list.set_int(0, 1);
    list.set_size(1);
    assert_eq!(list.size(), 1);
    list.set_size(3);
    assert_eq!(list.get_type(2), ValueType::Null);
}

#[test]
fn dict_keys_keep_insertion_order() {
    let mut dict = DictionaryValue::new();
    dict.set_int("b", 2);
    dict.set_int("a", 1);
    dict.set_int("c", 3);

    assert_eq!(dict.get_keys(), vec!["b", "a", "c"]);
    assert_eq!(dict.size(), 3);
    assert!(dict.has_key("a"));
    assert_eq!(dict.get_type("missing"), ValueType::Null);

    dict.remove("a");
    assert_eq!(dict.get_keys(), vec!["b", "c"]);
}

#[test]
fn dict_overwrite_keeps_position() {
    let mut dict = DictionaryValue::new();
    dict.set_int("x", 1);
    dict.set_int("y", 2);
    dict.set_string("x", "replaced");

    assert_eq!(dict.get_keys(), vec!["x", "y"]);
    assert_eq!(dict.get_string("x"), Some("replaced"));
}

#[test]
fn nested_containers() {
    let mut inner = ListValue::with_size(1);
    inner.set_int(0, 7);
    let mut dict = DictionaryValue::new();
    dict.set_list("items", inner);

    let mut outer = ListValue::with_size(1);
    outer.set_dictionary(0, dict);

    let d = outer.get_dictionary(0).unwrap();
    let l = d.get_list("items").unwrap();
    assert_eq!(l.get_int(0), Some(7));
}

#[test]
fn slots_write_to_both_container_kinds() {
    let mut list = ListValue::with_size(1);
    IndexedSlot::new(&mut list, 0).set_string("via slot");
    assert_eq!(list.get_string(0), Some("via slot"));

    let mut dict = DictionaryValue::new();
    KeyedSlot::new(&mut dict, "k").set_double(2.5);
    assert_eq!(dict.get_double("k"), Some(2.5));
}

#[test]
fn slot_refs_read_absent_as_null() {
    let list = ListValue::new();
    let dict = DictionaryValue::new();
    assert_eq!(IndexedRef::new(&list, 0).value_type(), ValueType::Null);
    assert_eq!(KeyedRef::new(&dict, "k").value_type(), ValueType::Null);
    assert!(IndexedRef::new(&list, 0).node().is_none());
}

#[test]
fn dump_renders_tree_shapes() {
    let mut inner = ListValue::with_size(3);
    inner.set_int(0, 1);
    inner.set_double(1, 2.5);
    inner.set_string(2, "x\"y");

    let mut dict = DictionaryValue::new();
    dict.set_list("items", inner);
    dict.set_bool("ok", true);
    dict.set_null("gone");

    let root = TransportValue::Dictionary(dict);
    assert_eq!(
        dump(&root),
        r#"{"items":[1,2.5,"x\"y"],"ok":true,"gone":null}"#
    );
}

#[test]
fn dump_renders_whole_doubles_in_integer_form() {
    assert_eq!(dump(&TransportValue::Double(3.0)), "3");
    assert_eq!(dump(&TransportValue::Double(-0.25)), "-0.25");
}
