use sv_bridge::{serialize, CallbackRegistry};
use sv_engine::{Engine, Value};
use sv_transport::slot::{IndexedSlot, KeyedSlot};
use sv_transport::{DictionaryValue, ListValue, ValueType};

fn serialize_at(engine: &Engine, list: &mut ListValue, index: usize, value: Value) {
    let mut registry = CallbackRegistry::new();
    serialize(engine, &mut registry, value, &mut IndexedSlot::new(list, index));
}

#[test]
fn self_referential_object_collapses_to_null() {
    let mut engine = Engine::new();
    let obj = engine.object();
    engine.set_value(obj, "self", obj);

    let mut list = ListValue::with_size(1);
    serialize_at(&engine, &mut list, 0, obj);
    assert_eq!(list.get_type(0), ValueType::Null);
}

#[test]
fn self_referential_array_collapses_to_null() {
    let mut engine = Engine::new();
    let arr = engine.array(1);
    engine.set_index(arr, 0, arr);

    let mut list = ListValue::with_size(1);
    serialize_at(&engine, &mut list, 0, arr);
    assert_eq!(list.get_type(0), ValueType::Null);
}

#[test]
fn deep_cycle_collapses_the_whole_call() {
    let mut engine = Engine::new();
    let a = engine.object();
    let b = engine.object();
    let c = engine.array(1);
    engine.set_value(a, "ok", Value::from_i32(1));
    engine.set_value(a, "child", b);
    engine.set_index(c, 0, a);
    engine.set_value(b, "grand", c);

    // The cycle sits two levels down, but the policy is whole-call
    // collapse, not a localized Null.
    let mut list = ListValue::with_size(1);
    serialize_at(&engine, &mut list, 0, a);
    assert_eq!(list.get_type(0), ValueType::Null);
}

#[test]
fn cycle_into_keyed_destination_collapses_to_null() {
    let mut engine = Engine::new();
    let obj = engine.object();
    engine.set_value(obj, "me", obj);

    let mut registry = CallbackRegistry::new();
    let mut dict = DictionaryValue::new();
    serialize(&engine, &mut registry, obj, &mut KeyedSlot::new(&mut dict, "root"));
    assert_eq!(dict.get_type("root"), ValueType::Null);
}

#[test]
fn sibling_slots_survive_a_cyclic_neighbor() {
    let mut engine = Engine::new();
    let good = engine.object();
    engine.set_value(good, "v", Value::from_i32(5));
    let bad = engine.object();
    engine.set_value(bad, "self", bad);

    let mut list = ListValue::with_size(2);
    serialize_at(&engine, &mut list, 0, good);
    serialize_at(&engine, &mut list, 1, bad);

    let dict = list.get_dictionary(0).unwrap();
    assert_eq!(dict.get_int("v"), Some(5));
    assert_eq!(list.get_type(1), ValueType::Null);
}

#[test]
fn shared_child_is_not_a_false_positive() {
    let mut engine = Engine::new();
    let child = engine.object();
    engine.set_value(child, "v", Value::from_i32(1));
    let parent = engine.object();
    engine.set_value(parent, "left", child);
    engine.set_value(parent, "right", child);

    let mut list = ListValue::with_size(1);
    serialize_at(&engine, &mut list, 0, parent);

    // A DAG, not a cycle: the shared child serializes twice as two
    // independent copies.
    let dict = list.get_dictionary(0).unwrap();
    let left = dict.get_dictionary("left").unwrap();
    let right = dict.get_dictionary("right").unwrap();
    assert_eq!(left.get_int("v"), Some(1));
    assert_eq!(right.get_int("v"), Some(1));
    assert_eq!(left, right);
}

#[test]
fn shared_child_across_array_elements() {
    let mut engine = Engine::new();
    let child = engine.array(1);
    engine.set_index(child, 0, Value::from_i32(9));
    let arr = engine.array(2);
    engine.set_index(arr, 0, child);
    engine.set_index(arr, 1, child);

    let mut list = ListValue::with_size(1);
    serialize_at(&engine, &mut list, 0, arr);

    let outer = list.get_list(0).unwrap();
    assert_eq!(outer.get_list(0).unwrap().get_int(0), Some(9));
    assert_eq!(outer.get_list(1).unwrap().get_int(0), Some(9));
}

#[test]
fn deep_acyclic_chain_serializes() {
    let mut engine = Engine::new();
    let mut value = Value::from_i32(0);
    for _ in 0..100 {
        let obj = engine.object();
        engine.set_value(obj, "next", value);
        value = obj;
    }

    let mut list = ListValue::with_size(1);
    serialize_at(&engine, &mut list, 0, value);
    assert_eq!(list.get_type(0), ValueType::Dictionary);
}

#[test]
fn revisiting_after_a_collapsed_call_succeeds() {
    let mut engine = Engine::new();
    let obj = engine.object();
    engine.set_value(obj, "self", obj);

    let mut list = ListValue::with_size(2);
    serialize_at(&engine, &mut list, 0, obj);
    assert_eq!(list.get_type(0), ValueType::Null);

    // The visited stack is call-scoped: breaking the cycle afterwards
    // lets the same object serialize normally.
    engine.set_value(obj, "self", Value::from_i32(1));
    serialize_at(&engine, &mut list, 1, obj);
    let dict = list.get_dictionary(1).unwrap();
    assert_eq!(dict.get_int("self"), Some(1));
}
