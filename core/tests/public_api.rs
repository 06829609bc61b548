//! Integration tests for the public API.
//!
//! These tests exercise the type system end-to-end through the public
//! surface only: extension, construction, application, inclusion and queries.

use lighter_core::api::{Error, Registry};
use lighter_core::types::{InitArgs, Type};
use lighter_core::values::{Behavior, Method, Object, Overwrite, Value, decorate, hide};
use pretty_assertions::assert_eq;

fn keys(object: &Object) -> Vec<String> {
    object.keys().iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_dog_scenario() {
    let dog = Type::root()
        .extend(
            Behavior::new()
                .with(
                    "init",
                    Method::constructor(|this, args| {
                        this.set("name", args[0].clone());
                        Ok(())
                    }),
                )
                .with(
                    "bark",
                    Method::new(|this, _| {
                        let name = this.get("name").unwrap_or_default();
                        Ok(Value::from(format!("{} says woof", name)))
                    }),
                ),
        )
        .unwrap();

    let mut fido = dog.instantiate(&[Value::from("Fido")]).unwrap();
    assert_eq!(fido.get("name"), Some(Value::from("Fido")));
    assert_eq!(fido.call("bark", &[]), Ok(Value::from("Fido says woof")));
    assert!(dog.is(&dog));
    assert_eq!(keys(&fido), vec!["name"]);
}

#[test]
fn test_hovercraft_scenario() {
    let mut registry = Registry::default();
    let vehicle = registry
        .define(
            "Vehicle",
            Behavior::new()
                .with(
                    "worksOnLand",
                    Method::new(|this, _| {
                        Ok(Value::Bool(
                            this.get("isLandVehicle").is_some_and(|v| v.is_truthy()),
                        ))
                    }),
                )
                .with(
                    "worksOnWater",
                    Method::new(|this, _| {
                        Ok(Value::Bool(
                            this.get("isWaterVehicle").is_some_and(|v| v.is_truthy()),
                        ))
                    }),
                ),
        )
        .unwrap();
    let car = vehicle
        .builder()
        .name("Car")
        .property("isLandVehicle", true)
        .build()
        .unwrap();
    let boat = vehicle
        .builder()
        .name("Boat")
        .property("isWaterVehicle", true)
        .build()
        .unwrap();
    let hovercraft = vehicle.builder().name("Hovercraft").build().unwrap();
    hovercraft.include(&car, Overwrite::Preserve).unwrap();
    hovercraft.include(&boat, Overwrite::Preserve).unwrap();
    for ty in [&car, &boat, &hovercraft] {
        registry.register(ty.clone()).unwrap();
    }

    let mut craft = hovercraft.instantiate(&[]).unwrap();
    assert_eq!(craft.call("worksOnLand", &[]), Ok(Value::Bool(true)));
    assert_eq!(craft.call("worksOnWater", &[]), Ok(Value::Bool(true)));
    assert!(hovercraft.has(&car));
    assert!(hovercraft.has(&boat));
    assert!(!hovercraft.is(&car));
    assert!(!hovercraft.is(&boat));
    assert_eq!(
        registry.names(),
        vec!["Boat", "Car", "Hovercraft", "Vehicle"]
    );

    // Plain vehicles are unaffected by the mixins.
    let mut plain = vehicle.instantiate(&[]).unwrap();
    assert_eq!(plain.call("worksOnLand", &[]), Ok(Value::Bool(false)));
}

#[test]
fn test_extension_superset_and_overlay() {
    let base = Type::root()
        .extend(Behavior::new().with("a", 1).with("b", 2))
        .unwrap();
    let overrides = Behavior::new()
        .with("b", 3)
        .with("c", 4)
        .with("init", Method::new(|_, _| Ok(Value::Null)));
    let derived = base.extend(overrides.clone()).unwrap();

    for key in base.behavior_keys() {
        assert!(derived.has_behavior(&key));
    }
    for (key, value) in overrides.iter() {
        if key.as_str() == "init" {
            assert!(!derived.has_behavior(key));
        } else {
            assert_eq!(derived.behavior(key).as_ref(), Some(value));
        }
    }
}

#[test]
fn test_no_back_mutation() {
    let base = Type::root()
        .builder()
        .property("x", 0)
        .static_property("s", 0)
        .build()
        .unwrap();
    let (prototype, statics) = (base.prototype(), base.statics().clone());

    let first = base
        .builder()
        .property("x", 1)
        .static_property("s", 1)
        .build()
        .unwrap();
    let second = base
        .builder()
        .property("y", 2)
        .build()
        .unwrap();

    assert_eq!(base.prototype(), prototype);
    assert_eq!(base.statics(), &statics);
    assert_eq!(first.behavior("y"), None);
    assert_eq!(second.behavior("x"), Some(Value::Int(0)));
    assert_eq!(second.static_property("s"), Some(&Value::Int(0)));
}

#[test]
fn test_decorate_policies() {
    let map = Behavior::new().with("a", 1).with("b", 2);

    let mut preserved = Object::from_fields(Behavior::new().with("b", 0));
    decorate(&mut preserved, &map, Overwrite::Preserve);
    assert_eq!(preserved.fields(), &Behavior::new().with("a", 1).with("b", 0));

    let mut replaced = Object::from_fields(Behavior::new().with("b", 0));
    decorate(&mut replaced, &map, Overwrite::Replace);
    assert_eq!(replaced.fields(), &Behavior::new().with("a", 1).with("b", 2));
}

#[test]
fn test_decorate_respects_prototype_members() {
    let ty = Type::root()
        .extend(Behavior::new().with("a", "proto"))
        .unwrap();
    let mut object = ty.instantiate(&[]).unwrap();
    decorate(&mut object, &Behavior::new().with("a", "own"), Overwrite::Preserve);

    assert_eq!(object.get("a"), Some(Value::from("proto")));
    assert!(!object.has_own("a"));
}

#[test]
fn test_init_without_constructor() {
    let adder = Type::root()
        .extend(
            Behavior::new()
                .with(
                    "init",
                    Method::constructor(|this, _| {
                        this.set("total", 0);
                        Ok(())
                    }),
                )
                .with(
                    "add",
                    Method::new(|_, args| Ok(Value::Int(args[0].as_int()? + args[1].as_int()?))),
                ),
        )
        .unwrap();

    let mut object = Object::new();
    adder
        .init(&mut object, Overwrite::Preserve, InitArgs::Skip)
        .unwrap();
    assert!(object.get("add").is_some());
    assert!(object.get("total").is_none());

    let mut constructed = Object::new();
    adder.init_with_args(&mut constructed, &[]).unwrap();
    assert_eq!(constructed.get("total"), Some(Value::Int(0)));
}

#[test]
fn test_hidden_fields_stay_out_of_keys() {
    let mut record = Object::from_fields(Behavior::new().with("id", 1));
    hide(&mut record, "_super", "bookkeeping");
    assert_eq!(keys(&record), vec!["id"]);
    assert_eq!(record.get("_super"), Some(Value::from("bookkeeping")));
}

#[test]
fn test_inclusion_is_transitive_through_sub_types() {
    let root = Type::root();
    let a = root.extend(Behavior::new()).unwrap();
    let b = root
        .extend(Behavior::new().with("fromB", true))
        .unwrap();
    a.include(&b, Overwrite::Preserve).unwrap();
    let c = a.extend(Behavior::new()).unwrap();

    assert!(c.has(&b));
    assert!(!c.is(&b));
    assert_eq!(c.behavior("fromB"), Some(Value::Bool(true)));
}

#[test]
fn test_is_and_has_reject_non_types() {
    let ty = Type::root();
    for value in [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::from("Type"),
        Value::Object(Object::new().into_ref()),
        Value::array([]),
    ] {
        assert!(!ty.is_value(&value));
        assert!(!ty.has_value(&value));
    }
}

#[test]
fn test_cycles_are_explicit_errors() {
    let a = Type::root().builder().name("A").build().unwrap();
    let b = Type::root().builder().name("B").build().unwrap();
    a.include(&b, Overwrite::Preserve).unwrap();

    let err = b.include(&a, Overwrite::Preserve).unwrap_err();
    assert_eq!(err.to_string(), "including A into B would form a cycle");
    assert!(!b.has(&a));
}

#[test]
fn test_error_display() {
    assert_eq!(
        Error::UnknownMember("bark".into()).to_string(),
        "unknown member `bark`"
    );
    assert_eq!(
        Error::NotAType("int").to_string(),
        "expected a type, found int"
    );
}
