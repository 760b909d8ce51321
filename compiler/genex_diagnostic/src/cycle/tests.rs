use super::*;
use pretty_assertions::assert_eq;

#[test]
fn self_reference_message() {
    let err = CycleError::self_reference(TargetId::new("app"), "INCLUDE_DIRECTORIES");
    assert_eq!(err.to_string(), "Self reference on target \"app\".");
    assert_eq!(err.kind, CycleKind::SelfReference);
}

#[test]
fn loop_lists_each_step() {
    let err = CycleError::cyclic_reference(
        TargetId::new("a"),
        "X",
        vec![
            "$<TARGET_PROPERTY:b,Y>".to_string(),
            "$<TARGET_PROPERTY:a,X>".to_string(),
        ],
    );
    assert_eq!(
        err.to_string(),
        "Dependency loop found.\n\
         Loop step 1\n  $<TARGET_PROPERTY:b,Y>\n\
         Loop step 2\n  $<TARGET_PROPERTY:a,X>"
    );
}
