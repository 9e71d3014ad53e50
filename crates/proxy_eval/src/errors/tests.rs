use pretty_assertions::assert_eq;
use proxy_types::Check;

use super::*;

#[test]
fn failed_carries_message() {
    let err = EvalError::failed("no such block");
    assert_eq!(err.to_string(), "no such block");
    assert!(!err.is_contract_violation());
}

#[test]
fn context_cast_names_both_types() {
    let err = EvalError::ContextCast {
        expected: TypeDescriptor::of::<u64>(),
        found: TypeDescriptor::of::<String>(),
    };
    assert_eq!(
        err.to_string(),
        "context cast failed: expected `u64`, found `String`"
    );
    assert!(!err.is_contract_violation());
}

#[test]
fn contract_violation_is_distinct() {
    let err = EvalError::ContractViolation {
        operation: "while_loop",
        expected: TypeDescriptor::of::<u64>(),
        found: TypeDescriptor::of::<bool>(),
    };
    assert!(err.is_contract_violation());
    assert_eq!(
        err.to_string(),
        "contract violation in while_loop: expected `u64`, found `bool`"
    );
}

#[test]
fn proxy_error_wraps_both_sides() {
    let mismatch = TypeMismatch::new(
        Check::Match,
        TypeDescriptor::of::<u64>(),
        TypeDescriptor::of::<i8>(),
    );
    let err = ProxyError::from(mismatch.clone());
    assert_eq!(err, ProxyError::TypeMismatch(mismatch.clone()));
    assert_eq!(err.to_string(), mismatch.to_string());

    let err = ProxyError::from(EvalError::failed("boom"));
    assert_eq!(err.to_string(), "boom");
}
