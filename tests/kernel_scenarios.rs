use ferrite_saxpy::{run, saxpy, validate, Buffer, Initialized, KernelConfig, Outcome};

const N: usize = 512;

#[test]
fn single_pass_succeeds() {
    let validation = Initialized::new(N, 450, -1).transform(2).validate(900);
    assert_eq!(validation.outcome, Outcome::Success);
    assert!(validation.output.iter().all(|&v| v == 900));
}

#[test]
fn corrupted_first_element_fails() {
    let mut transformed = Initialized::new(N, 450, -1).transform(2);
    transformed.output_mut()[0] = 0;

    let validation = transformed.validate(900);
    assert_eq!(validation.outcome, Outcome::Fail);
    let mismatch = validation.mismatch.expect("mismatch should be reported");
    assert_eq!(mismatch.index, 0);
    assert_eq!(mismatch.actual, 0);
    assert_eq!(mismatch.expected, 900);
    assert_eq!(mismatch.to_string(), "element 0 is 0, expected 900");
}

#[test]
fn hundred_thousand_passes_succeed() {
    let report = run(&KernelConfig::default()).unwrap();
    assert_eq!(report.outcome, Outcome::Success);
    assert_eq!(report.passes, 100_000);
    assert_eq!(report.outcome.to_string(), "Success");
}

#[test]
fn empty_buffers_validate() {
    let config = KernelConfig { len: 0, repetitions: 1, ..KernelConfig::default() };
    assert_eq!(run(&config).unwrap().outcome, Outcome::Success);
}

#[test]
fn retransforming_is_idempotent() {
    let x = Buffer::filled(N, 450);
    let mut y = Buffer::filled(N, -1);
    saxpy(2, &x, &mut y);
    let first = y.clone();
    saxpy(2, &x, &mut y);
    assert_eq!(first, y);
    assert_eq!(validate(&y, 900), Outcome::Success);
}

#[test]
fn float_variant_succeeds() {
    let report = run(&KernelConfig::float_default()).unwrap();
    assert!(report.outcome.is_success());
    assert_eq!(report.passes, 5_000);
}
