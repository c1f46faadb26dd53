use std::fs;

use approx::assert_relative_eq;

use variant_core::{
    Evaluator, LifecycleError, Model, ModelBase, ModelError, Parameters, Population,
    PopulationError, Record, Stage, StoreError, lifecycle,
};
use variant_models::SumModel;

fn abcde(a: f64, b: f64, c: f64, d: f64, e: f64) -> Parameters {
    Parameters::from([("a", a), ("b", b), ("c", c), ("d", d), ("e", e)])
}

#[test]
fn full_lifecycle_sums_one_through_five() {
    let mut model = SumModel::new(abcde(1.0, 2.0, 3.0, 4.0, 5.0));

    lifecycle::run(&mut model).expect("lifecycle should succeed");

    assert!(model.is_solved());
    assert_eq!(model.variables().get("_functional"), Ok(15.0));
    assert_eq!(model.variables().get("Func1"), Ok(15.0));
}

#[test]
fn opposite_terms_cancel() {
    let mut model = SumModel::new(abcde(-1.0, 0.0, 0.0, 0.0, 1.0));

    lifecycle::run(&mut model).expect("lifecycle should succeed");

    assert_eq!(model.variables().get("Func1"), Ok(0.0));
    assert_eq!(model.functional(), Some(0.0));
}

#[test]
fn both_outputs_match_sum_for_varied_inputs() {
    let cases = [
        [0.1, 0.2, 0.3, 0.4, 0.5],
        [-7.5, 3.25, 1e6, -1e6, 0.0],
        [1e-9, -1e-9, 42.0, -42.0, 3.5],
    ];

    for [a, b, c, d, e] in cases {
        let mut model = SumModel::new(abcde(a, b, c, d, e));
        model.create().unwrap();
        model.process().unwrap();

        let func1 = model.variables().get("Func1").unwrap();
        assert_relative_eq!(func1, a + b + c + d + e);
        assert_eq!(model.variables().get("_functional"), Ok(func1));
    }
}

#[test]
fn missing_parameter_fails_in_create_stage() {
    let mut model = SumModel::new(Parameters::from([
        ("a", 1.0),
        ("b", 2.0),
        ("c", 3.0),
        ("e", 5.0),
    ]));

    let error = lifecycle::run(&mut model).unwrap_err();

    assert_eq!(
        error,
        LifecycleError {
            stage: Stage::Create,
            model: "SumModel",
            source: ModelError::MissingParameter { name: "d".into() },
        }
    );
    assert!(!model.is_solved());
    assert!(model.variables().is_empty());
}

#[test]
fn evaluator_calls_sum_model() {
    let model = Evaluator::new(SumModel::new);

    let variables = model.call(&abcde(2.0, 2.0, 2.0, 2.0, 2.0)).unwrap();

    assert_eq!(variables.functional(), Some(10.0));
}

#[test]
fn population_finds_smallest_sum() {
    let model = Evaluator::new(SumModel::new);
    let sets = vec![
        abcde(1.0, 1.0, 1.0, 1.0, 1.0),
        abcde(-3.0, 0.0, 0.0, 0.0, 1.0),
        Parameters::from([("a", -100.0)]),
        abcde(0.0, 0.0, 0.0, 0.0, 0.0),
    ];

    let population = Population::evaluate(&model, sets);

    let best = population.best().expect("should have candidates");
    assert_relative_eq!(best.functional, -2.0);
    assert_eq!(best.snapshot.input.value("a"), Some(-3.0));
    assert_eq!(population.candidates().len(), 3);
    assert_eq!(population.failures().len(), 1);
    assert_eq!(population.failures()[0].index, 2);
}

#[test]
fn undefined_sum_is_never_the_best() {
    let model = Evaluator::new(SumModel::new);
    let sets = vec![
        abcde(1.0, 1.0, 1.0, 1.0, 1.0),
        abcde(f64::INFINITY, f64::NEG_INFINITY, 0.0, 0.0, 0.0),
    ];

    let population = Population::evaluate(&model, sets);

    let best = population.best().expect("should have candidates");
    assert_relative_eq!(best.functional, 5.0);
    assert_eq!(population.failures().len(), 1);
    assert_eq!(population.failures()[0].index, 1);
    assert!(matches!(
        population.failures()[0].error,
        PopulationError::NanFunctional
    ));
}

#[test]
fn infinite_parameters_are_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");
    let parameters =
        Parameters::from_toml_str("a = inf\nb = 0\nc = 0\nd = 0\ne = 0\n").unwrap();

    let mut model = SumModel::new(parameters);
    lifecycle::run(&mut model).unwrap();
    assert_eq!(model.functional(), Some(f64::INFINITY));

    let result = Record::capture(&model).save(&path);

    assert!(matches!(result, Err(StoreError::NonFinite { ref name }) if name == "a"));
    assert!(!path.exists());
}

#[test]
fn parameters_from_file_drive_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problem.toml");
    fs::write(&path, "a = 1\nb = 2\nc = 3\nd = 4\ne = 5\n").unwrap();

    let mut model = SumModel::new(Parameters::load(&path).unwrap());
    lifecycle::run(&mut model).unwrap();

    assert_eq!(model.functional(), Some(15.0));
}

#[test]
fn record_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");

    let mut model = SumModel::new(abcde(1.0, 2.0, 3.0, 4.0, 5.0));
    lifecycle::run(&mut model).unwrap();

    let record = Record::capture(&model);
    record.save(&path).unwrap();
    let loaded = Record::load(&path).unwrap();

    assert_eq!(loaded, record);
    assert!(loaded.solved);
    assert_eq!(loaded.variables.functional(), Some(15.0));
    assert_eq!(loaded.parameters.value("e"), Some(5.0));
}
