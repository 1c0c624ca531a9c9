use super::*;

#[test]
fn test_known_engines() {
    let weights = EvalWeights::default();
    assert_eq!(create_engine("minimax", &weights).unwrap().name(), "Minimax v1.0");
    assert_eq!(create_engine("MM", &weights).unwrap().name(), "Minimax v1.0");
    assert_eq!(create_engine("random:7", &weights).unwrap().name(), "Random v1.0");
}

#[test]
fn test_bad_specs() {
    let weights = EvalWeights::default();
    assert_eq!(
        create_engine("alphazero", &weights).err(),
        Some(EngineSpecError::Unknown("alphazero".into()))
    );
    assert_eq!(
        create_engine("random:x", &weights).err(),
        Some(EngineSpecError::BadSeed("random:x".into()))
    );
    assert!(create_engine("minimax:2", &weights).is_err());
}
