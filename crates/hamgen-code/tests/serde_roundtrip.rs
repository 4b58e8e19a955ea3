use hamgen_code::{
    canonical_codebook_hash, generate_codebook, Codebook, Codeword, GenerationParams, GenerationReport,
};
use hamgen_core::RngHandle;

fn params() -> GenerationParams {
    GenerationParams {
        timeout_ms: 0,
        iteration_budget: 4_000,
        seed: Some(17),
        ..GenerationParams::new(16, 5, 4)
    }
}

#[test]
fn report_round_trips_through_json() {
    let params = params();
    let result = generate_codebook(&params, &mut RngHandle::from_seed(17));
    let report = GenerationReport::new(&params, result).unwrap();

    let json = report.to_json().unwrap();
    let restored = GenerationReport::from_json(&json).unwrap();

    assert_eq!(restored, report);
    assert_eq!(restored.provenance.seed, Some(17));
    assert_eq!(
        restored.provenance.codebook_hash,
        canonical_codebook_hash(&restored.result.codebook)
    );
}

#[test]
fn codebook_hash_is_stable_across_runs() {
    let params = params();
    let first = generate_codebook(&params, &mut RngHandle::from_seed(17));
    let second = generate_codebook(&params, &mut RngHandle::from_seed(17));
    assert_eq!(
        canonical_codebook_hash(&first.codebook),
        canonical_codebook_hash(&second.codebook)
    );
    let report_a = GenerationReport::new(&params, first).unwrap();
    let report_b = GenerationReport::new(&params, second).unwrap();
    assert_eq!(report_a.provenance.params_hash, report_b.provenance.params_hash);
}

#[test]
fn empty_result_has_no_codebook_hash() {
    let params = GenerationParams::new(4, 3, 4);
    let result = generate_codebook(&params, &mut RngHandle::from_seed(0));
    let report = GenerationReport::new(&params, result).unwrap();
    assert!(report.provenance.codebook_hash.is_empty());
}

#[test]
fn codeword_serializes_as_bit_string() {
    let word = Codeword::from_bit_str("00101").unwrap();
    let json = serde_json::to_string(&word).unwrap();
    assert_eq!(json, r#"{"width":5,"bits":"00101"}"#);
    let restored: Codeword = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, word);
}

#[test]
fn codeword_with_inconsistent_width_is_rejected() {
    let err = serde_json::from_str::<Codeword>(r#"{"width":8,"bits":"00101"}"#).unwrap_err();
    assert!(err.to_string().contains("width-mismatch"));
}

#[test]
fn codebook_with_mixed_widths_is_rejected() {
    let json = r#"{"width":4,"words":[{"width":4,"bits":"0000"},{"width":8,"bits":"00000000"}]}"#;
    let err = serde_json::from_str::<Codebook>(json).unwrap_err();
    assert!(err.to_string().contains("width-mismatch"));
}

#[test]
fn codebook_with_repeated_word_is_rejected() {
    let json = r#"{"width":4,"words":[{"width":4,"bits":"0000"},{"width":4,"bits":"1111"},{"width":4,"bits":"0000"}]}"#;
    let err = serde_json::from_str::<Codebook>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate-codeword"));
}

#[test]
fn report_with_corrupted_codebook_fails_to_load() {
    let params = params();
    let result = generate_codebook(&params, &mut RngHandle::from_seed(17));
    let report = GenerationReport::new(&params, result).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    let words = value["result"]["codebook"]["words"].as_array_mut().unwrap();
    let first = words[0].clone();
    words.push(first);
    assert!(GenerationReport::from_json(&value.to_string()).is_err());
}

#[test]
fn valid_codebook_round_trips() {
    let params = params();
    let result = generate_codebook(&params, &mut RngHandle::from_seed(23));
    let json = serde_json::to_string(&result.codebook).unwrap();
    let restored: Codebook = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result.codebook);
}
