use engine::{DigestOrchestrator, DigestOutcome, EngineError, Input, PresentationOptions};

fn orchestrator() -> DigestOrchestrator {
  DigestOrchestrator::standard()
}

fn defaults() -> PresentationOptions {
  PresentationOptions::default()
}

#[test]
fn single_selector_yields_single_entry() {
  let results = orchestrator()
    .compute_digests(Input::Text("Hello, World!"), Some("MD5"), &defaults())
    .unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(
    results["MD5"],
    DigestOutcome::Hex("65a8e27d8879283831b664bd8b7f0ad4".into())
  );
}

#[test]
fn selector_is_case_insensitive() {
  let lower = orchestrator()
    .compute_digests(Input::Text("Hello, World!"), Some("sha256"), &defaults())
    .unwrap();
  assert_eq!(
    lower["SHA256"],
    DigestOutcome::Hex("dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f".into())
  );
}

#[test]
fn batch_covers_exactly_the_supported_set() {
  let orchestrator = orchestrator();
  let results = orchestrator
    .compute_digests(Input::Text("test"), None, &defaults())
    .unwrap();
  let keys: Vec<String> = results.keys().cloned().collect();
  assert_eq!(keys, orchestrator.supported_algorithms());
}

#[test]
fn known_digests_in_batch() {
  let results = orchestrator()
    .compute_digests(Input::Text("abc"), None, &defaults())
    .unwrap();
  assert_eq!(
    results["MD4"],
    DigestOutcome::Hex("a448017aaf21d8525fc10ae87aa6729d".into())
  );
  assert_eq!(
    results["MD5"],
    DigestOutcome::Hex("900150983cd24fb0d6963f7d28e17f72".into())
  );
  assert_eq!(
    results["SHA1"],
    DigestOutcome::Hex("a9993e364706816aba3e25717850c26c9cd0d89d".into())
  );
}

#[test]
fn ntlm_known_vector() {
  let results = orchestrator()
    .compute_digests(Input::Text("password"), Some("NTLM"), &defaults())
    .unwrap();
  let hex = results["NTLM"].as_hex().unwrap();
  assert_eq!(hex, "8846f7eaee8fb117ad06bdd830b7586c");
  assert_eq!(hex.len(), 32);
}

#[test]
fn uppercase_applies_to_every_hex_entry() {
  let results = orchestrator()
    .compute_digests(Input::Text("test"), None, &PresentationOptions { uppercase: true })
    .unwrap();
  for (id, outcome) in &results {
    let hex = outcome.as_hex().unwrap_or_else(|| panic!("{id} unexpectedly failed"));
    assert_eq!(hex, hex.to_ascii_uppercase(), "{id}");
  }
}

#[test]
fn unknown_selector_is_refused() {
  let err = orchestrator()
    .compute_digests(Input::Text("test"), Some("NOPE"), &defaults())
    .unwrap_err();
  assert_eq!(err, EngineError::UnsupportedAlgorithm("NOPE".into()));
}

#[test]
fn empty_input_is_refused_before_any_algorithm_runs() {
  let orchestrator = orchestrator();
  assert_eq!(
    orchestrator.compute_digests(Input::Text(""), None, &defaults()).unwrap_err(),
    EngineError::EmptyInput
  );
  assert_eq!(
    orchestrator
      .compute_digests(Input::Bytes(b""), Some("MD5"), &defaults())
      .unwrap_err(),
    EngineError::EmptyInput
  );
}

#[test]
fn identical_calls_are_deterministic() {
  let orchestrator = orchestrator();
  let first = orchestrator
    .compute_digests(Input::Text("determinism"), None, &defaults())
    .unwrap();
  let second = orchestrator
    .compute_digests(Input::Text("determinism"), None, &defaults())
    .unwrap();
  assert_eq!(first, second);
}

#[test]
fn non_utf8_bytes_fail_only_ntlm() {
  let input = [0xc3u8, 0x28, 0x01]; // invalid utf-8
  let results = orchestrator()
    .compute_digests(Input::Bytes(&input), None, &defaults())
    .unwrap();

  assert!(results["NTLM"].is_failure());
  for (id, outcome) in &results {
    if id != "NTLM" {
      assert!(!outcome.is_failure(), "{id} should have succeeded");
    }
  }
}

#[test]
fn text_and_equivalent_bytes_agree_for_byte_algorithms() {
  let orchestrator = orchestrator();
  let from_text = orchestrator
    .compute_digests(Input::Text("hash it"), Some("SHA512"), &defaults())
    .unwrap();
  let from_bytes = orchestrator
    .compute_digests(Input::Bytes(b"hash it"), Some("SHA512"), &defaults())
    .unwrap();
  assert_eq!(from_text, from_bytes);
}
