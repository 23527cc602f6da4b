/*!
 * Tests for the change-detection gate and translation record header
 */

use mdtranslate::fingerprint;
use mdtranslate::translation::{GateDecision, Reason, TranslationRecord, assess, should_translate};

const SOURCE: &str = "# Getting started\n\nInstall the tool with `cargo install`.\n";

/// Test that a missing record always requires translation
#[test]
fn test_shouldTranslate_withNoExistingRecord_shouldReturnTrue() {
    assert!(should_translate(SOURCE, None));
    assert!(should_translate("", None));
}

/// Test that writing and re-reading a record is recognized as up to date
#[test]
fn test_shouldTranslate_withRoundTrippedRecord_shouldReturnFalse() {
    let written = TranslationRecord::for_source(SOURCE, "# はじめに\n\n`cargo install` でインストールします。").render();

    assert!(written.starts_with(&format!("---\noriginal: {}\n---\n", fingerprint::compute(SOURCE))));
    assert!(!should_translate(SOURCE, Some(&written)));
}

/// Test that running the gate twice on the same output stays idempotent
#[test]
fn test_shouldTranslate_withUnchangedSourceTwice_shouldSkipBothTimes() {
    let written = TranslationRecord::for_source(SOURCE, "body").render();
    let reparsed = TranslationRecord::parse(&written).unwrap().render();

    assert_eq!(written, reparsed);
    assert!(!should_translate(SOURCE, Some(&written)));
    assert!(!should_translate(SOURCE, Some(&reparsed)));
}

/// Test that any change to the source triggers retranslation
#[test]
fn test_shouldTranslate_withChangedSource_shouldReturnTrue() {
    let written = TranslationRecord::for_source(SOURCE, "body").render();

    assert!(should_translate(&format!("{} ", SOURCE), Some(&written)));
    assert!(should_translate("# Getting Started\n", Some(&written)));
    assert_eq!(
        assess("different", Some(&written)),
        GateDecision::Translate(Reason::Changed)
    );
}

/// Test that a hand-written header with padding around the value still matches
#[test]
fn test_shouldTranslate_withPaddedFingerprint_shouldCompareTrimmed() {
    let existing = format!("---\noriginal:    {}   \n---\nbody", fingerprint::compute(SOURCE));
    assert!(!should_translate(SOURCE, Some(&existing)));
}

/// Test that malformed headers force retranslation without panicking
#[test]
fn test_shouldTranslate_withMalformedRecord_shouldReturnTrue() {
    let malformed = [
        "",
        "# Just a translated document with no header",
        "---\noriginal abc\n---\n",
        "---\n\n---\nbody",
        "---\nchecksum: abc\n---\nbody",
    ];

    for existing in malformed {
        assert!(should_translate(SOURCE, Some(existing)), "expected retranslation for {:?}", existing);
        assert_eq!(
            assess(SOURCE, Some(existing)),
            GateDecision::Translate(Reason::Malformed)
        );
    }
}

/// Test that the record body survives parsing, including its own fences
#[test]
fn test_parse_withBodyContainingFences_shouldKeepBody() {
    let body = "intro\n---\noriginal: not a header\n---\noutro";
    let record = TranslationRecord::for_source(SOURCE, body);

    let parsed = TranslationRecord::parse(&record.render()).unwrap();

    assert_eq!(parsed.body, body);
    assert_eq!(parsed.fingerprint, fingerprint::compute(SOURCE));
}
