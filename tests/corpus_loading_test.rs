use std::io::Write;

use tempfile::{Builder, TempDir};

use lexreply::config::ResponderConfig;
use lexreply::corpus::Corpus;
use lexreply::error::{LexreplyError, Result};
use lexreply::responder::Responder;

const CUSTOM_CORPUS: &str = r#"[
    {"intent": "Refund Status", "example_query": "Where is my refund for order #1?", "response": "Refund for {order_no} was issued."},
    {"intent": "Store Hours", "example_query": "What are your opening hours?", "response": "We are open 9am to 6pm."},
    {"intent": "Gift Cards", "example_query": "Do you sell gift cards?", "response": "Gift cards are available in store."}
]"#;

#[test]
fn json_corpus_drives_the_responder() -> Result<()> {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    file.write_all(CUSTOM_CORPUS.as_bytes())?;
    file.flush()?;

    let responder = Responder::new(Corpus::from_file(file.path())?)?;

    assert_eq!(responder.intents().len(), 3);
    assert_eq!(
        responder.get_response("refund for #778?")?,
        "Refund for #778 was issued."
    );
    assert_eq!(responder.get_response("refund please")?, "Refund for N/A was issued.");
    assert_eq!(
        responder.get_response("When are the store hours?")?,
        "We are open 9am to 6pm."
    );
    assert_eq!(
        responder.get_response("gift card")?,
        "Gift cards are available in store."
    );
    Ok(())
}

#[test]
fn jsonl_corpus_preserves_order() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("intents.jsonl");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, r#"{{"intent": "B", "example_query": "beta", "response": "b"}}"#)?;
    writeln!(file)?;
    writeln!(file, r#"{{"intent": "A", "example_query": "alpha", "response": "a"}}"#)?;
    drop(file);

    let corpus = Corpus::from_file(&path)?;

    assert_eq!(corpus.labels().collect::<Vec<_>>(), vec!["B", "A"]);
    Ok(())
}

#[test]
fn malformed_corpus_files_are_rejected() -> Result<()> {
    let cases = [
        (".json", "[]", "empty"),
        (".json", "{\"intent\": \"A\"}", "not an array"),
        (
            ".json",
            r#"[{"intent": "", "example_query": "q", "response": "r"}]"#,
            "blank label",
        ),
        (
            ".jsonl",
            r#"{"intent": "A", "example_query": "q", "response": "Order {order_no"}"#,
            "unbalanced template",
        ),
    ];

    for (suffix, content, case) in cases {
        let mut file = Builder::new().suffix(suffix).tempfile()?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        let result = Corpus::from_file(file.path());
        assert!(
            matches!(
                result,
                Err(LexreplyError::Corpus(_)) | Err(LexreplyError::TemplateFormat(_))
            ),
            "{case}"
        );
    }
    Ok(())
}

#[test]
fn config_file_changes_slot_rendering() -> Result<()> {
    let mut config_file = Builder::new().suffix(".json").tempfile()?;
    write!(
        config_file,
        r#"{{"missing_slot_value": "(no order number)", "order_number_pattern": "ORD-\\d+"}}"#
    )?;
    config_file.flush()?;

    let config = ResponderConfig::from_file(config_file.path())?;
    let responder = Responder::build(Corpus::builtin()?, &config)?;

    assert_eq!(
        responder.get_response("Where is my order ORD-5512?")?,
        "Your order ORD-5512 is out for delivery."
    );
    assert_eq!(
        responder.get_response("Where is my order #12345?")?,
        "Your order (no order number) is out for delivery."
    );
    Ok(())
}
