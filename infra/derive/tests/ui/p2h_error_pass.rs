use p2h_derive::p2h_error;
use std::borrow::Cow;

#[p2h_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected with status {status}{}", format_context(.context))]
    Rejected { status: u16, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    let text = std::fs::read_to_string("missing.txt").context("Reading demo file")?;
    if text.is_empty() {
        return Err("empty file".into());
    }
    Err(DemoError::Rejected { status: 500, context: None }).context("Checking status")
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().contains("Reading demo file"));
}
