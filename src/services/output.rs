use crate::domain::models::{ErrorBody, JsonErr, JsonOut, JsonRejected};
use crate::schema::FormError;
use crate::services::config::MissingConfig;
use serde::Serialize;

/// Lists go out as one JSON array payload, or one text row per item.
pub fn print_rows<T: Serialize>(
    json: bool,
    items: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_status(true, true, items, |_| String::new());
    }
    for item in items {
        println!("{}", row(item));
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    print_status(json, true, data, row)
}

/// Like `print_one`, but lets the caller report `ok: false` with a payload.
pub fn print_status<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub const SUBMISSION_REJECTED: &str = "SUBMISSION_REJECTED";

/// JSON failure that keeps the payload explaining it next to the error code.
pub fn print_rejected<T: Serialize>(code: &str, message: String, data: T) -> anyhow::Result<()> {
    let body = JsonRejected {
        ok: false,
        error: ErrorBody {
            code: code.to_string(),
            message,
        },
        data,
    };
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<FormError>() {
        return e.code();
    }
    if err.downcast_ref::<MissingConfig>().is_some()
        || err.downcast_ref::<toml::de::Error>().is_some()
    {
        return "CONFIG";
    }
    if err.downcast_ref::<serde_json::Error>().is_some() {
        return "INVALID_DRAFT";
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return "IO";
    }
    "INTERNAL"
}

/// Reports a failure on stdout (json) or stderr (text).
pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {:#}", err),
        }
    } else {
        eprintln!("error: {:#}", err);
    }
}
