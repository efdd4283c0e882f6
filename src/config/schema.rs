use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "database": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "minLength": 1 }
                },
                "additionalProperties": false
            },
            "export": {
                "type": "object",
                "properties": {
                    "max_rows": { "type": "integer", "minimum": 1 },
                    "file_stem": { "type": "string", "minLength": 1 },
                    "sheet_name": { "type": "string", "minLength": 1, "maxLength": 31 },
                    "document_title": { "type": "string" },
                    "rows_per_page": { "type": "integer", "minimum": 1 }
                },
                "additionalProperties": false
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
