use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::Value;
use tracing::info;

use std::path::Path;

use crate::common::source_text::{
    escape_template_literal, inner_html_attribute, js_string_literal, plain_text,
};
use crate::errors::ExportResult;

pub fn create_path_if_not_exists(path: &Path) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating path: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn write_string_to_file(path: &Path, content: &str) -> ExportResult<()> {
    create_path_if_not_exists(path)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn value_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Handlebars environment shared by every theme.
///
/// Output is generated source, not HTML, so the default escaping is
/// disabled; the helpers below do the quoting instead.
pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(no_escape);

    handlebars_helper!(exists: |v: Value| {
        match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        }
    });
    handlebars.register_helper("exists", Box::new(exists));

    handlebars_helper!(stringeq: |s1: String, s2: String| s1.eq(&s2));
    handlebars.register_helper("stringeq", Box::new(stringeq));

    handlebars_helper!(template_literal: |v: Value| escape_template_literal(&value_text(&v)));
    handlebars.register_helper("template_literal", Box::new(template_literal));

    handlebars_helper!(js_literal: |v: Value| js_string_literal(&value_text(&v)));
    handlebars.register_helper("js_literal", Box::new(js_literal));

    handlebars_helper!(inner_html: |v: Value| inner_html_attribute(&value_text(&v)));
    handlebars.register_helper("inner_html", Box::new(inner_html));

    handlebars_helper!(plain: |v: Value| plain_text(&value_text(&v)));
    handlebars.register_helper("plain_text", Box::new(plain));

    handlebars
}
