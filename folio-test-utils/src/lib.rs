pub mod fixtures;
pub mod source_check;

pub use fixtures::{fixtures_root, load_fixture, load_fixture_json, record_fixtures};
pub use source_check::{cooked_template_literals, json_literals_after};
