//! Environment source: MACROBUNDLE_<SECTION>__<KEY>, e.g. MACROBUNDLE_BUNDLE__ORDER=listing

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, Map};

pub const ENV_PREFIX: &str = "MACROBUNDLE";

/// Keys whose environment value is a comma-separated list.
const LIST_KEYS: &[&str] = &["bundle.folders"];

/// Environment source reading the process environment, or `vars` when given.
///
/// `MACROBUNDLE_BUNDLE__FOLDERS=base,meta` sets the folder list.
pub fn source(vars: Option<Map<String, String>>) -> Environment {
    let mut env = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",");
    for key in LIST_KEYS {
        env = env.with_list_parse_key(key);
    }
    env.source(vars)
}

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<Map<String, String>>,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(source(vars))
}
