use std::sync::{Arc, LazyLock};

use chess_rules::{AttackTables, Validator};

static TABLES: LazyLock<Arc<AttackTables>> =
    LazyLock::new(|| Arc::new(AttackTables::new().expect("default magic search succeeds")));

/// Tables built once per test binary
#[allow(dead_code)]
pub fn tables() -> Arc<AttackTables> {
    Arc::clone(&TABLES)
}

#[allow(dead_code)]
pub fn validator() -> Validator {
    Validator::new(tables())
}
