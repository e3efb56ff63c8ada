//! Database schema definitions

/// SQL to create the trees table
pub const CREATE_TREES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS trees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    species TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    planted_date TEXT NOT NULL,
    planter_name TEXT,
    notes TEXT,
    status TEXT NOT NULL DEFAULT 'healthy',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_trees_species ON trees(species)",
    "CREATE INDEX IF NOT EXISTS idx_trees_status ON trees(status)",
    "CREATE INDEX IF NOT EXISTS idx_trees_created ON trees(created_at)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_TREES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
