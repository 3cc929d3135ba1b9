//! Column and table metadata read from `information_schema`.

use indexmap::IndexMap;

/// One row of column metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Owning table name.
    pub table_name: String,
    /// Column name.
    pub column_name: String,
    /// 1-based position within the table.
    pub ordinal_position: u32,
    /// Declared data type as reported by the database (`DATA_TYPE`).
    pub data_type: String,
    /// Whether the column accepts NULL.
    pub is_nullable: bool,
    /// Full type definition (MySQL `COLUMN_TYPE`), used for enum/set literals.
    pub column_type: Option<String>,
}

impl Column {
    /// Create a column with no raw type definition.
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        ordinal_position: u32,
        data_type: impl Into<String>,
        is_nullable: bool,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            ordinal_position,
            data_type: data_type.into(),
            is_nullable,
            column_type: None,
        }
    }

    /// Attach the raw type definition.
    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = Some(column_type.into());
        self
    }

    /// Parse an `IS_NULLABLE` value (`YES` / `NO`).
    pub fn nullable_flag(value: &str) -> bool {
        value.eq_ignore_ascii_case("YES")
    }
}

/// A table and its columns in query result order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }
}

/// Group columns by table.
///
/// Tables appear in the order their first column was seen; columns keep
/// their relative order within each table.
pub fn group_tables(columns: impl IntoIterator<Item = Column>) -> Vec<Table> {
    let mut tables: IndexMap<String, Table> = IndexMap::new();
    for column in columns {
        let name = column.table_name.clone();
        tables
            .entry(name.clone())
            .or_insert_with(|| Table::new(name))
            .columns
            .push(column);
    }
    tables.into_values().collect()
}
