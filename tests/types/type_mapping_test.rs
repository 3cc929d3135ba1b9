//! Integration tests for column type mapping across both source dialects.

#[cfg(test)]
mod tests {
    use rowtype::metadata::{Column, SchemaDialect, SourceDialect};
    use rowtype::types::{
        map_mysql_type, map_postgres_type, parse_enum_definition, TypeError,
    };

    const MYSQL_TYPES: &[(&str, &str)] = &[
        ("boolean", "bool"),
        ("bit", "bool"),
        ("tinyint", "int"),
        ("smallint", "int"),
        ("mediumint", "int"),
        ("int", "int"),
        ("bigint", "int"),
        ("year", "int"),
        ("decimal", "float"),
        ("float", "float"),
        ("double", "float"),
        ("real", "float"),
        ("numeric", "float"),
        ("char", "string"),
        ("varchar", "string"),
        ("binary", "string"),
        ("varbinary", "string"),
        ("text", "string"),
        ("tinytext", "string"),
        ("mediumtext", "string"),
        ("longtext", "string"),
        ("blob", "string"),
        ("tinyblob", "string"),
        ("mediumblob", "string"),
        ("longblob", "string"),
        ("date", "string"),
        ("datetime", "string"),
        ("timestamp", "string"),
        ("time", "string"),
    ];

    const POSTGRES_TYPES: &[(&str, &str)] = &[
        ("boolean", "bool"),
        ("integer", "int"),
        ("bigint", "int"),
        ("smallint", "int"),
        ("numeric", "float"),
        ("real", "float"),
        ("double precision", "float"),
        ("decimal", "float"),
        ("character varying", "string"),
        ("varchar", "string"),
        ("character", "string"),
        ("char", "string"),
        ("text", "string"),
        ("date", "string"),
        ("time", "string"),
        ("timestamp", "string"),
        ("timestamp without time zone", "string"),
        ("timestamp with time zone", "string"),
        ("bytea", "string"),
        ("uuid", "string"),
        ("json", "string"),
        ("jsonb", "string"),
        ("xml", "string"),
        ("point", "string"),
        ("line", "string"),
        ("lseg", "string"),
        ("box", "string"),
        ("path", "string"),
        ("polygon", "string"),
        ("circle", "string"),
        ("bit", "string"),
        ("bit varying", "string"),
        ("interval", "string"),
        ("money", "string"),
        ("macaddr", "string"),
        ("inet", "string"),
        ("cidr", "string"),
        ("tsquery", "string"),
        ("tsvector", "string"),
        ("array", "list<scalar>"),
    ];

    /// `double precision` -> `DoUbLe PrEcIsIoN`
    fn mixed_case(name: &str) -> String {
        name.chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect()
    }

    #[test]
    fn test_mysql_full_table() {
        for &(declared, expected) in MYSQL_TYPES {
            for spelling in [declared.to_string(), mixed_case(declared)] {
                assert_eq!(
                    map_mysql_type(&spelling, None, false).unwrap(),
                    expected,
                    "{spelling}"
                );
                assert_eq!(
                    map_mysql_type(&spelling, None, true).unwrap(),
                    format!("{expected}|null"),
                    "{spelling} nullable"
                );
            }
        }
    }

    #[test]
    fn test_postgres_full_table() {
        for &(declared, expected) in POSTGRES_TYPES {
            for spelling in [declared.to_string(), mixed_case(declared)] {
                assert_eq!(
                    map_postgres_type(&spelling, false).unwrap(),
                    expected,
                    "{spelling}"
                );
                assert_eq!(
                    map_postgres_type(&spelling, true).unwrap(),
                    format!("{expected}|null"),
                    "{spelling} nullable"
                );
            }
        }
    }

    #[test]
    fn test_mysql_column_mapping() {
        let id = Column::new("blog_posts", "id", 1, "int", false);
        let body = Column::new("blog_posts", "body", 3, "text", true);

        assert_eq!(SourceDialect::MySql.map_type(&id).unwrap(), "int");
        assert_eq!(SourceDialect::MySql.map_type(&body).unwrap(), "string|null");
    }

    #[test]
    fn test_mysql_enum_column() {
        let status = Column::new("orders", "status", 2, "enum", true)
            .with_column_type("enum('new','paid','it''s shipped')");

        assert_eq!(
            SourceDialect::MySql.map_type(&status).unwrap(),
            r#""new"|"paid"|"it's shipped"|null"#
        );
    }

    #[test]
    fn test_mysql_set_with_escapes() {
        assert_eq!(
            map_mysql_type("set", Some(r#"set('a\'b','say "hi"')"#), false).unwrap(),
            r#""a'b"|"say \"hi\"""#
        );
    }

    #[test]
    fn test_mysql_enum_without_definition() {
        let err = map_mysql_type("enum", None, false).unwrap_err();
        assert_eq!(
            err,
            TypeError::EnumParse {
                definition: "enum".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_enum_definitions() {
        for definition in ["enum()", "enum(a,b)", "enum('a'", "varchar(10)", "ENUM('a')"] {
            assert!(
                matches!(parse_enum_definition(definition), Err(TypeError::EnumParse { .. })),
                "expected parse failure for {definition}"
            );
        }
    }

    #[test]
    fn test_mysql_unknown_type() {
        let err = map_mysql_type("geometry", None, false).unwrap_err();
        assert_eq!(err.to_string(), "Unknown type: geometry");
    }

    #[test]
    fn test_postgres_column_mapping() {
        let created = Column::new("events", "created_at", 2, "timestamp with time zone", false);
        let tags = Column::new("events", "tags", 3, "ARRAY", true);
        let amount = Column::new("events", "amount", 4, "double precision", true);

        assert_eq!(SourceDialect::Postgres.map_type(&created).unwrap(), "string");
        assert_eq!(
            SourceDialect::Postgres.map_type(&tags).unwrap(),
            "list<scalar>|null"
        );
        assert_eq!(
            SourceDialect::Postgres.map_type(&amount).unwrap(),
            "float|null"
        );
    }

    #[test]
    fn test_postgres_user_defined_is_unknown() {
        assert_eq!(
            map_postgres_type("USER-DEFINED", false).unwrap_err(),
            TypeError::UnknownType {
                type_name: "USER-DEFINED".to_string()
            }
        );
    }

    #[test]
    fn test_dialect_specific_names() {
        // `tinyint` only exists on the MySQL side, `bytea` only on Postgres.
        assert_eq!(map_mysql_type("tinyint", None, false).unwrap(), "int");
        assert!(map_postgres_type("tinyint", false).is_err());
        assert_eq!(map_postgres_type("bytea", false).unwrap(), "string");
        assert!(map_mysql_type("bytea", None, false).is_err());
    }
}
