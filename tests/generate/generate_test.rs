//! Integration tests for end-to-end generation through a metadata connection.

#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::{blog_posts, FailingConnection, FakeConnection};
    use rowtype::generate::{GenerateError, GenerationRequest, Generator};
    use rowtype::metadata::{Column, SourceDialect};
    use rowtype::naming::Singularization;
    use rowtype::render::{Completeness, ShapeKind};

    fn request() -> GenerationRequest {
        GenerationRequest::new("App\\Database", "DatabaseTypes")
    }

    #[tokio::test]
    async fn test_blog_posts_document() {
        let generator = Generator::new(FakeConnection::new(blog_posts()), SourceDialect::MySql);

        let document = generator.generate(&request()).await.unwrap();

        let expected = concat!(
            "<?php\n",
            "\n",
            "namespace App\\Database;\n",
            "\n",
            "/**\n",
            " * @phpstan-type TBlogPost array{\n",
            " *     id: int,\n",
            " *     title: string,\n",
            " *     body: string|null\n",
            " * }\n",
            " * \n",
            " * @psalm-type TBlogPost array{\n",
            " *     id: int,\n",
            " *     title: string,\n",
            " *     body: string|null\n",
            " * }\n",
            " * \n",
            " */\n",
            "class DatabaseTypes {\n",
            "}\n",
        );
        assert_eq!(document, expected);
    }

    #[tokio::test]
    async fn test_definitions_only() {
        let generator = Generator::new(FakeConnection::new(blog_posts()), SourceDialect::MySql);

        let definitions = generator.generate_definitions(&request()).await.unwrap();

        assert!(definitions.starts_with("@phpstan-type TBlogPost array{\n    id: int,\n"));
        assert!(definitions.contains("}\n\n@psalm-type TBlogPost array{\n"));
        assert!(definitions.ends_with("    body: string|null\n}\n"));
        assert!(!definitions.contains("<?php"));
    }

    #[tokio::test]
    async fn test_tables_in_first_seen_order() {
        let rows = vec![
            Column::new("users", "id", 1, "int", false),
            Column::new("categories", "id", 1, "int", false),
            Column::new("users", "email", 2, "varchar", false),
            Column::new("categories", "label", 2, "varchar", true),
        ];
        let generator = Generator::new(FakeConnection::new(rows), SourceDialect::MySql);

        let definitions = generator.generate_definitions(&request()).await.unwrap();

        let user = definitions.find("@phpstan-type TUser array{").unwrap();
        let category = definitions.find("@phpstan-type TCategory array{").unwrap();
        assert!(user < category);
        assert!(definitions.contains("TUser array{\n    id: int,\n    email: string\n}\n"));
        assert!(definitions.contains("TCategory array{\n    id: int,\n    label: string|null\n}\n"));
    }

    #[tokio::test]
    async fn test_partial_object_without_singularization() {
        let generator = Generator::new(FakeConnection::new(blog_posts()), SourceDialect::MySql);
        let request = request()
            .with_shape(ShapeKind::Map)
            .with_completeness(Completeness::Partial)
            .with_singularization(Singularization::Off);

        let definitions = generator.generate_definitions(&request).await.unwrap();

        assert!(definitions.contains("@phpstan-type TBlogPosts_Partial object{\n"));
        assert!(definitions.contains("@psalm-type TBlogPosts_Partial object{\n"));
    }

    #[tokio::test]
    async fn test_postgres_source() {
        let rows = vec![
            Column::new("events", "id", 1, "bigint", false),
            Column::new("events", "payload", 2, "jsonb", true),
            Column::new("events", "tags", 3, "ARRAY", false),
        ];
        let generator = Generator::new(FakeConnection::new(rows), SourceDialect::Postgres);
        let request = request().with_schema("public");

        let definitions = generator.generate_definitions(&request).await.unwrap();

        assert!(definitions.contains(
            "@psalm-type TEvent array{\n    id: int,\n    payload: string|null,\n    tags: list<scalar>\n}\n"
        ));

        assert_eq!(generator.reader().dialect(), SourceDialect::Postgres);
        let queries = generator.reader().connection().queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].params, vec!["public".to_string()]);
        assert!(queries[0].sql.contains("table_schema = $1"));
        assert!(queries[0].sql.contains("table_catalog = current_database()"));
    }

    #[tokio::test]
    async fn test_mysql_database_parameter() {
        let connection = FakeConnection::new(Vec::new());
        let generator = Generator::new(&connection, SourceDialect::MySql);

        generator
            .generate(&request().with_database("shop"))
            .await
            .unwrap();
        generator.generate(&request()).await.unwrap();

        let queries = connection.queries();
        assert_eq!(queries[0].params, vec!["shop".to_string()]);
        assert!(queries[0].sql.contains("TABLE_SCHEMA = ?"));
        assert!(queries[1].params.is_empty());
        assert!(queries[1].sql.contains("TABLE_SCHEMA = DATABASE()"));
    }

    #[tokio::test]
    async fn test_unknown_type_aborts() {
        let rows = vec![
            Column::new("places", "id", 1, "int", false),
            Column::new("places", "location", 2, "geometry", false),
        ];
        let generator = Generator::new(FakeConnection::new(rows), SourceDialect::MySql);

        let err = generator.generate(&request()).await.unwrap_err();

        assert!(matches!(err, GenerateError::UnknownType { ref type_name } if type_name == "geometry"));
        assert_eq!(err.to_string(), "Unknown type: geometry");
    }

    #[tokio::test]
    async fn test_malformed_enum_aborts() {
        let rows = vec![Column::new("flags", "state", 1, "enum", false).with_column_type("enum(on,off)")];
        let generator = Generator::new(FakeConnection::new(rows), SourceDialect::MySql);

        let err = generator.generate(&request()).await.unwrap_err();

        assert!(matches!(err, GenerateError::EnumParse { ref definition } if definition == "enum(on,off)"));
    }

    #[tokio::test]
    async fn test_connection_error_passes_through() {
        let generator = Generator::new(FailingConnection("access denied"), SourceDialect::MySql);

        let err = generator.generate(&request()).await.unwrap_err();

        assert_eq!(err.to_string(), "access denied");
        match err {
            GenerateError::Connection(inner) => {
                assert_eq!(inner.into_inner().to_string(), "access denied");
            }
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_output_is_deterministic() {
        let connection = FakeConnection::new(blog_posts());
        let generator = Generator::new(&connection, SourceDialect::MySql);

        let first = generator.generate(&request()).await.unwrap();
        let second = generator.generate(&request()).await.unwrap();

        assert_eq!(first, second);
    }
}
