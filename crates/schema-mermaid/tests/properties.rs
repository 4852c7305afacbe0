//! Property tests for rendering determinism and ordering

use proptest::prelude::*;
use schema_mermaid::prelude::*;
use schema_mermaid::render;

const KINDS: &[&str] = &[
    "hasOne",
    "hasMany",
    "belongsTo",
    "refersTo",
    "embedded",
    "belongsToMorphed",
    "morphedHasOne",
    "morphedHasMany",
];

#[derive(Debug, Clone)]
struct GeneratedSchema {
    names: Vec<String>,
    columns: Vec<Vec<String>>,
    relation_keys: Vec<Vec<String>>,
    schema: SchemaDescription,
}

fn entity_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..8)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn generated_schema() -> impl Strategy<Value = GeneratedSchema> {
    entity_names()
        .prop_flat_map(|names| {
            let n = names.len();
            let columns = prop::collection::vec(prop::collection::vec("[a-z]{1,6}", 0..6), n);
            let relations = prop::collection::vec(
                prop::collection::vec(
                    (prop::sample::select(KINDS.to_vec()), any::<bool>(), 0..n),
                    0..4,
                ),
                n,
            );
            (Just(names), columns, relations)
        })
        .prop_map(|(names, columns, relations)| {
            let mut schema = SchemaDescription::new();
            let mut relation_keys = Vec::new();

            for ((name, cols), rels) in names.iter().zip(&columns).zip(&relations) {
                let mut entity = EntityDescriptor::new(cols.clone());
                let mut keys = Vec::new();
                for (i, (kind, nullable, target)) in rels.iter().enumerate() {
                    let key = format!("rel{}", i);
                    entity = entity.with_relation(
                        key.clone(),
                        RelationDescriptor::new(*kind, names[*target].clone()).nullable(*nullable),
                    );
                    keys.push(key);
                }
                schema.insert(name.clone(), entity);
                relation_keys.push(keys);
            }

            GeneratedSchema {
                names,
                columns,
                relation_keys,
                schema,
            }
        })
}

proptest! {
    #[test]
    fn render_is_deterministic(generated in generated_schema()) {
        let first = render(&generated.schema).unwrap();
        let second = render(&generated.schema.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tables_follow_schema_order(generated in generated_schema()) {
        let output = render(&generated.schema).unwrap();
        let headers: Vec<String> = output
            .lines()
            .filter(|line| line.starts_with("class "))
            .map(str::to_string)
            .collect();
        let expected: Vec<String> = generated
            .names
            .iter()
            .map(|name| format!("class {} {{", name))
            .collect();
        prop_assert_eq!(headers, expected);
    }

    #[test]
    fn rows_and_methods_follow_declaration_order(generated in generated_schema()) {
        let diagram = MermaidRenderer::new().build_diagram(&generated.schema).unwrap();
        let tables: Vec<_> = diagram.tables().collect();
        prop_assert_eq!(tables.len(), generated.names.len());

        for (i, table) in tables.iter().enumerate() {
            let fields: Vec<&str> = table.rows().iter().map(|r| r.field.as_str()).collect();
            let expected_fields: Vec<&str> =
                generated.columns[i].iter().map(String::as_str).collect();
            prop_assert_eq!(fields, expected_fields);

            // Embedded methods are named after the target, so compare counts.
            let methods = table.methods().len();
            prop_assert_eq!(methods, generated.relation_keys[i].len());
        }
    }

    #[test]
    fn fragments_do_not_change_output(generated in generated_schema()) {
        let baseline = render(&generated.schema).unwrap();

        let mut with_fragment = generated.schema.clone();
        with_fragment.insert(
            "zzfragment",
            EntityDescriptor::fragment().with_relation(
                "anything",
                RelationDescriptor::new("notAKind", "nowhere"),
            ),
        );

        prop_assert_eq!(render(&with_fragment).unwrap(), baseline);
    }

    #[test]
    fn every_relation_yields_one_arrow(generated in generated_schema()) {
        let diagram = MermaidRenderer::new().build_diagram(&generated.schema).unwrap();
        let total: usize = generated.relation_keys.iter().map(Vec::len).sum();
        prop_assert_eq!(diagram.arrow_count(), total);
    }
}
