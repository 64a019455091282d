//! Serialization envelope.
//!
//! Every collection response has the shape `{ "<plural-tag>": [ ... ] }`.
//! A [`Schema`] declares the tag and an ordered list of named field
//! projections over the source entity; [`serialize`] applies it. Pure
//! formatting, no side effects.

use serde_json::Value;

type Projection<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;

/// Declarative projection of one entity kind to JSON.
pub struct Schema<T> {
    type_tag: &'static str,
    fields: Vec<(&'static str, Projection<T>)>,
}

impl<T> Schema<T> {
    /// Start a schema with the given envelope type tag.
    ///
    /// # Panics
    ///
    /// Panics if `type_tag` is not a plural noun. A non-plural tag is a
    /// programming defect, not a request error, and fails loudly.
    #[must_use]
    pub fn new(type_tag: &'static str) -> Self {
        assert!(
            type_tag.ends_with('s'),
            "schema type tag `{type_tag}` must be a plural noun"
        );
        Self {
            type_tag,
            fields: Vec::new(),
        }
    }

    /// Add a computed field projection.
    #[must_use]
    pub fn field(
        mut self,
        name: &'static str,
        project: impl Fn(&T) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.fields.push((name, Box::new(project)));
        self
    }

    /// Add a raw-byte field rendered as a hex string.
    #[must_use]
    pub fn hex_field(
        self,
        name: &'static str,
        accessor: impl Fn(&T) -> &[u8] + Send + Sync + 'static,
    ) -> Self {
        self.field(name, move |entity| Value::String(hex::encode(accessor(entity))))
    }

    /// The envelope key this schema serializes under.
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        self.type_tag
    }

    fn project(&self, entity: &T) -> Value {
        let mut object = serde_json::Map::with_capacity(self.fields.len());
        for (name, project) in &self.fields {
            object.insert((*name).to_string(), project(entity));
        }
        Value::Object(object)
    }
}

/// Project a sequence of entities into the envelope object.
#[must_use]
pub fn serialize<T>(entities: &[T], schema: &Schema<T>) -> Value {
    let projected: Vec<Value> = entities.iter().map(|e| schema.project(e)).collect();
    let mut envelope = serde_json::Map::with_capacity(1);
    envelope.insert(schema.type_tag().to_string(), Value::Array(projected));
    Value::Object(envelope)
}

/// Project a single entity as a one-element collection.
#[must_use]
pub fn serialize_one<T>(entity: &T, schema: &Schema<T>) -> Value {
    serialize(std::slice::from_ref(entity), schema)
}
