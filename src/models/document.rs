use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Public string form of a store identifier.
pub fn id_string(value: &Bson) -> String {
    match value {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Converts a stored document into its public JSON shape.
///
/// `_id` is exposed as a string `id`, and any other top-level ObjectId is
/// rendered as its hex string. Everything else uses relaxed extended JSON.
pub fn serialize_document(mut document: Document) -> Map<String, Value> {
    let id = document.remove("_id");

    let mut out: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Bson::ObjectId(oid) => Value::String(oid.to_hex()),
                other => other.into_relaxed_extjson(),
            };
            (key, value)
        })
        .collect();

    if let Some(id) = id {
        out.insert("id".to_string(), Value::String(id_string(&id)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn internal_id_becomes_public_string_id() {
        let oid = ObjectId::new();
        let out = serialize_document(doc! { "_id": oid, "title": "Coat", "price": 10.5 });

        assert!(!out.contains_key("_id"));
        assert_eq!(out["id"], Value::String(oid.to_hex()));
        assert_eq!(out["title"], "Coat");
        assert_eq!(out["price"], 10.5);
    }

    #[test]
    fn other_top_level_object_ids_are_stringified() {
        let reference = ObjectId::new();
        let out = serialize_document(doc! { "_id": ObjectId::new(), "product_ref": reference });

        assert_eq!(out["product_ref"], Value::String(reference.to_hex()));
    }

    #[test]
    fn internal_id_wins_over_stored_id_field() {
        let oid = ObjectId::new();
        let out = serialize_document(doc! { "id": "stale", "_id": oid });

        assert_eq!(out["id"], Value::String(oid.to_hex()));
    }

    #[test]
    fn non_object_id_identifiers_are_kept_as_strings() {
        assert_eq!(id_string(&Bson::String("abc".into())), "abc");
        assert_eq!(id_string(&Bson::Int32(7)), "7");
    }
}
