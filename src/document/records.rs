//! Serde records mirroring the persisted document shape.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::voxel::{Color, VoxelPos};

/// Root document node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub layers: OrderedMap<LayerTypeRecord>,
}

/// One layer type keyed by its name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerTypeRecord {
    /// Written for readability, ignored when reading (the key is authoritative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub last_edited_variation: String,
    /// Absent or null means "no variations"
    #[serde(default)]
    pub variations: Option<BTreeMap<String, VariationRecord>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub voxels: Option<Vec<VoxelRecord>>,
}

/// One voxel; `loc` is required and must be exactly three integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelRecord {
    pub loc: VoxelPos,
    #[serde(default = "default_voxel_color")]
    pub color: Color,
}

fn default_voxel_color() -> Color {
    Color::WHITE
}

/// String-keyed JSON object that keeps its entries in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, V)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            // Duplicate keys: the last occurrence wins, at the first one's position
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Ok(OrderedMap(entries))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedMap::default())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_keeps_document_order() {
        let map: OrderedMap<i32> = serde_json::from_str(r#"{ "zeta": 1, "alpha": 2, "mid": 3 }"#).unwrap();
        let keys: Vec<_> = map.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_ordered_map_null_is_empty() {
        let map: OrderedMap<i32> = serde_json::from_str("null").unwrap();
        assert!(map.0.is_empty());
    }

    #[test]
    fn test_voxel_record_requires_location() {
        assert!(serde_json::from_str::<VoxelRecord>(r#"{ "color": [1, 2, 3, 4] }"#).is_err());
        assert!(serde_json::from_str::<VoxelRecord>(r#"{ "loc": [1, 2], "color": [1, 2, 3, 4] }"#).is_err());
        assert!(serde_json::from_str::<VoxelRecord>(r#"{ "loc": [1, 2, "x"] }"#).is_err());

        let record: VoxelRecord = serde_json::from_str(r#"{ "loc": [1, 2, 3] }"#).unwrap();
        assert_eq!(record.loc, VoxelPos::new(1, 2, 3));
        assert_eq!(record.color, Color::WHITE);
    }
}
