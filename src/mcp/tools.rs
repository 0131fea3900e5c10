//! Static tool registry
//!
//! The relay exposes one capability; adding another means adding a table
//! entry here rather than duplicating route handlers.

use serde_json::json;

use super::types::{ToolDescriptor, ToolSummary};

pub const FETCH_PRODUCTS: &str = "fetch_products";

const FETCH_PRODUCTS_DESCRIPTION: &str =
    "Fetch the current product listing from the APEX store, projected to name, \
     price, rating, and (when present) sold count and URL";

/// Registry entry: a name plus a descriptor builder
struct ToolEntry {
    name: &'static str,
    description: &'static str,
    descriptor: fn() -> ToolDescriptor,
}

const REGISTRY: &[ToolEntry] = &[ToolEntry {
    name: FETCH_PRODUCTS,
    description: FETCH_PRODUCTS_DESCRIPTION,
    descriptor: fetch_products_descriptor,
}];

fn fetch_products_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: FETCH_PRODUCTS.to_string(),
        description: FETCH_PRODUCTS_DESCRIPTION.to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Maximum number of products to return (defaults to the configured cap)"
                }
            },
            "additionalProperties": false
        }),
        output_schema: Some(json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "nazwa": { "type": "string" },
                    "cena": {},
                    "ocena": {},
                    "liczba_sprzedanych": {},
                    "url": { "type": "string" }
                },
                "required": ["nazwa", "cena", "ocena"]
            }
        })),
    }
}

/// Full descriptors for the discovery handshake
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    REGISTRY.iter().map(|entry| (entry.descriptor)()).collect()
}

/// Abbreviated name + description list for the invoke path
pub fn tool_summaries() -> Vec<ToolSummary> {
    REGISTRY
        .iter()
        .map(|entry| ToolSummary {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_and_dispatch_agree_on_name() {
        let descriptors = tool_descriptors();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name, FETCH_PRODUCTS);

        let summaries = tool_summaries();
        assert_eq!(summaries[0].name, FETCH_PRODUCTS);
        assert_eq!(summaries[0].description, descriptors[0].description);
    }

    #[test]
    fn test_input_schema_declares_limit() {
        let descriptor = &tool_descriptors()[0];
        assert!(descriptor.input_schema["properties"]["limit"].is_object());
        assert!(descriptor.output_schema.is_some());
    }
}
