//! Data-quality mask metadata
//!
//! Masks are categorical bands (`Band<u8>`) whose cell values encode
//! per-pixel quality or scene-classification codes. [`MaskInfo`]
//! describes what those codes mean for a given collection;
//! [`set_mask_attributes`] copies that description onto the mask band's
//! attributes once the mask's identity checks out, so downstream
//! consumers can interpret the codes without the catalog at hand.

use eocube_core::raster::Band;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute key for the source product identifier
pub const ATTR_COLLECTION: &str = "collection";
/// Attribute key for the mask semantic category
pub const ATTR_TYPE: &str = "type";
/// Attribute key for the category codes considered masked
pub const ATTR_CATEGORIES_TO_MASK: &str = "categories_to_mask";
/// Attribute key for the code-to-meaning mapping
pub const ATTR_FLAGS_DEFINITION: &str = "flags_definition";

/// Descriptor identifying a mask's semantic meaning and category codes.
///
/// Sourced from a configuration/catalog collaborator; the core never
/// constructs one itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskInfo {
    /// Band name the descriptor is meant to match
    pub alias: String,
    /// Source product identifier, e.g. `"sentinel-2-l2a"`
    pub collection: String,
    /// Mask semantic category, e.g. `"scene_classification"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Category codes considered masked
    pub categories_to_mask: Vec<u8>,
    /// Mapping from category code to its meaning
    pub flags_definition: BTreeMap<u8, String>,
}

/// Sink for mask/descriptor mismatch events.
///
/// A mismatch is an expected data-pipeline condition, not an error: the
/// attributer reports it here exactly once and returns the mask
/// unchanged. Implementations must not fail.
pub trait MaskEventSink {
    /// Called when a mask's name does not equal the descriptor's alias
    fn mismatch(&self, mask_name: &str, expected_alias: &str);
}

/// Default sink emitting mismatch events as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMaskSink;

impl MaskEventSink for TracingMaskSink {
    fn mismatch(&self, mask_name: &str, expected_alias: &str) {
        tracing::warn!(
            mask = mask_name,
            expected_alias,
            "mask did not match mask info; attributes not attached"
        );
    }
}

/// Attach the descriptor's metadata to the mask band.
///
/// If the mask's name equals `mask_info.alias`, the `collection`,
/// `type`, `categories_to_mask` and `flags_definition` attributes are
/// set from the descriptor, overwriting any prior values for those four
/// keys and leaving every other attribute untouched. Reapplying the
/// same descriptor is idempotent.
///
/// On a name mismatch the mask is returned unmodified and the event is
/// reported to `sink` exactly once.
pub fn set_mask_attributes(
    mask: Band<u8>,
    mask_info: &MaskInfo,
    sink: &dyn MaskEventSink,
) -> Band<u8> {
    if mask.name() != mask_info.alias {
        sink.mismatch(mask.name(), &mask_info.alias);
        return mask;
    }

    let mut mask = mask;
    mask.set_attr(ATTR_COLLECTION, mask_info.collection.clone());
    mask.set_attr(ATTR_TYPE, mask_info.kind.clone());
    mask.set_attr(ATTR_CATEGORIES_TO_MASK, mask_info.categories_to_mask.clone());
    mask.set_attr(ATTR_FLAGS_DEFINITION, mask_info.flags_definition.clone());
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use eocube_core::AttrValue;
    use std::cell::RefCell;

    /// Test sink recording every reported mismatch
    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<(String, String)>>,
    }

    impl MaskEventSink for RecordingSink {
        fn mismatch(&self, mask_name: &str, expected_alias: &str) {
            self.events
                .borrow_mut()
                .push((mask_name.to_string(), expected_alias.to_string()));
        }
    }

    fn scl_info() -> MaskInfo {
        let mut flags = BTreeMap::new();
        flags.insert(0, "no data".to_string());
        flags.insert(3, "cloud shadow".to_string());
        flags.insert(4, "vegetation".to_string());
        flags.insert(6, "water".to_string());
        flags.insert(8, "cloud medium probability".to_string());
        flags.insert(9, "cloud high probability".to_string());
        MaskInfo {
            alias: "scl".to_string(),
            collection: "sentinel-2-l2a".to_string(),
            kind: "scene_classification".to_string(),
            categories_to_mask: vec![0, 3, 8, 9],
            flags_definition: flags,
        }
    }

    #[test]
    fn matching_mask_gets_all_four_attributes() {
        let info = scl_info();
        let sink = RecordingSink::default();

        let mask = set_mask_attributes(Band::new("scl", 4, 4), &info, &sink);

        assert_eq!(
            mask.attr(ATTR_COLLECTION).and_then(AttrValue::as_text),
            Some("sentinel-2-l2a")
        );
        assert_eq!(
            mask.attr(ATTR_TYPE).and_then(AttrValue::as_text),
            Some("scene_classification")
        );
        assert_eq!(
            mask.attr(ATTR_CATEGORIES_TO_MASK)
                .and_then(AttrValue::as_codes),
            Some(&[0u8, 3, 8, 9][..])
        );
        assert_eq!(
            mask.attr(ATTR_FLAGS_DEFINITION).and_then(AttrValue::as_flags),
            Some(&info.flags_definition)
        );
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn mismatch_reports_once_and_leaves_mask_unmodified() {
        let mut info = scl_info();
        info.alias = "fmask".to_string();
        let sink = RecordingSink::default();

        let mask = set_mask_attributes(Band::new("scl", 4, 4), &info, &sink);

        assert!(mask.attrs().is_empty());
        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], ("scl".to_string(), "fmask".to_string()));
    }

    #[test]
    fn reapplying_same_descriptor_is_idempotent() {
        let info = scl_info();
        let sink = RecordingSink::default();

        let once = set_mask_attributes(Band::new("scl", 4, 4), &info, &sink);
        let twice = set_mask_attributes(once.clone(), &info, &sink);

        assert_eq!(once.attrs(), twice.attrs());
    }

    #[test]
    fn tagging_overwrites_stale_values_but_keeps_other_attrs() {
        let info = scl_info();
        let sink = RecordingSink::default();

        let mut mask = Band::new("scl", 4, 4);
        mask.set_attr(ATTR_COLLECTION, "stale-collection");
        mask.set_attr("source_tile", "T32TQM");

        let mask = set_mask_attributes(mask, &info, &sink);

        assert_eq!(
            mask.attr(ATTR_COLLECTION).and_then(AttrValue::as_text),
            Some("sentinel-2-l2a")
        );
        assert_eq!(
            mask.attr("source_tile").and_then(AttrValue::as_text),
            Some("T32TQM")
        );
    }

    #[test]
    fn mask_info_deserializes_from_catalog_json() {
        let json = r#"{
            "alias": "scl",
            "collection": "sentinel-2-l2a",
            "type": "scene_classification",
            "categories_to_mask": [0, 3, 8, 9],
            "flags_definition": {"0": "no data", "4": "vegetation"}
        }"#;
        let info: MaskInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.alias, "scl");
        assert_eq!(info.kind, "scene_classification");
        assert_eq!(info.categories_to_mask, vec![0, 3, 8, 9]);
        assert_eq!(info.flags_definition.get(&4).map(String::as_str), Some("vegetation"));
    }
}
