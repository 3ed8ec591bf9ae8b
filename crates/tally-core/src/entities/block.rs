use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::enums::BlockType;
use crate::errors::PayloadError;
use crate::payloads::BlockPayload;
use crate::wire::WireModel;

/// A structural unit of a form: a question, an input, a heading, ...
///
/// Blocks that belong together (a question and its options, a matrix and its
/// rows and columns) share one `group_uuid`, and `group_type` names the block
/// type that owns the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBlock")]
pub struct FormBlock {
    pub uuid: Uuid,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub group_uuid: Uuid,
    pub group_type: BlockType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<BlockPayload>,
}

impl FormBlock {
    /// A block that forms its own group.
    #[must_use]
    pub fn new(uuid: Uuid, block_type: BlockType) -> Self {
        Self {
            uuid,
            group_uuid: uuid,
            group_type: block_type.clone(),
            block_type,
            payload: None,
        }
    }

    /// Place the block in an existing group.
    #[must_use]
    pub fn with_group(self, group_uuid: Uuid, group_type: BlockType) -> Self {
        Self {
            group_uuid,
            group_type,
            ..self
        }
    }

    /// Attach a payload.
    ///
    /// A typed payload also sets the block's `type` to the tag it was built
    /// for, so the block decodes back into the same variant. A block that is
    /// its own group keeps `group_type` in step. An unstructured payload
    /// leaves the tag untouched.
    #[must_use]
    pub fn with_payload(mut self, payload: BlockPayload) -> Self {
        if let Some(tag) = payload.block_type() {
            if tag != self.block_type {
                if self.group_uuid == self.uuid && self.group_type == self.block_type {
                    self.group_type = tag.clone();
                }
                self.block_type = tag;
            }
        }
        self.payload = Some(payload);
        self
    }
}

impl WireModel for FormBlock {
    const ENTITY: &'static str = "form block";
}

/// Block as it appears on the wire, before the payload shape is chosen.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    uuid: Uuid,
    #[serde(rename = "type")]
    block_type: BlockType,
    group_uuid: Uuid,
    group_type: BlockType,
    #[serde(default)]
    payload: Option<Value>,
}

impl TryFrom<RawBlock> for FormBlock {
    type Error = PayloadError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let payload = raw
            .payload
            .map(|value| BlockPayload::decode(&raw.block_type, value))
            .transpose()?;

        Ok(Self {
            uuid: raw.uuid,
            block_type: raw.block_type,
            group_uuid: raw.group_uuid,
            group_type: raw.group_type,
            payload,
        })
    }
}
